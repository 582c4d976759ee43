use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::controller::{LIST_EMPTY, ListPanel, ListStatus, Tab};
use crate::display::{PREVIEW_CHARS, fmt_ts, fmt_ts_abs, preview};

use super::super::{RenderCtx, View, message_line, render_view_chrome};

impl View for ListPanel {
    fn title(&self) -> &str {
        Tab::List.label()
    }

    fn status(&self) -> Option<String> {
        match &self.status {
            ListStatus::Loaded(records) => Some(format!("{} total", records.len())),
            _ => None,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let status = self.status();
        let mut inner = render_view_chrome(frame, self.title(), status.as_deref(), area);

        if let Some(notice) = &self.notice {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(inner);
            frame.render_widget(Paragraph::new(message_line(notice)), parts[0]);
            inner = parts[1];
        }

        let records = match &self.status {
            ListStatus::Idle => {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        "Press r to load your QR codes.",
                        Style::default().fg(Color::Gray),
                    )),
                    inner,
                );
                return;
            }
            ListStatus::Loading => {
                frame.render_widget(Paragraph::new("Loading QR codes..."), inner);
                return;
            }
            ListStatus::Empty => {
                frame.render_widget(
                    Paragraph::new(LIST_EMPTY).wrap(Wrap { trim: false }),
                    inner,
                );
                return;
            }
            ListStatus::Failed(text) => {
                frame.render_widget(
                    Paragraph::new(Span::styled(text.clone(), Style::default().fg(Color::Red)))
                        .wrap(Wrap { trim: false }),
                    inner,
                );
                return;
            }
            ListStatus::Loaded(records) => records,
        };

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);

        let mut state = ListState::default();
        if !records.is_empty() {
            state.select(Some(self.selected.min(records.len() - 1)));
        }

        let rows = records
            .iter()
            .map(|r| {
                let sid = r.id.chars().take(8).collect::<String>();
                ListItem::new(format!(
                    "{:<8}  {:<16}  {}",
                    sid,
                    fmt_ts(&r.created_at, ctx.ts_mode, ctx.now),
                    preview(&r.data_encoded, PREVIEW_CHARS)
                ))
            })
            .collect::<Vec<_>>();

        let list = List::new(rows)
            .block(Block::default().borders(Borders::BOTTOM).title(format!(
                "codes (v: view  e: edit  d: delete  r: refresh  t: {} time)",
                ctx.ts_mode.toggle().label()
            )))
            .highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_stateful_widget(list, parts[0], &mut state);

        let details = match self.selected_record() {
            None => vec![Line::from("(no selection)")],
            Some(r) => {
                let label = Style::default().fg(Color::Gray);
                vec![
                    Line::from(vec![Span::styled("id:      ", label), Span::raw(r.id.clone())]),
                    Line::from(vec![
                        Span::styled("file:    ", label),
                        Span::raw(r.filename.clone()),
                    ]),
                    Line::from(vec![
                        Span::styled("created: ", label),
                        Span::raw(fmt_ts_abs(&r.created_at)),
                    ]),
                    Line::from(vec![
                        Span::styled("image:   ", label),
                        Span::raw(r.qrcode_url.clone()),
                    ]),
                    Line::from(vec![
                        Span::styled("data:    ", label),
                        Span::raw(preview(&r.data_encoded, PREVIEW_CHARS)),
                    ]),
                ]
            }
        };
        frame.render_widget(
            Paragraph::new(details).wrap(Wrap { trim: false }),
            parts[1],
        );
    }
}
