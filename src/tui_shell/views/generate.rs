use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::controller::{Tab, UploadPanel};

use super::super::{RenderCtx, View, message_line, render_view_chrome};

impl View for UploadPanel {
    fn title(&self) -> &str {
        Tab::Generate.label()
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), None, area);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(inner);

        let width = parts[0].width.saturating_sub(2);
        let cursor = u16::try_from(self.file.cursor()).unwrap_or(u16::MAX);
        let hscroll = cursor.saturating_sub(width.saturating_sub(1));
        let input = if self.file.value().is_empty() {
            Paragraph::new(Span::styled(
                "path to an .xlsx, .xls or .csv file",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Paragraph::new(self.file.value()).scroll((0, hscroll))
        };
        frame.render_widget(
            input.block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Spreadsheet (Enter: generate)"),
            ),
            parts[0],
        );
        if !ctx.overlay {
            let x = parts[0].x.saturating_add(1).saturating_add(cursor - hscroll);
            frame.set_cursor_position((x, parts[0].y.saturating_add(1)));
        }

        if let Some(msg) = &self.message {
            frame.render_widget(
                Paragraph::new(message_line(msg)).wrap(Wrap { trim: false }),
                parts[1],
            );
        }

        let Some(qr) = &self.generated else {
            return;
        };
        let label = Style::default().fg(Color::Gray);
        let lines = vec![
            Line::from(Span::styled(
                "Generated QR code",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![Span::styled("id:    ", label), Span::raw(qr.id.clone())]),
            Line::from(vec![
                Span::styled("file:  ", label),
                Span::raw(qr.filename.clone()),
            ]),
            Line::from(vec![
                Span::styled("image: ", label),
                Span::raw(qr.image_url.clone()),
            ]),
            Line::from(""),
            Line::from(Span::styled("Ctrl-O: open image", label)),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::TOP))
                .wrap(Wrap { trim: false }),
            parts[2],
        );
    }
}
