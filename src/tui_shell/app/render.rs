use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use super::*;

pub(in crate::tui_shell) fn draw(frame: &mut ratatui::Frame, state: &ViewState, ctx: &RenderCtx) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, state, ctx, chunks[0]);

    match state.active_tab {
        Tab::Generate => state.upload.render(frame, chunks[1], ctx),
        Tab::List => state.list.render(frame, chunks[1], ctx),
        Tab::Data => state.data.render(frame, chunks[1], ctx),
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            footer_hint(state),
            Style::default().fg(Color::Gray),
        )),
        chunks[2],
    );

    if !ctx.overlay {
        return;
    }
    dim_frame(frame);
    if let Some(edit) = &state.edit {
        super::super::modal::draw_edit(frame, edit);
    }
    if let Some(pending) = &state.confirm {
        super::super::modal::draw_confirm(frame, pending);
    }
    if let Some(text) = &state.alert {
        super::super::modal::draw_alert(frame, text);
    }
}

fn draw_header(
    frame: &mut ratatui::Frame,
    state: &ViewState,
    ctx: &RenderCtx,
    area: ratatui::layout::Rect,
) {
    let mut title = vec![
        Span::styled("qrdesk", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(state.base_url.clone(), Style::default().fg(Color::Gray)),
    ];
    if ctx.busy {
        title.push(Span::raw("  "));
        title.push(Span::styled("working...", Style::default().fg(Color::Yellow)));
    }

    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!("F{} {}", i + 1, t.label())))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(Line::from(title)))
        .select(state.active_tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn footer_hint(state: &ViewState) -> &'static str {
    if state.alert.is_some() {
        return "Enter/Esc: dismiss";
    }
    if state.confirm.is_some() {
        return "y: delete  n/Esc: keep";
    }
    if state.edit.is_some() {
        return "Enter: newline  Ctrl-S: save  Esc: cancel";
    }
    match state.active_tab {
        Tab::Generate => "Tab: next tab  Enter: generate  Ctrl-O: open image  Ctrl-U: clear  Esc: quit",
        Tab::List => "Tab: next tab  j/k: select  v: view  e: edit  d: delete  r: refresh  q: quit",
        Tab::Data => "Tab: next tab  r: refresh  q: quit",
    }
}

fn dim_frame(frame: &mut ratatui::Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.modifier |= Modifier::DIM;
            }
        }
    }
}
