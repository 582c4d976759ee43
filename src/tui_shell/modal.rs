use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::controller::{EditModal, PendingDelete, delete_prompt};

use super::message_line;

fn centered_box(frame: &mut ratatui::Frame, max_w: u16, max_h: u16) -> Rect {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, max_w).min(area.width);
    let h = area.height.saturating_sub(6).clamp(5, max_h).min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = Rect {
        x,
        y,
        width: w,
        height: h,
    };
    frame.render_widget(Clear, box_area);
    box_area
}

fn title(text: &str, keys: &[&str]) -> Line<'static> {
    let mut spans = vec![Span::styled(
        text.to_string(),
        Style::default().fg(Color::Yellow),
    )];
    for key in keys {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}

pub(super) fn draw_edit(frame: &mut ratatui::Frame, modal: &EditModal) {
    let box_area = centered_box(frame, 90, 22);
    let block = Block::default().borders(Borders::ALL).title(title(
        &format!("Edit QR code {}", modal.id),
        &["Ctrl-S: save", "Esc: cancel"],
    ));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let editor = Block::default().borders(Borders::ALL).title("data");
    let text_area = editor.inner(parts[0]);
    let (line, col) = modal.field.cursor_line_col();
    let line = u16::try_from(line).unwrap_or(u16::MAX);
    let col = u16::try_from(col).unwrap_or(u16::MAX);
    // Long `;`-separated rows scroll sideways to keep the cursor in view.
    let scroll = line.saturating_sub(text_area.height.saturating_sub(1));
    let hscroll = col.saturating_sub(text_area.width.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(modal.field.value())
            .block(editor)
            .scroll((scroll, hscroll)),
        parts[0],
    );

    if let Some(msg) = &modal.message {
        frame.render_widget(Paragraph::new(message_line(msg)), parts[1]);
    }

    let x = text_area.x.saturating_add(col - hscroll);
    let y = text_area.y.saturating_add(line - scroll);
    frame.set_cursor_position((x, y));
}

pub(super) fn draw_confirm(frame: &mut ratatui::Frame, pending: &PendingDelete) {
    let box_area = centered_box(frame, 70, 7);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title("Delete", &["y: yes", "n: no"]));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);
    frame.render_widget(
        Paragraph::new(delete_prompt(&pending.id)).wrap(Wrap { trim: false }),
        inner,
    );
}

pub(super) fn draw_alert(frame: &mut ratatui::Frame, text: &str) {
    let box_area = centered_box(frame, 70, 8);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title("Notice", &["Enter: ok"]));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), inner);
}
