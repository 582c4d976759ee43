use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use time::OffsetDateTime;

use crate::controller::{Message, MessageKind};

#[derive(Clone, Copy, Debug)]
pub(super) struct RenderCtx {
    pub(super) now: OffsetDateTime,
    pub(super) ts_mode: super::TimestampMode,
    /// A request is queued or in flight.
    pub(super) busy: bool,
    /// A modal, prompt or alert is drawn over the tab body.
    pub(super) overlay: bool,
}

impl RenderCtx {
    pub(super) fn for_state(
        state: &super::ViewState,
        ts_mode: super::TimestampMode,
        busy: bool,
        now: OffsetDateTime,
    ) -> Self {
        Self {
            now,
            ts_mode,
            busy,
            overlay: state.edit.is_some() || state.confirm.is_some() || state.alert.is_some(),
        }
    }
}

/// One tab body. Implemented by the controller's panel types.
pub(super) trait View {
    fn title(&self) -> &str;

    /// Short status shown next to the title.
    fn status(&self) -> Option<String> {
        None
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx);
}

pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    status: Option<&str>,
    area: Rect,
) -> Rect {
    let mut spans = vec![Span::styled(
        title.to_string(),
        Style::default().fg(Color::Yellow),
    )];
    if let Some(status) = status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            status.to_string(),
            Style::default().fg(Color::Gray),
        ));
    }

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(spans));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}

pub(super) fn message_style(kind: MessageKind) -> Style {
    match kind {
        MessageKind::Info => Style::default().fg(Color::Gray),
        MessageKind::Success => Style::default().fg(Color::Green),
        MessageKind::Error => Style::default().fg(Color::Red),
    }
}

pub(super) fn message_line(msg: &Message) -> Line<'static> {
    Line::from(Span::styled(msg.text.clone(), message_style(msg.kind)))
}
