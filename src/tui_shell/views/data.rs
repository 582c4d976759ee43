use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Wrap};

use crate::controller::{DataPanel, Tab};

use super::super::{RenderCtx, View, render_view_chrome};

impl View for DataPanel {
    fn title(&self) -> &str {
        Tab::Data.label()
    }

    fn status(&self) -> Option<String> {
        Some("/dados".to_string())
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, _ctx: &RenderCtx) {
        let status = self.status();
        let inner = render_view_chrome(frame, self.title(), status.as_deref(), area);
        let body = match self {
            DataPanel::Idle => Paragraph::new(Span::styled(
                "Press r to load example data.",
                Style::default().fg(Color::Gray),
            )),
            DataPanel::Loading => Paragraph::new("Loading data..."),
            DataPanel::Loaded(text) => Paragraph::new(text.as_str()),
            DataPanel::Failed(text) => Paragraph::new(Span::styled(
                text.clone(),
                Style::default().fg(Color::Red),
            )),
        };
        frame.render_widget(body.wrap(Wrap { trim: false }), inner);
    }
}
