use super::*;

pub(super) mod event_loop;
pub(super) mod render;

/// One TUI session: view state plus the dispatcher that talks to the service.
pub(super) struct App<A: QrApi> {
    pub(super) state: ViewState,
    pub(super) dispatcher: crate::controller::Dispatcher<A>,
    pub(super) ts_mode: TimestampMode,
    pub(super) quit: bool,
    pub(super) opener: fn(&str) -> io::Result<()>,
}

impl<A: QrApi> App<A> {
    pub(super) fn new(api: A, base_url: String) -> Self {
        Self {
            state: ViewState::new(base_url),
            dispatcher: crate::controller::Dispatcher::new(api),
            ts_mode: TimestampMode::default(),
            quit: false,
            opener: open_in_browser,
        }
    }

    pub(super) fn start(&mut self) {
        self.dispatcher.start(&mut self.state);
        self.open_urls();
    }

    pub(super) fn dispatch(&mut self, event: UiEvent) {
        self.dispatcher.handle(&mut self.state, event);
        self.open_urls();
    }

    pub(super) fn busy(&self) -> bool {
        self.dispatcher.pending() > 0
    }

    /// Runs one queued request. The caller redraws first so loading states
    /// are visible while this blocks.
    pub(super) fn step(&mut self) {
        self.dispatcher.step(&mut self.state);
        self.open_urls();
    }

    pub(super) fn render_ctx(&self) -> RenderCtx {
        RenderCtx::for_state(
            &self.state,
            self.ts_mode,
            self.busy(),
            time::OffsetDateTime::now_utc(),
        )
    }

    fn open_urls(&mut self) {
        for url in self.dispatcher.take_urls() {
            tracing::info!(event = "tui.image.opened", url = %url);
            if let Err(err) = (self.opener)(&url) {
                tracing::warn!(event = "tui.image.open_failed", url = %url, error = %err);
                self.state.alert = Some(format!("Could not open {}: {}", url, err));
            }
        }
    }
}

fn open_in_browser(url: &str) -> io::Result<()> {
    open::that(url)
}
