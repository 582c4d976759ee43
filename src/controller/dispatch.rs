use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::remote::QrApi;

use super::effects::{Effect, Outcome, Request, UiEvent};
use super::handlers::{apply_outcome, handle_event};
use super::state::ViewState;

/// Runs handler effects against an API, one request at a time.
///
/// The front end calls `handle` for every UI event and `step` whenever it is
/// ready to block on the network (after redrawing, so loading states show).
pub struct Dispatcher<A> {
    api: A,
    queue: VecDeque<Request>,
    urls: Vec<String>,
}

impl<A: QrApi> Dispatcher<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            queue: VecDeque::new(),
            urls: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn api(&self) -> &A {
        &self.api
    }

    /// Activates the initial tab the same way a user selection would.
    pub fn start(&mut self, state: &mut ViewState) {
        let tab = state.active_tab;
        self.handle(state, UiEvent::SelectTab(tab));
    }

    pub fn handle(&mut self, state: &mut ViewState, event: UiEvent) {
        let effects = handle_event(state, event);
        self.enqueue(effects);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Performs the next queued request and applies its outcome. Returns
    /// false when nothing was queued.
    pub fn step(&mut self, state: &mut ViewState) -> bool {
        let Some(req) = self.queue.pop_front() else {
            return false;
        };
        let outcome = execute(&self.api, req);
        let effects = apply_outcome(state, outcome);
        self.enqueue(effects);
        true
    }

    pub fn run_until_idle(&mut self, state: &mut ViewState) {
        while self.step(state) {}
    }

    /// URLs handlers asked to open since the last call.
    pub fn take_urls(&mut self) -> Vec<String> {
        std::mem::take(&mut self.urls)
    }

    fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Request(req) => self.queue.push_back(req),
                Effect::OpenUrl(url) => self.urls.push(url),
            }
        }
    }
}

/// Performs one request. Never fails: errors travel inside the outcome.
pub fn execute<A: QrApi + ?Sized>(api: &A, req: Request) -> Outcome {
    let label = req.label();
    tracing::debug!(event = "controller.request.started", request = label);

    let outcome = match req {
        Request::Upload { path } => {
            let path = expand_home(&path);
            Outcome::Uploaded(api.read_upload(&path).and_then(|file| api.upload(&file)))
        }
        Request::List => Outcome::Listed(api.list()),
        Request::FetchForEdit { id } => {
            let result = api.fetch_for_edit(&id);
            Outcome::FetchedForEdit { id, result }
        }
        Request::Update {
            id,
            new_data_encoded,
        } => {
            let result = api.update(&id, &new_data_encoded);
            Outcome::Updated { id, result }
        }
        Request::Delete { id } => {
            let result = api.delete(&id);
            Outcome::Deleted { id, result }
        }
        Request::ExampleData => Outcome::ExampleData(api.example_data()),
    };

    if let Some(err) = outcome_error(&outcome) {
        tracing::warn!(event = "controller.request.failed", request = label, error = %err);
    }
    outcome
}

/// Resolves a leading `~/` against the home directory.
fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

fn outcome_error(outcome: &Outcome) -> Option<&crate::remote::ApiError> {
    match outcome {
        Outcome::Uploaded(r) => r.as_ref().err(),
        Outcome::Listed(r) => r.as_ref().err(),
        Outcome::FetchedForEdit { result, .. } => result.as_ref().err(),
        Outcome::Updated { result, .. } => result.as_ref().err(),
        Outcome::Deleted { result, .. } => result.as_ref().err(),
        Outcome::ExampleData(r) => r.as_ref().err(),
    }
}

#[cfg(test)]
#[path = "../tests/controller/dispatch_tests.rs"]
mod tests;
