//! Headless view controller: an explicit `ViewState`, pure event/outcome
//! handlers, and a dispatcher that runs their requests against a `QrApi`.

mod dispatch;
mod effects;
mod handlers;
mod state;

pub use self::dispatch::{Dispatcher, execute};
pub use self::effects::{Effect, Outcome, Request, UiEvent};
pub use self::handlers::{
    EDIT_LOAD_FAILED, EDIT_LOADING, EDIT_SAVING, LIST_EMPTY, UPDATE_DONE, UPLOAD_DONE,
    UPLOAD_IN_PROGRESS, UPLOAD_NO_FILE, apply_outcome, delete_prompt, describe_error,
    handle_event,
};
pub use self::state::{
    DataPanel, EditModal, GeneratedQr, ListPanel, ListStatus, Message, MessageKind,
    PendingDelete, Tab, TextField, UploadPanel, ViewState,
};

#[cfg(test)]
#[path = "tests/controller/fake_api.rs"]
pub(crate) mod fake_api;

#[cfg(test)]
#[path = "tests/controller/state_tests.rs"]
mod state_tests;
