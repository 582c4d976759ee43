//! Pure state transitions. No I/O happens here; network work is returned as
//! `Effect::Request` for the dispatcher.

use std::path::PathBuf;

use crate::remote::{ApiError, resolve_against};

use super::effects::{Effect, Outcome, Request, UiEvent};
use super::state::{
    DataPanel, EditModal, GeneratedQr, ListStatus, Message, PendingDelete, Tab, TextField,
    ViewState,
};

pub const UPLOAD_NO_FILE: &str = "Please select an Excel file to upload.";
pub const UPLOAD_IN_PROGRESS: &str = "Uploading file and generating QR code... please wait.";
pub const UPLOAD_DONE: &str = "QR code generated successfully!";
pub const LIST_EMPTY: &str =
    "No QR codes generated yet. Use the \"Generate QR Code\" tab to get started!";
pub const EDIT_LOADING: &str = "Loading data...";
pub const EDIT_LOAD_FAILED: &str = "Error loading data. Try again.";
pub const EDIT_SAVING: &str = "Saving changes and regenerating QR code...";
pub const UPDATE_DONE: &str = "QR code updated successfully!";

/// User-facing text for a failed action.
pub fn describe_error(action: &str, err: &ApiError) -> String {
    match err {
        ApiError::Application { message, .. } => format!("Error {}: {}", action, message),
        ApiError::Transport(detail) => {
            format!("Connection error while {}: {}", action, detail)
        }
        ApiError::LocalFile { .. } => format!("Error {}: {}", action, err),
    }
}

pub fn delete_prompt(id: &str) -> String {
    format!(
        "Are you sure you want to delete the QR code with ID {}? This cannot be undone.",
        id
    )
}

fn refresh_list(state: &mut ViewState) -> Effect {
    state.list.status = ListStatus::Loading;
    Effect::Request(Request::List)
}

fn refresh_data(state: &mut ViewState) -> Effect {
    state.data = DataPanel::Loading;
    Effect::Request(Request::ExampleData)
}

pub fn handle_event(state: &mut ViewState, event: UiEvent) -> Vec<Effect> {
    // An alert blocks everything until acknowledged; a pending delete blocks
    // everything but its answer.
    if state.alert.is_some() {
        if event == UiEvent::DismissAlert {
            state.alert = None;
        }
        return Vec::new();
    }
    if state.confirm.is_some() && !matches!(event, UiEvent::ConfirmDelete(_)) {
        return Vec::new();
    }

    match event {
        UiEvent::SelectTab(tab) => {
            state.active_tab = tab;
            match tab {
                Tab::Generate => Vec::new(),
                Tab::List => {
                    state.list.notice = None;
                    vec![refresh_list(state)]
                }
                Tab::Data => vec![refresh_data(state)],
            }
        }

        UiEvent::RefreshList => {
            state.list.notice = None;
            vec![refresh_list(state)]
        }
        UiEvent::RefreshData => vec![refresh_data(state)],

        UiEvent::SubmitUpload => {
            state.upload.generated = None;
            if state.upload.file.is_empty() {
                state.upload.message = Some(Message::error(UPLOAD_NO_FILE));
                return Vec::new();
            }
            let path = PathBuf::from(state.upload.file.value().trim());
            state.upload.message = Some(Message::info(UPLOAD_IN_PROGRESS));
            vec![Effect::Request(Request::Upload { path })]
        }

        UiEvent::ViewImage { qrcode_url } => {
            vec![Effect::OpenUrl(resolve_against(&state.base_url, &qrcode_url))]
        }

        UiEvent::ViewGeneratedImage => state
            .upload
            .generated
            .as_ref()
            .map(|g| vec![Effect::OpenUrl(g.image_url.clone())])
            .unwrap_or_default(),

        UiEvent::OpenEdit { id } => {
            // Opened before the fetch resolves; the field shows a placeholder
            // until then.
            state.edit = Some(EditModal {
                id: id.clone(),
                field: TextField::new(EDIT_LOADING),
                message: None,
            });
            vec![Effect::Request(Request::FetchForEdit { id })]
        }

        UiEvent::SaveEdit => {
            let Some(edit) = state.edit.as_mut() else {
                return Vec::new();
            };
            edit.message = Some(Message::info(EDIT_SAVING));
            vec![Effect::Request(Request::Update {
                id: edit.id.clone(),
                new_data_encoded: edit.field.value().to_string(),
            })]
        }

        UiEvent::CloseEdit => {
            state.edit = None;
            Vec::new()
        }

        UiEvent::RequestDelete { id } => {
            state.list.notice = None;
            state.confirm = Some(PendingDelete { id });
            Vec::new()
        }

        UiEvent::ConfirmDelete(yes) => match state.confirm.take() {
            Some(pending) if yes => vec![Effect::Request(Request::Delete { id: pending.id })],
            _ => Vec::new(),
        },

        UiEvent::DismissAlert => Vec::new(),

        UiEvent::SelectNext => {
            state.list.move_down();
            Vec::new()
        }
        UiEvent::SelectPrev => {
            state.list.move_up();
            Vec::new()
        }
    }
}

pub fn apply_outcome(state: &mut ViewState, outcome: Outcome) -> Vec<Effect> {
    match outcome {
        Outcome::Uploaded(Ok(resp)) => {
            let text = resp.message.unwrap_or_else(|| UPLOAD_DONE.to_string());
            state.upload.message = Some(Message::success(text));
            state.upload.generated = Some(GeneratedQr {
                image_url: resolve_against(&state.base_url, &resp.qrcode_url),
                id: resp.id,
                filename: resp.filename,
            });
            state.upload.file.clear();
            Vec::new()
        }
        Outcome::Uploaded(Err(err)) => {
            state.upload.message = Some(Message::error(describe_error(
                "generating QR code",
                &err,
            )));
            Vec::new()
        }

        Outcome::Listed(Ok(records)) => {
            if records.is_empty() {
                state.list.status = ListStatus::Empty;
                state.list.selected = 0;
            } else {
                state.list.selected = state.list.selected.min(records.len() - 1);
                state.list.status = ListStatus::Loaded(records);
            }
            Vec::new()
        }
        Outcome::Listed(Err(err)) => {
            state.list.notice = None;
            state.list.status =
                ListStatus::Failed(describe_error("loading QR code list", &err));
            Vec::new()
        }

        Outcome::FetchedForEdit { id, result } => {
            let Some(edit) = state.edit.as_mut().filter(|e| e.id == id) else {
                tracing::debug!(event = "controller.edit.stale_fetch", id = %id);
                return Vec::new();
            };
            match result {
                Ok(data) => edit.field.set(data.data_encoded),
                Err(err) => {
                    edit.field.set(EDIT_LOAD_FAILED.to_string());
                    edit.message = Some(Message::error(describe_error(
                        "loading data for editing",
                        &err,
                    )));
                }
            }
            Vec::new()
        }

        Outcome::Updated { id, result } => match result {
            Ok(resp) => {
                let text = resp.message.unwrap_or_else(|| UPDATE_DONE.to_string());
                state.list.notice = Some(Message::success(text.clone()));
                state.alert = Some(text);
                state.edit = None;
                // The record may have a new id now; only a fresh list is
                // trusted.
                vec![refresh_list(state)]
            }
            Err(err) => {
                let text = describe_error("saving changes", &err);
                match state.edit.as_mut().filter(|e| e.id == id) {
                    Some(edit) => edit.message = Some(Message::error(text)),
                    None => state.alert = Some(text),
                }
                Vec::new()
            }
        },

        Outcome::Deleted { id, result } => {
            // The update notice no longer describes the list.
            state.list.notice = None;
            match result {
                Ok(resp) => {
                    state.alert = Some(
                        resp.message
                            .unwrap_or_else(|| format!("QR code {} deleted.", id)),
                    );
                    vec![refresh_list(state)]
                }
                Err(err) => {
                    state.alert = Some(describe_error("deleting QR code", &err));
                    Vec::new()
                }
            }
        }

        Outcome::ExampleData(Ok(value)) => {
            let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
            state.data = DataPanel::Loaded(text);
            Vec::new()
        }
        Outcome::ExampleData(Err(err)) => {
            state.data = DataPanel::Failed(describe_error("fetching server data", &err));
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "../tests/controller/handlers_tests.rs"]
mod tests;
