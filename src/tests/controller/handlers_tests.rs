use super::*;
use crate::controller::MessageKind;
use crate::model::{QrCodeData, QrCodeRecord, UpdateResponse, UploadResponse};
use crate::remote::UNKNOWN_ERROR;

fn state() -> ViewState {
    ViewState::new("http://localhost:5000")
}

fn record(id: &str) -> QrCodeRecord {
    QrCodeRecord {
        id: id.to_string(),
        filename: format!("qrcode_{}.png", id),
        data_encoded: "a;b".to_string(),
        qrcode_url: format!("/qrcode_image/{}", id),
        created_at: "2025-06-19 12:00:00".to_string(),
    }
}

fn app_err(status: u16, message: &str) -> ApiError {
    ApiError::Application {
        status,
        message: message.to_string(),
    }
}

#[test]
fn selecting_list_tab_requests_list_and_shows_loading() {
    let mut st = state();
    let effects = handle_event(&mut st, UiEvent::SelectTab(Tab::List));
    assert_eq!(effects, vec![Effect::Request(Request::List)]);
    assert_eq!(st.active_tab, Tab::List);
    assert_eq!(st.list.status, ListStatus::Loading);
}

#[test]
fn reselecting_active_tab_refreshes_again() {
    let mut st = state();
    handle_event(&mut st, UiEvent::SelectTab(Tab::Data));
    let effects = handle_event(&mut st, UiEvent::SelectTab(Tab::Data));
    assert_eq!(effects, vec![Effect::Request(Request::ExampleData)]);
    assert_eq!(st.data, DataPanel::Loading);
}

#[test]
fn generate_tab_has_no_side_effect() {
    let mut st = state();
    st.active_tab = Tab::List;
    let effects = handle_event(&mut st, UiEvent::SelectTab(Tab::Generate));
    assert!(effects.is_empty());
    assert_eq!(st.active_tab, Tab::Generate);
}

#[test]
fn upload_without_file_is_rejected_locally() {
    let mut st = state();
    st.upload.file.set("   ".to_string());
    let effects = handle_event(&mut st, UiEvent::SubmitUpload);
    assert!(effects.is_empty());
    assert_eq!(st.upload.message, Some(Message::error(UPLOAD_NO_FILE)));
    assert!(st.upload.generated.is_none());
}

#[test]
fn upload_with_file_hides_previous_result_and_requests() {
    let mut st = state();
    st.upload.generated = Some(GeneratedQr {
        id: "old".to_string(),
        filename: "old.png".to_string(),
        image_url: "http://localhost:5000/qrcode_image/old".to_string(),
    });
    st.upload.file.set("/tmp/planilha.xlsx".to_string());

    let effects = handle_event(&mut st, UiEvent::SubmitUpload);
    assert_eq!(
        effects,
        vec![Effect::Request(Request::Upload {
            path: PathBuf::from("/tmp/planilha.xlsx")
        })]
    );
    assert!(st.upload.generated.is_none());
    assert_eq!(st.upload.message, Some(Message::info(UPLOAD_IN_PROGRESS)));
}

#[test]
fn upload_success_shows_response_fields_exactly() {
    let mut st = state();
    st.upload.file.set("/tmp/planilha.xlsx".to_string());
    let effects = apply_outcome(
        &mut st,
        Outcome::Uploaded(Ok(UploadResponse {
            id: "4f1c".to_string(),
            filename: "qrcode_4f1c.png".to_string(),
            qrcode_url: "/qrcode_image/4f1c".to_string(),
            message: Some("QR Code gerado com sucesso!".to_string()),
        })),
    );
    assert!(effects.is_empty());
    assert_eq!(
        st.upload.generated,
        Some(GeneratedQr {
            id: "4f1c".to_string(),
            filename: "qrcode_4f1c.png".to_string(),
            image_url: "http://localhost:5000/qrcode_image/4f1c".to_string(),
        })
    );
    assert_eq!(
        st.upload.message,
        Some(Message::success("QR Code gerado com sucesso!"))
    );
    assert_eq!(st.upload.file.value(), "");
}

#[test]
fn upload_error_field_is_shown_verbatim() {
    let mut st = state();
    apply_outcome(
        &mut st,
        Outcome::Uploaded(Err(app_err(
            400,
            "Não foi possível extrair dados válidos do arquivo Excel.",
        ))),
    );
    let msg = st.upload.message.expect("message");
    assert_eq!(msg.kind, MessageKind::Error);
    assert!(
        msg.text
            .ends_with(": Não foi possível extrair dados válidos do arquivo Excel.")
    );
}

#[test]
fn missing_error_field_shows_fallback() {
    let mut st = state();
    apply_outcome(
        &mut st,
        Outcome::Listed(Err(app_err(500, UNKNOWN_ERROR))),
    );
    match &st.list.status {
        ListStatus::Failed(text) => assert!(text.ends_with(UNKNOWN_ERROR)),
        other => panic!("unexpected status {:?}", other),
    }
}

#[test]
fn transport_errors_are_distinct_from_application_errors() {
    let err = ApiError::Transport("dns error: no such host".to_string());
    let text = describe_error("loading QR code list", &err);
    assert!(text.starts_with("Connection error"));
    assert!(text.contains("no such host"));

    let text = describe_error("loading QR code list", &app_err(404, "nope"));
    assert_eq!(text, "Error loading QR code list: nope");
}

#[test]
fn empty_list_renders_nothing_yet_state() {
    let mut st = state();
    handle_event(&mut st, UiEvent::SelectTab(Tab::List));
    apply_outcome(&mut st, Outcome::Listed(Ok(Vec::new())));
    assert_eq!(st.list.status, ListStatus::Empty);
}

#[test]
fn list_keeps_server_order_and_clamps_selection() {
    let mut st = state();
    st.list.selected = 7;
    let records = vec![record("b"), record("a"), record("c")];
    apply_outcome(&mut st, Outcome::Listed(Ok(records.clone())));
    assert_eq!(st.list.records(), records.as_slice());
    assert_eq!(st.list.selected, 2);
}

#[test]
fn edit_modal_opens_before_fetch_resolves() {
    let mut st = state();
    let effects = handle_event(
        &mut st,
        UiEvent::OpenEdit {
            id: "abc".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::Request(Request::FetchForEdit {
            id: "abc".to_string()
        })]
    );
    let edit = st.edit.as_ref().expect("modal open");
    assert_eq!(edit.field.value(), EDIT_LOADING);

    apply_outcome(
        &mut st,
        Outcome::FetchedForEdit {
            id: "abc".to_string(),
            result: Ok(QrCodeData {
                id: Some("abc".to_string()),
                data_encoded: "x;y\n1;2".to_string(),
            }),
        },
    );
    assert_eq!(st.edit.as_ref().map(|e| e.field.value()), Some("x;y\n1;2"));
}

#[test]
fn failed_fetch_leaves_placeholder_in_open_modal() {
    let mut st = state();
    handle_event(
        &mut st,
        UiEvent::OpenEdit {
            id: "abc".to_string(),
        },
    );
    apply_outcome(
        &mut st,
        Outcome::FetchedForEdit {
            id: "abc".to_string(),
            result: Err(app_err(404, "QR Code não encontrado.")),
        },
    );
    let edit = st.edit.as_ref().expect("modal stays open");
    assert_eq!(edit.field.value(), EDIT_LOAD_FAILED);
    let msg = edit.message.as_ref().expect("inline error");
    assert!(msg.text.contains("QR Code não encontrado."));
}

#[test]
fn stale_fetch_for_other_record_is_ignored() {
    let mut st = state();
    handle_event(
        &mut st,
        UiEvent::OpenEdit {
            id: "second".to_string(),
        },
    );
    apply_outcome(
        &mut st,
        Outcome::FetchedForEdit {
            id: "first".to_string(),
            result: Ok(QrCodeData {
                id: None,
                data_encoded: "old".to_string(),
            }),
        },
    );
    assert_eq!(st.edit.as_ref().map(|e| e.field.value()), Some(EDIT_LOADING));
}

#[test]
fn save_sends_field_value_unvalidated() {
    let mut st = state();
    handle_event(
        &mut st,
        UiEvent::OpenEdit {
            id: "abc".to_string(),
        },
    );
    if let Some(edit) = st.edit.as_mut() {
        edit.field.set(String::new());
    }
    let effects = handle_event(&mut st, UiEvent::SaveEdit);
    assert_eq!(
        effects,
        vec![Effect::Request(Request::Update {
            id: "abc".to_string(),
            new_data_encoded: String::new(),
        })]
    );
}

#[test]
fn save_without_modal_does_nothing() {
    let mut st = state();
    assert!(handle_event(&mut st, UiEvent::SaveEdit).is_empty());
}

#[test]
fn update_success_closes_modal_alerts_and_relists() {
    let mut st = state();
    handle_event(
        &mut st,
        UiEvent::OpenEdit {
            id: "abc".to_string(),
        },
    );
    let effects = apply_outcome(
        &mut st,
        Outcome::Updated {
            id: "abc".to_string(),
            result: Ok(UpdateResponse {
                message: Some("QR Code atualizado com sucesso!".to_string()),
                new_id: Some("def".to_string()),
                ..UpdateResponse::default()
            }),
        },
    );
    assert_eq!(effects, vec![Effect::Request(Request::List)]);
    assert!(st.edit.is_none());
    assert_eq!(st.alert.as_deref(), Some("QR Code atualizado com sucesso!"));
    assert_eq!(
        st.list.notice,
        Some(Message::success("QR Code atualizado com sucesso!"))
    );
    assert_eq!(st.list.status, ListStatus::Loading);
}

fn updated_ok(st: &mut ViewState, id: &str) {
    handle_event(st, UiEvent::OpenEdit { id: id.to_string() });
    apply_outcome(
        st,
        Outcome::Updated {
            id: id.to_string(),
            result: Ok(UpdateResponse {
                message: Some("QR Code atualizado com sucesso!".to_string()),
                ..UpdateResponse::default()
            }),
        },
    );
    handle_event(st, UiEvent::DismissAlert);
}

#[test]
fn update_notice_survives_its_own_relist_but_not_a_later_delete() {
    let mut st = state();
    updated_ok(&mut st, "abc");
    apply_outcome(&mut st, Outcome::Listed(Ok(vec![record("def")])));
    assert!(st.list.notice.is_some());

    apply_outcome(
        &mut st,
        Outcome::Deleted {
            id: "def".to_string(),
            result: Ok(crate::model::MessageResponse {
                message: Some("QR Code def deletado com sucesso.".to_string()),
            }),
        },
    );
    handle_event(&mut st, UiEvent::DismissAlert);
    apply_outcome(
        &mut st,
        Outcome::Listed(Err(app_err(500, "Erro interno"))),
    );
    assert!(st.list.notice.is_none());
}

#[test]
fn update_notice_is_cleared_by_refresh_delete_prompt_or_failed_list() {
    let mut st = state();
    updated_ok(&mut st, "abc");
    handle_event(&mut st, UiEvent::RefreshList);
    assert!(st.list.notice.is_none());

    let mut st = state();
    updated_ok(&mut st, "abc");
    handle_event(&mut st, UiEvent::SelectTab(Tab::List));
    assert!(st.list.notice.is_none());

    let mut st = state();
    updated_ok(&mut st, "abc");
    handle_event(&mut st, UiEvent::RequestDelete { id: "def".to_string() });
    assert!(st.list.notice.is_none());

    let mut st = state();
    updated_ok(&mut st, "abc");
    apply_outcome(
        &mut st,
        Outcome::Listed(Err(app_err(500, "Erro interno"))),
    );
    assert!(st.list.notice.is_none());
}

#[test]
fn upload_path_is_passed_through_unexpanded() {
    let mut st = state();
    st.upload.file.set("~/planilha.xlsx".to_string());
    let effects = handle_event(&mut st, UiEvent::SubmitUpload);
    assert_eq!(
        effects,
        vec![Effect::Request(Request::Upload {
            path: PathBuf::from("~/planilha.xlsx")
        })]
    );
}

#[test]
fn update_failure_keeps_modal_open_with_error() {
    let mut st = state();
    handle_event(
        &mut st,
        UiEvent::OpenEdit {
            id: "abc".to_string(),
        },
    );
    let effects = apply_outcome(
        &mut st,
        Outcome::Updated {
            id: "abc".to_string(),
            result: Err(app_err(400, "Novos dados para o QR Code não fornecidos.")),
        },
    );
    assert!(effects.is_empty());
    let edit = st.edit.as_ref().expect("modal open");
    let msg = edit.message.as_ref().expect("inline error");
    assert_eq!(msg.kind, MessageKind::Error);
    assert!(msg.text.contains("Novos dados para o QR Code não fornecidos."));
    assert!(st.alert.is_none());
}

#[test]
fn delete_requires_confirmation() {
    let mut st = state();
    let effects = handle_event(
        &mut st,
        UiEvent::RequestDelete {
            id: "abc".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(
        st.confirm,
        Some(PendingDelete {
            id: "abc".to_string()
        })
    );

    let effects = handle_event(&mut st, UiEvent::ConfirmDelete(false));
    assert!(effects.is_empty());
    assert!(st.confirm.is_none());
}

#[test]
fn confirmed_delete_issues_one_request() {
    let mut st = state();
    handle_event(
        &mut st,
        UiEvent::RequestDelete {
            id: "abc".to_string(),
        },
    );
    let effects = handle_event(&mut st, UiEvent::ConfirmDelete(true));
    assert_eq!(
        effects,
        vec![Effect::Request(Request::Delete {
            id: "abc".to_string()
        })]
    );
    // A second answer without a pending prompt does nothing.
    assert!(handle_event(&mut st, UiEvent::ConfirmDelete(true)).is_empty());
}

#[test]
fn pending_confirmation_blocks_other_events() {
    let mut st = state();
    handle_event(
        &mut st,
        UiEvent::RequestDelete {
            id: "abc".to_string(),
        },
    );
    assert!(handle_event(&mut st, UiEvent::SelectTab(Tab::List)).is_empty());
    assert_eq!(st.active_tab, Tab::Generate);
}

#[test]
fn delete_outcomes_surface_as_alerts() {
    let mut st = state();
    let effects = apply_outcome(
        &mut st,
        Outcome::Deleted {
            id: "abc".to_string(),
            result: Ok(crate::model::MessageResponse {
                message: Some("QR Code abc deletado com sucesso.".to_string()),
            }),
        },
    );
    assert_eq!(effects, vec![Effect::Request(Request::List)]);
    assert_eq!(st.alert.as_deref(), Some("QR Code abc deletado com sucesso."));

    let mut st = state();
    let effects = apply_outcome(
        &mut st,
        Outcome::Deleted {
            id: "abc".to_string(),
            result: Err(app_err(404, "QR Code abc não encontrado ou erro ao deletar.")),
        },
    );
    assert!(effects.is_empty());
    assert!(
        st.alert
            .as_deref()
            .is_some_and(|a| a.contains("QR Code abc não encontrado ou erro ao deletar."))
    );
}

#[test]
fn alert_blocks_until_dismissed() {
    let mut st = state();
    st.alert = Some("done".to_string());
    assert!(handle_event(&mut st, UiEvent::SelectTab(Tab::List)).is_empty());
    assert_eq!(st.active_tab, Tab::Generate);

    handle_event(&mut st, UiEvent::DismissAlert);
    assert!(st.alert.is_none());
    assert_eq!(
        handle_event(&mut st, UiEvent::SelectTab(Tab::List)),
        vec![Effect::Request(Request::List)]
    );
}

#[test]
fn example_data_is_pretty_printed_verbatim() {
    let mut st = state();
    let value = serde_json::json!({"versao_api": "1.0", "nested": {"n": [1, 2]}});
    apply_outcome(&mut st, Outcome::ExampleData(Ok(value.clone())));
    match &st.data {
        DataPanel::Loaded(text) => {
            assert_eq!(text, &serde_json::to_string_pretty(&value).unwrap());
            let back: serde_json::Value = serde_json::from_str(text).unwrap();
            assert_eq!(back, value);
        }
        other => panic!("unexpected data panel {:?}", other),
    }
}

#[test]
fn view_image_resolves_against_base_url() {
    let mut st = state();
    let effects = handle_event(
        &mut st,
        UiEvent::ViewImage {
            qrcode_url: "/qrcode_image/abc".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::OpenUrl(
            "http://localhost:5000/qrcode_image/abc".to_string()
        )]
    );
    assert!(handle_event(&mut st, UiEvent::ViewGeneratedImage).is_empty());
}
