use super::*;

#[test]
fn error_field_is_returned_verbatim() {
    let body = br#"{"error": "Nenhum arquivo Excel enviado."}"#;
    assert_eq!(error_message_from_body(body), "Nenhum arquivo Excel enviado.");
}

#[test]
fn missing_error_field_falls_back() {
    assert_eq!(error_message_from_body(br#"{"message": "hm"}"#), UNKNOWN_ERROR);
    assert_eq!(error_message_from_body(br#"{"error": null}"#), UNKNOWN_ERROR);
}

#[test]
fn non_json_body_falls_back() {
    assert_eq!(
        error_message_from_body(b"<html>404 Not Found</html>"),
        UNKNOWN_ERROR
    );
    assert_eq!(error_message_from_body(b""), UNKNOWN_ERROR);
}

#[test]
fn endpoint_percent_encodes_ids() -> anyhow::Result<()> {
    let client = QrClient::new("http://127.0.0.1:5000")?;
    let url = client.endpoint(&["get_qrcode_data", "a b/c"])?;
    assert_eq!(
        url.as_str(),
        "http://127.0.0.1:5000/get_qrcode_data/a%20b%2Fc"
    );
    Ok(())
}

#[test]
fn endpoint_keeps_base_path_prefix() -> anyhow::Result<()> {
    let client = QrClient::new("http://127.0.0.1:5000/api/")?;
    let url = client.endpoint(&["list_qrcodes"])?;
    assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/list_qrcodes");
    Ok(())
}
