use super::*;

#[test]
fn relay_message_is_shown_verbatim() {
    let body = r#"{"error":"Invalid email","message":"Please provide a valid email address"}"#;
    assert_eq!(relay_failure_text(body), "Please provide a valid email address");
}

#[test]
fn body_without_message_uses_generic_text() {
    assert_eq!(relay_failure_text(r#"{"error":"Method not allowed"}"#), "Failed to send email");
}

#[test]
fn non_json_body_uses_generic_text() {
    assert_eq!(relay_failure_text("<html>502</html>"), "Failed to send email");
    assert_eq!(relay_failure_text(""), "Failed to send email");
}
