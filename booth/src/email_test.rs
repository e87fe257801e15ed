use super::*;
use crate::factory::{CaptureTime, polaroid};

fn card() -> Card {
    let time = CaptureTime { iso: "2026-10-19T10:00:00.000Z".into(), year: 2026, month: 10, day: 19 };
    let mut c = polaroid(ImageRef::DataUri("data:image/jpeg;base64,QUJD".into()), &time);
    c.caption.input(" Smile ");
    c
}

// =============================================================
// Address validation
// =============================================================

#[test]
fn address_pattern_compiles() {
    let re = LazyLock::force(&EMAIL_PATTERN);
    assert!(re.is_match("guest@example.com"));
    assert!(!re.is_match("guest example.com"));
}

#[test]
fn accepts_ordinary_addresses() {
    for addr in ["a@b.co", "first.last@example.com", "x+tag@sub.domain.org"] {
        assert!(is_valid_email(addr), "{addr} should be valid");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for addr in ["", "plain", "@example.com", "user@", "user@host", "us er@example.com", "a@b@c.d", "a@b.", " a@b.co"] {
        assert!(!is_valid_email(addr), "{addr:?} should be invalid");
    }
}

// =============================================================
// Wire types
// =============================================================

#[test]
fn request_uses_camel_case_photo_data() {
    let req = EmailRequest { email: Some("a@b.co".into()), photo_data: Some("QUJD".into()), caption: Some(String::new()) };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["photoData"], "QUJD");
    assert_eq!(json["email"], "a@b.co");
}

#[test]
fn request_tolerates_missing_and_null_fields() {
    let req: EmailRequest = serde_json::from_str(r#"{"email":null}"#).unwrap();
    assert_eq!(req, EmailRequest::default());
}

#[test]
fn failure_message_prefers_body_message() {
    let body = RelayFailure { error: "Invalid email".into(), message: Some("Please provide a valid email address".into()) };
    assert_eq!(failure_message(Some(&body)), "Please provide a valid email address");
    assert_eq!(failure_message(None), "Failed to send email");
    let blank = RelayFailure { error: "x".into(), message: Some("  ".into()) };
    assert_eq!(failure_message(Some(&blank)), "Failed to send email");
}

// =============================================================
// Dialog
// =============================================================

#[test]
fn fresh_dialog_is_idle_with_send_label() {
    let d = EmailDialog::open(1, card().id);
    assert_eq!(d.status, SendStatus::Idle);
    assert_eq!(d.submit_label(), "Send");
    assert!(!d.submit_disabled());
    assert_eq!(d.status_text(), "");
    assert_eq!(d.status_class(), "email-status");
}

#[test]
fn blank_address_is_rejected_inline() {
    let c = card();
    let mut d = EmailDialog::open(1, c.id);
    d.address = "   ".into();
    assert_eq!(d.begin_send(Some(&c)), Err(MSG_NO_ADDRESS.to_owned()));
    assert_eq!(d.status_class(), "email-status error");
    assert!(!d.submit_disabled());
}

#[test]
fn missing_target_is_rejected() {
    let c = card();
    let mut d = EmailDialog::open(1, c.id);
    d.target = None;
    d.address = "a@b.co".into();
    assert_eq!(d.begin_send(Some(&c)), Err(MSG_NO_PHOTO.to_owned()));
}

#[test]
fn removed_card_is_rejected() {
    let c = card();
    let mut d = EmailDialog::open(1, c.id);
    d.address = "a@b.co".into();
    assert_eq!(d.begin_send(None), Err(MSG_PHOTO_MISSING.to_owned()));
}

#[test]
fn valid_send_enters_sending_and_carries_trimmed_fields() {
    let c = card();
    let mut d = EmailDialog::open(1, c.id);
    d.address = "  guest@example.com ".into();
    let out = d.begin_send(Some(&c)).unwrap();
    assert_eq!(out.address, "guest@example.com");
    assert_eq!(out.caption, "Smile");
    assert_eq!(d.submit_label(), "Sending...");
    assert!(d.submit_disabled());

    let req = out.into_request("data:image/jpeg;base64,QUJD".into());
    assert_eq!(req.photo_data.as_deref(), Some("data:image/jpeg;base64,QUJD"));
}

#[test]
fn double_submit_while_sending_is_refused() {
    let c = card();
    let mut d = EmailDialog::open(1, c.id);
    d.address = "a@b.co".into();
    d.begin_send(Some(&c)).unwrap();
    assert!(d.begin_send(Some(&c)).is_err());
    assert_eq!(d.status, SendStatus::Sending);
}

#[test]
fn success_keeps_submit_disabled_and_requests_close() {
    let c = card();
    let mut d = EmailDialog::open(1, c.id);
    d.address = "a@b.co".into();
    d.begin_send(Some(&c)).unwrap();
    d.finish(Ok(RelaySuccess { success: true, message: "Email sent successfully!".into(), id: "em_1".into() }));
    assert!(d.succeeded());
    assert!(d.submit_disabled());
    assert_eq!(d.status_text(), MSG_SENT);
    assert_eq!(d.status_class(), "email-status success");
}

#[test]
fn error_re_enables_submit_and_shows_message() {
    let c = card();
    let mut d = EmailDialog::open(1, c.id);
    d.address = "a@b.co".into();
    d.begin_send(Some(&c)).unwrap();
    d.finish(Err("Please provide a valid email address".into()));
    assert!(!d.submit_disabled());
    assert_eq!(d.submit_label(), "Send");
    assert_eq!(d.status_text(), "Please provide a valid email address");
    assert!(!d.succeeded());
}

#[test]
fn empty_error_falls_back_to_generic_message() {
    let c = card();
    let mut d = EmailDialog::open(1, c.id);
    d.address = "a@b.co".into();
    d.begin_send(Some(&c)).unwrap();
    d.finish(Err(String::new()));
    assert_eq!(d.status_text(), MSG_SEND_FAILED);
}
