use super::*;

#[test]
fn stored_true_literal_parses_as_confirmed() {
    assert_eq!(parse_stored::<bool>("true"), Some(true));
    assert_eq!(parse_stored::<bool>("false"), Some(false));
}

#[test]
fn garbage_is_not_confirmation() {
    assert_eq!(parse_stored::<bool>("yes"), None);
    assert_eq!(parse_stored::<bool>(""), None);
}

#[test]
fn saved_flag_matches_legacy_value() {
    assert_eq!(serde_json::to_string(&true).unwrap(), "true");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_never_reports_consent() {
    assert!(!share_confirmed());
}
