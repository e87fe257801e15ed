use super::*;

#[test]
fn short_text_is_accepted_without_rewrite() {
    let mut editor = CaptionEditor::new();
    assert_eq!(editor.input("Graduation Day"), None);
    assert_eq!(editor.text(), "Graduation Day");
}

#[test]
fn forty_chars_truncate_to_exactly_twenty_seven() {
    let mut editor = CaptionEditor::new();
    let raw = "A".repeat(40);
    let rewrite = editor.input(&raw).expect("over-long text must be rewritten");
    assert_eq!(rewrite.text, "A".repeat(27));
    assert_eq!(rewrite.cursor, 27);
    assert_eq!(editor.text(), "A".repeat(27));
}

#[test]
fn exactly_at_cap_is_not_rewritten() {
    let mut editor = CaptionEditor::new();
    let raw = "b".repeat(MAX_CAPTION_LEN);
    assert_eq!(editor.input(&raw), None);
    assert_eq!(editor.text().chars().count(), MAX_CAPTION_LEN);
}

#[test]
fn one_over_cap_drops_only_the_last_char() {
    let mut editor = CaptionEditor::new();
    let raw = format!("{}Z", "x".repeat(MAX_CAPTION_LEN));
    let rewrite = editor.input(&raw).unwrap();
    assert_eq!(rewrite.text, "x".repeat(MAX_CAPTION_LEN));
    assert!(!rewrite.text.contains('Z'));
}

#[test]
fn cap_counts_characters_not_bytes() {
    let mut editor = CaptionEditor::new();
    let raw = "é".repeat(30);
    let rewrite = editor.input(&raw).unwrap();
    assert_eq!(rewrite.text.chars().count(), MAX_CAPTION_LEN);
    assert_eq!(rewrite.cursor, MAX_CAPTION_LEN);
}

#[test]
fn never_exceeds_cap_across_edit_sequence() {
    let mut editor = CaptionEditor::new();
    let mut raw = String::new();
    for chunk in ["Hello", " there, ", "this is a pasted block that is long", "!", "more"] {
        raw = format!("{}{chunk}", editor.text());
        editor.input(&raw);
        assert!(editor.text().chars().count() <= MAX_CAPTION_LEN);
    }
    assert!(raw.chars().count() > MAX_CAPTION_LEN);
}

#[test]
fn pasted_line_breaks_are_removed() {
    let mut editor = CaptionEditor::new();
    let rewrite = editor.input("first\nsecond\r\n").unwrap();
    assert_eq!(rewrite.text, "firstsecond");
    assert_eq!(rewrite.cursor, 11);
}

#[test]
fn enter_is_swallowed_other_keys_pass() {
    let editor = CaptionEditor::new();
    assert_eq!(editor.key_down("Enter"), KeyDisposition::Swallow);
    assert_eq!(editor.key_down("a"), KeyDisposition::Pass);
    assert_eq!(editor.key_down("Backspace"), KeyDisposition::Pass);
}

#[test]
fn committed_text_is_trimmed() {
    let mut editor = CaptionEditor::new();
    editor.input("  party time ");
    assert_eq!(editor.committed(), "party time");
}
