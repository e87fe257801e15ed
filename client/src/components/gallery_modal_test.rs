use super::*;

fn record(caption: Option<&str>) -> GalleryRecord {
    serde_json::from_value(serde_json::json!({
        "id": 7,
        "url": "https://abc.supabase.co/storage/v1/object/public/photos/photos/1_abcdef.jpg",
        "caption": caption,
        "created_at": "2026-10-19T18:00:00.000Z",
    }))
    .unwrap()
}

#[test]
fn empty_gallery_invites_first_post() {
    assert_eq!(GalleryView::Loaded(Vec::new()).notice().as_deref(), Some(EMPTY_TEXT));
}

#[test]
fn populated_gallery_shows_grid() {
    assert_eq!(GalleryView::Loaded(vec![record(Some("Demo night"))]).notice(), None);
}

#[test]
fn fetch_failure_is_shown_inline() {
    let notice = GalleryView::Failed("500 boom".into()).notice();
    assert_eq!(notice.as_deref(), Some("Error loading gallery: 500 boom"));
}

#[test]
fn unconfigured_gallery_says_so() {
    assert_eq!(GalleryView::NotConfigured.notice().as_deref(), Some(NOT_CONFIGURED_TEXT));
}

#[test]
fn blank_caption_renders_untitled() {
    assert_eq!(record(None).display_caption(), "Untitled");
    assert_eq!(record(Some("Demo night")).display_caption(), "Demo night");
}
