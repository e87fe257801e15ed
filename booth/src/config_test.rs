use super::*;

#[test]
fn gallery_config_requires_both_credentials() {
    assert_eq!(GalleryConfig::from_parts(None, Some("key"), None), None);
    assert_eq!(GalleryConfig::from_parts(Some("https://x.supabase.co"), None, None), None);
    assert_eq!(GalleryConfig::from_parts(Some("  "), Some("key"), None), None);
}

#[test]
fn template_placeholders_count_as_unconfigured() {
    assert_eq!(GalleryConfig::from_parts(Some("https://your-project.supabase.co"), Some("key"), None), None);
    assert_eq!(GalleryConfig::from_parts(Some("https://x.supabase.co"), Some("your-anon-key"), None), None);
}

#[test]
fn gallery_config_defaults_bucket_and_trims_url() {
    let cfg = GalleryConfig::from_parts(Some("https://abc.supabase.co/"), Some(" anon "), Some("")).expect("configured");
    assert_eq!(cfg.url, "https://abc.supabase.co");
    assert_eq!(cfg.anon_key, "anon");
    assert_eq!(cfg.bucket, "photos");
}

#[test]
fn page_config_wire_shape() {
    let cfg = PageConfig { gallery: None, upload_mode: UploadMode::Consent, event_id: None };
    assert_eq!(serde_json::to_value(&cfg).expect("json"), serde_json::json!({"gallery": null, "upload_mode": "consent"}));

    let parsed: PageConfig = serde_json::from_str(r#"{"gallery":{"url":"u","anon_key":"k","bucket":"b"}}"#).expect("parse");
    assert_eq!(parsed.upload_mode, UploadMode::Auto);
    assert_eq!(parsed.gallery.map(|g| g.bucket), Some("b".to_owned()));
    assert_eq!(parsed.event_id, None);
}

#[test]
fn page_config_carries_event_when_set() {
    let cfg = PageConfig { event_id: Some("ubc-demo-day".into()), ..PageConfig::default() };
    let value = serde_json::to_value(&cfg).expect("json");
    assert_eq!(value["event_id"], "ubc-demo-day");
}
