use std::collections::HashMap;

use super::*;

fn config(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = config(&[]).unwrap();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.relay, RelayConfig::default());
    assert_eq!(cfg.relay.subject, "Your UBC Startup Event Photo 📸");
    assert_eq!(cfg.page.gallery, None);
    assert_eq!(cfg.page.upload_mode, UploadMode::Auto);
    assert_eq!(cfg.page.event_id, None);
    assert_eq!(cfg.site_dir, PathBuf::from("public"));
}

#[test]
fn reads_relay_and_gallery_settings() {
    let cfg = config(&[
        ("PORT", "8080"),
        ("RESEND_API_KEY", "re_123"),
        ("EMAIL_FROM", "Booth <booth@example.com>"),
        ("SUPABASE_URL", "https://abc.supabase.co"),
        ("SUPABASE_ANON_KEY", "anon"),
        ("UPLOAD_MODE", "consent"),
        ("EVENT_ID", "demo-day"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.relay.api_key.as_deref(), Some("re_123"));
    assert_eq!(cfg.relay.from, "Booth <booth@example.com>");
    assert_eq!(cfg.relay.attachment_name, "photobooth-photo.jpg");
    let gallery = cfg.page.gallery.unwrap();
    assert_eq!(gallery.bucket, "photos");
    assert_eq!(cfg.page.upload_mode, UploadMode::Consent);
    assert_eq!(cfg.page.event_id.as_deref(), Some("demo-day"));
}

#[test]
fn blank_api_key_is_unset() {
    assert_eq!(config(&[("RESEND_API_KEY", "  ")]).unwrap().relay.api_key, None);
}

#[test]
fn placeholder_gallery_is_unconfigured() {
    let cfg = config(&[("SUPABASE_URL", "https://your-project.supabase.co"), ("SUPABASE_ANON_KEY", "k")]).unwrap();
    assert_eq!(cfg.page.gallery, None);
}

#[test]
fn rejects_bad_port_and_mode() {
    assert_eq!(config(&[("PORT", "eighty")]), Err(ConfigError::Invalid { key: "PORT", value: "eighty".into() }));
    assert_eq!(
        config(&[("UPLOAD_MODE", "never")]),
        Err(ConfigError::Invalid { key: "UPLOAD_MODE", value: "never".into() })
    );
}
