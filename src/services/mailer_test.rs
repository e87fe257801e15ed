use super::*;

#[test]
fn template_without_caption_drops_placeholder() {
    let html = render_photo_email(None);
    assert!(html.contains("Here's your photo from the event!"));
    assert!(html.contains("Your photo is attached below."));
    assert!(!html.contains("{{CAPTION_BLOCK}}"));
    assert_eq!(render_photo_email(Some("   ")), html);
}

#[test]
fn template_shows_escaped_caption() {
    let html = render_photo_email(Some("Tom & <Jerry>"));
    assert!(html.contains("Tom &amp; &lt;Jerry&gt;"));
    assert!(!html.contains("<Jerry>"));
}

#[test]
fn escape_html_covers_quotes() {
    assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
}

#[test]
fn provider_message_carries_photo_attachment() {
    let email = PhotoEmail {
        from: "Photobooth <photos@example.com>".into(),
        to: "guest@example.com".into(),
        subject: "Your Photobooth Picture!".into(),
        html: render_photo_email(Some("hi")),
        attachment_name: "photobooth.jpg".into(),
        content_type: "image/jpeg".into(),
        photo: vec![0xFF, 0xD8, 0xFF],
    };
    let message = provider_message(email);
    let debug = format!("{message:?}");
    assert!(debug.contains("photobooth.jpg"));
    assert!(debug.contains("image/jpeg"));
}
