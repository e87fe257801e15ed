use super::*;

#[test]
fn from_src_classifies_data_and_remote() {
    assert!(matches!(ImageRef::from_src("data:image/jpeg;base64,AA==".into()), ImageRef::DataUri(_)));
    assert!(matches!(ImageRef::from_src("https://cdn.example.com/a.jpg".into()), ImageRef::Remote(_)));
}

#[test]
fn src_returns_inner_value() {
    let r = ImageRef::Remote("https://x/y.jpg".into());
    assert_eq!(r.src(), "https://x/y.jpg");
}

#[test]
fn payload_strips_data_uri_prefix() {
    assert_eq!(base64_payload("data:image/jpeg;base64,QUJD"), "QUJD");
    assert_eq!(base64_payload("QUJD"), "QUJD");
}

#[test]
fn decode_accepts_data_uri_and_raw_base64() {
    assert_eq!(decode_photo("data:image/jpeg;base64,QUJD").unwrap(), b"ABC");
    assert_eq!(decode_photo("QUJD").unwrap(), b"ABC");
}

#[test]
fn decode_rejects_empty_and_garbage() {
    assert!(matches!(decode_photo("data:image/jpeg;base64,"), Err(PhotoError::Empty)));
    assert!(matches!(decode_photo(""), Err(PhotoError::Empty)));
    assert!(matches!(decode_photo("not base64 at all!"), Err(PhotoError::Base64(_))));
}

#[test]
fn data_uri_decodes_back_to_same_bytes() {
    let bytes = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    let uri = to_data_uri("image/jpeg", &bytes);
    assert!(uri.starts_with("data:image/jpeg;base64,"));
    assert_eq!(decode_photo(&uri).unwrap(), bytes);
}
