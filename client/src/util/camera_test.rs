use super::*;

#[test]
fn constraints_ask_for_front_camera_square() {
    assert_eq!(video_constraints(), serde_json::json!({"facingMode": "user", "width": 480, "height": 480}));
}
