use super::*;

/// Where a source x (inside the crop) lands on the output canvas.
fn map_x(plan: &CapturePlan, source_x: f64) -> f64 {
    let unit = (source_x - plan.crop.sx) / plan.crop.size * f64::from(plan.output);
    plan.translate_x + plan.scale_x * unit
}

#[test]
fn landscape_frame_crops_center_square() {
    let crop = square_crop(640, 480).unwrap();
    assert_eq!(crop, Crop { sx: 80.0, sy: 0.0, size: 480.0 });
}

#[test]
fn portrait_frame_crops_center_square() {
    let crop = square_crop(480, 640).unwrap();
    assert_eq!(crop, Crop { sx: 0.0, sy: 80.0, size: 480.0 });
}

#[test]
fn odd_difference_keeps_half_pixel_offset() {
    let crop = square_crop(481, 480).unwrap();
    assert!((crop.sx - 0.5).abs() < f64::EPSILON);
}

#[test]
fn zero_sized_video_has_no_plan() {
    assert!(square_crop(0, 480).is_none());
    assert!(plan(640, 0).is_none());
}

#[test]
fn plan_outputs_fixed_square() {
    let p = plan(1280, 720).unwrap();
    assert_eq!(p.output, 400);
    assert!((p.crop.size - 720.0).abs() < f64::EPSILON);
}

#[test]
fn plan_mirrors_horizontally() {
    let p = plan(480, 480).unwrap();
    assert!((map_x(&p, 0.0) - 400.0).abs() < 1e-9);
    assert!((map_x(&p, 480.0)).abs() < 1e-9);
    assert!((map_x(&p, 240.0) - 200.0).abs() < 1e-9);
}
