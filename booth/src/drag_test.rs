use super::*;
use crate::photo::ImageRef;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn card() -> Card {
    Card::new(ImageRef::from_src("data:image/jpeg;base64,AAAA".into()), "2026-10-19T10:00:00.000Z".into(), "2026/10/19".into())
}

fn desk_card(at: Point) -> Card {
    let mut c = card();
    c.placement = Placement::Desk;
    c.position = at;
    c
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

/// Minimal draggable used to exercise the controller without a card.
#[derive(Default)]
struct Probe {
    pos: Point,
    rotation: f64,
    scale: f64,
    slotted: bool,
    lifts: u32,
    drops: u32,
}

impl Draggable for Probe {
    fn position(&self) -> Point {
        self.pos
    }
    fn set_position(&mut self, position: Point) {
        self.pos = position;
    }
    fn set_pose(&mut self, rotation: f64, scale: f64) {
        self.rotation = rotation;
        self.scale = scale;
    }
    fn in_slot(&self) -> bool {
        self.slotted
    }
    fn leave_slot(&mut self, at: Point) {
        self.slotted = false;
        self.pos = at;
    }
    fn on_lift(&mut self) {
        self.lifts += 1;
    }
    fn on_drop(&mut self) {
        self.drops += 1;
    }
}

// =============================================================
// Region
// =============================================================

#[test]
fn only_body_starts_drag() {
    assert!(Region::Body.starts_drag());
    for region in [Region::Caption, Region::ShareButton, Region::EmailButton, Region::FlipButton] {
        assert!(!region.starts_drag(), "{region:?} must not start a drag");
    }
}

#[test]
fn excluded_selectors_cover_every_non_body_region() {
    let regions: Vec<Region> = EXCLUDED_SELECTORS.iter().map(|(_, r)| *r).collect();
    assert!(!regions.contains(&Region::Body));
    assert_eq!(regions.len(), 4);
}

// =============================================================
// Controller
// =============================================================

#[test]
fn generic_target_follows_net_pointer_delta() {
    let mut probe = Probe { pos: Point::new(100.0, 50.0), ..Probe::default() };
    let mut drag = DragController::new();
    assert!(drag.pointer_down(&mut probe, Region::Body, Point::new(10.0, 10.0), Rect::default()));
    drag.pointer_move(&mut probe, Point::new(40.0, 0.0));
    drag.pointer_move(&mut probe, Point::new(25.0, 35.0));
    assert_eq!(probe.pos, Point::new(115.0, 75.0));
    assert!(drag.pointer_up(&mut probe, &mut rng()).is_some());
    assert_eq!(probe.pos, Point::new(115.0, 75.0));
    assert_eq!((probe.lifts, probe.drops), (1, 1));
    assert_eq!(drag.state(), DragState::Idle);
}

#[test]
fn excluded_regions_never_move_the_target() {
    for region in [Region::Caption, Region::ShareButton, Region::EmailButton, Region::FlipButton] {
        let mut c = desk_card(Point::new(200.0, 120.0));
        assert!(!c.pointer_down(region, Point::new(0.0, 0.0), Rect::default()));
        assert!(!c.pointer_move(Point::new(80.0, 90.0)));
        assert!(c.pointer_up(&mut rng()).is_none());
        assert_eq!(c.position, Point::new(200.0, 120.0));
        assert!(!c.lifted);
        assert!(!c.can_share);
    }
}

#[test]
fn move_without_down_is_ignored() {
    let mut c = desk_card(Point::new(5.0, 5.0));
    assert!(!c.pointer_move(Point::new(100.0, 100.0)));
    assert_eq!(c.position, Point::new(5.0, 5.0));
}

#[test]
fn second_pointer_down_while_dragging_is_ignored() {
    let mut c = desk_card(Point::new(0.0, 0.0));
    assert!(c.pointer_down(Region::Body, Point::new(10.0, 10.0), Rect::default()));
    assert!(!c.pointer_down(Region::Body, Point::new(500.0, 500.0), Rect::default()));
    c.pointer_move(Point::new(20.0, 30.0));
    assert_eq!(c.position, Point::new(10.0, 20.0));
}

#[test]
fn first_drag_from_slot_reparents_at_bounding_box() {
    let mut c = card();
    c.rotation = 3.0;
    let bounds = Rect::new(320.0, 540.0, 220.0, 260.0);
    assert!(c.pointer_down(Region::Body, Point::new(400.0, 600.0), bounds));
    assert_eq!(c.placement, Placement::Desk);
    assert_eq!(c.position, Point::new(320.0, 540.0));
    assert!((c.rotation).abs() < f64::EPSILON);

    c.pointer_move(Point::new(350.0, 500.0));
    assert_eq!(c.position, Point::new(270.0, 440.0));
}

#[test]
fn desk_card_ignores_bounds_on_pointer_down() {
    let mut c = desk_card(Point::new(10.0, 20.0));
    c.pointer_down(Region::Body, Point::new(0.0, 0.0), Rect::new(999.0, 999.0, 1.0, 1.0));
    assert_eq!(c.position, Point::new(10.0, 20.0));
}

#[test]
fn tilt_is_linear_then_clamped() {
    assert!((tilt_for(0.0)).abs() < f64::EPSILON);
    assert!((tilt_for(30.0) - 3.0).abs() < 1e-9);
    assert!((tilt_for(-50.0) + 5.0).abs() < 1e-9);
    assert!((tilt_for(500.0) - MAX_TILT_DEG).abs() < f64::EPSILON);
    assert!((tilt_for(-500.0) + MAX_TILT_DEG).abs() < f64::EPSILON);
}

#[test]
fn moving_lifts_scale_and_tilt_within_clamp() {
    let mut c = desk_card(Point::new(0.0, 0.0));
    c.pointer_down(Region::Body, Point::new(0.0, 0.0), Rect::default());
    for dx in [-1000.0, -80.0, -3.0, 0.0, 12.0, 79.0, 81.0, 4000.0] {
        c.pointer_move(Point::new(dx, 0.0));
        assert!(c.rotation.abs() <= MAX_TILT_DEG);
        assert!((c.scale - LIFT_SCALE).abs() < f64::EPSILON);
    }
}

#[test]
fn release_settles_within_bounds_and_resets_scale() {
    let mut r = rng();
    for _ in 0..200 {
        let mut c = desk_card(Point::new(0.0, 0.0));
        c.pointer_down(Region::Body, Point::new(0.0, 0.0), Rect::default());
        c.pointer_move(Point::new(300.0, 0.0));
        let rotation = c.pointer_up(&mut r).unwrap();
        assert!((-SETTLE_ROTATION_DEG..=SETTLE_ROTATION_DEG).contains(&rotation));
        assert!((c.rotation - rotation).abs() < f64::EPSILON);
        assert!((c.scale - 1.0).abs() < f64::EPSILON);
        assert!(!c.lifted);
        assert!(c.can_share);
        assert!(c.settling);
    }
}

#[test]
fn settle_rotation_has_one_decimal() {
    let mut r = rng();
    for _ in 0..100 {
        let v = settle_rotation(&mut r);
        assert!(((v * 10.0).round() - v * 10.0).abs() < 1e-9);
    }
}

#[test]
fn grabbing_a_slow_developing_card_speeds_it_up() {
    let mut c = desk_card(Point::new(0.0, 0.0));
    c.begin_developing();
    assert_eq!(c.developing, Developing::Slow);
    c.pointer_down(Region::Body, Point::new(0.0, 0.0), Rect::default());
    assert_eq!(c.developing, Developing::Fast);
    assert!(c.lifted);
}

#[test]
fn grabbing_before_developing_starts_leaves_phase() {
    let mut c = desk_card(Point::new(0.0, 0.0));
    c.pointer_down(Region::Body, Point::new(0.0, 0.0), Rect::default());
    assert_eq!(c.developing, Developing::Start);
}
