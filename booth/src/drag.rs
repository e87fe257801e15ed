//! Pointer-drag state machine.
//!
//! `DragController` turns a pointer-down / move / up sequence into absolute
//! positions for anything implementing [`Draggable`]. It tracks only what it
//! needs between events: the pointer position and the element position at
//! the moment the drag began. Every move recomputes the position from that
//! anchor, so rounding never accumulates.
//!
//! Pointer-downs that land on an interactive child (caption, buttons, flip
//! control) never start a drag; the host reports where the press landed as a
//! [`Region`].

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use rand::Rng;

use crate::card::{Card, Developing, Placement};
use crate::consts::{LIFT_SCALE, MAX_TILT_DEG, SETTLE_ROTATION_DEG, TILT_PER_PX};
use crate::geom::{Point, Rect};

/// Part of a card a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Photo, frame, or date label. Starts a drag.
    Body,
    /// Editable caption text.
    Caption,
    /// Add-to-gallery button.
    ShareButton,
    /// Send-by-email button.
    EmailButton,
    /// Front/back flip control.
    FlipButton,
}

impl Region {
    /// Whether a press here may start a drag.
    #[must_use]
    pub fn starts_drag(self) -> bool {
        self == Self::Body
    }
}

/// Selectors of the child elements that never start a drag.
pub const EXCLUDED_SELECTORS: [(&str, Region); 4] = [
    (".caption-main", Region::Caption),
    (".polaroid-share-btn", Region::ShareButton),
    (".polaroid-email-btn", Region::EmailButton),
    (".flip-btn", Region::FlipButton),
];

/// Something the controller can move.
pub trait Draggable {
    /// Current top-left offset.
    fn position(&self) -> Point;

    /// Set the top-left offset.
    fn set_position(&mut self, position: Point);

    /// Set rotation (degrees) and scale.
    fn set_pose(&mut self, rotation: f64, scale: f64);

    /// Whether the element still sits inside the ejection slot.
    fn in_slot(&self) -> bool;

    /// Move the element out of the slot onto the free surface at `at`.
    fn leave_slot(&mut self, at: Point);

    /// Called once when a drag session begins.
    fn on_lift(&mut self) {}

    /// Called once when a drag session ends.
    fn on_drop(&mut self) {}
}

/// Drag session state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Pointer position at pointer-down.
        start_pointer: Point,
        /// Element position at pointer-down, after any slot release.
        start_position: Point,
    },
}

/// Per-element drag state machine.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Handle pointer-down. Returns `true` when a drag session began.
    ///
    /// `bounds` is the element's current on-screen box; it positions the
    /// element when it leaves the slot.
    pub fn pointer_down<T: Draggable>(&mut self, target: &mut T, region: Region, pointer: Point, bounds: Rect) -> bool {
        if !region.starts_drag() || self.is_dragging() {
            return false;
        }
        if target.in_slot() {
            target.leave_slot(bounds.origin());
            target.set_pose(0.0, 1.0);
        }
        target.on_lift();
        self.state = DragState::Dragging { start_pointer: pointer, start_position: target.position() };
        true
    }

    /// Handle pointer-move. Returns `true` when the element moved.
    pub fn pointer_move<T: Draggable>(&mut self, target: &mut T, pointer: Point) -> bool {
        let DragState::Dragging { start_pointer, start_position } = self.state else {
            return false;
        };
        let delta = pointer.delta_from(start_pointer);
        target.set_position(start_position.offset(delta));
        target.set_pose(tilt_for(delta.x), LIFT_SCALE);
        true
    }

    /// Handle pointer-up. Returns the settle rotation when a drag ended.
    pub fn pointer_up<T: Draggable, R: Rng>(&mut self, target: &mut T, rng: &mut R) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        self.state = DragState::Idle;
        let rotation = settle_rotation(rng);
        target.set_pose(rotation, 1.0);
        target.on_drop();
        Some(rotation)
    }
}

/// Tilt in degrees for a horizontal drag delta.
#[must_use]
pub fn tilt_for(dx: f64) -> f64 {
    (dx * TILT_PER_PX).clamp(-MAX_TILT_DEG, MAX_TILT_DEG)
}

/// Random settle rotation, one decimal place, within the settle bound.
pub fn settle_rotation<R: Rng>(rng: &mut R) -> f64 {
    let raw: f64 = rng.random_range(-SETTLE_ROTATION_DEG..=SETTLE_ROTATION_DEG);
    ((raw * 10.0).round() / 10.0).clamp(-SETTLE_ROTATION_DEG, SETTLE_ROTATION_DEG)
}

// =============================================================================
// CARD
// =============================================================================

impl Draggable for Card {
    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn set_pose(&mut self, rotation: f64, scale: f64) {
        self.rotation = rotation;
        self.scale = scale;
    }

    fn in_slot(&self) -> bool {
        self.placement == Placement::Slot
    }

    fn leave_slot(&mut self, at: Point) {
        self.placement = Placement::Desk;
        self.position = at;
    }

    fn on_lift(&mut self) {
        if self.developing == Developing::Slow {
            self.developing = Developing::Fast;
        }
        self.lifted = true;
        self.settling = false;
    }

    fn on_drop(&mut self) {
        self.lifted = false;
        self.can_share = true;
        self.settling = true;
    }
}

impl Card {
    /// Pointer-down on this card. Returns `true` when a drag began.
    pub fn pointer_down(&mut self, region: Region, pointer: Point, bounds: Rect) -> bool {
        let mut drag = std::mem::take(&mut self.drag);
        let started = drag.pointer_down(self, region, pointer, bounds);
        self.drag = drag;
        started
    }

    /// Pointer-move while this card may be held.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let mut drag = std::mem::take(&mut self.drag);
        let moved = drag.pointer_move(self, pointer);
        self.drag = drag;
        moved
    }

    /// Pointer-up while this card may be held.
    pub fn pointer_up<R: Rng>(&mut self, rng: &mut R) -> Option<f64> {
        let mut drag = std::mem::take(&mut self.drag);
        let settled = drag.pointer_up(self, rng);
        self.drag = drag;
        settled
    }
}
