//! core/drag.rs
//! Drag-value control: pointer drags -> normalized [0, 1] scalar.
//!
//! Shared by the seek bar, volume and balance sliders. The control never owns
//! the authoritative value; it only tracks the transient gesture:
//!
//! - Idle: the rendered value is whatever the caller supplies (so external
//!   position updates show through immediately).
//! - Dragging: the rendered value is the live pointer-derived preview; the
//!   committed value is produced exactly once, at pointer-up.
//!
//! Coordinate spaces: everything here is *skin space* (the skin's own pixel
//! grid). Pointer events arrive in physical window pixels and must be
//! converted through `ScaleFactor` before they reach this module — sprite
//! footprints are defined in skin space and are exempt from the ambient
//! scale, so converting at exactly one boundary keeps the two spaces from
//! ever mixing.

/// Ambient visual scale applied to the whole skinned surface (1x or 2x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(pub f32);

impl ScaleFactor {
    /// Physical window coordinates -> skin-space coordinates.
    pub fn to_skin(&self, x: f32, y: f32) -> (f32, f32) {
        (x / self.0, y / self.0)
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        ScaleFactor(1.0)
    }
}

/// Track geometry for one slider, in skin space.
///
/// The usable track excludes the thumb's own footprint so the thumb *center*
/// can reach both extremes without the thumb clipping off the background:
/// value 0.0 puts the center at `thumb_width / 2` from the left edge, 1.0 at
/// the same margin from the right edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    track_left: f32,
    track_width: f32,
}

impl SliderGeometry {
    /// `left`/`width` describe the full background sprite; `thumb_width` is
    /// the thumb sprite's width.
    pub fn new(left: f32, width: f32, thumb_width: f32) -> Self {
        Self {
            track_left: left + thumb_width / 2.0,
            track_width: (width - thumb_width).max(1.0),
        }
    }

    /// Thumb center for a given value.
    pub fn thumb_center_x(&self, value: f64) -> f32 {
        self.track_left + (value.clamp(0.0, 1.0) as f32) * self.track_width
    }

    /// Inverse of `thumb_center_x`, clamped to [0, 1].
    pub fn value_at(&self, x: f32) -> f64 {
        (((x - self.track_left) / self.track_width) as f64).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct DragGesture {
    live: f64,
    /// Signed distance between the pointer-down x and the thumb center, so
    /// moves track relative motion instead of snapping the thumb under the
    /// pointer.
    pointer_offset: f32,
}

/// One per slider instance. Idle -> Dragging on `begin`, back on `finish`.
#[derive(Debug, Default)]
pub struct DragController {
    gesture: Option<DragGesture>,
}

impl DragController {
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Pointer-down on the thumb. `value` is the current authoritative value
    /// (where the thumb rests right now).
    pub fn begin(&mut self, pointer_x: f32, geometry: &SliderGeometry, value: f64) {
        let pointer_offset = pointer_x - geometry.thumb_center_x(value);
        self.gesture = Some(DragGesture {
            // With the offset captured the initial live value is the resting
            // value itself; only subsequent motion changes it.
            live: geometry.value_at(pointer_x - pointer_offset),
            pointer_offset,
        });
    }

    /// Pointer-move while dragging; ignored when idle. Returns the new live
    /// value.
    pub fn update(&mut self, pointer_x: f32, geometry: &SliderGeometry) -> Option<f64> {
        let gesture = self.gesture.as_mut()?;
        gesture.live = geometry.value_at(pointer_x - gesture.pointer_offset);
        Some(gesture.live)
    }

    /// Pointer-up, anywhere. The only point at which a value is committed.
    pub fn finish(&mut self) -> Option<f64> {
        self.gesture.take().map(|gesture| gesture.live)
    }

    /// Abort without committing (e.g. the engine reported `Stopped`).
    pub fn cancel(&mut self) {
        self.gesture = None;
    }

    /// What the slider should render right now: the live preview while
    /// dragging, the caller's authoritative value otherwise.
    pub fn display_value(&self, authoritative: f64) -> f64 {
        match &self.gesture {
            Some(gesture) => gesture.live,
            None => authoritative,
        }
    }
}

/// Background variant for the volume slider: 28 graphics, 0..=27.
pub fn volume_background_index(value: f64) -> usize {
    (value.clamp(0.0, 1.0) * 27.0).round() as usize
}

/// Background variant for the balance slider (slider-space value in [0, 1]);
/// distance from center picks one of the same 28 steps.
pub fn balance_background_index(value: f64) -> usize {
    ((value.clamp(0.0, 1.0) - 0.5).abs() * 2.0 * 27.0).round() as usize
}

/// Balance [-1, 1] -> slider space [0, 1].
pub fn balance_to_slider(balance: f64) -> f64 {
    balance * 0.5 + 0.5
}

/// Slider space [0, 1] -> balance [-1, 1], with a dead zone around center so
/// near-center commits settle at exactly 0.
pub fn slider_to_balance(value: f64) -> f64 {
    let normalized = value * 2.0 - 1.0;
    if normalized.abs() < 0.2 { 0.0 } else { normalized }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn geometry() -> SliderGeometry {
        // Background sprite from x=16, 248 wide; thumb 29 wide (the classic
        // position bar).
        SliderGeometry::new(16.0, 248.0, 29.0)
    }

    #[test]
    fn drag_from_resting_thumb_to_track_edges_commits_exact_extremes() {
        let geometry = geometry();

        let mut drag = DragController::default();
        drag.begin(geometry.thumb_center_x(0.5), &geometry, 0.5);
        drag.update(geometry.thumb_center_x(1.0), &geometry);
        assert!((drag.finish().unwrap() - 1.0).abs() < EPS);

        let mut drag = DragController::default();
        drag.begin(geometry.thumb_center_x(0.5), &geometry, 0.5);
        drag.update(geometry.thumb_center_x(0.0), &geometry);
        assert!(drag.finish().unwrap().abs() < EPS);
    }

    #[test]
    fn pointer_offset_tracks_relative_motion() {
        let geometry = geometry();
        let mut drag = DragController::default();

        // Grab the thumb 5px right of its center; the live value must not
        // jump at pointer-down.
        let grab = geometry.thumb_center_x(0.5) + 5.0;
        drag.begin(grab, &geometry, 0.5);
        assert!((drag.display_value(0.5) - 0.5).abs() < EPS);

        // Moving 10px right moves the value by 10px worth of track, the
        // grab offset staying constant.
        let live = drag.update(grab + 10.0, &geometry).unwrap();
        let expected = geometry.value_at(geometry.thumb_center_x(0.5) + 10.0);
        assert!((live - expected).abs() < EPS);
    }

    #[test]
    fn short_drags_settle_at_the_clamped_pointer_value_not_a_step() {
        let geometry = geometry();
        let mut drag = DragController::default();

        drag.begin(geometry.thumb_center_x(0.3), &geometry, 0.3);
        drag.update(geometry.thumb_center_x(0.3) + 7.0, &geometry);
        let committed = drag.finish().unwrap();

        let expected = geometry.value_at(geometry.thumb_center_x(0.3) + 7.0);
        assert!((committed - expected).abs() < EPS);
    }

    #[test]
    fn moves_beyond_the_track_clamp_to_01() {
        let geometry = geometry();
        let mut drag = DragController::default();
        drag.begin(geometry.thumb_center_x(0.9), &geometry, 0.9);

        assert_eq!(drag.update(10_000.0, &geometry), Some(1.0));
        assert_eq!(drag.update(-10_000.0, &geometry), Some(0.0));
    }

    #[test]
    fn display_value_switches_between_live_and_authoritative() {
        let geometry = geometry();
        let mut drag = DragController::default();

        assert_eq!(drag.display_value(0.25), 0.25);

        drag.begin(geometry.thumb_center_x(0.25), &geometry, 0.25);
        drag.update(geometry.thumb_center_x(1.0), &geometry);
        // External value changes are masked while dragging...
        assert!((drag.display_value(0.4) - 1.0).abs() < EPS);

        // ...and show through again once the gesture ends.
        drag.finish();
        assert_eq!(drag.display_value(0.4), 0.4);
    }

    #[test]
    fn finish_commits_exactly_once() {
        let geometry = geometry();
        let mut drag = DragController::default();
        drag.begin(geometry.thumb_center_x(0.0), &geometry, 0.0);
        assert!(drag.finish().is_some());
        assert!(drag.finish().is_none());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn scale_factor_maps_physical_to_skin_space() {
        let scale = ScaleFactor(2.0);
        assert_eq!(scale.to_skin(100.0, 50.0), (50.0, 25.0));
    }

    #[test]
    fn volume_selector_spans_28_steps() {
        assert_eq!(volume_background_index(0.0), 0);
        assert_eq!(volume_background_index(1.0), 27);
        assert_eq!(volume_background_index(0.5), 14);
    }

    #[test]
    fn balance_dead_zone_snaps_to_center() {
        assert_eq!(slider_to_balance(0.55), 0.0);
        assert_eq!(slider_to_balance(0.5), 0.0);
        assert!(slider_to_balance(0.95) > 0.0);
        assert!(slider_to_balance(0.05) < 0.0);
        // Round trip for values outside the dead zone.
        let b = slider_to_balance(balance_to_slider(0.8));
        assert!((b - 0.8).abs() < EPS);
    }

    #[test]
    fn balance_selector_measures_distance_from_center() {
        assert_eq!(balance_background_index(0.5), 0);
        assert_eq!(balance_background_index(0.0), 27);
        assert_eq!(balance_background_index(1.0), 27);
    }
}
