//! Geometry for floating desktop windows: placement, clamping and the snap
//! presets. Everything here is pure and works in canvas units.

use crate::constants::{
    CENTER_MIN_Y, CENTER_VERTICAL_BIAS, DEFAULT_WINDOW_SIZE, DOCK_HEIGHT, MAX_OVERHANG_RATIO,
    MIN_SNAP_HEIGHT, MIN_VISIBLE_BOTTOM, MIN_VISIBLE_RIGHT, SNAP_EDGE_RATIO, SNAP_GUTTER,
    SNAP_HALF_RATIO, SNAP_RIGHT_ORIGIN_RATIO, VERTICAL_PADDING,
};
use crate::window::{Offset, Size, Snap};

/// Inclusive range an offset may occupy for a given window size and canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl ClampBounds {
    pub fn for_window(size: Size, canvas: Size) -> Self {
        Self {
            min_x: -size.width * MAX_OVERHANG_RATIO,
            max_x: canvas.width - MIN_VISIBLE_RIGHT,
            min_y: -size.height * MAX_OVERHANG_RATIO,
            max_y: canvas.height - DOCK_HEIGHT - MIN_VISIBLE_BOTTOM,
        }
    }

    pub fn contains(&self, offset: Offset) -> bool {
        offset.x >= self.min_x
            && offset.x <= self.max_x
            && offset.y >= self.min_y
            && offset.y <= self.max_y
    }
}

// Upper bound wins when the range collapses; `f64::clamp` would panic there.
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Bound `proposed` so at least a grab strip of the window stays on canvas.
pub fn clamp_offset(proposed: Offset, size: Size, canvas: Size) -> Offset {
    let bounds = ClampBounds::for_window(size, canvas);
    Offset {
        x: clamp_axis(proposed.x, bounds.min_x, bounds.max_x),
        y: clamp_axis(proposed.y, bounds.min_y, bounds.max_y),
    }
}

/// Horizontally centered, vertically biased towards the upper middle of the
/// space left above the dock.
pub fn centered_offset(size: Size, canvas: Size) -> Offset {
    let x = ((canvas.width - size.width) * 0.5).max(0.0);
    let y = ((canvas.height - size.height - DOCK_HEIGHT) * CENTER_VERTICAL_BIAS).max(CENTER_MIN_Y);
    Offset { x, y }
}

/// Frame produced by a snap preset before clamping.
///
/// `Snap::None` keeps `current` and only restores the default size.
pub fn snap_frame(snap: Snap, current: Offset, canvas: Size) -> (Offset, Size) {
    let usable_height =
        (canvas.height - DOCK_HEIGHT - VERTICAL_PADDING * 2.0).max(MIN_SNAP_HEIGHT);
    match snap {
        Snap::Left => (
            Offset::new(SNAP_GUTTER, VERTICAL_PADDING),
            Size::new(canvas.width * SNAP_HALF_RATIO, usable_height),
        ),
        Snap::Right => (
            Offset::new(canvas.width * SNAP_RIGHT_ORIGIN_RATIO, VERTICAL_PADDING),
            Size::new(canvas.width * SNAP_HALF_RATIO - SNAP_GUTTER, usable_height),
        ),
        Snap::Maximized => (
            Offset::new(0.0, 0.0),
            Size::new(canvas.width, canvas.height - DOCK_HEIGHT - VERTICAL_PADDING),
        ),
        Snap::None => (current, DEFAULT_WINDOW_SIZE),
    }
}

/// Half-screen snap implied by where a drag came to rest, if any.
///
/// The left edge is checked first, so a window that is close to both edges
/// snaps left.
pub fn edge_snap(offset: Offset, size: Size, canvas: Size) -> Option<Snap> {
    let threshold = canvas.width * SNAP_EDGE_RATIO;
    if offset.x < threshold {
        Some(Snap::Left)
    } else if offset.x + size.width > canvas.width - threshold {
        Some(Snap::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Size = Size {
        width: 1000.0,
        height: 800.0,
    };

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn clamp_keeps_in_range_offsets() {
        let size = Size::new(420.0, 320.0);
        let got = clamp_offset(Offset::new(100.0, 50.0), size, CANVAS);
        assert_eq!(got, Offset::new(100.0, 50.0));
    }

    #[test]
    fn clamp_limits_overhang_on_every_side() {
        let size = Size::new(400.0, 300.0);
        let far_left = clamp_offset(Offset::new(-10_000.0, -10_000.0), size, CANVAS);
        assert!(approx(far_left.x, -240.0));
        assert!(approx(far_left.y, -180.0));

        let far_right = clamp_offset(Offset::new(10_000.0, 10_000.0), size, CANVAS);
        assert!(approx(far_right.x, 940.0));
        assert!(approx(far_right.y, 680.0));
    }

    #[test]
    fn clamp_prefers_upper_bound_on_tiny_canvas() {
        let size = Size::new(420.0, 320.0);
        let canvas = Size::new(10.0, 10.0);
        let got = clamp_offset(Offset::new(500.0, 500.0), size, canvas);
        assert!(approx(got.x, -50.0));
        assert!(approx(got.y, -110.0));
    }

    #[test]
    fn centered_offset_biases_upwards() {
        let got = centered_offset(DEFAULT_WINDOW_SIZE, CANVAS);
        assert!(approx(got.x, 290.0));
        assert!(approx(got.y, (800.0 - 320.0 - 80.0) * 0.35));
    }

    #[test]
    fn centered_offset_floors_on_small_canvas() {
        let got = centered_offset(DEFAULT_WINDOW_SIZE, Size::new(200.0, 300.0));
        assert_eq!(got.x, 0.0);
        assert_eq!(got.y, -12.0);
    }

    #[test]
    fn half_snaps_match_reference_canvas() {
        let (left_at, left_size) = snap_frame(Snap::Left, Offset::default(), CANVAS);
        assert_eq!(left_at, Offset::new(4.0, 4.0));
        assert!(approx(left_size.width, 480.0));
        assert!(approx(left_size.height, 712.0));

        let (right_at, right_size) = snap_frame(Snap::Right, Offset::default(), CANVAS);
        assert!(approx(right_at.x, 520.0));
        assert!(approx(right_at.y, 4.0));
        assert!(approx(right_size.width, 476.0));
        assert!(approx(right_size.height, 712.0));
    }

    #[test]
    fn half_snap_height_has_floor() {
        let (_, size) = snap_frame(Snap::Left, Offset::default(), Size::new(600.0, 200.0));
        assert_eq!(size.height, 200.0);
    }

    #[test]
    fn maximized_fills_canvas_above_dock() {
        let (at, size) = snap_frame(Snap::Maximized, Offset::new(30.0, 30.0), CANVAS);
        assert_eq!(at, Offset::new(0.0, 0.0));
        assert_eq!(size, Size::new(1000.0, 716.0));
    }

    #[test]
    fn snap_none_keeps_offset_and_restores_default_size() {
        let (at, size) = snap_frame(Snap::None, Offset::new(12.0, 34.0), CANVAS);
        assert_eq!(at, Offset::new(12.0, 34.0));
        assert_eq!(size, DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn edge_snap_prefers_left_when_both_edges_qualify() {
        let wide = Size::new(990.0, 300.0);
        assert_eq!(
            edge_snap(Offset::new(5.0, 0.0), wide, CANVAS),
            Some(Snap::Left)
        );
    }

    #[test]
    fn edge_snap_detects_right_edge_and_free_placement() {
        let size = Size::new(420.0, 320.0);
        assert_eq!(
            edge_snap(Offset::new(500.0, 0.0), size, CANVAS),
            Some(Snap::Right)
        );
        assert_eq!(edge_snap(Offset::new(300.0, 0.0), size, CANVAS), None);
        assert_eq!(
            edge_snap(Offset::new(150.0, 0.0), size, CANVAS),
            Some(Snap::Left)
        );
    }

    #[test]
    fn clamp_bounds_contains_clamped_result() {
        let size = Size::new(420.0, 320.0);
        for proposed in [
            Offset::new(-900.0, 20.0),
            Offset::new(2000.0, -900.0),
            Offset::new(400.0, 900.0),
        ] {
            let clamped = clamp_offset(proposed, size, CANVAS);
            assert!(ClampBounds::for_window(size, CANVAS).contains(clamped));
        }
    }
}
