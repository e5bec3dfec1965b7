//! Shared crate-wide constants.
//!
//! All geometry is expressed in canvas units. The terminal presentation maps
//! cells onto these units through [`crate::layout::CanvasScale`].

use crate::window::{Offset, Size};

/// Size given to every freshly opened window and restored by `Snap::None`.
pub const DEFAULT_WINDOW_SIZE: Size = Size {
    width: 420.0,
    height: 320.0,
};

/// Band reserved at the bottom of the canvas for the dock.
pub const DOCK_HEIGHT: f64 = 80.0;

/// Gap kept above and below half-screen snaps.
pub const VERTICAL_PADDING: f64 = 4.0;

/// Horizontal inset of the left snap and the gutter trimmed from the right snap.
pub const SNAP_GUTTER: f64 = 4.0;

/// Share of the canvas width covered by a half-screen snap.
pub const SNAP_HALF_RATIO: f64 = 0.48;

/// Origin of the right snap as a share of the canvas width.
pub const SNAP_RIGHT_ORIGIN_RATIO: f64 = 0.52;

/// Half-screen snaps never get shorter than this.
pub const MIN_SNAP_HEIGHT: f64 = 200.0;

/// Distance from a canvas edge, as a share of canvas width, that triggers an
/// automatic snap when a drag ends.
pub const SNAP_EDGE_RATIO: f64 = 0.2;

/// Share of a window that may hang off the top or left canvas edge.
pub const MAX_OVERHANG_RATIO: f64 = 0.6;

/// Strip that stays reachable when a window is pushed towards the right edge.
pub const MIN_VISIBLE_RIGHT: f64 = 60.0;

/// Strip that stays reachable above the dock.
pub const MIN_VISIBLE_BOTTOM: f64 = 40.0;

/// Vertical bias of the centered placement within the free space.
pub const CENTER_VERTICAL_BIAS: f64 = 0.35;

/// Centered placement may start slightly above the canvas.
pub const CENTER_MIN_Y: f64 = -12.0;

/// Offsets of the two windows opened on an empty first-run desktop.
pub const BOOT_OFFSETS: [Offset; 2] = [Offset { x: 32.0, y: 48.0 }, Offset { x: 96.0, y: 96.0 }];
