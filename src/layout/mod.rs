pub mod floating;

use ratatui::prelude::Rect;

use crate::constants::DOCK_HEIGHT;
use crate::window::{Offset, Size};

const MAX_CELL_OFFSET: f64 = 1_000_000.0;

/// Signed cell rectangle; the origin may sit left of or above the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    /// Portion of the rectangle that lands inside `bounds`.
    pub fn visible(&self, bounds: Rect) -> Rect {
        let left = self.x.max(bounds.x as i32);
        let top = self.y.max(bounds.y as i32);
        let right = self.right().min(bounds.x as i32 + bounds.width as i32);
        let bottom = self.bottom().min(bounds.y as i32 + bounds.height as i32);
        if right <= left || bottom <= top {
            return Rect::default();
        }
        Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let (column, row) = (column as i32, row as i32);
        self.width > 0
            && self.height > 0
            && column >= self.x
            && column < self.right()
            && row >= self.y
            && row < self.bottom()
    }
}

/// Maps terminal cells onto canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasScale {
    cell_width: f64,
    cell_height: f64,
}

impl Default for CanvasScale {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

impl CanvasScale {
    /// Returns `None` unless both factors are finite and positive.
    pub fn new(cell_width: f64, cell_height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(cell_width) && valid(cell_height)).then_some(Self {
            cell_width,
            cell_height,
        })
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    pub fn canvas_for(&self, area: Rect) -> Size {
        Size::new(
            area.width as f64 * self.cell_width,
            area.height as f64 * self.cell_height,
        )
    }

    /// Canvas point at the center of a cell, relative to `origin`.
    pub fn point_at(&self, origin: Rect, column: u16, row: u16) -> Offset {
        Offset::new(
            (column as f64 - origin.x as f64 + 0.5) * self.cell_width,
            (row as f64 - origin.y as f64 + 0.5) * self.cell_height,
        )
    }

    /// Canvas distance covered by a pointer move between two cells.
    pub fn delta(&self, from: (u16, u16), to: (u16, u16)) -> (f64, f64) {
        (
            (to.0 as f64 - from.0 as f64) * self.cell_width,
            (to.1 as f64 - from.1 as f64) * self.cell_height,
        )
    }

    /// Cell rectangle for a window frame. Offsets far off screen are pinned
    /// to `MAX_CELL_OFFSET` so later edge arithmetic cannot overflow.
    pub fn to_cells(&self, origin: Rect, offset: Offset, size: Size) -> CellRect {
        let max = u16::MAX as f64;
        let cells = |units: f64, per_cell: f64| {
            (units / per_cell)
                .round()
                .clamp(-MAX_CELL_OFFSET, MAX_CELL_OFFSET) as i32
        };
        CellRect {
            x: origin.x as i32 + cells(offset.x, self.cell_width),
            y: origin.y as i32 + cells(offset.y, self.cell_height),
            width: (size.width / self.cell_width).round().clamp(1.0, max) as u16,
            height: (size.height / self.cell_height).round().clamp(1.0, max) as u16,
        }
    }

    /// Rows occupied by the dock band.
    pub fn dock_rows(&self) -> u16 {
        (DOCK_HEIGHT / self.cell_height).round().clamp(1.0, u16::MAX as f64) as u16
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}
