pub mod decorator;

mod window_manager;

use std::fmt;

use crate::modules::ModuleDescriptor;

/// Signed position relative to the canvas origin, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Width and height in canvas units. Also used for the canvas itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Layout preset last applied to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Snap {
    #[default]
    None,
    Left,
    Right,
    Maximized,
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Snap::None => "none",
            Snap::Left => "left",
            Snap::Right => "right",
            Snap::Maximized => "maximized",
        };
        write!(f, "{}", s)
    }
}

/// Opaque window identifier, unique for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub(crate) const fn from_seq(seq: u64) -> Self {
        Self(seq)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub use window_manager::{DesktopSnapshot, WindowManager};

/// A running instance of a catalog module.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    id: WindowId,
    module: &'static ModuleDescriptor,
    offset: Offset,
    size: Size,
    z_index: u64,
    focused: bool,
    snap: Snap,
}

impl Window {
    fn new(
        id: WindowId,
        module: &'static ModuleDescriptor,
        offset: Offset,
        size: Size,
        z_index: u64,
    ) -> Self {
        Self {
            id,
            module,
            offset,
            size,
            z_index,
            focused: true,
            snap: Snap::None,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn module(&self) -> &'static ModuleDescriptor {
        self.module
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn snap(&self) -> Snap {
        self.snap
    }

    /// Whether `point` (canvas units) falls inside the window frame.
    pub fn contains(&self, point: Offset) -> bool {
        point.x >= self.offset.x
            && point.x < self.offset.x + self.size.width
            && point.y >= self.offset.y
            && point.y < self.offset.y + self.size.height
    }
}
