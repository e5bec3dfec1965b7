//! Shared component rendering context
//!
//! `ComponentContext` carries UI metadata that components may need during
//! rendering and event handling, so the component trait stays stable as new
//! flags appear.

use ratatui::style::Color;

/// Context passed to `Component` trait methods describing UI state.
///
/// - `focused`: whether the owning window currently has focus.
/// - `accent`: accent color of the module being drawn.
#[derive(Debug, Clone, Copy)]
pub struct ComponentContext {
    focused: bool,
    accent: Color,
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self {
            focused,
            accent: Color::Reset,
        }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn accent(&self) -> Color {
        self.accent
    }

    pub const fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

impl Default for ComponentContext {
    fn default() -> Self {
        Self::new(false)
    }
}
