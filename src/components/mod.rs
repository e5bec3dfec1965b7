use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod dock;
pub mod launcher;
pub mod placeholders;

pub use dock::{Dock, DockHit};
pub use launcher::{LauncherHit, LauncherOverlay};
pub use placeholders::PlaceholderApp;

pub use crate::component_context::ComponentContext;

pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);
}
