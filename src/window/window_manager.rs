use super::{Offset, Size, Snap, Window, WindowId};
use crate::constants::{BOOT_OFFSETS, DEFAULT_WINDOW_SIZE};
use crate::layout::floating::{centered_offset, clamp_offset, edge_snap, snap_frame};
use crate::modules::{ModuleDescriptor, catalog, find_module};

/// Immutable copy of the store, handed to renderers between mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopSnapshot {
    pub windows: Vec<Window>,
    pub launcher_open: bool,
}

impl DesktopSnapshot {
    pub fn focused(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.focused).map(|w| w.id)
    }
}

/// Owns every open window and the launcher flag.
///
/// All mutations go through `&mut self` methods and are total: an id that
/// does not match any window is ignored rather than reported. Geometry
/// commands take the canvas size explicitly; the store keeps no notion of
/// the screen of its own.
#[derive(Debug, Clone)]
pub struct WindowManager {
    // insertion order; stacking is decided by `Window::z_index`
    windows: Vec<Window>,
    next_z: u64,
    next_window_seq: u64,
    launcher_open: bool,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            next_z: 1,
            next_window_seq: 1,
            launcher_open: false,
        }
    }

    fn index_of(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn take_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z = z.saturating_add(1);
        z
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.focused).map(|w| w.id)
    }

    /// Windows from bottom to top.
    pub fn draw_order(&self) -> Vec<&Window> {
        let mut order: Vec<&Window> = self.windows.iter().collect();
        order.sort_by_key(|w| w.z_index);
        order
    }

    /// Topmost window whose frame contains `point`.
    pub fn topmost_at(&self, point: Offset) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| w.contains(point))
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    pub fn launcher_open(&self) -> bool {
        self.launcher_open
    }

    pub fn snapshot(&self) -> DesktopSnapshot {
        DesktopSnapshot {
            windows: self.windows.clone(),
            launcher_open: self.launcher_open,
        }
    }

    /// Open a window for `module`, focused and on top of everything else.
    ///
    /// Without an explicit offset the window is centered on the canvas.
    pub fn open(
        &mut self,
        module: &'static ModuleDescriptor,
        canvas: Size,
        offset: Option<Offset>,
    ) -> WindowId {
        let size = DEFAULT_WINDOW_SIZE;
        let offset = offset.unwrap_or_else(|| centered_offset(size, canvas));
        let id = WindowId::from_seq(self.next_window_seq);
        self.next_window_seq = self.next_window_seq.saturating_add(1);
        let z = self.take_z();
        for window in &mut self.windows {
            window.focused = false;
        }
        self.windows.push(Window::new(id, module, offset, size, z));
        tracing::debug!(window_id = %id, module = module.id, z, "opened window");
        id
    }

    pub fn open_by_id(
        &mut self,
        module_id: &str,
        canvas: Size,
        offset: Option<Offset>,
    ) -> Option<WindowId> {
        let Some(module) = find_module(module_id) else {
            tracing::debug!(module = module_id, "ignoring open for unknown module");
            return None;
        };
        Some(self.open(module, canvas, offset))
    }

    /// Remove a window. Focus is not handed to another window.
    pub fn close(&mut self, id: WindowId) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        self.windows.remove(idx);
        tracing::debug!(window_id = %id, "closed window");
    }

    /// Seed an empty desktop with the first two catalog modules.
    pub fn boot_if_needed(&mut self, canvas: Size) {
        if !self.windows.is_empty() {
            return;
        }
        for (module, offset) in catalog().iter().zip(BOOT_OFFSETS) {
            self.open(module, canvas, Some(offset));
        }
    }

    pub fn focus(&mut self, id: WindowId) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        for window in &mut self.windows {
            window.focused = false;
        }
        let z = self.take_z();
        let window = &mut self.windows[idx];
        window.focused = true;
        window.z_index = z;
        tracing::debug!(window_id = %id, z, "focused window");
    }

    /// Live drag preview. Unclamped; leaving a preset un-snaps the window.
    pub fn update_offset(&mut self, id: WindowId, offset: Offset) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let window = &mut self.windows[idx];
        window.offset = offset;
        window.snap = Snap::None;
    }

    /// Commit a drag: clamp, then snap to a half when released near an edge.
    pub fn end_drag(&mut self, id: WindowId, canvas: Size) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let window = &mut self.windows[idx];
        let clamped = clamp_offset(window.offset, window.size, canvas);
        window.offset = clamped;
        let size = window.size;
        match edge_snap(clamped, size, canvas) {
            Some(snap) => self.snap(id, snap, canvas),
            None => tracing::debug!(window_id = %id, x = clamped.x, y = clamped.y, "drag ended"),
        }
    }

    /// Apply a layout preset and bring the window to front.
    pub fn snap(&mut self, id: WindowId, snap: Snap, canvas: Size) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        self.apply_preset(idx, snap, canvas);
        tracing::debug!(window_id = %id, %snap, "snapped window");
        self.focus(id);
    }

    pub fn toggle_maximize(&mut self, id: WindowId, canvas: Size) {
        let Some(window) = self.window(id) else {
            return;
        };
        let next = if window.snap == Snap::Maximized {
            Snap::None
        } else {
            Snap::Maximized
        };
        self.snap(id, next, canvas);
    }

    fn apply_preset(&mut self, idx: usize, snap: Snap, canvas: Size) {
        let window = &mut self.windows[idx];
        let (offset, size) = snap_frame(snap, window.offset, canvas);
        window.size = size;
        window.offset = clamp_offset(offset, size, canvas);
        window.snap = snap;
    }

    /// Re-fit every window to a new canvas.
    ///
    /// Snapped windows get their preset recomputed, free windows are
    /// re-clamped. Focus and stacking are untouched.
    pub fn resize_canvas(&mut self, canvas: Size) {
        if canvas.is_empty() {
            return;
        }
        for idx in 0..self.windows.len() {
            match self.windows[idx].snap {
                Snap::None => {
                    let window = &mut self.windows[idx];
                    window.offset = clamp_offset(window.offset, window.size, canvas);
                }
                snap => self.apply_preset(idx, snap, canvas),
            }
        }
        tracing::trace!(
            width = canvas.width,
            height = canvas.height,
            "canvas resized"
        );
    }

    pub fn toggle_launcher(&mut self) {
        self.launcher_open = !self.launcher_open;
    }

    pub fn dismiss_launcher(&mut self) {
        self.launcher_open = false;
    }

    /// Open a module from the launcher and close the launcher with it.
    pub fn launch(&mut self, module_id: &str, canvas: Size) -> Option<WindowId> {
        let id = self.open_by_id(module_id, canvas, None);
        self.launcher_open = false;
        id
    }
}
