//! The interactive desktop: turns terminal events into window manager calls
//! and draws the result.
//!
//! The shell owns no window state of its own beyond the gesture in progress.
//! Every frame is rebuilt from the `WindowManager`, and hit testing uses the
//! same cell layout the renderer draws, so what the pointer lands on is always
//! what is on screen.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::components::{
    Component, ComponentContext, Dock, DockHit, LauncherHit, LauncherOverlay, PlaceholderApp,
};
use crate::config::ShellConfig;
use crate::event_loop::ControlFlow;
use crate::layout::{CanvasScale, CellRect, rect_contains};
use crate::theme;
use crate::ui::UiFrame;
use crate::window::decorator::{ChromeState, DeskDecorator, HeaderAction, WindowDecorator};
use crate::window::{Offset, Size, Snap, WindowId, WindowManager};

/// A header drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragGesture {
    id: WindowId,
    start: (u16, u16),
    origin: Offset,
}

#[derive(Debug)]
pub struct DesktopShell {
    wm: WindowManager,
    scale: CanvasScale,
    boot: bool,
    booted: bool,
    area: Rect,
    decorator: Box<dyn WindowDecorator>,
    dock: Dock,
    launcher: LauncherOverlay,
    drag: Option<DragGesture>,
}

impl DesktopShell {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            wm: WindowManager::new(),
            scale: config.scale,
            boot: config.boot,
            booted: false,
            area: Rect::default(),
            decorator: Box::new(DeskDecorator),
            dock: Dock::new(),
            launcher: LauncherOverlay::new(),
            drag: None,
        }
    }

    pub fn with_decorator(mut self, decorator: Box<dyn WindowDecorator>) -> Self {
        self.decorator = decorator;
        self
    }

    pub fn windows(&self) -> &WindowManager {
        &self.wm
    }

    pub fn windows_mut(&mut self) -> &mut WindowManager {
        &mut self.wm
    }

    pub fn scale(&self) -> CanvasScale {
        self.scale
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Canvas size for the current terminal area.
    pub fn canvas(&self) -> Size {
        self.scale.canvas_for(self.area)
    }

    pub fn dragging(&self) -> Option<WindowId> {
        self.drag.map(|d| d.id)
    }

    /// Adopt a new terminal area, re-fitting windows when it changed.
    pub fn set_area(&mut self, area: Rect) {
        if area == self.area {
            return;
        }
        self.area = area;
        if self.booted {
            self.wm.resize_canvas(self.canvas());
        }
    }

    fn ensure_booted(&mut self) {
        if self.booted || self.area.width == 0 || self.area.height == 0 {
            return;
        }
        if self.boot {
            self.wm.boot_if_needed(self.canvas());
        }
        self.booted = true;
    }

    fn dock_area(&self) -> Rect {
        Dock::area_for(self.area, self.scale.dock_rows())
    }

    /// Windows with their cell rectangles, bottom-most first.
    pub fn window_rects(&self) -> Vec<(WindowId, CellRect)> {
        self.wm
            .draw_order()
            .into_iter()
            .map(|w| (w.id(), self.scale.to_cells(self.area, w.offset(), w.size())))
            .collect()
    }

    fn window_at(&self, column: u16, row: u16) -> Option<(WindowId, CellRect)> {
        self.window_rects()
            .into_iter()
            .rev()
            .find(|(_, rect)| rect.contains(column, row))
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) => return self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                self.set_area(Rect::new(self.area.x, self.area.y, *width, *height));
            }
            Event::FocusLost => {
                if let Some(drag) = self.drag.take() {
                    tracing::debug!(window_id = %drag.id, "drag cancelled");
                }
            }
            _ => {}
        }
        ControlFlow::Continue
    }

    fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow {
        if key.kind != KeyEventKind::Press {
            return ControlFlow::Continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                ControlFlow::Quit
            }
            KeyCode::Esc => {
                self.wm.dismiss_launcher();
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(column, row),
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = self.drag {
                    let (dx, dy) = self.scale.delta(drag.start, (column, row));
                    self.wm.update_offset(drag.id, drag.origin.translate(dx, dy));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(drag) = self.drag.take() {
                    self.wm.end_drag(drag.id, self.canvas());
                }
            }
            _ => {}
        }
    }

    fn handle_press(&mut self, column: u16, row: u16) {
        let canvas = self.canvas();
        self.drag = None;

        match self.dock.hit_test(column, row) {
            Some(DockHit::Launcher) => {
                self.wm.toggle_launcher();
                return;
            }
            Some(DockHit::Module(module)) => {
                self.wm.open(module, canvas, None);
                self.wm.dismiss_launcher();
                return;
            }
            None => {}
        }

        if self.wm.launcher_open() {
            match self.launcher.hit_test(column, row) {
                LauncherHit::Module(module) => {
                    self.wm.launch(module.id, canvas);
                }
                LauncherHit::Close | LauncherHit::Outside => self.wm.dismiss_launcher(),
                LauncherHit::Panel => {}
            }
            return;
        }

        if rect_contains(self.dock_area(), column, row) {
            return;
        }

        let Some((id, rect)) = self.window_at(column, row) else {
            return;
        };
        match self.decorator.hit_test(rect, column, row) {
            HeaderAction::Close => self.wm.close(id),
            HeaderAction::SnapLeft => self.wm.snap(id, Snap::Left, canvas),
            HeaderAction::SnapRight => self.wm.snap(id, Snap::Right, canvas),
            HeaderAction::Maximize => self.wm.toggle_maximize(id, canvas),
            HeaderAction::Drag => {
                self.wm.focus(id);
                if let Some(window) = self.wm.window(id) {
                    self.drag = Some(DragGesture {
                        id,
                        start: (column, row),
                        origin: window.offset(),
                    });
                }
            }
            HeaderAction::None => self.wm.focus(id),
        }
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        self.set_area(frame.area());
        self.ensure_booted();
        let area = self.area;
        frame.fill(area, Style::default().bg(theme::desktop_bg()));

        for (id, rect) in self.window_rects() {
            let Some(window) = self.wm.window(id) else {
                continue;
            };
            let module = window.module();
            let accent = theme::accent(module.accent);
            let chrome = ChromeState {
                title: module.name,
                icon: module.icon,
                accent,
                focused: window.is_focused(),
                maximized: window.snap() == Snap::Maximized,
            };
            let body = self.decorator.render_window(frame, rect, chrome);
            let ctx = ComponentContext::new(window.is_focused()).with_accent(accent);
            PlaceholderApp::for_module(module).render(frame, body, &ctx);
        }

        let ctx = ComponentContext::default();
        let dock_area = self.dock_area();
        self.dock.set_launcher_open(self.wm.launcher_open());
        self.dock.render(frame, dock_area, &ctx);

        self.launcher.set_visible(self.wm.launcher_open());
        self.launcher.render(frame, area, &ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn shell(boot: bool) -> DesktopShell {
        let config = ShellConfig {
            boot,
            ..ShellConfig::default()
        };
        DesktopShell::new(&config)
    }

    fn draw(shell: &mut DesktopShell, area: Rect) -> Buffer {
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        shell.render(&mut frame);
        buffer
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn click(shell: &mut DesktopShell, column: u16, row: u16) {
        shell.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), column, row));
        shell.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), column, row));
    }

    #[test]
    fn first_render_boots_two_windows() {
        let mut s = shell(true);
        draw(&mut s, Rect::new(0, 0, 125, 50));
        assert_eq!(s.windows().windows().len(), 2);
        draw(&mut s, Rect::new(0, 0, 125, 50));
        assert_eq!(s.windows().windows().len(), 2);
    }

    #[test]
    fn no_boot_keeps_desktop_empty() {
        let mut s = shell(false);
        draw(&mut s, Rect::new(0, 0, 125, 50));
        assert!(s.windows().is_empty());
    }

    #[test]
    fn ctrl_q_quits_and_esc_dismisses_launcher() {
        let mut s = shell(false);
        s.windows_mut().toggle_launcher();
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(s.handle_event(&esc), ControlFlow::Continue);
        assert!(!s.windows().launcher_open());
        let quit = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(s.handle_event(&quit), ControlFlow::Quit);
        let plain_q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(s.handle_event(&plain_q), ControlFlow::Continue);
    }

    #[test]
    fn clicking_a_body_focuses_the_window() {
        let mut s = shell(true);
        draw(&mut s, Rect::new(0, 0, 125, 50));
        let rects = s.window_rects();
        let (bottom_id, bottom_rect) = rects[0];
        assert_ne!(s.windows().focused(), Some(bottom_id));
        // Boot window #1 sits at cells (4, 3); its body starts one row down.
        click(&mut s, bottom_rect.x as u16 + 1, bottom_rect.y as u16 + 1);
        assert_eq!(s.windows().focused(), Some(bottom_id));
    }

    #[test]
    fn header_drag_moves_window_by_cell_delta() {
        let mut s = shell(false);
        let area = Rect::new(0, 0, 125, 50);
        draw(&mut s, area);
        let id = s
            .windows_mut()
            .open_by_id("files", Size::new(1000.0, 800.0), Some(Offset::new(320.0, 160.0)))
            .expect("files");
        let (_, rect) = s.window_rects()[0];
        let (col, row) = (rect.x as u16 + 3, rect.y as u16);
        s.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        assert_eq!(s.dragging(), Some(id));
        s.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), col + 5, row + 2));
        let window = s.windows().window(id).expect("window");
        assert_eq!(window.offset(), Offset::new(360.0, 192.0));
        s.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), col + 5, row + 2));
        assert_eq!(s.dragging(), None);
        assert_eq!(s.windows().window(id).expect("window").snap(), Snap::None);
    }

    #[test]
    fn focus_lost_cancels_drag_without_committing() {
        let mut s = shell(false);
        draw(&mut s, Rect::new(0, 0, 125, 50));
        let id = s
            .windows_mut()
            .open_by_id("chat", Size::new(1000.0, 800.0), Some(Offset::new(400.0, 160.0)))
            .expect("chat");
        let (_, rect) = s.window_rects()[0];
        let (col, row) = (rect.x as u16 + 3, rect.y as u16);
        s.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        s.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 0, row));
        s.handle_event(&Event::FocusLost);
        assert_eq!(s.dragging(), None);
        let window = s.windows().window(id).expect("window");
        assert_eq!(window.snap(), Snap::None);
        assert!(window.offset().x < 150.0);
    }

    #[test]
    fn resize_event_refits_snapped_windows() {
        let mut s = shell(false);
        draw(&mut s, Rect::new(0, 0, 125, 50));
        let canvas = s.canvas();
        let id = s.windows_mut().open_by_id("notes", canvas, None).expect("notes");
        s.windows_mut().snap(id, Snap::Maximized, canvas);
        s.handle_event(&Event::Resize(100, 40));
        let window = s.windows().window(id).expect("window");
        assert_eq!(window.size(), Size::new(800.0, 640.0 - 80.0 - 4.0));
    }

    #[test]
    fn windows_parked_far_off_canvas_render_without_panicking() {
        let mut s = shell(false);
        let area = Rect::new(0, 0, 125, 50);
        draw(&mut s, area);
        let canvas = s.canvas();
        for offset in [
            Offset::new(1.0e12, 0.0),
            Offset::new(-1.0e12, 1.0e12),
            Offset::new(f64::MAX, f64::MIN),
        ] {
            s.windows_mut().open_by_id("notes", canvas, Some(offset));
        }
        let buffer = draw(&mut s, area);
        assert_eq!(s.windows().windows().len(), 3);
        assert!(!(0..125).any(|x| buffer[(x, 3)].symbol() == "✎"));
        click(&mut s, 60, 20);
        assert_eq!(s.windows().windows().len(), 3);
    }

    #[test]
    fn render_draws_dock_and_window_titles() {
        let mut s = shell(true);
        let buffer = draw(&mut s, Rect::new(0, 0, 125, 50));
        let row = |y: u16| -> String { (0..125).map(|x| buffer[(x, y)].symbol()).collect() };
        assert!(row(47).contains("⊞ Apps"));
        assert!(row(47).contains("✉ Chat"));
        // Boot window #1 header at canvas y=48, i.e. row 3.
        assert!(row(3).contains("✎ Notes"));
    }
}
