use ratatui::style::Color;

use crate::modules::Accent;

// Centralized colors for the desktop chrome.

pub fn accent(accent: Accent) -> Color {
    match accent {
        Accent::Yellow => Color::Yellow,
        Accent::Blue => Color::Blue,
        Accent::Cyan => Color::Cyan,
        Accent::Green => Color::Green,
    }
}

pub fn desktop_bg() -> Color {
    Color::Rgb(18, 24, 48)
}

// Dock
pub fn dock_bg() -> Color {
    Color::DarkGray
}
pub fn dock_fg() -> Color {
    Color::White
}
pub fn dock_active_bg() -> Color {
    Color::Gray
}

// Decorator
pub fn decorator_header_bg() -> Color {
    Color::DarkGray
}
pub fn decorator_header_fg() -> Color {
    Color::White
}
pub fn decorator_border() -> Color {
    Color::Gray
}
pub fn window_bg() -> Color {
    Color::Black
}
pub fn window_fg() -> Color {
    Color::White
}
pub fn muted_fg() -> Color {
    Color::Gray
}

// Launcher
pub fn launcher_bg() -> Color {
    Color::Black
}
pub fn launcher_fg() -> Color {
    Color::White
}
