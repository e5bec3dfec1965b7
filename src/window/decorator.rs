use ratatui::prelude::Rect;
use ratatui::style::{Color, Modifier, Style};

use crate::layout::CellRect;
use crate::theme;
use crate::ui::UiFrame;

/// What a press on a window's title bar asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    SnapLeft,
    SnapRight,
    Maximize,
    Close,
    Drag,
    None,
}

/// Everything the chrome needs to know about one window.
#[derive(Debug, Clone, Copy)]
pub struct ChromeState<'a> {
    pub title: &'a str,
    pub icon: &'a str,
    pub accent: Color,
    pub focused: bool,
    pub maximized: bool,
}

pub trait WindowDecorator: std::fmt::Debug {
    /// Draw frame and title bar; returns the visible body area.
    fn render_window(&self, frame: &mut UiFrame<'_>, rect: CellRect, chrome: ChromeState<'_>)
    -> Rect;

    fn hit_test(&self, rect: CellRect, column: u16, row: u16) -> HeaderAction;
}

const BUTTON_WIDTH: i32 = 3;
const BUTTONS: [HeaderAction; 4] = [
    HeaderAction::SnapLeft,
    HeaderAction::SnapRight,
    HeaderAction::Maximize,
    HeaderAction::Close,
];

fn button_label(action: HeaderAction, maximized: bool) -> &'static str {
    match action {
        HeaderAction::SnapLeft => "[<]",
        HeaderAction::SnapRight => "[>]",
        HeaderAction::Maximize if maximized => "[v]",
        HeaderAction::Maximize => "[^]",
        HeaderAction::Close => "[x]",
        HeaderAction::Drag | HeaderAction::None => "",
    }
}

// Buttons sit flush against the top-right corner.
fn buttons_start(rect: CellRect) -> i32 {
    rect.right() - 1 - BUTTON_WIDTH * BUTTONS.len() as i32
}

/// Write `text` starting at a possibly negative column, dropping the glyphs
/// that fall outside `bounds`.
fn put_signed(frame: &mut UiFrame<'_>, bounds: Rect, x: i32, y: u16, text: &str, style: Style) {
    let skip = (bounds.x as i32 - x).max(0) as usize;
    let start = x + skip as i32;
    if start < 0 || start > u16::MAX as i32 {
        return;
    }
    let visible: String = text.chars().skip(skip).collect();
    frame.set_string(bounds, start as u16, y, &visible, style);
}

/// Title bar on the top border row, single-line frame around the body.
#[derive(Debug, Default)]
pub struct DeskDecorator;

impl WindowDecorator for DeskDecorator {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        rect: CellRect,
        chrome: ChromeState<'_>,
    ) -> Rect {
        let visible = rect.visible(frame.area());
        if visible.width == 0 || visible.height == 0 {
            return Rect::default();
        }
        let body_style = Style::default().bg(theme::window_bg()).fg(theme::window_fg());
        let border_style = Style::default()
            .bg(theme::window_bg())
            .fg(if chrome.focused {
                chrome.accent
            } else {
                theme::decorator_border()
            });
        let header_style = if chrome.focused {
            Style::default()
                .bg(chrome.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(theme::decorator_header_bg())
                .fg(theme::decorator_header_fg())
        };
        frame.fill(visible, body_style);

        let top = rect.y;
        let bottom = rect.bottom() - 1;
        let left = rect.x;
        let right = rect.right() - 1;

        if top >= visible.y as i32 {
            let row = top as u16;
            frame.fill(Rect { y: row, height: 1, ..visible }, header_style);
            let title = format!(" {} {} ", chrome.icon, chrome.title);
            let title_room = (buttons_start(rect) - left - 1).max(0) as usize;
            let title: String = title.chars().take(title_room).collect();
            put_signed(frame, visible, left + 1, row, &title, header_style);
            if rect.width as i32 > BUTTON_WIDTH * BUTTONS.len() as i32 + 2 {
                for (idx, action) in BUTTONS.iter().enumerate() {
                    let x = buttons_start(rect) + idx as i32 * BUTTON_WIDTH;
                    let label = button_label(*action, chrome.maximized);
                    put_signed(frame, visible, x, row, label, header_style);
                }
            }
        }

        if rect.height > 1 && bottom < (visible.y + visible.height) as i32 && bottom >= 0 {
            let row = bottom as u16;
            let mut line = String::with_capacity(rect.width as usize);
            for x in left..=right {
                line.push(if x == left {
                    '└'
                } else if x == right {
                    '┘'
                } else {
                    '─'
                });
            }
            put_signed(frame, visible, left, row, &line, border_style);
        }

        let side_top = (top + 1).max(visible.y as i32);
        let side_bottom = bottom.min((visible.y + visible.height) as i32);
        for y in side_top..side_bottom {
            put_signed(frame, visible, left, y as u16, "│", border_style);
            if right != left {
                put_signed(frame, visible, right, y as u16, "│", border_style);
            }
        }

        CellRect {
            x: rect.x + 1,
            y: rect.y + 1,
            width: rect.width.saturating_sub(2),
            height: rect.height.saturating_sub(2),
        }
        .visible(frame.area())
    }

    fn hit_test(&self, rect: CellRect, column: u16, row: u16) -> HeaderAction {
        if !rect.contains(column, row) || row as i32 != rect.y {
            return HeaderAction::None;
        }
        let column = column as i32;
        if rect.width as i32 > BUTTON_WIDTH * BUTTONS.len() as i32 + 2 {
            let start = buttons_start(rect);
            let end = start + BUTTON_WIDTH * BUTTONS.len() as i32;
            if column >= start && column < end {
                return BUTTONS[((column - start) / BUTTON_WIDTH) as usize];
            }
        }
        HeaderAction::Drag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn rect() -> CellRect {
        CellRect {
            x: 2,
            y: 1,
            width: 30,
            height: 8,
        }
    }

    fn chrome() -> ChromeState<'static> {
        ChromeState {
            title: "Notes",
            icon: "✎",
            accent: Color::Yellow,
            focused: true,
            maximized: false,
        }
    }

    #[test]
    fn hit_test_maps_buttons_and_header() {
        let d = DeskDecorator;
        let r = rect();
        let start = buttons_start(r) as u16;
        assert_eq!(start, 19);
        assert_eq!(d.hit_test(r, start, 1), HeaderAction::SnapLeft);
        assert_eq!(d.hit_test(r, start + 4, 1), HeaderAction::SnapRight);
        assert_eq!(d.hit_test(r, start + 6, 1), HeaderAction::Maximize);
        assert_eq!(d.hit_test(r, start + 11, 1), HeaderAction::Close);
        assert_eq!(d.hit_test(r, 5, 1), HeaderAction::Drag);
        assert_eq!(d.hit_test(r, 5, 3), HeaderAction::None);
        assert_eq!(d.hit_test(r, 40, 1), HeaderAction::None);
    }

    #[test]
    fn narrow_windows_are_all_header() {
        let d = DeskDecorator;
        let narrow = CellRect {
            x: 0,
            y: 0,
            width: 10,
            height: 4,
        };
        assert_eq!(d.hit_test(narrow, 8, 0), HeaderAction::Drag);
    }

    #[test]
    fn render_draws_title_buttons_and_frame() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        let body = DeskDecorator.render_window(&mut frame, rect(), chrome());
        assert_eq!(body, Rect::new(3, 2, 28, 6));
        assert_eq!(buffer[(6, 1)].symbol(), "N");
        assert_eq!(buffer[(19, 1)].symbol(), "[");
        assert_eq!(buffer[(20, 1)].symbol(), "<");
        assert_eq!(buffer[(29, 1)].symbol(), "x");
        assert_eq!(buffer[(2, 8)].symbol(), "└");
        assert_eq!(buffer[(31, 8)].symbol(), "┘");
        assert_eq!(buffer[(2, 4)].symbol(), "│");
        assert_eq!(buffer[(10, 1)].bg, Color::Yellow);
    }

    #[test]
    fn render_clips_windows_hanging_off_the_left() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buffer = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buffer);
        let offscreen = CellRect {
            x: -10,
            y: 2,
            width: 30,
            height: 5,
        };
        let body = DeskDecorator.render_window(&mut frame, offscreen, chrome());
        assert_eq!(body, Rect::new(0, 3, 19, 3));
        assert_eq!(buffer[(19, 4)].symbol(), "│");
        assert_eq!(buffer[(20, 4)].symbol(), " ");
    }
}
