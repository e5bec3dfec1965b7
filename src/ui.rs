//! Clipped drawing surface shared by the chrome, dock, launcher and bodies.
//!
//! Windows may hang off any edge of the canvas, so the rectangles computed
//! for them regularly drift outside the terminal. Every write goes through
//! `UiFrame`, which drops whatever falls outside the frame.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        Self {
            area: frame.area(),
            buffer: frame.buffer_mut(),
        }
    }

    /// Draw straight into a buffer; used by headless renders and tests.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    fn visible(&self, rect: Rect) -> Option<Rect> {
        Some(rect.intersection(self.area)).filter(|r| !r.is_empty())
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        if let Some(area) = self.visible(area) {
            widget.render(area, self.buffer);
        }
    }

    /// Paint `style` over every visible cell of `area`, clearing its symbols.
    pub fn fill(&mut self, area: Rect, style: Style) {
        let Some(area) = self.visible(area) else {
            return;
        };
        for position in area.positions() {
            if let Some(cell) = self.buffer.cell_mut(position) {
                cell.reset();
                cell.set_style(style);
            }
        }
    }

    /// Write `text` at (x, y), cut off at the right edge of `bounds`.
    ///
    /// Nothing is written when the start lies outside `bounds` or the frame.
    pub fn set_string(&mut self, bounds: Rect, x: u16, y: u16, text: &str, style: Style) {
        let Some(bounds) = self.visible(bounds) else {
            return;
        };
        if x < bounds.left() || x >= bounds.right() || y < bounds.top() || y >= bounds.bottom() {
            return;
        }
        let room = (bounds.right() - x) as usize;
        self.buffer.set_stringn(x, y, text, room, style);
    }
}
