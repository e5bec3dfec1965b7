use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear};

use super::{Component, ComponentContext};
use crate::layout::rect_contains;
use crate::modules::{ModuleDescriptor, catalog};
use crate::theme;
use crate::ui::UiFrame;

const PREFERRED_WIDTH: u16 = 44;
const CLOSE_LABEL: &str = "[x]";
const CAPTION: &str = "Open in new window";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherHit {
    Close,
    Module(&'static ModuleDescriptor),
    /// Inside the panel but on nothing clickable.
    Panel,
    Outside,
}

/// Centered panel listing every catalog module.
#[derive(Debug, Default)]
pub struct LauncherOverlay {
    visible: bool,
    panel: Rect,
    close: Rect,
    rows: Vec<(Rect, &'static ModuleDescriptor)>,
}

impl LauncherOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.panel = Rect::default();
            self.close = Rect::default();
            self.rows.clear();
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Panel rectangle for `area`, shrunk when the terminal is small.
    pub fn rect_for(area: Rect) -> Rect {
        // Border, one blank row, a row per module, a blank row and the border.
        let preferred_height = catalog().len() as u16 * 2 + 3;
        let width = area.width.min(PREFERRED_WIDTH).max(1);
        let height = area.height.min(preferred_height).max(1);
        Rect {
            x: area.x.saturating_add(area.width.saturating_sub(width) / 2),
            y: area.y.saturating_add(area.height.saturating_sub(height) / 2),
            width,
            height,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> LauncherHit {
        if !self.visible || !rect_contains(self.panel, column, row) {
            return LauncherHit::Outside;
        }
        if rect_contains(self.close, column, row) {
            return LauncherHit::Close;
        }
        self.rows
            .iter()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map_or(LauncherHit::Panel, |(_, module)| LauncherHit::Module(module))
    }
}

impl Component for LauncherOverlay {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        self.rows.clear();
        if !self.visible || area.width == 0 || area.height == 0 {
            self.panel = Rect::default();
            self.close = Rect::default();
            return;
        }
        let panel = Self::rect_for(area);
        self.panel = panel;
        let base = Style::default().bg(theme::launcher_bg()).fg(theme::launcher_fg());
        frame.render_widget(Clear, panel);
        frame.render_widget(
            Block::default()
                .title(" Launcher ")
                .borders(Borders::ALL)
                .style(base),
            panel,
        );

        let close_width = CLOSE_LABEL.chars().count() as u16;
        self.close = if panel.width > close_width + 2 {
            let close = Rect {
                x: panel.x + panel.width - 1 - close_width,
                y: panel.y,
                width: close_width,
                height: 1,
            };
            frame.set_string(panel, close.x, close.y, CLOSE_LABEL, base.add_modifier(Modifier::BOLD));
            close
        } else {
            Rect::default()
        };

        let inner = Rect {
            x: panel.x.saturating_add(2),
            y: panel.y.saturating_add(1),
            width: panel.width.saturating_sub(4),
            height: panel.height.saturating_sub(2),
        };
        let max_y = inner.y.saturating_add(inner.height);
        for (idx, module) in catalog().iter().enumerate() {
            let y = inner.y + 1 + idx as u16 * 2;
            if y >= max_y || inner.width == 0 {
                break;
            }
            let name = format!("{} {}", module.icon, module.name);
            frame.set_string(
                inner,
                inner.x,
                y,
                &name,
                base.fg(theme::accent(module.accent)).add_modifier(Modifier::BOLD),
            );
            let caption_width = CAPTION.chars().count() as u16;
            let name_width = name.chars().count() as u16;
            if inner.width > name_width + caption_width + 1 {
                let x = inner.x + inner.width - caption_width;
                frame.set_string(inner, x, y, CAPTION, base.fg(theme::muted_fg()));
            }
            self.rows.push((
                Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 1,
                },
                module,
            ));
        }
    }
}
