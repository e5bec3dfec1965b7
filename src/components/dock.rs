use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::{Component, ComponentContext};
use crate::layout::rect_contains;
use crate::modules::{ModuleDescriptor, catalog};
use crate::theme;
use crate::ui::UiFrame;

const LAUNCHER_LABEL: &str = " ⊞ Apps ";
const BUTTON_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockHit {
    Launcher,
    Module(&'static ModuleDescriptor),
}

/// Bottom band with the launcher button followed by one button per module.
///
/// Hit regions are rebuilt on every render so they always match what is on
/// screen.
#[derive(Debug, Default)]
pub struct Dock {
    launcher_open: bool,
    hits: Vec<(Rect, DockHit)>,
}

impl Dock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_launcher_open(&mut self, open: bool) {
        self.launcher_open = open;
    }

    /// Band of `rows` at the bottom of `area`.
    pub fn area_for(area: Rect, rows: u16) -> Rect {
        let height = rows.min(area.height);
        Rect {
            x: area.x,
            y: area.y + area.height - height,
            width: area.width,
            height,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<DockHit> {
        self.hits
            .iter()
            .find(|(rect, _)| rect_contains(*rect, column, row))
            .map(|(_, hit)| *hit)
    }

    fn buttons() -> Vec<(String, DockHit)> {
        let mut buttons = vec![(LAUNCHER_LABEL.to_string(), DockHit::Launcher)];
        buttons.extend(
            catalog()
                .iter()
                .map(|m| (format!(" {} {} ", m.icon, m.name), DockHit::Module(m))),
        );
        buttons
    }
}

impl Component for Dock {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        self.hits.clear();
        if area.width == 0 || area.height == 0 {
            return;
        }
        let band = Style::default().bg(theme::dock_bg()).fg(theme::dock_fg());
        frame.fill(area, band);

        let buttons = Self::buttons();
        let total: u16 = buttons
            .iter()
            .map(|(label, _)| label.chars().count() as u16 + BUTTON_GAP)
            .sum::<u16>()
            .saturating_sub(BUTTON_GAP);
        let row = area.y + area.height / 2;
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let max_x = area.x + area.width;
        for (label, hit) in buttons {
            let width = label.chars().count() as u16;
            if x.saturating_add(width) > max_x {
                break;
            }
            let style = match hit {
                DockHit::Launcher if self.launcher_open => band
                    .bg(theme::dock_active_bg())
                    .add_modifier(Modifier::BOLD),
                DockHit::Launcher => band.add_modifier(Modifier::BOLD),
                DockHit::Module(module) => band.fg(theme::accent(module.accent)),
            };
            frame.set_string(area, x, row, &label, style);
            self.hits.push((
                Rect {
                    x,
                    y: area.y,
                    width,
                    height: area.height,
                },
                hit,
            ));
            x = x.saturating_add(width + BUTTON_GAP);
        }
    }
}
