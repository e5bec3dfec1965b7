//! Static bodies for the catalog modules. None of them hold state.

use indoc::indoc;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{Component, ComponentContext};
use crate::modules::ModuleDescriptor;
use crate::theme;
use crate::ui::UiFrame;

const NOTES_TEXT: &str = indoc! {"
    Write quick notes or todos.
    This is a static placeholder for now.
"};

const CHAT_MESSAGES: [(&str, bool); 3] = [
    ("Hi! This is a mocked conversation.", false),
    ("Looks like a real desktop window!", true),
    ("We can swap in real data later.", false),
];

/// Body drawn inside a window, picked from the module id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderApp {
    Notes,
    Browser,
    Files,
    Chat,
    ComingSoon,
}

impl PlaceholderApp {
    pub fn for_module(module: &ModuleDescriptor) -> Self {
        match module.id {
            "notes" => Self::Notes,
            "browser" => Self::Browser,
            "files" => Self::Files,
            "chat" => Self::Chat,
            _ => Self::ComingSoon,
        }
    }

    fn lines(&self, area: Rect, ctx: &ComponentContext) -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(ctx.accent())
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(theme::muted_fg());
        match self {
            Self::Notes => {
                let mut lines = vec![Line::styled("Notes", heading), Line::raw("")];
                lines.extend(NOTES_TEXT.lines().map(|l| Line::styled(l, muted)));
                lines
            }
            Self::Browser => {
                let pill = Style::default().fg(ctx.accent()).add_modifier(Modifier::REVERSED);
                vec![
                    Line::from(vec![
                        Span::styled("◍ Browser ", heading),
                        Span::styled(" Offline ", pill),
                    ]),
                    Line::raw(""),
                    Line::styled("Web view placeholder", muted),
                ]
            }
            Self::Files => {
                let mut lines = vec![Line::styled("Files", heading)];
                let name_width = (area.width as usize).saturating_sub(6).max(1);
                for idx in 0..5 {
                    let name = format!("▯ Document_0{idx}.txt");
                    lines.push(Line::from(vec![
                        Span::raw(format!("{name:<name_width$}")),
                        Span::styled("12 KB", muted),
                    ]));
                }
                lines
            }
            Self::Chat => {
                let mut lines = vec![Line::styled("Chat", heading)];
                for (text, mine) in CHAT_MESSAGES {
                    let bubble = if mine {
                        Style::default().fg(ctx.accent())
                    } else {
                        muted
                    };
                    let line = Line::styled(format!(" {text} "), bubble);
                    lines.push(if mine {
                        line.alignment(Alignment::Right)
                    } else {
                        line
                    });
                }
                lines
            }
            Self::ComingSoon => vec![Line::styled("App coming soon", muted)],
        }
    }
}

impl Component for PlaceholderApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let inner = Rect {
            x: area.x.saturating_add(1),
            width: area.width.saturating_sub(2),
            ..area
        };
        let paragraph = Paragraph::new(self.lines(inner, ctx))
            .style(Style::default().bg(theme::window_bg()).fg(theme::window_fg()))
            .wrap(Wrap { trim: false });
        let paragraph = if *self == Self::ComingSoon {
            paragraph.alignment(Alignment::Center)
        } else {
            paragraph
        };
        frame.render_widget(paragraph, inner);
    }
}
