//! Static catalog of launchable modules.

/// Accent hue of a module. Mapped to a terminal color by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Yellow,
    Blue,
    Cyan,
    Green,
}

/// Immutable catalog entry shared by every window launched from it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ModuleDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
}

static CATALOG: [ModuleDescriptor; 4] = [
    ModuleDescriptor {
        id: "notes",
        name: "Notes",
        icon: "✎",
        accent: Accent::Yellow,
    },
    ModuleDescriptor {
        id: "browser",
        name: "Browser",
        icon: "◍",
        accent: Accent::Blue,
    },
    ModuleDescriptor {
        id: "files",
        name: "Files",
        icon: "▤",
        accent: Accent::Cyan,
    },
    ModuleDescriptor {
        id: "chat",
        name: "Chat",
        icon: "✉",
        accent: Accent::Green,
    },
];

pub fn catalog() -> &'static [ModuleDescriptor] {
    &CATALOG
}

pub fn find_module(id: &str) -> Option<&'static ModuleDescriptor> {
    CATALOG.iter().find(|module| module.id == id)
}
