//! A simulated desktop shell for the terminal.
//!
//! [`window::WindowManager`] is the store: it owns every window and applies
//! the focus, clamping and snapping rules. [`shell::DesktopShell`] draws it
//! with ratatui and turns mouse gestures into store calls.

pub mod component_context;
pub mod components;
pub mod config;
pub mod constants;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod layout;
pub mod modules;
pub mod runner;
pub mod shell;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use error::{DeskError, Result};
pub use modules::{ModuleDescriptor, catalog, find_module};
pub use window::{DesktopSnapshot, Offset, Size, Snap, Window, WindowId, WindowManager};
