//! Command line options for the interactive session.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;
use tracing::Level;

use crate::error::{DeskError, Result};
use crate::layout::CanvasScale;

#[derive(Debug, Parser)]
#[command(
    name = "term-desk",
    version,
    about = "A simulated desktop shell with draggable, snappable windows.",
    after_help = indoc! {"
        Mouse: drag a window header to move it, release near the left or right
        edge to snap. Header buttons snap left [<], snap right [>], maximize [^]
        and close [x]. The dock opens apps; the grid button opens the launcher.

        Keys: Esc closes the launcher, Ctrl+Q quits.
    "}
)]
pub struct Cli {
    /// Canvas units covered by one terminal column.
    #[arg(long, default_value_t = 8.0)]
    pub cell_width: f64,

    /// Canvas units covered by one terminal row.
    #[arg(long, default_value_t = 16.0)]
    pub cell_height: f64,

    /// Start with an empty desktop instead of the two welcome windows.
    #[arg(long)]
    pub no_boot: bool,

    /// Input poll interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    pub poll_ms: u64,

    /// Write tracing output to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Maximum tracing level (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}

/// Validated settings for a shell session.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub scale: CanvasScale,
    pub boot: bool,
    pub poll_interval: Duration,
    pub log_file: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            scale: CanvasScale::default(),
            boot: true,
            poll_interval: Duration::from_millis(16),
            log_file: None,
            log_level: Level::INFO,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> Result<ShellConfig> {
        let scale = CanvasScale::new(self.cell_width, self.cell_height).ok_or(
            DeskError::InvalidScale {
                width: self.cell_width,
                height: self.cell_height,
            },
        )?;
        Ok(ShellConfig {
            scale,
            boot: !self.no_boot,
            poll_interval: Duration::from_millis(self.poll_ms.max(1)),
            log_file: self.log_file,
            log_level: self.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_scale() {
        let cli = Cli::parse_from(["term-desk"]);
        let config = cli.into_config().expect("valid defaults");
        assert_eq!(config.scale, CanvasScale::default());
        assert!(config.boot);
        assert_eq!(config.poll_interval, Duration::from_millis(16));
        assert_eq!(config.log_level, Level::INFO);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn flags_are_applied() {
        let cli = Cli::parse_from([
            "term-desk",
            "--cell-width",
            "10",
            "--cell-height",
            "20",
            "--no-boot",
            "--poll-ms",
            "0",
            "--log-level",
            "debug",
            "--log-file",
            "desk.log",
        ]);
        let config = cli.into_config().expect("valid flags");
        assert_eq!(config.scale.cell_width(), 10.0);
        assert_eq!(config.scale.cell_height(), 20.0);
        assert!(!config.boot);
        assert_eq!(config.poll_interval, Duration::from_millis(1));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.log_file, Some(PathBuf::from("desk.log")));
    }

    #[test]
    fn zero_scale_is_rejected() {
        let cli = Cli::parse_from(["term-desk", "--cell-width", "0"]);
        let err = cli.into_config().expect_err("zero width");
        assert!(matches!(err, DeskError::InvalidScale { .. }));
    }
}
