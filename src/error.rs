use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("terminal draw failed: {0}")]
    Terminal(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("invalid cell scale {width}x{height}: both factors must be finite and positive")]
    InvalidScale { width: f64, height: f64 },
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_errors_convert() {
        let err: DeskError = io::Error::other("boom").into();
        assert!(matches!(err, DeskError::Io(_)));
        assert_eq!(err.to_string(), "terminal I/O failed: boom");
    }

    #[test]
    fn draw_failures_keep_their_source() {
        let err = DeskError::Terminal(Box::new(io::Error::other("backend gone")));
        assert_eq!(err.to_string(), "terminal draw failed: backend gone");
        let source = err.source().expect("source");
        assert_eq!(source.to_string(), "backend gone");
    }

    #[test]
    fn invalid_scale_names_both_factors() {
        let err = DeskError::InvalidScale {
            width: 0.0,
            height: 16.0,
        };
        assert!(err.to_string().contains("0x16"));
    }
}
