use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Expected a BEAM-DIMAP header file (.dim), got: {path}")]
    NotDimapHeader { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
