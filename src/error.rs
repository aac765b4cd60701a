//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, DIMAP, GDAL geometry, and serialization errors,
//! so every public entrypoint returns a single `dimprep::Error`.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DIMAP reader error: {0}")]
    Dimap(#[from] crate::io::DimapError),

    #[error("Geometry error: {0}")]
    Geometry(#[from] crate::io::GeometryError),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
