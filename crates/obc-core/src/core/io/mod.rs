//! Readers for the files a constructing collaborator feeds into the store: a TOML settings
//! file with the model-wide scalars and boundary setup, and a CSV table of per-atom radii and
//! scale factors.

pub mod atoms;
pub mod settings;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}
