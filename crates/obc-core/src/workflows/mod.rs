//! # Workflows Module
//!
//! High-level entry points for the collaborator that turns a molecular topology and a
//! parameter table into a store ready for force evaluation.
//!
//! - [`assemble`] - Builds a validated [`ObcParameters`](crate::core::obc::params::ObcParameters)
//!   from settings and a per-atom table, or directly from files on disk.

pub mod assemble;

use crate::core::io::ParamLoadError;
use crate::core::obc::error::ParamError;
use crate::engine::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("Failed to load parameter input: {source}")]
    Load {
        #[from]
        source: ParamLoadError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Rejected OBC parameters: {source}")]
    Parameters {
        #[from]
        source: ParamError,
    },

    #[error("Atom table is empty: at least one atom is required")]
    EmptySystem,
}
