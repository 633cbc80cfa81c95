use std::fmt;
use thiserror::Error;

/// A per-atom array held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerAtomField {
    AtomicRadii,
    ScaledRadiusFactors,
}

impl fmt::Display for PerAtomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerAtomField::AtomicRadii => f.write_str("atomic radii"),
            PerAtomField::ScaledRadiusFactors => f.write_str("scaled radius factors"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Precondition {
    #[error("periodic boundaries require a cutoff")]
    CutoffRequired,

    #[error(
        "periodic box axis {axis} has width {length}, which is less than twice the cutoff distance ({minimum})"
    )]
    BoxTooSmall {
        axis: usize,
        length: f64,
        minimum: f64,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    #[error("Input size for {field} does not agree with current size: input={provided}, current size={expected}")]
    SizeMismatch {
        field: PerAtomField,
        provided: usize,
        expected: usize,
    },

    #[error("Precondition violated: {0}")]
    PreconditionViolation(#[from] Precondition),
}
