//! # Core Module
//!
//! The stateless foundation of OBC++: constants of the model, the parameter store that
//! owns per-atom and per-model inputs, and the file formats those inputs are read from.
//!
//! ## Architecture
//!
//! - **Physical Constants** ([`constants`]) - Coulomb prefactor, defaults, surface coefficient
//! - **Parameter Store** ([`obc`]) - Model variants, the validated store and its errors
//! - **File I/O** ([`io`]) - Settings TOML and per-atom CSV readers
//!
//! Nothing in this module evaluates Born radii, energies or forces. It owns, validates and
//! serves the inputs to those computations.

pub mod constants;
pub mod io;
pub mod obc;
