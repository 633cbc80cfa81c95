//! # OBC Parameter Module
//!
//! Holds the Generalized-Born OBC model inputs in a single validated store.
//!
//! ## Key Components
//!
//! - [`model`] - The two published OBC variants and their `(α, β, γ)` coefficients
//! - [`params`] - [`ObcParameters`](params::ObcParameters), the per-system parameter store
//! - [`error`] - Size and precondition errors raised by store mutations
//!
//! ## Usage
//!
//! ```ignore
//! use obcpp::core::obc::{model::ObcType, params::ObcParameters};
//! use nalgebra::Vector3;
//!
//! let mut params = ObcParameters::new(3, ObcType::ObcII);
//! params.set_atomic_radii(&[0.15, 0.12, 0.17])?;
//! params.enable_cutoff(1.2);
//! params.enable_periodic(Vector3::new(2.4, 2.4, 2.4))?;
//! ```

pub mod error;
pub mod model;
pub mod params;
