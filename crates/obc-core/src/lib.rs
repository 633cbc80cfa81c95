//! # OBC++ Core Library
//!
//! A validated parameter store for the Generalized-Born / Surface-Area implicit-solvent model
//! in the Onufriev-Bashford-Case (OBC) formulation, as consumed by force-evaluation kernels.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture so that the numerically heavy kernels
//! only ever see inputs that already satisfy every consistency rule.
//!
//! - **[`core`]: The Foundation.** Physical constants, the OBC model variants and their
//!   coefficient triples, the [`ObcParameters`](core::obc::params::ObcParameters) store with
//!   its invariants, and readers for the parameter files.
//!
//! - **[`engine`]: The Kernel Boundary.** Settings and their builder, plus the read-only
//!   [`ObcView`](engine::view::ObcView) and [`Generation`](engine::view::Generation) stamps
//!   that per-step kernels hold on to.
//!
//! - **[`workflows`]: The Public API.** Assembles a fully validated store from settings and a
//!   per-atom table, or straight from files on disk.

pub mod core;
pub mod engine;
pub mod workflows;
