//! # Engine Module
//!
//! The boundary between a configured parameter store and the per-step kernels that consume
//! it.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Model-wide settings, their builder, and how they are
//!   applied to a store
//! - **Kernel Views** ([`view`]) - Borrowed read-only bundles and generation stamps
//!
//! ## Phase Separation
//!
//! A simulation loop alternates a serial "update parameters" phase with a parallel "evaluate
//! forces" phase. Mutation needs `&mut ObcParameters` while an [`ObcView`](view::ObcView) holds
//! a shared borrow, so the borrow checker rules out a writer during reader access. Kernels that
//! cache derived quantities across steps keep a [`Generation`](view::Generation) stamp instead
//! of a borrow and check it for staleness before reuse.

pub mod config;
pub mod view;
