pub mod check;
pub mod defaults;
