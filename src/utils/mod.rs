//! The `utils` module provides definitions shared across `popbus`: the
//! error types and logging setup.

pub mod error;
pub mod logging;
