//! Common numeric definitions

mod common;
mod quadratic;

// Re-export
pub use common::*;
pub use quadratic::*;
