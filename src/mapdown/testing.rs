//! Testing utilities
//!
//! Fluent assertions over parsed forests. Tests should verify content and
//! structure, not just counts; the assertion builder keeps that cheap and
//! keeps failure messages pointing at the exact node path involved.

pub mod assertions;

pub use assertions::{assert_forest, ForestAssert, NodeAssert};
