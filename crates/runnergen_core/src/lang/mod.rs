//! Canonical vocabulary for the generated runner.
//!
//! - `conventions`: option defaults and naming conventions.
//! - `framework`: header names owned by the test framework and the mocking layer.
//! - `plugins`: recognised generation plugins.

pub mod conventions;
pub mod framework;
pub mod plugins;
