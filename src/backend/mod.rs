//! Runner code generation
//!
//! Turns a [`runnergen_syntax::ScanResult`] plus [`crate::config::GenerationOptions`] into runner text.
//!
//! ## Module Organization
//!
//! - `c_emitter.rs` - Low-level C text builder
//! - `sections.rs` - One pure builder per runner section (header, externs, mock management, suite hooks, reset,
//!   main)
//! - `header_file.rs` - Companion header
//! - `generator.rs` - Joins the sections into the final runner

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod c_emitter;
pub mod generator;
pub mod header_file;
pub mod sections;

pub use generator::{GeneratedHeader, GeneratedRunner, RunnerGenerator};
