//! Provide the shared vocabulary and pure helpers used by the runnergen scanner and generator.
//!
//! This crate is intentionally small and dependency-free. It holds the names both halves of the pipeline must agree
//! on (framework headers, mock naming conventions, plugin identifiers) and the C identifier helpers used whenever a
//! symbol is built from a file name.
//!
//! ## Notes
//!
//! - **No IO** and no global state. Everything here is a constant or a deterministic function.

pub mod ident;
pub mod lang;

pub use ident::{escape_c_string, header_guard, is_c_identifier, sanitize_c_identifier};
