//! ember_core: Core source-location types for the ember toolchain.
//!
//! Provides byte spans and 1-based line/column positions shared by the
//! scanner and the diagnostics crate.

pub mod text;

// Re-export commonly used types
pub use text::{Position, TextPos, TextSpan};
