//! Foundation types for the svmodule toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion for diagnostics
//! - [`Name`] - Cheap-to-clone identifier strings
//! - Identifier grammar and the reserved keyword table
//!
//! This module has NO dependencies on other svmodule modules.

pub mod ident;
mod position;

pub use ident::{IdentError, KeywordCase, is_reserved_keyword, validate_identifier};
pub use position::{LineCol, LineIndex};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};

/// An identifier as written in source: module, port and parameter names.
pub type Name = smol_str::SmolStr;
