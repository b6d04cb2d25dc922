//! Interface parser for SystemVerilog module declarations
//!
//! This module extracts the interface of one module from free-form source
//! text using:
//! - **logos** for fast, case-insensitive lexing
//! - a scanning parser that reads only the header, parameter and port lists
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind (comments kept as trivia)
//!     ↓
//! Parser → ModuleInterface { name, parameters, ports }  or  ParseError
//! ```
//!
//! The module body is not interpreted. Only its closing `endmodule` is
//! required.

#[allow(clippy::module_inception)]
mod parser;

pub mod errors;
mod lexer;
pub mod literal;
mod syntax_kind;

pub use errors::{ErrorCode, ParseError, ParseErrorKind, RelatedInfo};
pub use lexer::{Lexer, Token, significant_tokens, tokenize};
pub use parser::parse_module;
pub use syntax_kind::{SyntaxKind, kind_to_name};
