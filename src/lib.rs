//! # svmodule-base
//!
//! Interface extraction and an editable content model for SystemVerilog
//! modules.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! model       → Editable module content, parameter reconciliation, events
//!   ↓
//! parser      → Logos lexer, scanning interface parser, ParseError
//!   ↓
//! descriptor  → Port and parameter value records, ModuleInterface
//!   ↓
//! base        → Primitives (Name, TextRange, LineIndex, identifier rules)
//! ```

// ============================================================================
// MODULES (dependency order: base → descriptor → parser → model)
// ============================================================================

/// Foundation types: Name, TextRange, LineIndex, identifier grammar
pub mod base;

/// Descriptors: ports, parameters and the parsed module interface
pub mod descriptor;

/// Parser: logos lexer, interface extraction, error codes
pub mod parser;

/// Model: editable module content kept in sync with its text
pub mod model;

// Re-export foundation types
pub use base::{KeywordCase, LineCol, LineIndex, Name, TextRange, TextSize};

// Re-export the main entry points
pub use descriptor::{Direction, ModuleInterface, ParameterDescriptor, PortDescriptor};
pub use model::{ContentConfig, ContentContext, ContentError, ModuleContent};
pub use parser::{ParseError, parse_module};
