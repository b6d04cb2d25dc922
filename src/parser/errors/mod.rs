//! Parser error handling module
//!
//! Structural parse failures carry:
//! - A categorized error code for filtering and documentation
//! - The byte range the failure points at
//! - An optional hint for fixing the source
//! - Related source locations (e.g. "module declared here" for a missing `endmodule`)

mod codes;
mod error;

pub use codes::{ErrorCode, ParseErrorKind};
pub use error::{ParseError, ParseErrorBuilder, RelatedInfo};

#[cfg(test)]
mod tests;
