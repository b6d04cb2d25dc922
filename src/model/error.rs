//! Errors surfaced by content edits

use std::time::Duration;

use thiserror::Error;

use crate::base::IdentError;
use crate::parser::ParseError;

/// How hard an external syntax check rejected the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The text is wrong
    Error,
    /// The check could not run to completion; softer than `Error`
    Abort,
}

/// Why a `set_content`, `rename` or attribute edit was rejected
///
/// Every variant can be shown to a user as a `(title, message)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The external syntax check rejected the text before structural parsing
    #[error("{title}: {detail}")]
    SyntaxPrecheck {
        severity: Severity,
        title: String,
        detail: String,
    },

    /// The external syntax check did not answer in time
    #[error("syntax check did not finish within {0:?}")]
    PrecheckTimeout(Duration),

    /// Structural parse failure; `rendered` carries line and column
    #[error("{rendered}")]
    Parse {
        #[source]
        error: ParseError,
        rendered: String,
    },

    /// A module or parameter name is malformed or reserved, or the module
    /// name is already taken
    #[error("{0}")]
    InvalidIdentifier(#[from] IdentError),

    /// A parameter value is not an integer or does not fit
    #[error("'{value}': {reason}")]
    MalformedInteger { value: String, reason: String },
}

impl ContentError {
    /// Wrap a parse failure, rendering its position against the parsed text
    pub fn parse(error: ParseError, source: &str) -> Self {
        let rendered = error.render(source);
        Self::Parse { error, rendered }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::SyntaxPrecheck { title, .. } => title,
            Self::PrecheckTimeout(_) => "Syntax check timed out",
            Self::Parse { .. } => "Parse error",
            Self::InvalidIdentifier(_) => "Invalid identifier",
            Self::MalformedInteger { .. } => "Invalid parameter value",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::SyntaxPrecheck { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    /// `Abort` for a soft pre-check rejection, `Error` for everything else
    pub fn severity(&self) -> Severity {
        match self {
            Self::SyntaxPrecheck { severity, .. } => *severity,
            _ => Severity::Error,
        }
    }

    /// The structural parse failure, if that is what this is
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::parser::parse_module;

    #[test]
    fn test_parse_error_is_rendered_with_position() {
        let source = "// header\nmodule M(input a);";
        let err = ContentError::parse(parse_module(source).unwrap_err(), source);
        assert_eq!(err.title(), "Parse error");
        assert!(err.message().starts_with("2:"), "{}", err.message());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_precheck_message_is_verbatim() {
        let err = ContentError::SyntaxPrecheck {
            severity: Severity::Abort,
            title: "Toolchain".into(),
            detail: "not installed".into(),
        };
        assert_eq!(err.title(), "Toolchain");
        assert_eq!(err.message(), "not installed");
        assert_eq!(err.severity(), Severity::Abort);
    }

    #[test]
    fn test_identifier_error_converts() {
        let err: ContentError = IdentError::Duplicate { name: "M".into() }.into();
        assert_eq!(err.message(), "M: a module with this name already exists");
        assert_eq!(err.severity(), Severity::Error);
    }
}
