//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Module header errors
//! - E02xx: Interface declaration errors (parameter and port lists)
//! - E03xx: Module body errors
//! - E04xx: Literal errors

use std::fmt;

/// The four ways a structural parse can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// No `module <name>` header in the text
    ModuleNotFound,
    /// The parameter or port list is missing or malformed
    PortDeclaration,
    /// No `endmodule` after the port list
    UnterminatedModule,
    /// A value or bit range is not a usable integer
    MalformedInteger,
}

impl ParseErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModuleNotFound => "module not found",
            Self::PortDeclaration => "port declaration error",
            Self::UnterminatedModule => "unterminated module",
            Self::MalformedInteger => "malformed integer literal",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error codes for parser diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Module header
    // =========================================================================
    /// No `module <name>` header
    E0101,

    // =========================================================================
    // E02xx: Interface declarations
    // =========================================================================
    /// Missing `(` opening the port list
    E0201,
    /// Missing `)` closing the port or parameter list
    E0202,
    /// Malformed port declaration
    E0203,
    /// Malformed parameter declaration
    E0204,
    /// Bit range is not made of integer literals
    E0205,

    // =========================================================================
    // E03xx: Module body
    // =========================================================================
    /// Missing `endmodule`
    E0301,

    // =========================================================================
    // E04xx: Literals
    // =========================================================================
    /// Value is not an integer literal, or is out of range
    E0401,
    /// Bit range yields a width below one
    E0402,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0301 => "E0301",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
        }
    }

    /// The failure category this code belongs to
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::E0101 => ParseErrorKind::ModuleNotFound,
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 => {
                ParseErrorKind::PortDeclaration
            }
            Self::E0301 => ParseErrorKind::UnterminatedModule,
            Self::E0401 | Self::E0402 => ParseErrorKind::MalformedInteger,
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "cannot find module declaration",
            Self::E0201 => "missing port list",
            Self::E0202 => "unclosed parenthesis",
            Self::E0203 => "invalid port declaration",
            Self::E0204 => "invalid parameter declaration",
            Self::E0205 => "unsupported bit range",
            Self::E0301 => "module is never closed with 'endmodule'",
            Self::E0401 => "invalid integer literal",
            Self::E0402 => "invalid bit range",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::E0201.as_str(), "E0201");
        assert_eq!(ErrorCode::E0402.as_str(), "E0402");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::E0301), "E0301");
    }

    #[test]
    fn test_error_code_kind() {
        assert_eq!(ErrorCode::E0101.kind(), ParseErrorKind::ModuleNotFound);
        assert_eq!(ErrorCode::E0204.kind(), ParseErrorKind::PortDeclaration);
        assert_eq!(ErrorCode::E0301.kind(), ParseErrorKind::UnterminatedModule);
        assert_eq!(ErrorCode::E0402.kind(), ParseErrorKind::MalformedInteger);
    }

    #[test]
    fn test_error_code_default_message() {
        assert_eq!(ErrorCode::E0202.default_message(), "unclosed parenthesis");
    }
}
