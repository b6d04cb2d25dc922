//! Identifier grammar and reserved keywords.
//!
//! Module and parameter names must start with an ASCII letter, continue with
//! word characters, must not end in `_` and must not contain `__`. Reserved
//! keywords are matched case-insensitively.

use std::fmt;

use thiserror::Error;

/// Reserved SystemVerilog keywords, sorted for binary search.
const RESERVED_KEYWORDS: &[&str] = &[
    "alias",
    "always",
    "always_comb",
    "always_ff",
    "always_latch",
    "and",
    "assert",
    "assign",
    "assume",
    "automatic",
    "before",
    "begin",
    "bind",
    "bins",
    "binsof",
    "bit",
    "break",
    "buf",
    "bufif0",
    "bufif1",
    "byte",
    "case",
    "casex",
    "casez",
    "cell",
    "chandle",
    "checker",
    "class",
    "clocking",
    "cmos",
    "config",
    "const",
    "constraint",
    "context",
    "continue",
    "cover",
    "covergroup",
    "coverpoint",
    "cross",
    "deassign",
    "default",
    "defparam",
    "design",
    "disable",
    "dist",
    "do",
    "edge",
    "else",
    "end",
    "endcase",
    "endchecker",
    "endclass",
    "endclocking",
    "endconfig",
    "endfunction",
    "endgenerate",
    "endgroup",
    "endinterface",
    "endmodule",
    "endpackage",
    "endprimitive",
    "endprogram",
    "endproperty",
    "endsequence",
    "endspecify",
    "endtable",
    "endtask",
    "enum",
    "event",
    "expect",
    "export",
    "extends",
    "extern",
    "final",
    "for",
    "force",
    "foreach",
    "forever",
    "fork",
    "function",
    "generate",
    "genvar",
    "if",
    "iff",
    "import",
    "initial",
    "inout",
    "input",
    "inside",
    "instance",
    "int",
    "integer",
    "interface",
    "join",
    "join_any",
    "join_none",
    "library",
    "localparam",
    "logic",
    "longint",
    "macromodule",
    "modport",
    "module",
    "nand",
    "negedge",
    "new",
    "nor",
    "not",
    "null",
    "or",
    "output",
    "package",
    "packed",
    "parameter",
    "posedge",
    "primitive",
    "priority",
    "program",
    "property",
    "protected",
    "pure",
    "rand",
    "randc",
    "real",
    "realtime",
    "ref",
    "reg",
    "release",
    "repeat",
    "return",
    "sequence",
    "shortint",
    "shortreal",
    "signed",
    "specify",
    "specparam",
    "static",
    "string",
    "struct",
    "super",
    "supply0",
    "supply1",
    "table",
    "task",
    "this",
    "time",
    "tri",
    "type",
    "typedef",
    "union",
    "unique",
    "unsigned",
    "use",
    "var",
    "virtual",
    "void",
    "wait",
    "wand",
    "while",
    "wire",
    "with",
    "wor",
    "xnor",
    "xor",
];

/// Display case for reserved keywords in messages and generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeywordCase {
    #[default]
    Lower,
    Upper,
}

impl KeywordCase {
    pub fn from_upper_case(upper: bool) -> Self {
        if upper { Self::Upper } else { Self::Lower }
    }

    /// Render a keyword in this case
    pub fn apply(self, keyword: &str) -> String {
        match self {
            Self::Lower => keyword.to_ascii_lowercase(),
            Self::Upper => keyword.to_ascii_uppercase(),
        }
    }

    /// All reserved keywords rendered in this case, in sorted order
    pub fn keywords(self) -> impl Iterator<Item = String> {
        RESERVED_KEYWORDS.iter().map(move |kw| self.apply(kw))
    }
}

/// Why a proposed identifier was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentError {
    /// Fails the identifier grammar
    #[error("{name}: {reason}")]
    Malformed { name: String, reason: MalformedReason },

    /// Collides with a reserved keyword
    #[error("{name}: '{keyword}' is a reserved keyword")]
    Keyword { name: String, keyword: String },

    /// Already used by another module in the owning design
    #[error("{name}: a module with this name already exists")]
    Duplicate { name: String },
}

impl IdentError {
    /// The rejected identifier
    pub fn name(&self) -> &str {
        match self {
            Self::Malformed { name, .. }
            | Self::Keyword { name, .. }
            | Self::Duplicate { name } => name,
        }
    }
}

/// Which grammar rule a malformed identifier broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedReason {
    Empty,
    LeadingNonLetter,
    InvalidCharacter(char),
    TrailingUnderscore,
    DoubleUnderscore,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "name is empty"),
            Self::LeadingNonLetter => write!(f, "name must start with a letter"),
            Self::InvalidCharacter(c) => write!(f, "invalid character '{}' in name", c),
            Self::TrailingUnderscore => write!(f, "name must not end with '_'"),
            Self::DoubleUnderscore => write!(f, "name must not contain '__'"),
        }
    }
}

/// Check whether `name` is a reserved keyword, ignoring case
pub fn is_reserved_keyword(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    RESERVED_KEYWORDS.binary_search(&lower.as_str()).is_ok()
}

fn check_grammar(name: &str) -> Result<(), MalformedReason> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err(MalformedReason::Empty),
        Some(c) if !c.is_ascii_alphabetic() => return Err(MalformedReason::LeadingNonLetter),
        Some(_) => {}
    }
    if let Some(c) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(MalformedReason::InvalidCharacter(c));
    }
    if name.ends_with('_') {
        return Err(MalformedReason::TrailingUnderscore);
    }
    if name.contains("__") {
        return Err(MalformedReason::DoubleUnderscore);
    }
    Ok(())
}

/// Validate a module or parameter name against the identifier grammar and
/// the reserved keyword table.
///
/// `case` only affects how a colliding keyword is rendered in the error.
/// Duplicate detection needs the owning design and happens in the model.
pub fn validate_identifier(name: &str, case: KeywordCase) -> Result<(), IdentError> {
    check_grammar(name).map_err(|reason| IdentError::Malformed {
        name: name.to_string(),
        reason,
    })?;
    if is_reserved_keyword(name) {
        return Err(IdentError::Keyword {
            name: name.to_string(),
            keyword: case.apply(name),
        });
    }
    Ok(())
}
