//! Token kinds produced by the lexer
//!
//! Only the keywords the interface extractor cares about get their own kind.
//! Everything else in a module body lexes as identifiers, literals,
//! punctuation or `ERROR` and is skipped while scanning for `endmodule`.

/// All token kinds in the SystemVerilog subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,         // counter_q
    INTEGER,       // 42, 1_000
    BASED_INTEGER, // 8'hFF, 'd10
    STRING,        // "text"
    DIRECTIVE,     // `timescale

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,       // (
    R_PAREN,       // )
    L_BRACKET,     // [
    R_BRACKET,     // ]
    L_BRACE,       // {
    R_BRACE,       // }
    SEMICOLON,     // ;
    COLON,         // :
    COLON_COLON,   // ::
    COMMA,         // ,
    DOT,           // .
    EQ,            // =
    HASH,          // #
    PLUS,          // +
    MINUS,         // -
    STAR,          // *
    SLASH,         // /
    BLOCK_COMMENT_START, // /* (unsupported comment style)

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    MODULE_KW,
    ENDMODULE_KW,
    EXTERN_KW,
    PARAMETER_KW,
    INPUT_KW,
    OUTPUT_KW,
    INOUT_KW,
    WIRE_KW,
    REG_KW,
    LOGIC_KW,
    SIGNED_KW,
    UNSIGNED_KW,
    INT_KW,
    INTEGER_KW,
    BIT_KW,
    BYTE_KW,
    SHORTINT_KW,
    LONGINT_KW,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    ERROR,
}

impl SyntaxKind {
    /// Check if this is trivia (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::MODULE_KW as u16) && (self as u16) <= (Self::LONGINT_KW as u16)
    }

    /// Identifiers and keywords: anything a `\w+` would match
    pub fn is_word(self) -> bool {
        self == Self::IDENT || self.is_keyword()
    }

    /// Net/variable kinds allowed between a direction and a port name
    pub fn is_net_kind(self) -> bool {
        matches!(self, Self::WIRE_KW | Self::REG_KW | Self::LOGIC_KW)
    }

    /// Data types allowed after `parameter`
    pub fn is_parameter_type(self) -> bool {
        matches!(
            self,
            Self::INT_KW
                | Self::INTEGER_KW
                | Self::BIT_KW
                | Self::BYTE_KW
                | Self::SHORTINT_KW
                | Self::LONGINT_KW
                | Self::LOGIC_KW
                | Self::REG_KW
        )
    }

    /// Integer literal tokens
    pub fn is_integer(self) -> bool {
        matches!(self, Self::INTEGER | Self::BASED_INTEGER)
    }
}

/// Human-readable name of a token kind, for diagnostics
pub fn kind_to_name(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::WHITESPACE => "whitespace",
        SyntaxKind::LINE_COMMENT => "comment",
        SyntaxKind::IDENT => "identifier",
        SyntaxKind::INTEGER | SyntaxKind::BASED_INTEGER => "integer",
        SyntaxKind::STRING => "string",
        SyntaxKind::DIRECTIVE => "compiler directive",
        SyntaxKind::L_PAREN => "'('",
        SyntaxKind::R_PAREN => "')'",
        SyntaxKind::L_BRACKET => "'['",
        SyntaxKind::R_BRACKET => "']'",
        SyntaxKind::L_BRACE => "'{'",
        SyntaxKind::R_BRACE => "'}'",
        SyntaxKind::SEMICOLON => "';'",
        SyntaxKind::COLON => "':'",
        SyntaxKind::COLON_COLON => "'::'",
        SyntaxKind::COMMA => "','",
        SyntaxKind::DOT => "'.'",
        SyntaxKind::EQ => "'='",
        SyntaxKind::HASH => "'#'",
        SyntaxKind::PLUS => "'+'",
        SyntaxKind::MINUS => "'-'",
        SyntaxKind::STAR => "'*'",
        SyntaxKind::SLASH => "'/'",
        SyntaxKind::BLOCK_COMMENT_START => "'/*'",
        SyntaxKind::MODULE_KW => "'module'",
        SyntaxKind::ENDMODULE_KW => "'endmodule'",
        SyntaxKind::EXTERN_KW => "'extern'",
        SyntaxKind::PARAMETER_KW => "'parameter'",
        SyntaxKind::INPUT_KW => "'input'",
        SyntaxKind::OUTPUT_KW => "'output'",
        SyntaxKind::INOUT_KW => "'inout'",
        SyntaxKind::WIRE_KW => "'wire'",
        SyntaxKind::REG_KW => "'reg'",
        SyntaxKind::LOGIC_KW => "'logic'",
        SyntaxKind::SIGNED_KW => "'signed'",
        SyntaxKind::UNSIGNED_KW => "'unsigned'",
        SyntaxKind::INT_KW => "'int'",
        SyntaxKind::INTEGER_KW => "'integer'",
        SyntaxKind::BIT_KW => "'bit'",
        SyntaxKind::BYTE_KW => "'byte'",
        SyntaxKind::SHORTINT_KW => "'shortint'",
        SyntaxKind::LONGINT_KW => "'longint'",
        SyntaxKind::ERROR => "invalid token",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_range() {
        assert!(SyntaxKind::MODULE_KW.is_keyword());
        assert!(SyntaxKind::LONGINT_KW.is_keyword());
        assert!(!SyntaxKind::IDENT.is_keyword());
        assert!(!SyntaxKind::ERROR.is_keyword());
    }

    #[test]
    fn test_word_kinds() {
        assert!(SyntaxKind::IDENT.is_word());
        assert!(SyntaxKind::INPUT_KW.is_word());
        assert!(!SyntaxKind::INTEGER.is_word());
    }

    #[test]
    fn test_kind_to_name() {
        assert_eq!(kind_to_name(SyntaxKind::ENDMODULE_KW), "'endmodule'");
        assert_eq!(kind_to_name(SyntaxKind::BASED_INTEGER), "integer");
    }
}
