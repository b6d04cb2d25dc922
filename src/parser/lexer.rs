//! Logos-based lexer for the SystemVerilog subset
//!
//! Keywords match case-insensitively. Single-line comments are lexed as
//! trivia so that byte offsets in diagnostics still point into the text the
//! user wrote. Characters the grammar has no use for become `ERROR` tokens
//! instead of aborting the lex.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Source range covered by this token
    pub fn range(&self) -> text_size::TextRange {
        text_size::TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Tokenize, dropping whitespace and comments
pub fn significant_tokens(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).filter(|t| !t.kind.is_trivia()).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    // Ends at any of `\n`, `\r\n` or `\r`
    #[regex(r"//[^\r\n]*")]
    LineComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_$]*")]
    Ident,

    #[regex(r"[0-9][0-9_]*")]
    Integer,

    #[regex(r"([0-9][0-9_]*)?'[sS]?[bBoOdDhH][0-9a-fA-FxXzZ?_]+")]
    BasedInteger,

    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    String,

    #[regex(r"`[a-zA-Z_][a-zA-Z0-9_]*")]
    Directive,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token("::")]
    ColonColon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("#")]
    Hash,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("/*")]
    BlockCommentStart,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("module", ignore(ascii_case))]
    ModuleKw,
    #[token("endmodule", ignore(ascii_case))]
    EndmoduleKw,
    #[token("extern", ignore(ascii_case))]
    ExternKw,
    #[token("parameter", ignore(ascii_case))]
    ParameterKw,
    #[token("input", ignore(ascii_case))]
    InputKw,
    #[token("output", ignore(ascii_case))]
    OutputKw,
    #[token("inout", ignore(ascii_case))]
    InoutKw,
    #[token("wire", ignore(ascii_case))]
    WireKw,
    #[token("reg", ignore(ascii_case))]
    RegKw,
    #[token("logic", ignore(ascii_case))]
    LogicKw,
    #[token("signed", ignore(ascii_case))]
    SignedKw,
    #[token("unsigned", ignore(ascii_case))]
    UnsignedKw,
    #[token("int", ignore(ascii_case))]
    IntKw,
    #[token("integer", ignore(ascii_case))]
    IntegerKw,
    #[token("bit", ignore(ascii_case))]
    BitKw,
    #[token("byte", ignore(ascii_case))]
    ByteKw,
    #[token("shortint", ignore(ascii_case))]
    ShortintKw,
    #[token("longint", ignore(ascii_case))]
    LongintKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,

            // Literals
            Ident => SyntaxKind::IDENT,
            Integer => SyntaxKind::INTEGER,
            BasedInteger => SyntaxKind::BASED_INTEGER,
            String => SyntaxKind::STRING,
            Directive => SyntaxKind::DIRECTIVE,

            // Punctuation
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            Semicolon => SyntaxKind::SEMICOLON,
            ColonColon => SyntaxKind::COLON_COLON,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Eq => SyntaxKind::EQ,
            Hash => SyntaxKind::HASH,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Star => SyntaxKind::STAR,
            Slash => SyntaxKind::SLASH,
            BlockCommentStart => SyntaxKind::BLOCK_COMMENT_START,

            // Keywords
            ModuleKw => SyntaxKind::MODULE_KW,
            EndmoduleKw => SyntaxKind::ENDMODULE_KW,
            ExternKw => SyntaxKind::EXTERN_KW,
            ParameterKw => SyntaxKind::PARAMETER_KW,
            InputKw => SyntaxKind::INPUT_KW,
            OutputKw => SyntaxKind::OUTPUT_KW,
            InoutKw => SyntaxKind::INOUT_KW,
            WireKw => SyntaxKind::WIRE_KW,
            RegKw => SyntaxKind::REG_KW,
            LogicKw => SyntaxKind::LOGIC_KW,
            SignedKw => SyntaxKind::SIGNED_KW,
            UnsignedKw => SyntaxKind::UNSIGNED_KW,
            IntKw => SyntaxKind::INT_KW,
            IntegerKw => SyntaxKind::INTEGER_KW,
            BitKw => SyntaxKind::BIT_KW,
            ByteKw => SyntaxKind::BYTE_KW,
            ShortintKw => SyntaxKind::SHORTINT_KW,
            LongintKw => SyntaxKind::LONGINT_KW,
        }
    }
}
