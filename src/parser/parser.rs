//! Module interface extraction
//!
//! A scanning parser over the significant tokens of one source text. It does
//! not build a tree: it locates the `module` header, reads the optional
//! `#( ... )` parameter list and the ANSI port list, then only checks that
//! an `endmodule` follows. Everything between the port list and `endmodule`
//! is skipped unread, which keeps the parser tolerant of constructs it has
//! no grammar for.
//!
//! ```text
//! module NAME [#( [parameter [type] [range]] P = INT {, ...} )]
//!     ( [dir [net] [signed] [range] a {, b} {(,|;) dir ...}] ) [;]
//!     ...
//! endmodule
//! ```

use std::num::NonZeroU32;

use text_size::{TextRange, TextSize};
use tracing::{debug, trace};

use super::errors::{ErrorCode, ParseError};
use super::lexer::{Token, significant_tokens};
use super::literal::parse_integer;
use super::syntax_kind::{SyntaxKind, kind_to_name};
use crate::base::Name;
use crate::descriptor::{
    Direction, ModuleInterface, NetKind, ParameterDescriptor, ParameterStyle, PortDescriptor,
};

/// Extract the interface of the first module declared in `source`.
///
/// Fails as a unit: on error no descriptors are returned.
pub fn parse_module(source: &str) -> Result<ModuleInterface, ParseError> {
    let tokens = significant_tokens(source);
    let mut parser = Parser::new(&tokens, TextSize::of(source));
    let result = parser.parse_module();
    match &result {
        Ok(interface) => debug!(
            module = %interface.name,
            ports = interface.ports.len(),
            parameters = interface.parameters.len(),
            "parsed module interface"
        ),
        Err(err) => debug!(code = %err.code, "module parse failed: {}", err.message),
    }
    result
}

/// The parser state
struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    eof: TextSize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>], eof: TextSize) -> Self {
        Self {
            tokens,
            pos: 0,
            eof,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn nth_kind(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.nth_kind(0) == Some(kind)
    }

    fn current_range(&self) -> TextRange {
        self.current()
            .map(Token::range)
            .unwrap_or_else(|| TextRange::empty(self.eof))
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Option<&'t Token<'a>> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: SyntaxKind) -> Option<&'t Token<'a>> {
        if self.at(kind) { self.bump() } else { None }
    }

    fn expect(
        &mut self,
        kind: SyntaxKind,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<&'t Token<'a>, ParseError> {
        match self.eat(kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(code, message)),
        }
    }

    /// Skip ahead to the next token of `kind` and consume it
    fn find(&mut self, kind: SyntaxKind) -> Option<&'t Token<'a>> {
        while let Some(token) = self.bump() {
            if token.kind == kind {
                return Some(token);
            }
        }
        None
    }

    // =========================================================================
    // Error helpers
    // =========================================================================

    fn describe_current(&self) -> String {
        match self.current() {
            None => "end of text".to_string(),
            Some(t) => match t.kind {
                SyntaxKind::IDENT
                | SyntaxKind::INTEGER
                | SyntaxKind::BASED_INTEGER
                | SyntaxKind::STRING
                | SyntaxKind::DIRECTIVE
                | SyntaxKind::ERROR => format!("{} '{}'", kind_to_name(t.kind), t.text),
                kind => kind_to_name(kind).to_string(),
            },
        }
    }

    fn unexpected(&self, code: ErrorCode, message: impl Into<String>) -> ParseError {
        let mut err = ParseError::builder(code)
            .message(format!("{}, found {}", message.into(), self.describe_current()))
            .range(self.current_range());
        if self.at(SyntaxKind::BLOCK_COMMENT_START) {
            err = err.hint("block comments are not supported; use '//' line comments");
        }
        err.build()
    }

    fn unclosed(&self, what: &str, open: &Token<'_>) -> ParseError {
        ParseError::builder(ErrorCode::E0202)
            .message(format!("{} is never closed", what))
            .range(TextRange::empty(self.eof))
            .related(format!("{} opened here", what), open.range())
            .hint("add ')' after the last declaration")
            .build()
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// Module = Header ParameterList? PortList Body 'endmodule'
    fn parse_module(&mut self) -> Result<ModuleInterface, ParseError> {
        let (module_kw, name) = self.parse_header()?;

        let parameters = if self.at(SyntaxKind::HASH) {
            self.parse_parameter_list()?
        } else {
            Vec::new()
        };

        let ports = self.parse_port_list(name.text)?;

        if self.find(SyntaxKind::ENDMODULE_KW).is_none() {
            return Err(ParseError::builder(ErrorCode::E0301)
                .message(format!(
                    "module '{}' is never closed with 'endmodule'",
                    name.text
                ))
                .range(TextRange::empty(self.eof))
                .related("module declared here", module_kw.range().cover(name.range()))
                .build());
        }

        Ok(ModuleInterface {
            name: Name::new(name.text),
            name_range: name.range(),
            ports,
            parameters,
        })
    }

    /// Header = 'module' Word
    ///
    /// `extern module` prototypes are skipped; the first defining header wins.
    fn parse_header(&mut self) -> Result<(&'t Token<'a>, &'t Token<'a>), ParseError> {
        loop {
            let Some(module_kw) = self.find(SyntaxKind::MODULE_KW) else {
                return Err(ParseError::builder(ErrorCode::E0101)
                    .message("cannot find a 'module <name>' declaration")
                    .range(TextRange::empty(TextSize::new(0)))
                    .hint("the text must contain 'module <name> (...); ... endmodule'")
                    .build());
            };
            let is_prototype =
                self.pos >= 2 && self.tokens[self.pos - 2].kind == SyntaxKind::EXTERN_KW;
            match self.current() {
                Some(name) if name.kind.is_word() && !is_prototype => {
                    self.bump();
                    trace!(module = name.text, "found module header");
                    return Ok((module_kw, name));
                }
                _ => continue,
            }
        }
    }

    /// ParameterList = '#' '(' (ParameterDecl (',' ParameterDecl)*)? ')'
    fn parse_parameter_list(&mut self) -> Result<Vec<ParameterDescriptor>, ParseError> {
        self.bump(); // '#'
        let open = self.expect(
            SyntaxKind::L_PAREN,
            ErrorCode::E0204,
            "expected '(' after '#' to open the parameter list",
        )?;

        let mut parameters = Vec::new();
        if self.eat(SyntaxKind::R_PAREN).is_some() {
            return Ok(parameters);
        }

        // Assignments without their own 'parameter' keyword inherit the
        // style of the previous declaration.
        let mut style = ParameterStyle::Untyped;
        loop {
            if self.eat(SyntaxKind::PARAMETER_KW).is_some() {
                style = self.parse_parameter_type();
            }

            let name = self.expect(
                SyntaxKind::IDENT,
                ErrorCode::E0204,
                "expected parameter name",
            )?;
            self.expect(
                SyntaxKind::EQ,
                ErrorCode::E0204,
                format!("expected '=' after parameter '{}'", name.text),
            )?;
            let value = self.parse_parameter_value(name.text)?;
            trace!(parameter = name.text, value, "parsed parameter");
            parameters.push(ParameterDescriptor::new(name.text, style.clone(), value));

            match self.nth_kind(0) {
                Some(SyntaxKind::COMMA) => {
                    self.bump();
                }
                Some(SyntaxKind::R_PAREN) => {
                    self.bump();
                    return Ok(parameters);
                }
                None => return Err(self.unclosed("parameter list", open)),
                Some(_) => {
                    return Err(self.unexpected(
                        ErrorCode::E0204,
                        "expected ',' or ')' after parameter declaration",
                    ));
                }
            }
        }
    }

    /// ParameterType = DataType? ('signed' | 'unsigned')? Range?
    fn parse_parameter_type(&mut self) -> ParameterStyle {
        let mut parts: Vec<String> = Vec::new();
        if let Some(kind) = self.nth_kind(0).filter(|k| k.is_parameter_type()) {
            let token = self.bump();
            trace!(?kind, "parameter data type");
            parts.extend(token.map(|t| t.text.to_ascii_lowercase()));
        }
        if self.at(SyntaxKind::SIGNED_KW) || self.at(SyntaxKind::UNSIGNED_KW) {
            parts.extend(self.bump().map(|t| t.text.to_ascii_lowercase()));
        }
        if self.at(SyntaxKind::L_BRACKET) {
            let mut range = String::new();
            while let Some(token) = self.bump() {
                range.push_str(token.text);
                if token.kind == SyntaxKind::R_BRACKET {
                    break;
                }
            }
            parts.push(range);
        }

        if parts.is_empty() {
            ParameterStyle::Untyped
        } else {
            ParameterStyle::Typed {
                ty: Name::new(parts.join(" ")),
            }
        }
    }

    /// ParameterValue = ('+' | '-')? IntegerLiteral
    fn parse_parameter_value(&mut self, name: &str) -> Result<i64, ParseError> {
        let sign = match self.nth_kind(0) {
            Some(SyntaxKind::MINUS) => self.bump().map(|t| (true, t.offset)),
            Some(SyntaxKind::PLUS) => self.bump().map(|t| (false, t.offset)),
            _ => None,
        };

        let literal = match self.current() {
            Some(t) if t.kind.is_integer() => t,
            _ => {
                return Err(self.unexpected(
                    ErrorCode::E0401,
                    format!("value of parameter '{}' is not an integer literal", name),
                ));
            }
        };
        self.bump();

        let value = parse_integer(literal.text).map_err(|e| {
            ParseError::new(
                format!("value of parameter '{}': {}", name, e),
                literal.range(),
                ErrorCode::E0401,
            )
        })?;

        if !matches!(
            self.nth_kind(0),
            Some(SyntaxKind::COMMA) | Some(SyntaxKind::R_PAREN) | None
        ) {
            let start = sign.map(|(_, offset)| offset).unwrap_or(literal.offset);
            return Err(ParseError::builder(ErrorCode::E0401)
                .message(format!(
                    "value of parameter '{}' must be a single integer literal",
                    name
                ))
                .range(TextRange::new(start, self.current_range().end()))
                .hint("default values are not evaluated; write the resulting number")
                .build());
        }

        Ok(match sign {
            Some((true, _)) => -value,
            _ => value,
        })
    }

    /// PortList = '(' (PortDecl ((',' | ';') PortDecl)*)? ')' ';'?
    fn parse_port_list(&mut self, module: &str) -> Result<Vec<PortDescriptor>, ParseError> {
        let open = self.expect(
            SyntaxKind::L_PAREN,
            ErrorCode::E0201,
            format!("expected '(' to open the port list of module '{}'", module),
        )?;

        let mut ports = Vec::new();
        if self.eat(SyntaxKind::R_PAREN).is_none() {
            loop {
                self.parse_port_declaration(open, &mut ports)?;
                match self.nth_kind(0) {
                    Some(SyntaxKind::COMMA) | Some(SyntaxKind::SEMICOLON) => {
                        self.bump();
                    }
                    Some(SyntaxKind::R_PAREN) => {
                        self.bump();
                        break;
                    }
                    None => return Err(self.unclosed("port list", open)),
                    Some(_) => {
                        return Err(self.unexpected(
                            ErrorCode::E0203,
                            "expected ',' or ')' after port declaration",
                        ));
                    }
                }
            }
        }
        self.eat(SyntaxKind::SEMICOLON);
        Ok(ports)
    }

    /// PortDecl = Direction NetKind? ('signed' | 'unsigned')? Range? Ident (',' Ident)*
    ///
    /// Data types other than 'reg' and 'logic' are rejected with a hint.
    ///
    /// A comma followed by a plain identifier continues the name list; a
    /// comma followed by anything else ends this declaration.
    fn parse_port_declaration(
        &mut self,
        open: &Token<'_>,
        ports: &mut Vec<PortDescriptor>,
    ) -> Result<(), ParseError> {
        let direction = match self.nth_kind(0) {
            Some(SyntaxKind::INPUT_KW) => Direction::Input,
            Some(SyntaxKind::OUTPUT_KW) => Direction::Output,
            Some(SyntaxKind::INOUT_KW) => Direction::Inout,
            None => return Err(self.unclosed("port list", open)),
            Some(SyntaxKind::IDENT) => {
                return Err(self
                    .unexpected(
                        ErrorCode::E0203,
                        "expected port direction ('input', 'output' or 'inout')",
                    )
                    .with_hint(
                        "only ANSI-style port lists are supported; \
                         declare ports as 'input wire [7:0] name'",
                    ));
            }
            Some(_) => {
                return Err(self.unexpected(
                    ErrorCode::E0203,
                    "expected port direction ('input', 'output' or 'inout')",
                ));
            }
        };
        self.bump();

        let net = match self.nth_kind(0) {
            Some(SyntaxKind::REG_KW) => NetKind::Reg,
            Some(SyntaxKind::LOGIC_KW) => NetKind::Logic,
            _ => NetKind::Wire,
        };
        if self.nth_kind(0).is_some_and(SyntaxKind::is_net_kind) {
            self.bump();
        }
        if self.at(SyntaxKind::SIGNED_KW) || self.at(SyntaxKind::UNSIGNED_KW) {
            self.bump();
        }
        // 'reg' and 'logic' are consumed above; what is left are 2-state and integer types
        if self.nth_kind(0).is_some_and(SyntaxKind::is_parameter_type) {
            return Err(self
                .unexpected(ErrorCode::E0203, format!("expected name of {} port", direction))
                .with_hint(
                    "only 'wire', 'reg' and 'logic' ports are supported; \
                     declare e.g. 'output logic [31:0] count'",
                ));
        }

        let width = if self.at(SyntaxKind::L_BRACKET) {
            self.parse_range()?
        } else {
            NonZeroU32::MIN
        };

        loop {
            let name = self.expect(
                SyntaxKind::IDENT,
                ErrorCode::E0203,
                format!("expected name of {} port", direction),
            )?;
            trace!(port = name.text, %direction, width = width.get(), "parsed port");
            ports.push(PortDescriptor::new(name.text, direction, net, width));

            if self.at(SyntaxKind::COMMA) && self.nth_kind(1) == Some(SyntaxKind::IDENT) {
                self.bump();
            } else {
                return Ok(());
            }
        }
    }

    /// Range = '[' Integer ':' Integer ']'
    fn parse_range(&mut self) -> Result<NonZeroU32, ParseError> {
        let open = self.bump().map(Token::range).unwrap_or_else(|| self.current_range());
        let high = self.parse_range_bound()?;
        self.expect(
            SyntaxKind::COLON,
            ErrorCode::E0205,
            "expected ':' in bit range",
        )?;
        let low = self.parse_range_bound()?;
        let close = self.expect(
            SyntaxKind::R_BRACKET,
            ErrorCode::E0205,
            "expected ']' to close bit range",
        )?;
        let range = open.cover(close.range());

        if high < low {
            return Err(ParseError::builder(ErrorCode::E0402)
                .message(format!(
                    "bit range [{}:{}] is ascending; expected [high:low] with high >= low",
                    high, low
                ))
                .range(range)
                .hint(format!("write [{}:{}]", low, high))
                .build());
        }

        high.checked_sub(low)
            .and_then(|span| span.checked_add(1))
            .and_then(|width| u32::try_from(width).ok())
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                ParseError::new(
                    format!("bit range [{}:{}] is too wide", high, low),
                    range,
                    ErrorCode::E0402,
                )
            })
    }

    fn parse_range_bound(&mut self) -> Result<i64, ParseError> {
        let token = match self.current() {
            Some(t) if t.kind.is_integer() => t,
            _ => {
                return Err(self
                    .unexpected(ErrorCode::E0205, "bit range bounds must be integer literals")
                    .with_hint("parameterized widths such as [WIDTH-1:0] are not supported"));
            }
        };
        self.bump();
        parse_integer(token.text)
            .map_err(|e| ParseError::new(e.to_string(), token.range(), ErrorCode::E0401))
    }
}
