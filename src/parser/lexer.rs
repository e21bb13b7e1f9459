//! Lexer (scanner) for HLSL source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser.  Whitespace and comments (`//` and `/* ... */`) are skipped and
//! never emitted.  Preprocessor directives are *not* expanded: a `#` at the
//! first non-whitespace column of a line produces a single [`Directive`]
//! token carrying the remainder of the logical line verbatim (trailing
//! backslash continuations are joined).
//!
//! Reserved spellings are promoted to dedicated kinds through a lookup
//! table; the vector (`float4`) and matrix (`float4x4`) spellings are
//! generated from the scalar type list rather than written out by hand.
//!
//! [`Directive`]: TokenKind::Directive

use crate::source::{SourceCode, SourceCursor, SourcePos};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Token classes produced by the lexer.
///
/// Note the bracket naming: `LBracket`/`RBracket` are the *parentheses*
/// `(` `)` and `LParen`/`RParen` the *square brackets* `[` `]`.  The names
/// are historical but fixed; the parser and its tests rely on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,

    // Literals
    BoolLiteral,
    IntLiteral,
    FloatLiteral,

    // Type-denoting keywords
    ScalarType,
    VectorType,
    MatrixType,
    Texture,
    Sampler,
    UniformBuffer,
    Void,
    Struct,

    // Binding keywords
    Register,
    PackOffset,

    // Control flow keywords
    If,
    Else,
    Switch,
    Case,
    Default,
    For,
    While,
    Do,
    Return,
    CtrlTransfer,

    // Modifier keyword classes
    InputModifier,
    StorageModifier,
    TypeModifier,

    // Operators, classified by grammatical role
    AssignOp,
    UnaryOp,
    BinaryOp,
    TernaryOp,

    // Punctuation; see the type-level note on the bracket naming
    LBracket,
    RBracket,
    LCurly,
    RCurly,
    LParen,
    RParen,
    Comma,
    Semicolon,
    Colon,
    Dot,

    Directive,
    EndOfStream,
}

/// A single token: kind, exact source spelling and start position.
///
/// Tokens are values; the parser never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub spelling: String,
    pub pos: SourcePos,
}

impl Token {
    fn new(kind: TokenKind, spelling: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            pos,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::EndOfStream {
            f.write_str("end of stream")
        } else {
            write!(f, "'{}'", self.spelling)
        }
    }
}

/// Lexer error type.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("lexical error ({pos}) : {message}")]
pub struct ScanError {
    pub pos: SourcePos,
    pub message: String,
}

impl ScanError {
    fn new(pos: SourcePos, message: impl Into<String>) -> Self {
        Self {
            pos,
            message: message.into(),
        }
    }
}

const SCALAR_TYPES: [&str; 12] = [
    "bool",
    "int",
    "uint",
    "dword",
    "half",
    "float",
    "double",
    "min16float",
    "min10float",
    "min16int",
    "min12int",
    "min16uint",
];

const TEXTURE_TYPES: [&str; 9] = [
    "Texture1D",
    "Texture1DArray",
    "Texture2D",
    "Texture2DArray",
    "Texture3D",
    "TextureCube",
    "TextureCubeArray",
    "Texture2DMS",
    "Texture2DMSArray",
];

const SAMPLER_TYPES: [&str; 8] = [
    "sampler",
    "sampler1D",
    "sampler2D",
    "sampler3D",
    "samplerCUBE",
    "sampler_state",
    "SamplerState",
    "SamplerComparisonState",
];

/// Reserved spellings promoted to dedicated token kinds.
///
/// `uniform` doubles as an input and a storage modifier in HLSL; it is
/// classified as `InputModifier` here, which is where the parameter grammar
/// consumes it.
const RESERVED: [(&str, TokenKind); 34] = [
    ("true", TokenKind::BoolLiteral),
    ("false", TokenKind::BoolLiteral),
    ("void", TokenKind::Void),
    ("struct", TokenKind::Struct),
    ("register", TokenKind::Register),
    ("packoffset", TokenKind::PackOffset),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("switch", TokenKind::Switch),
    ("case", TokenKind::Case),
    ("default", TokenKind::Default),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("return", TokenKind::Return),
    ("break", TokenKind::CtrlTransfer),
    ("continue", TokenKind::CtrlTransfer),
    ("discard", TokenKind::CtrlTransfer),
    ("in", TokenKind::InputModifier),
    ("out", TokenKind::InputModifier),
    ("inout", TokenKind::InputModifier),
    ("uniform", TokenKind::InputModifier),
    ("extern", TokenKind::StorageModifier),
    ("nointerpolation", TokenKind::StorageModifier),
    ("precise", TokenKind::StorageModifier),
    ("shared", TokenKind::StorageModifier),
    ("groupshared", TokenKind::StorageModifier),
    ("static", TokenKind::StorageModifier),
    ("volatile", TokenKind::StorageModifier),
    ("const", TokenKind::TypeModifier),
    ("row_major", TokenKind::TypeModifier),
    ("column_major", TokenKind::TypeModifier),
    ("cbuffer", TokenKind::UniformBuffer),
    ("tbuffer", TokenKind::UniformBuffer),
];

static KEYWORDS: LazyLock<FxHashMap<String, TokenKind>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();

    for (spelling, kind) in RESERVED {
        map.insert(spelling.to_string(), kind);
    }

    for scalar in SCALAR_TYPES {
        map.insert(scalar.to_string(), TokenKind::ScalarType);
        for rows in 1..=4 {
            map.insert(format!("{scalar}{rows}"), TokenKind::VectorType);
            for cols in 1..=4 {
                map.insert(format!("{scalar}{rows}x{cols}"), TokenKind::MatrixType);
            }
        }
    }

    for texture in TEXTURE_TYPES {
        map.insert(texture.to_string(), TokenKind::Texture);
    }
    for sampler in SAMPLER_TYPES {
        map.insert(sampler.to_string(), TokenKind::Sampler);
    }

    map
});

/// Lexer for HLSL source code.
pub struct Lexer {
    cursor: SourceCursor,
    /// True while only whitespace has been seen since the last line break;
    /// `#` opens a directive only in that state.
    fresh_line: bool,
}

impl Lexer {
    pub fn new(source: &SourceCode) -> Self {
        Self {
            cursor: source.cursor(),
            fresh_line: true,
        }
    }

    /// Tokenize the entire input.
    ///
    /// The terminating [`EndOfStream`] token is emitted exactly once.
    ///
    /// [`EndOfStream`]: TokenKind::EndOfStream
    pub fn tokenize(&mut self) -> Result<Vec<Token>, ScanError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            if self.cursor.is_at_end() {
                tokens.push(Token::new(TokenKind::EndOfStream, "", self.cursor.pos()));
                break;
            }

            let token = self.next_token()?;
            self.fresh_line = false;
            tokens.push(token);
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, ScanError> {
        let pos = self.cursor.pos();

        if self.cursor.peek() == Some('#') {
            if self.fresh_line {
                return self.directive(pos);
            }
            return Err(ScanError::new(pos, "unexpected character: '#'"));
        }

        let ch = self
            .cursor
            .advance()
            .ok_or_else(|| ScanError::new(pos, "unexpected end of stream"))?;

        match ch {
            '0'..='9' => self.number_literal(ch, pos),

            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier_or_keyword(ch, pos)),

            '"' | '\'' => self.reject_quoted_literal(ch, pos),

            '+' | '-' | '&' | '|' => Ok(self.op_with_double_or_assign(ch, pos)),

            '*' | '/' | '%' | '^' => Ok(self.op_with_assign(ch, pos)),

            '=' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.advance();
                    Ok(Token::new(TokenKind::BinaryOp, "==", pos))
                } else {
                    Ok(Token::new(TokenKind::AssignOp, "=", pos))
                }
            }
            '!' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.advance();
                    Ok(Token::new(TokenKind::BinaryOp, "!=", pos))
                } else {
                    Ok(Token::new(TokenKind::UnaryOp, "!", pos))
                }
            }
            '~' => Ok(Token::new(TokenKind::UnaryOp, "~", pos)),
            '?' => Ok(Token::new(TokenKind::TernaryOp, "?", pos)),

            '<' | '>' => Ok(self.angle_or_shift(ch, pos)),

            '(' => Ok(Token::new(TokenKind::LBracket, "(", pos)),
            ')' => Ok(Token::new(TokenKind::RBracket, ")", pos)),
            '{' => Ok(Token::new(TokenKind::LCurly, "{", pos)),
            '}' => Ok(Token::new(TokenKind::RCurly, "}", pos)),
            '[' => Ok(Token::new(TokenKind::LParen, "[", pos)),
            ']' => Ok(Token::new(TokenKind::RParen, "]", pos)),
            ',' => Ok(Token::new(TokenKind::Comma, ",", pos)),
            ';' => Ok(Token::new(TokenKind::Semicolon, ";", pos)),
            ':' => Ok(Token::new(TokenKind::Colon, ":", pos)),
            '.' => Ok(Token::new(TokenKind::Dot, ".", pos)),

            _ => Err(ScanError::new(pos, format!("unexpected character: '{ch}'"))),
        }
    }

    /// `+ - & |`: doubled spelling, `=` suffix, or the bare operator.
    ///
    /// `++`/`--` are unary, `&&`/`||` binary; every `=`-suffixed spelling is
    /// an assignment operator.
    fn op_with_double_or_assign(&mut self, ch: char, pos: SourcePos) -> Token {
        if self.cursor.peek() == Some(ch) {
            self.cursor.advance();
            let kind = match ch {
                '+' | '-' => TokenKind::UnaryOp,
                _ => TokenKind::BinaryOp,
            };
            Token::new(kind, format!("{ch}{ch}"), pos)
        } else if self.cursor.peek() == Some('=') {
            self.cursor.advance();
            Token::new(TokenKind::AssignOp, format!("{ch}="), pos)
        } else {
            Token::new(TokenKind::BinaryOp, ch.to_string(), pos)
        }
    }

    /// `* / % ^`: either compound assignment or plain binary operator.
    fn op_with_assign(&mut self, ch: char, pos: SourcePos) -> Token {
        if self.cursor.peek() == Some('=') {
            self.cursor.advance();
            Token::new(TokenKind::AssignOp, format!("{ch}="), pos)
        } else {
            Token::new(TokenKind::BinaryOp, ch.to_string(), pos)
        }
    }

    /// `<` and `>`: relational, shift, or shift-assign.
    fn angle_or_shift(&mut self, ch: char, pos: SourcePos) -> Token {
        if self.cursor.peek() == Some(ch) {
            self.cursor.advance();
            if self.cursor.peek() == Some('=') {
                self.cursor.advance();
                Token::new(TokenKind::AssignOp, format!("{ch}{ch}="), pos)
            } else {
                Token::new(TokenKind::BinaryOp, format!("{ch}{ch}"), pos)
            }
        } else if self.cursor.peek() == Some('=') {
            self.cursor.advance();
            Token::new(TokenKind::BinaryOp, format!("{ch}="), pos)
        } else {
            Token::new(TokenKind::BinaryOp, ch.to_string(), pos)
        }
    }

    /// Parse identifier or keyword.
    fn identifier_or_keyword(&mut self, first_char: char, pos: SourcePos) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.cursor.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.cursor.advance();
            } else {
                break;
            }
        }

        let kind = KEYWORDS.get(&ident).copied().unwrap_or(TokenKind::Ident);
        Token::new(kind, ident, pos)
    }

    /// Parse numeric literal: decimal, hex (`0x`), octal (`0...`) integers
    /// and floats with a fraction and/or exponent and an optional
    /// `f`/`F`/`h`/`H` suffix.
    fn number_literal(&mut self, first_digit: char, pos: SourcePos) -> Result<Token, ScanError> {
        let mut spelling = String::new();
        spelling.push(first_digit);

        // Hexadecimal
        if first_digit == '0' && matches!(self.cursor.peek(), Some('x') | Some('X')) {
            spelling.push(self.cursor.advance().unwrap());
            let mut digits = 0;
            while let Some(ch) = self.cursor.peek() {
                if ch.is_ascii_hexdigit() {
                    spelling.push(ch);
                    self.cursor.advance();
                    digits += 1;
                } else {
                    break;
                }
            }
            if digits == 0 {
                return Err(ScanError::new(
                    pos,
                    format!("invalid hexadecimal literal: {spelling}"),
                ));
            }
            return Ok(Token::new(TokenKind::IntLiteral, spelling, pos));
        }

        while let Some(ch) = self.cursor.peek() {
            if ch.is_ascii_digit() {
                spelling.push(ch);
                self.cursor.advance();
            } else {
                break;
            }
        }

        let mut is_float = false;

        if self.cursor.peek() == Some('.') {
            is_float = true;
            spelling.push(self.cursor.advance().unwrap());
            while let Some(ch) = self.cursor.peek() {
                if ch.is_ascii_digit() {
                    spelling.push(ch);
                    self.cursor.advance();
                } else {
                    break;
                }
            }
        }

        if matches!(self.cursor.peek(), Some('e') | Some('E')) {
            is_float = true;
            spelling.push(self.cursor.advance().unwrap());
            if matches!(self.cursor.peek(), Some('+') | Some('-')) {
                spelling.push(self.cursor.advance().unwrap());
            }
            let mut digits = 0;
            while let Some(ch) = self.cursor.peek() {
                if ch.is_ascii_digit() {
                    spelling.push(ch);
                    self.cursor.advance();
                    digits += 1;
                } else {
                    break;
                }
            }
            if digits == 0 {
                return Err(ScanError::new(
                    pos,
                    format!("malformed exponent in numeric literal: {spelling}"),
                ));
            }
        }

        if is_float {
            if matches!(
                self.cursor.peek(),
                Some('f') | Some('F') | Some('h') | Some('H')
            ) {
                spelling.push(self.cursor.advance().unwrap());
            }
            return Ok(Token::new(TokenKind::FloatLiteral, spelling, pos));
        }

        // Octal: a leading zero restricts the digit set
        if first_digit == '0' && spelling.len() > 1 && spelling.chars().any(|c| c > '7') {
            return Err(ScanError::new(
                pos,
                format!("invalid octal literal: {spelling}"),
            ));
        }

        Ok(Token::new(TokenKind::IntLiteral, spelling, pos))
    }

    /// String and character literals are not part of the HLSL token set.
    fn reject_quoted_literal(&mut self, quote: char, pos: SourcePos) -> Result<Token, ScanError> {
        let name = if quote == '"' { "string" } else { "char" };

        while let Some(ch) = self.cursor.advance() {
            if ch == quote {
                return Err(ScanError::new(pos, format!("{name} literal not supported")));
            }
            if ch == '\n' {
                break;
            }
        }

        Err(ScanError::new(pos, format!("unterminated {name} literal")))
    }

    /// Capture a `#` directive line verbatim, joining backslash-newline
    /// continuations into one logical line.
    fn directive(&mut self, pos: SourcePos) -> Result<Token, ScanError> {
        let mut line = String::new();

        while let Some(ch) = self.cursor.peek() {
            if ch == '\n' {
                break;
            }
            if ch == '\\' && self.cursor.peek_ahead(1) == Some('\n') {
                self.cursor.advance();
                self.cursor.advance();
                continue;
            }
            if ch == '\\'
                && self.cursor.peek_ahead(1) == Some('\r')
                && self.cursor.peek_ahead(2) == Some('\n')
            {
                self.cursor.advance();
                self.cursor.advance();
                self.cursor.advance();
                continue;
            }
            line.push(ch);
            self.cursor.advance();
        }

        if line.ends_with('\r') {
            line.pop();
        }

        Ok(Token::new(TokenKind::Directive, line, pos))
    }

    /// Skip whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), ScanError> {
        loop {
            match self.cursor.peek() {
                Some(ch) if ch.is_whitespace() => {
                    if ch == '\n' {
                        self.fresh_line = true;
                    }
                    self.cursor.advance();
                }
                Some('/') => {
                    if self.cursor.peek_ahead(1) == Some('/') {
                        self.skip_line_comment();
                    } else if self.cursor.peek_ahead(1) == Some('*') {
                        self.skip_block_comment()?;
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Skip single-line comment (`// ...`).
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.cursor.advance() {
            if ch == '\n' {
                self.fresh_line = true;
                break;
            }
        }
    }

    /// Skip multi-line comment (`/* ... */`).
    fn skip_block_comment(&mut self) -> Result<(), ScanError> {
        let start_pos = self.cursor.pos();
        self.cursor.advance(); // skip '/'
        self.cursor.advance(); // skip '*'

        while !self.cursor.is_at_end() {
            if self.cursor.peek() == Some('*') && self.cursor.peek_ahead(1) == Some('/') {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }
            if self.cursor.peek() == Some('\n') {
                self.fresh_line = true;
            }
            self.cursor.advance();
        }

        Err(ScanError::new(start_pos, "unterminated block comment"))
    }
}
