//! Parser core and entry points
//!
//! The [`Parser`] struct holds the token vector and a single current-token
//! cursor; lookahead is strictly one token and there is no backtracking.
//! This module provides the stream primitives (`is`/`accept`/`accept_any`),
//! the error type and the public parse entry points.  The productions
//! themselves are split by family:
//!
//! - `declarations`: global declarations (functions, buffers, structs, ...)
//! - `statements`: statement dispatch and the identifier-led disambiguation
//! - `expressions`: the flat expression chain and the cast heuristic
//!
//! Parser methods are split across these files using `impl Parser` blocks,
//! so each module extends the same parser state.

use crate::logger::Logger;
use crate::parser::ast::{NodeId, Program};
use crate::parser::lexer::{Lexer, ScanError, Token, TokenKind};
use crate::source::{SourceCode, SourcePos};
use thiserror::Error;

/// Parser error type.
///
/// Any error aborts the parse immediately; no partial AST escapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("syntax error ({pos}) : unexpected token '{spelling}'")]
    Unexpected { pos: SourcePos, spelling: String },

    #[error("syntax error ({pos}) : unexpected token '{spelling}' ({hint})")]
    UnexpectedWithHint {
        pos: SourcePos,
        spelling: String,
        hint: String,
    },

    #[error("syntax error ({pos}) : unexpected token spelling '{actual}' (expected '{expected}')")]
    SpellingMismatch {
        pos: SourcePos,
        actual: String,
        expected: String,
    },

    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl ParseError {
    /// Position of the offending lexeme.
    pub fn pos(&self) -> SourcePos {
        match self {
            ParseError::Unexpected { pos, .. } => *pos,
            ParseError::UnexpectedWithHint { pos, .. } => *pos,
            ParseError::SpellingMismatch { pos, .. } => *pos,
            ParseError::Scan(err) => err.pos,
        }
    }
}

/// Parse a source into its AST.
///
/// Returns the [`Program`] root on success; on the first lexical or
/// syntactic error the whole parse fails and the diagnostic is returned.
pub fn parse(source: &SourceCode) -> Result<Program, ParseError> {
    let tokens = Lexer::new(source).tokenize()?;
    Parser::new(tokens).parse_program()
}

/// Like [`parse`], but routes the diagnostic through the given logger and
/// returns `None` on any failure.
pub fn parse_with_logger(source: &SourceCode, log: &mut dyn Logger) -> Option<Program> {
    match parse(source) {
        Ok(program) => Some(program),
        Err(err) => {
            log.error(&err.to_string());
            None
        }
    }
}

/// Recursive descent parser for HLSL.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    next_id: NodeId,
}

impl Parser {
    /// The token vector must be terminated by an `EndOfStream` token, which
    /// the lexer guarantees.
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(matches!(
            tokens.last(),
            Some(Token {
                kind: TokenKind::EndOfStream,
                ..
            })
        ));
        Self {
            tokens,
            position: 0,
            next_id: 0,
        }
    }

    /// Parse the entire translation unit.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let pos = self.current().pos;
        let mut global_decls = Vec::new();

        while !self.is(TokenKind::EndOfStream) {
            global_decls.push(self.parse_global_decl()?);
        }

        Ok(Program { pos, global_decls })
    }

    /* ===== Token stream primitives ===== */

    /// The current token; `EndOfStream` once the input is exhausted.
    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    /// Kind of the current token without advancing.
    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Return the current token and advance.  Reading past the end keeps
    /// returning the `EndOfStream` token.
    pub(crate) fn accept_any(&mut self) -> Token {
        let token = self.current().clone();
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// Return the current token and advance if its kind matches.
    pub(crate) fn accept(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.current().kind != kind {
            return Err(self.error_unexpected());
        }
        Ok(self.accept_any())
    }

    /// Like [`accept`](Self::accept), additionally requiring spelling
    /// equality.
    pub(crate) fn accept_spelling(
        &mut self,
        kind: TokenKind,
        spelling: &str,
    ) -> Result<Token, ParseError> {
        if self.current().kind != kind {
            return Err(self.error_unexpected());
        }
        if self.current().spelling != spelling {
            return Err(ParseError::SpellingMismatch {
                pos: self.current().pos,
                actual: self.current().spelling.clone(),
                expected: spelling.to_string(),
            });
        }
        Ok(self.accept_any())
    }

    pub(crate) fn is(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    pub(crate) fn is_spelling(&self, kind: TokenKind, spelling: &str) -> bool {
        self.current().kind == kind && self.current().spelling == spelling
    }

    /// Accept the statement-terminating semicolon.
    pub(crate) fn semi(&mut self) -> Result<(), ParseError> {
        self.accept(TokenKind::Semicolon)?;
        Ok(())
    }

    /* ===== Diagnostics ===== */

    pub(crate) fn error_unexpected(&self) -> ParseError {
        ParseError::Unexpected {
            pos: self.current().pos,
            spelling: self.current().spelling.clone(),
        }
    }

    pub(crate) fn error_unexpected_hint(&self, hint: &str) -> ParseError {
        ParseError::UnexpectedWithHint {
            pos: self.current().pos,
            spelling: self.current().spelling.clone(),
            hint: hint.to_string(),
        }
    }

    /* ===== Token class predicates ===== */

    /// Built-in data type keyword: scalar, vector, matrix, texture, sampler.
    pub(crate) fn is_data_type(&self) -> bool {
        matches!(
            self.peek_kind(),
            TokenKind::ScalarType
                | TokenKind::VectorType
                | TokenKind::MatrixType
                | TokenKind::Texture
                | TokenKind::Sampler
        )
    }

    pub(crate) fn is_literal(&self) -> bool {
        matches!(
            self.peek_kind(),
            TokenKind::BoolLiteral | TokenKind::IntLiteral | TokenKind::FloatLiteral
        )
    }

    /// Whether another primary expression can start at the current token.
    /// Part of the cast-vs-bracket decision, so the exact token set matters.
    pub(crate) fn is_primary_expr(&self) -> bool {
        self.is_literal()
            || self.is(TokenKind::Ident)
            || self.is(TokenKind::UnaryOp)
            || self.is_spelling(TokenKind::BinaryOp, "-")
            || self.is(TokenKind::LBracket)
    }

    /// Issue the id for the next variable declaration statement.
    pub(crate) fn make_node_id(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
