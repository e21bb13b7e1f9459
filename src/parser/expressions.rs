//! Expression parsing
//!
//! Expressions are a single primary followed optionally by one postfix
//! `++`/`--`, then optionally one binary operator whose right operand is
//! parsed recursively with the same rule, then optionally a ternary, then
//! optionally a comma list where the context allows it.  The tree encodes
//! the input order; precedence normalization is left to later passes.
//!
//! The cast-vs-bracket decision is purely syntactic: `(E) X` is a cast iff
//! another primary expression can start at `X` and `E` is a type form
//! (a built-in type name, or a pure identifier path that may name a
//! struct).  Cases that depend on what the identifier actually resolves to
//! are accepted here and left to the semantic analyzer.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse an expression; the comma operator is not consumed.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_opts(false, None)
    }

    /// Parse an expression including the comma list operator.
    pub(crate) fn parse_expr_with_comma(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_opts(true, None)
    }

    /// Parse the expression chain, optionally continuing from an already
    /// parsed starting expression.
    pub(crate) fn parse_expr_opts(
        &mut self,
        allow_comma: bool,
        init_expr: Option<Expr>,
    ) -> Result<Expr, ParseError> {
        let mut ast = match init_expr {
            Some(expr) => expr,
            None => self.parse_primary_expr()?,
        };

        // Optional postfix unary expression
        if self.is_spelling(TokenKind::UnaryOp, "++") || self.is_spelling(TokenKind::UnaryOp, "--")
        {
            let op = self.accept_any().spelling;
            ast = Expr::PostUnary(PostUnaryExpr {
                pos: ast.pos(),
                expr: Box::new(ast),
                op,
            });
        }

        // Optional binary expression; the right operand re-enters the same
        // rule, so chains nest to the right without precedence
        if self.is(TokenKind::BinaryOp) {
            let op = self.accept_any().spelling;
            let rhs_expr = self.parse_expr_opts(allow_comma, None)?;

            return Ok(Expr::Binary(BinaryExpr {
                pos: ast.pos(),
                lhs_expr: Box::new(ast),
                op,
                rhs_expr: Box::new(rhs_expr),
            }));
        }

        // Optional ternary expression
        if self.is(TokenKind::TernaryOp) {
            self.accept_any();
            let if_expr = self.parse_expr()?;
            self.accept(TokenKind::Colon)?;
            let else_expr = self.parse_expr()?;

            return Ok(Expr::Ternary(TernaryExpr {
                pos: ast.pos(),
                condition: Box::new(ast),
                if_expr: Box::new(if_expr),
                else_expr: Box::new(else_expr),
            }));
        }

        // Optional list expression
        if allow_comma && self.is(TokenKind::Comma) {
            self.accept_any();
            let next_expr = self.parse_expr_with_comma()?;

            return Ok(Expr::List(ListExpr {
                pos: ast.pos(),
                first_expr: Box::new(ast),
                next_expr: Box::new(next_expr),
            }));
        }

        Ok(ast)
    }

    /// Dispatch on the current token to the right primary expression.
    pub(crate) fn parse_primary_expr(&mut self) -> Result<Expr, ParseError> {
        if self.is_literal() {
            return self.parse_literal_expr();
        }
        if self.is_data_type() {
            return self.parse_type_name_or_function_call_expr();
        }
        if self.is(TokenKind::UnaryOp) || self.is_spelling(TokenKind::BinaryOp, "-") {
            return self.parse_unary_expr();
        }
        if self.is(TokenKind::LBracket) {
            return self.parse_bracket_or_cast_expr();
        }
        if self.is(TokenKind::LCurly) {
            return self.parse_initializer_expr();
        }
        if self.is(TokenKind::Ident) {
            return self.parse_var_access_or_function_call_expr();
        }

        Err(self.error_unexpected_hint("expected primary expression"))
    }

    fn parse_literal_expr(&mut self) -> Result<Expr, ParseError> {
        if !self.is_literal() {
            return Err(self.error_unexpected_hint("expected literal expression"));
        }

        let token = self.accept_any();
        Ok(Expr::Literal(LiteralExpr {
            pos: token.pos,
            literal: token.spelling,
        }))
    }

    /// A data type keyword followed by `(` is a constructor-style call
    /// (`float4(0, 0, 0, 1)`); otherwise it is a bare type name.
    fn parse_type_name_or_function_call_expr(&mut self) -> Result<Expr, ParseError> {
        if !self.is_data_type() {
            return Err(self.error_unexpected_hint("expected type name or function call expression"));
        }

        let token = self.accept_any();

        if self.is(TokenKind::LBracket) {
            let var_ident = VarIdent {
                pos: token.pos,
                ident: token.spelling,
                array_indices: Vec::new(),
                next: None,
            };
            let call = self.parse_function_call(Some(var_ident))?;
            return Ok(Expr::FunctionCall(FunctionCallExpr {
                pos: token.pos,
                call,
            }));
        }

        Ok(Expr::TypeName(TypeNameExpr {
            pos: token.pos,
            type_name: token.spelling,
        }))
    }

    /// Parse a prefix unary expression; `-` arrives spelled as a binary
    /// operator token.
    fn parse_unary_expr(&mut self) -> Result<Expr, ParseError> {
        if !self.is(TokenKind::UnaryOp) && !self.is_spelling(TokenKind::BinaryOp, "-") {
            return Err(self.error_unexpected_hint("expected unary expression operator"));
        }

        let token = self.accept_any();
        let expr = self.parse_primary_expr()?;

        Ok(Expr::Unary(UnaryExpr {
            pos: token.pos,
            op: token.spelling,
            expr: Box::new(expr),
        }))
    }

    /// Parse `'(' expr ')'` and decide between a cast and a parenthesized
    /// expression.
    ///
    /// This is a syntactic approximation: `(x) y` reads as a cast whenever
    /// `x` is a pure identifier path, even though `x` might turn out to be a
    /// variable.  Rejecting those cases needs the symbol table and is the
    /// semantic analyzer's job.
    fn parse_bracket_or_cast_expr(&mut self) -> Result<Expr, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::LBracket)?;
        let expr = self.parse_expr_with_comma()?;
        self.accept(TokenKind::RBracket)?;

        let is_type_form = match &expr {
            Expr::TypeName(_) => true,
            Expr::VarAccess(access) => access.assign_expr.is_none(),
            _ => false,
        };

        if self.is_primary_expr() && is_type_form {
            let cast_expr = self.parse_primary_expr()?;
            return Ok(Expr::Cast(CastExpr {
                pos,
                type_expr: Box::new(expr),
                expr: Box::new(cast_expr),
            }));
        }

        Ok(Expr::Bracket(BracketExpr {
            pos,
            expr: Box::new(expr),
        }))
    }

    /// An identifier followed by `(` is a call; anything else is a variable
    /// access.
    fn parse_var_access_or_function_call_expr(&mut self) -> Result<Expr, ParseError> {
        let pos = self.current().pos;
        let var_ident = self.parse_var_ident()?;

        if self.is(TokenKind::LBracket) {
            let call = self.parse_function_call(Some(var_ident))?;
            return Ok(Expr::FunctionCall(FunctionCallExpr { pos, call }));
        }

        self.parse_var_access_expr(var_ident)
    }

    /// Parse the optional assignment tail of a variable access.
    fn parse_var_access_expr(&mut self, var_ident: VarIdent) -> Result<Expr, ParseError> {
        let pos = var_ident.pos;

        let (assign_op, assign_expr) = if self.is(TokenKind::AssignOp) {
            let op = self.accept_any().spelling;
            let expr = self.parse_expr()?;
            (Some(op), Some(Box::new(expr)))
        } else {
            (None, None)
        };

        Ok(Expr::VarAccess(VarAccessExpr {
            pos,
            var_ident,
            assign_op,
            assign_expr,
        }))
    }

    fn parse_initializer_expr(&mut self) -> Result<Expr, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::LCurly)?;
        let exprs = self.parse_expr_list(TokenKind::RCurly, true)?;
        self.accept(TokenKind::RCurly)?;

        Ok(Expr::Initializer(InitializerExpr { pos, exprs }))
    }

    /// Parse a function call for the given callee; when no callee was
    /// parsed yet, a data type keyword (constructor call) or a variable
    /// identifier provides it.
    pub(crate) fn parse_function_call(
        &mut self,
        var_ident: Option<VarIdent>,
    ) -> Result<FunctionCall, ParseError> {
        let name = match var_ident {
            Some(name) => name,
            None if self.is_data_type() => {
                let token = self.accept_any();
                VarIdent {
                    pos: token.pos,
                    ident: token.spelling,
                    array_indices: Vec::new(),
                    next: None,
                }
            }
            None => self.parse_var_ident()?,
        };

        let pos = name.pos;

        self.accept(TokenKind::LBracket)?;
        let arguments = self.parse_expr_list(TokenKind::RBracket, false)?;
        self.accept(TokenKind::RBracket)?;

        Ok(FunctionCall {
            pos,
            name,
            arguments,
        })
    }

    /// Parse expressions up to `terminator`, separated by commas.  Only
    /// initializer lists tolerate a trailing comma.
    fn parse_expr_list(
        &mut self,
        terminator: TokenKind,
        allow_last_comma: bool,
    ) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = Vec::new();

        if !self.is(terminator) {
            loop {
                exprs.push(self.parse_expr()?);
                if self.is(TokenKind::Comma) {
                    self.accept_any();
                    if allow_last_comma && self.is(terminator) {
                        break;
                    }
                } else {
                    break;
                }
            }
        }

        Ok(exprs)
    }
}
