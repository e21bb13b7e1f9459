//! Statement parsing
//!
//! Statement dispatch plus the two ambiguous entry points:
//!
//! - A statement starting with an identifier may be a variable declaration,
//!   an assignment, a function call or an expression statement; the variable
//!   identifier is parsed first and the next token decides.
//! - A statement starting with `struct` is either a structure declaration or
//!   a struct-typed variable declaration, decided by the token after the
//!   closing brace.
//!
//! Square-bracket attributes may precede any statement; they are attached to
//! the loop, `if` and `switch` nodes that carry them.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a single statement.
    pub(crate) fn parse_stmnt(&mut self) -> Result<Stmnt, ParseError> {
        let attribs = self.parse_attribute_list()?;

        match self.peek_kind() {
            TokenKind::Semicolon => return self.parse_null_stmnt(),
            TokenKind::Directive => return self.parse_directive_stmnt(),
            TokenKind::LCurly => return self.parse_code_block_stmnt(),
            TokenKind::Return => return self.parse_return_stmnt(),
            TokenKind::Ident => return self.parse_var_decl_or_assign_or_function_call_stmnt(),
            TokenKind::For => return self.parse_for_loop_stmnt(attribs),
            TokenKind::While => return self.parse_while_loop_stmnt(attribs),
            TokenKind::Do => return self.parse_do_while_loop_stmnt(attribs),
            TokenKind::If => return self.parse_if_stmnt(attribs),
            TokenKind::Switch => return self.parse_switch_stmnt(attribs),
            TokenKind::CtrlTransfer => return self.parse_ctrl_transfer_stmnt(),
            TokenKind::Struct => return self.parse_struct_decl_or_var_decl_stmnt(),
            TokenKind::TypeModifier | TokenKind::StorageModifier => {
                return Ok(Stmnt::VarDecl(self.parse_var_decl_stmnt()?));
            }
            _ => {}
        }

        if self.is_data_type() {
            return Ok(Stmnt::VarDecl(self.parse_var_decl_stmnt()?));
        }

        // Statement of arbitrary expression
        self.parse_expr_stmnt(None)
    }

    fn parse_null_stmnt(&mut self) -> Result<Stmnt, ParseError> {
        let pos = self.current().pos;
        self.semi()?;
        Ok(Stmnt::Null(NullStmnt { pos }))
    }

    fn parse_directive_stmnt(&mut self) -> Result<Stmnt, ParseError> {
        let token = self.accept(TokenKind::Directive)?;
        Ok(Stmnt::Directive(DirectiveStmnt {
            pos: token.pos,
            line: token.spelling,
        }))
    }

    fn parse_code_block_stmnt(&mut self) -> Result<Stmnt, ParseError> {
        let pos = self.current().pos;
        let code_block = self.parse_code_block()?;
        Ok(Stmnt::CodeBlock(CodeBlockStmnt { pos, code_block }))
    }

    fn parse_for_loop_stmnt(&mut self, attribs: Vec<FunctionCall>) -> Result<Stmnt, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::For)?;
        self.accept(TokenKind::LBracket)?;

        // The init is a full statement and consumes its own semicolon
        let init_stmnt = Box::new(self.parse_stmnt()?);

        let condition = if !self.is(TokenKind::Semicolon) {
            Some(self.parse_expr_with_comma()?)
        } else {
            None
        };
        self.semi()?;

        let iteration = if !self.is(TokenKind::RBracket) {
            Some(self.parse_expr_with_comma()?)
        } else {
            None
        };
        self.accept(TokenKind::RBracket)?;

        let body_stmnt = Box::new(self.parse_stmnt()?);

        Ok(Stmnt::ForLoop(ForLoopStmnt {
            pos,
            attribs,
            init_stmnt,
            condition,
            iteration,
            body_stmnt,
        }))
    }

    fn parse_while_loop_stmnt(&mut self, attribs: Vec<FunctionCall>) -> Result<Stmnt, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::While)?;
        self.accept(TokenKind::LBracket)?;
        let condition = self.parse_expr_with_comma()?;
        self.accept(TokenKind::RBracket)?;

        let body_stmnt = Box::new(self.parse_stmnt()?);

        Ok(Stmnt::WhileLoop(WhileLoopStmnt {
            pos,
            attribs,
            condition,
            body_stmnt,
        }))
    }

    fn parse_do_while_loop_stmnt(
        &mut self,
        attribs: Vec<FunctionCall>,
    ) -> Result<Stmnt, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::Do)?;
        let body_stmnt = Box::new(self.parse_stmnt()?);

        self.accept(TokenKind::While)?;
        self.accept(TokenKind::LBracket)?;
        let condition = self.parse_expr_with_comma()?;
        self.accept(TokenKind::RBracket)?;
        self.semi()?;

        Ok(Stmnt::DoWhileLoop(DoWhileLoopStmnt {
            pos,
            attribs,
            body_stmnt,
            condition,
        }))
    }

    fn parse_if_stmnt(&mut self, attribs: Vec<FunctionCall>) -> Result<Stmnt, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::If)?;
        self.accept(TokenKind::LBracket)?;
        let condition = self.parse_expr_with_comma()?;
        self.accept(TokenKind::RBracket)?;

        let body_stmnt = Box::new(self.parse_stmnt()?);

        let else_stmnt = if self.is(TokenKind::Else) {
            Some(self.parse_else_stmnt()?)
        } else {
            None
        };

        Ok(Stmnt::If(IfStmnt {
            pos,
            attribs,
            condition,
            body_stmnt,
            else_stmnt,
        }))
    }

    fn parse_else_stmnt(&mut self) -> Result<ElseStmnt, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::Else)?;
        let body_stmnt = Box::new(self.parse_stmnt()?);

        Ok(ElseStmnt { pos, body_stmnt })
    }

    fn parse_switch_stmnt(&mut self, attribs: Vec<FunctionCall>) -> Result<Stmnt, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::Switch)?;
        self.accept(TokenKind::LBracket)?;
        let selector = self.parse_expr_with_comma()?;
        self.accept(TokenKind::RBracket)?;

        self.accept(TokenKind::LCurly)?;
        let mut cases = Vec::new();
        while self.is(TokenKind::Case) || self.is(TokenKind::Default) {
            cases.push(self.parse_switch_case()?);
        }
        self.accept(TokenKind::RCurly)?;

        Ok(Stmnt::Switch(SwitchStmnt {
            pos,
            attribs,
            selector,
            cases,
        }))
    }

    /// Parse one `case expr:` or `default:` section; the statement list runs
    /// until the next case label or the closing brace, so empty sections
    /// express fallthrough.
    fn parse_switch_case(&mut self) -> Result<SwitchCase, ParseError> {
        let pos = self.current().pos;

        let expr = if self.is(TokenKind::Case) {
            self.accept_any();
            Some(self.parse_expr()?)
        } else {
            self.accept(TokenKind::Default)?;
            None
        };
        self.accept(TokenKind::Colon)?;

        let mut stmnts = Vec::new();
        while !self.is(TokenKind::Case)
            && !self.is(TokenKind::Default)
            && !self.is(TokenKind::RCurly)
        {
            stmnts.push(self.parse_stmnt()?);
        }

        Ok(SwitchCase { pos, expr, stmnts })
    }

    fn parse_ctrl_transfer_stmnt(&mut self) -> Result<Stmnt, ParseError> {
        let token = self.accept(TokenKind::CtrlTransfer)?;
        self.semi()?;

        Ok(Stmnt::CtrlTransfer(CtrlTransferStmnt {
            pos: token.pos,
            instruction: token.spelling,
        }))
    }

    fn parse_return_stmnt(&mut self) -> Result<Stmnt, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::Return)?;

        let expr = if !self.is(TokenKind::Semicolon) {
            Some(self.parse_expr_with_comma()?)
        } else {
            None
        };
        self.semi()?;

        Ok(Stmnt::Return(ReturnStmnt { pos, expr }))
    }

    /// Parse an expression statement.  When the leading variable identifier
    /// was already consumed by the caller it is wrapped into a var-access
    /// expression and handed to the expression chain as its start.
    pub(crate) fn parse_expr_stmnt(
        &mut self,
        var_ident: Option<VarIdent>,
    ) -> Result<Stmnt, ParseError> {
        let expr = match var_ident {
            Some(var_ident) => {
                let pos = var_ident.pos;
                let init = Expr::VarAccess(VarAccessExpr {
                    pos,
                    var_ident,
                    assign_op: None,
                    assign_expr: None,
                });
                self.parse_expr_opts(true, Some(init))?
            }
            None => self.parse_expr_with_comma()?,
        };
        let pos = expr.pos();
        self.semi()?;

        Ok(Stmnt::Expr(ExprStmnt { pos, expr }))
    }

    /// Parse a variable declaration statement:
    /// `(storageModifier | typeModifier)* varType varDecls ';'`.
    pub(crate) fn parse_var_decl_stmnt(&mut self) -> Result<VarDeclStmnt, ParseError> {
        let pos = self.current().pos;
        let id = self.make_node_id();

        let mut storage_modifiers = Vec::new();
        let mut type_modifiers = Vec::new();

        let var_type = loop {
            match self.peek_kind() {
                TokenKind::StorageModifier => {
                    storage_modifiers.push(self.accept_any().spelling);
                }
                TokenKind::TypeModifier => {
                    type_modifiers.push(self.accept_any().spelling);
                }
                TokenKind::Ident => {
                    // Base variable type given by a (struct) name
                    let token = self.accept_any();
                    break VarType {
                        pos: token.pos,
                        denoter: TypeDenoter::Base(token.spelling),
                    };
                }
                TokenKind::Struct => {
                    let type_pos = self.current().pos;
                    let structure = self.parse_structure()?;
                    break VarType {
                        pos: type_pos,
                        denoter: TypeDenoter::Struct(Box::new(structure)),
                    };
                }
                _ if self.is_data_type() => {
                    let token = self.accept_any();
                    break VarType {
                        pos: token.pos,
                        denoter: TypeDenoter::Base(token.spelling),
                    };
                }
                _ => return Err(self.error_unexpected()),
            }
        };

        let mut var_decls = self.parse_var_decl_list()?;
        self.semi()?;

        // Decorate the declarators with this statement's id
        for var_decl in &mut var_decls {
            var_decl.decl_stmnt_ref = Some(id);
        }

        Ok(VarDeclStmnt {
            pos,
            id,
            input_modifier: None,
            storage_modifiers,
            type_modifiers,
            var_type,
            var_decls,
        })
    }

    /// Parse `struct ... ;` as a structure declaration, or
    /// `struct ... name, ...;` as a struct-typed variable declaration,
    /// decided by the token after the closing brace.
    fn parse_struct_decl_or_var_decl_stmnt(&mut self) -> Result<Stmnt, ParseError> {
        let pos = self.current().pos;

        let structure = self.parse_structure()?;

        if !self.is(TokenKind::Semicolon) {
            // Variable declaration with the just-parsed structure type
            let id = self.make_node_id();

            let var_type = VarType {
                pos,
                denoter: TypeDenoter::Struct(Box::new(structure)),
            };

            let mut var_decls = self.parse_var_decl_list()?;
            self.semi()?;

            for var_decl in &mut var_decls {
                var_decl.decl_stmnt_ref = Some(id);
            }

            return Ok(Stmnt::VarDecl(VarDeclStmnt {
                pos,
                id,
                input_modifier: None,
                storage_modifiers: Vec::new(),
                type_modifiers: Vec::new(),
                var_type,
                var_decls,
            }));
        }

        self.semi()?;
        Ok(Stmnt::StructDecl(StructDeclStmnt { pos, structure }))
    }

    /// Identifier-led statement disambiguation.
    ///
    /// The variable identifier (`ident ('.' ident)*` with array indices) is
    /// parsed first; the next token then decides:
    ///
    /// - `(`  function call statement
    /// - any assignment operator  assignment statement
    /// - `++`/`--`  expression statement starting at the identifier
    /// - otherwise, an undotted identifier is a type name and this is a
    ///   variable declaration; a dotted one is an error
    pub(crate) fn parse_var_decl_or_assign_or_function_call_stmnt(
        &mut self,
    ) -> Result<Stmnt, ParseError> {
        let pos = self.current().pos;
        let var_ident = self.parse_var_ident()?;

        if self.is(TokenKind::LBracket) {
            let call = self.parse_function_call(Some(var_ident))?;
            self.semi()?;
            return Ok(Stmnt::FunctionCall(FunctionCallStmnt { pos, call }));
        }

        if self.is(TokenKind::AssignOp) {
            let op = self.accept_any().spelling;
            let expr = self.parse_expr_with_comma()?;
            self.semi()?;
            return Ok(Stmnt::Assign(AssignStmnt {
                pos,
                var_ident,
                op,
                expr,
            }));
        }

        if self.is_spelling(TokenKind::UnaryOp, "++") || self.is_spelling(TokenKind::UnaryOp, "--")
        {
            return self.parse_expr_stmnt(Some(var_ident));
        }

        if var_ident.next.is_none() {
            // The identifier is the base type of a variable declaration
            let id = self.make_node_id();

            let var_type = VarType {
                pos: var_ident.pos,
                denoter: TypeDenoter::Base(var_ident.ident),
            };

            let mut var_decls = self.parse_var_decl_list()?;
            self.semi()?;

            for var_decl in &mut var_decls {
                var_decl.decl_stmnt_ref = Some(id);
            }

            return Ok(Stmnt::VarDecl(VarDeclStmnt {
                pos,
                id,
                input_modifier: None,
                storage_modifiers: Vec::new(),
                type_modifiers: Vec::new(),
                var_type,
                var_decls,
            }));
        }

        Err(self.error_unexpected_hint(
            "expected variable declaration, assignment or function call statement",
        ))
    }
}
