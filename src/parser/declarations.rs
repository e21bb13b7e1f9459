//! Global declaration parsing
//!
//! Top-level constructs of a translation unit:
//!
//! - Function prototypes and definitions (with attributes and semantics)
//! - `cbuffer`/`tbuffer` declarations with register bindings
//! - Texture and sampler declarations
//! - `struct` declarations
//! - Preprocessor directive lines (kept verbatim)
//!
//! Also home of the shared sub-productions these declarations use:
//! structures, parameters, variable types and declarators, semantics,
//! `register(...)` and `packoffset(...)` bindings.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Dispatch on the current token to the right global declaration.
    /// Anything that does not start with a dedicated keyword is a function.
    pub(crate) fn parse_global_decl(&mut self) -> Result<GlobalDecl, ParseError> {
        match self.peek_kind() {
            TokenKind::Sampler => Ok(GlobalDecl::Sampler(self.parse_sampler_decl()?)),
            TokenKind::Texture => Ok(GlobalDecl::Texture(self.parse_texture_decl()?)),
            TokenKind::UniformBuffer => {
                Ok(GlobalDecl::UniformBuffer(self.parse_uniform_buffer_decl()?))
            }
            TokenKind::Struct => Ok(GlobalDecl::Struct(self.parse_struct_decl()?)),
            TokenKind::Directive => Ok(GlobalDecl::Directive(self.parse_directive_decl()?)),
            _ => Ok(GlobalDecl::Function(self.parse_function_decl()?)),
        }
    }

    /// Parse function declaration:
    /// `attribs* returnType name(params) (':' semantic)? (';' | body)`.
    pub(crate) fn parse_function_decl(&mut self) -> Result<FunctionDecl, ParseError> {
        let pos = self.current().pos;

        let attribs = self.parse_attribute_list()?;
        let return_type = self.parse_var_type(true)?;
        let name = self.accept(TokenKind::Ident)?.spelling;
        let parameters = self.parse_parameter_list()?;

        let semantic = if self.is(TokenKind::Colon) {
            Some(self.parse_semantic()?)
        } else {
            None
        };

        // A trailing ';' makes this a prototype, a '{' a definition
        let code_block = if self.is(TokenKind::Semicolon) {
            self.accept_any();
            None
        } else {
            Some(self.parse_code_block()?)
        };

        Ok(FunctionDecl {
            pos,
            attribs,
            return_type,
            name,
            parameters,
            semantic,
            code_block,
        })
    }

    /// Parse `cbuffer`/`tbuffer` declaration:
    /// `bufferType name (':' register)? '{' members '}' ';'`.
    pub(crate) fn parse_uniform_buffer_decl(&mut self) -> Result<UniformBufferDecl, ParseError> {
        let pos = self.current().pos;

        let buffer_type = self.accept(TokenKind::UniformBuffer)?.spelling;
        let name = self.accept(TokenKind::Ident)?.spelling;

        let register_name = if self.is(TokenKind::Colon) {
            Some(self.parse_register(true)?)
        } else {
            None
        };

        let members = self.parse_var_decl_stmnt_list()?;
        self.semi()?;

        Ok(UniformBufferDecl {
            pos,
            buffer_type,
            name,
            register_name,
            members,
        })
    }

    /// Parse texture declaration:
    /// `textureType ('<' colorType '>')? name (',' name)* ';'`.
    pub(crate) fn parse_texture_decl(&mut self) -> Result<TextureDecl, ParseError> {
        let pos = self.current().pos;

        let texture_type = self.accept(TokenKind::Texture)?.spelling;

        // Optional generic color type, e.g. Texture2D<float4>
        let color_type = if self.is_spelling(TokenKind::BinaryOp, "<") {
            self.accept_any();
            let color = match self.peek_kind() {
                TokenKind::ScalarType | TokenKind::VectorType => self.accept_any().spelling,
                _ => return Err(self.error_unexpected_hint("expected texture color type")),
            };
            self.accept_spelling(TokenKind::BinaryOp, ">")?;
            Some(color)
        } else {
            None
        };

        let names = self.parse_buffer_decl_ident_list()?;
        self.semi()?;

        Ok(TextureDecl {
            pos,
            texture_type,
            color_type,
            names,
        })
    }

    /// Parse sampler declaration: `samplerType name (',' name)* ';'`.
    pub(crate) fn parse_sampler_decl(&mut self) -> Result<SamplerDecl, ParseError> {
        let pos = self.current().pos;

        let sampler_type = self.accept(TokenKind::Sampler)?.spelling;
        let names = self.parse_buffer_decl_ident_list()?;
        self.semi()?;

        Ok(SamplerDecl {
            pos,
            sampler_type,
            names,
        })
    }

    /// Parse global structure declaration: `structure ';'`.
    pub(crate) fn parse_struct_decl(&mut self) -> Result<StructDecl, ParseError> {
        let pos = self.current().pos;

        let structure = self.parse_structure()?;
        self.semi()?;

        Ok(StructDecl { pos, structure })
    }

    /// Parse preprocessor directive line.
    pub(crate) fn parse_directive_decl(&mut self) -> Result<DirectiveDecl, ParseError> {
        let token = self.accept(TokenKind::Directive)?;
        Ok(DirectiveDecl {
            pos: token.pos,
            line: token.spelling,
        })
    }

    /* --- Shared sub-productions --- */

    /// Parse `struct name? '{' memberDecls '}'`.  The name is empty for an
    /// anonymous structure.
    pub(crate) fn parse_structure(&mut self) -> Result<Structure, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::Struct)?;

        let name = if self.is(TokenKind::Ident) {
            self.accept_any().spelling
        } else {
            String::new()
        };

        let members = self.parse_var_decl_stmnt_list()?;

        Ok(Structure { pos, name, members })
    }

    /// Parse a code block: `'{' stmnt* '}'`.
    pub(crate) fn parse_code_block(&mut self) -> Result<CodeBlock, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::LCurly)?;
        let mut stmnts = Vec::new();
        while !self.is(TokenKind::RCurly) {
            stmnts.push(self.parse_stmnt()?);
        }
        self.accept(TokenKind::RCurly)?;

        Ok(CodeBlock { pos, stmnts })
    }

    /// Parse a single function parameter as a variable declaration
    /// statement with one declarator.
    ///
    /// A repeated input modifier overwrites the previous one
    /// (last-writer-wins); validating multiplicity is left to a later pass.
    pub(crate) fn parse_parameter(&mut self) -> Result<VarDeclStmnt, ParseError> {
        let pos = self.current().pos;
        let id = self.make_node_id();

        let mut input_modifier = None;
        let mut storage_modifiers = Vec::new();
        let mut type_modifiers = Vec::new();

        loop {
            match self.peek_kind() {
                TokenKind::InputModifier => input_modifier = Some(self.accept_any().spelling),
                TokenKind::TypeModifier => type_modifiers.push(self.accept_any().spelling),
                TokenKind::StorageModifier => storage_modifiers.push(self.accept_any().spelling),
                _ => break,
            }
        }

        let var_type = self.parse_var_type(false)?;
        let mut var_decl = self.parse_var_decl()?;
        var_decl.decl_stmnt_ref = Some(id);

        Ok(VarDeclStmnt {
            pos,
            id,
            input_modifier,
            storage_modifiers,
            type_modifiers,
            var_type,
            var_decls: vec![var_decl],
        })
    }

    /// Parse a variable type: `void` (where allowed), a type or struct
    /// name, a built-in data type, or an inline structure.
    pub(crate) fn parse_var_type(&mut self, parse_void_type: bool) -> Result<VarType, ParseError> {
        let pos = self.current().pos;

        if self.is(TokenKind::Void) {
            if parse_void_type {
                let spelling = self.accept_any().spelling;
                return Ok(VarType {
                    pos,
                    denoter: TypeDenoter::Base(spelling),
                });
            }
            return Err(self.error_unexpected_hint("'void' type not allowed in this context"));
        }

        if self.is(TokenKind::Ident) || self.is_data_type() {
            let spelling = self.accept_any().spelling;
            return Ok(VarType {
                pos,
                denoter: TypeDenoter::Base(spelling),
            });
        }

        if self.is(TokenKind::Struct) {
            // Anonymous structure declaration decorating this type slot;
            // VarType::symbol_ref borrows it.
            let structure = self.parse_structure()?;
            return Ok(VarType {
                pos,
                denoter: TypeDenoter::Struct(Box::new(structure)),
            });
        }

        Err(self.error_unexpected_hint("expected type specifier"))
    }

    /// Parse one declarator: `name arrayDims* semantics* initializer?`.
    ///
    /// The back-reference to the enclosing statement is set by the caller
    /// once that statement exists.
    pub(crate) fn parse_var_decl(&mut self) -> Result<VarDecl, ParseError> {
        let token = self.accept(TokenKind::Ident)?;

        let array_dims = self.parse_array_dimension_list()?;
        let semantics = self.parse_var_semantic_list()?;

        let initializer = if self.is_spelling(TokenKind::AssignOp, "=") {
            Some(self.parse_initializer()?)
        } else {
            None
        };

        Ok(VarDecl {
            pos: token.pos,
            name: token.spelling,
            array_dims,
            semantics,
            initializer,
            decl_stmnt_ref: None,
        })
    }

    /// Parse `'=' expr` after a declarator.
    fn parse_initializer(&mut self) -> Result<Expr, ParseError> {
        self.accept_spelling(TokenKind::AssignOp, "=")?;
        self.parse_expr()
    }

    /// Parse one `:` binding on a declarator: a `register(...)`, a
    /// `packoffset(...)`, or a bare pipeline semantic.
    pub(crate) fn parse_var_semantic(&mut self) -> Result<VarSemantic, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::Colon)?;

        let binding = if self.is(TokenKind::Register) {
            VarBinding::Register(self.parse_register(false)?)
        } else if self.is(TokenKind::PackOffset) {
            VarBinding::PackOffset(self.parse_pack_offset(false)?)
        } else {
            VarBinding::Semantic(self.accept(TokenKind::Ident)?.spelling)
        };

        Ok(VarSemantic { pos, binding })
    }

    /// Parse `(':')? register '(' IDENT ')'` and return the slot name.
    pub(crate) fn parse_register(&mut self, parse_colon: bool) -> Result<String, ParseError> {
        if parse_colon {
            self.accept(TokenKind::Colon)?;
        }

        self.accept(TokenKind::Register)?;
        self.accept(TokenKind::LBracket)?;
        let register_name = self.accept(TokenKind::Ident)?.spelling;
        self.accept(TokenKind::RBracket)?;

        Ok(register_name)
    }

    /// Parse `(':')? packoffset '(' IDENT ('.' IDENT)? ')'`.
    pub(crate) fn parse_pack_offset(&mut self, parse_colon: bool) -> Result<PackOffset, ParseError> {
        if parse_colon {
            self.accept(TokenKind::Colon)?;
        }

        let pos = self.current().pos;
        self.accept(TokenKind::PackOffset)?;
        self.accept(TokenKind::LBracket)?;

        let register_name = self.accept(TokenKind::Ident)?.spelling;

        let vector_component = if self.is(TokenKind::Dot) {
            self.accept_any();
            Some(self.accept(TokenKind::Ident)?.spelling)
        } else {
            None
        };

        self.accept(TokenKind::RBracket)?;

        Ok(PackOffset {
            pos,
            register_name,
            vector_component,
        })
    }

    /// Parse `':' IDENT` after a function header.
    pub(crate) fn parse_semantic(&mut self) -> Result<String, ParseError> {
        self.accept(TokenKind::Colon)?;
        Ok(self.accept(TokenKind::Ident)?.spelling)
    }

    /// Parse a chained variable identifier: `ident arrayIndices* ('.' next)?`.
    pub(crate) fn parse_var_ident(&mut self) -> Result<VarIdent, ParseError> {
        let token = self.accept(TokenKind::Ident)?;
        let array_indices = self.parse_array_dimension_list()?;

        let next = if self.is(TokenKind::Dot) {
            self.accept_any();
            Some(Box::new(self.parse_var_ident()?))
        } else {
            None
        };

        Ok(VarIdent {
            pos: token.pos,
            ident: token.spelling,
            array_indices,
            next,
        })
    }

    /// Parse a square-bracket attribute: `'[' IDENT ('(' args ')')? ']'`.
    pub(crate) fn parse_attribute(&mut self) -> Result<FunctionCall, ParseError> {
        let pos = self.current().pos;

        self.accept(TokenKind::LParen)?;

        let ident = self.accept(TokenKind::Ident)?;
        let name = VarIdent {
            pos: ident.pos,
            ident: ident.spelling,
            array_indices: Vec::new(),
            next: None,
        };

        let mut arguments = Vec::new();
        if self.is(TokenKind::LBracket) {
            self.accept_any();
            if !self.is(TokenKind::RBracket) {
                loop {
                    arguments.push(self.parse_expr()?);
                    if self.is(TokenKind::Comma) {
                        self.accept_any();
                    } else {
                        break;
                    }
                }
            }
            self.accept(TokenKind::RBracket)?;
        }

        self.accept(TokenKind::RParen)?;

        Ok(FunctionCall {
            pos,
            name,
            arguments,
        })
    }

    /// Parse an identifier with optional register, as listed by texture and
    /// sampler declarations.
    pub(crate) fn parse_buffer_decl_ident(&mut self) -> Result<BufferDeclIdent, ParseError> {
        let token = self.accept(TokenKind::Ident)?;

        let register_name = if self.is(TokenKind::Colon) {
            Some(self.parse_register(true)?)
        } else {
            None
        };

        Ok(BufferDeclIdent {
            pos: token.pos,
            ident: token.spelling,
            register_name,
        })
    }

    /* --- Lists --- */

    /// Parse declarators separated by commas.
    pub(crate) fn parse_var_decl_list(&mut self) -> Result<Vec<VarDecl>, ParseError> {
        let mut var_decls = Vec::new();

        loop {
            var_decls.push(self.parse_var_decl()?);
            if self.is(TokenKind::Comma) {
                self.accept_any();
            } else {
                break;
            }
        }

        Ok(var_decls)
    }

    /// Parse `'{' varDeclStmnt* '}'` (struct and buffer members).
    pub(crate) fn parse_var_decl_stmnt_list(&mut self) -> Result<Vec<VarDeclStmnt>, ParseError> {
        let mut members = Vec::new();

        self.accept(TokenKind::LCurly)?;
        while !self.is(TokenKind::RCurly) {
            members.push(self.parse_var_decl_stmnt()?);
        }
        self.accept_any();

        Ok(members)
    }

    /// Parse `'(' (param (',' param)*)? ')'`.
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<VarDeclStmnt>, ParseError> {
        let mut parameters = Vec::new();

        self.accept(TokenKind::LBracket)?;

        if !self.is(TokenKind::RBracket) {
            loop {
                parameters.push(self.parse_parameter()?);
                if self.is(TokenKind::Comma) {
                    self.accept_any();
                } else {
                    break;
                }
            }
        }

        self.accept(TokenKind::RBracket)?;

        Ok(parameters)
    }

    /// Parse `('[' expr ']')*`.
    pub(crate) fn parse_array_dimension_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut array_dims = Vec::new();

        while self.is(TokenKind::LParen) {
            self.accept_any();
            array_dims.push(self.parse_expr()?);
            self.accept(TokenKind::RParen)?;
        }

        Ok(array_dims)
    }

    /// Parse `(':' varSemantic)*`.
    pub(crate) fn parse_var_semantic_list(&mut self) -> Result<Vec<VarSemantic>, ParseError> {
        let mut semantics = Vec::new();

        while self.is(TokenKind::Colon) {
            semantics.push(self.parse_var_semantic()?);
        }

        Ok(semantics)
    }

    /// Parse `attribute*`.
    pub(crate) fn parse_attribute_list(&mut self) -> Result<Vec<FunctionCall>, ParseError> {
        let mut attribs = Vec::new();

        while self.is(TokenKind::LParen) {
            attribs.push(self.parse_attribute()?);
        }

        Ok(attribs)
    }

    /// Parse `bufferDeclIdent (',' bufferDeclIdent)*`.
    pub(crate) fn parse_buffer_decl_ident_list(
        &mut self,
    ) -> Result<Vec<BufferDeclIdent>, ParseError> {
        let mut idents = vec![self.parse_buffer_decl_ident()?];

        while self.is(TokenKind::Comma) {
            self.accept_any();
            idents.push(self.parse_buffer_decl_ident()?);
        }

        Ok(idents)
    }
}
