//! AST pretty-printer
//!
//! Reference consumer of the [`Visitor`] contract: emits one log line per
//! node of the form `Kind (line:column)`, optionally followed by a quoted
//! info string (the identifier, operator spelling, or similar), and indents
//! child emissions by one level.  The tree is never mutated.

use crate::logger::Logger;
use crate::parser::ast::*;
use crate::source::SourcePos;
use crate::visitor::{self, Visitor};

/// Dump the AST of `program` through the given logger.
pub fn print_ast(program: &Program, log: &mut dyn Logger) {
    let mut printer = AstPrinter { log };
    printer.visit_program(program);
}

struct AstPrinter<'a> {
    log: &'a mut dyn Logger,
}

impl AstPrinter<'_> {
    fn print(&mut self, pos: SourcePos, name: &str, info: Option<&str>) {
        let mut msg = format!("{name} ({pos})");
        if let Some(info) = info {
            msg.push_str(&format!(" \"{info}\""));
        }
        self.log.info(&msg);
    }

    /// Print the node line, then its children one indent level deeper.
    fn scoped(
        &mut self,
        pos: SourcePos,
        name: &str,
        info: Option<&str>,
        walk: impl FnOnce(&mut Self),
    ) {
        self.print(pos, name, info);
        self.log.inc_indent();
        walk(self);
        self.log.dec_indent();
    }
}

impl Visitor for AstPrinter<'_> {
    fn visit_program(&mut self, ast: &Program) {
        self.scoped(ast.pos, "Program", None, |v| visitor::walk_program(v, ast));
    }

    fn visit_code_block(&mut self, ast: &CodeBlock) {
        self.scoped(ast.pos, "CodeBlock", None, |v| {
            visitor::walk_code_block(v, ast)
        });
    }

    fn visit_function_call(&mut self, ast: &FunctionCall) {
        self.scoped(ast.pos, "FunctionCall", None, |v| {
            visitor::walk_function_call(v, ast)
        });
    }

    fn visit_structure(&mut self, ast: &Structure) {
        self.scoped(ast.pos, "Structure", None, |v| {
            visitor::walk_structure(v, ast)
        });
    }

    fn visit_switch_case(&mut self, ast: &SwitchCase) {
        self.scoped(ast.pos, "SwitchCase", None, |v| {
            visitor::walk_switch_case(v, ast)
        });
    }

    fn visit_buffer_decl_ident(&mut self, ast: &BufferDeclIdent) {
        self.print(ast.pos, "BufferDeclIdent", Some(&ast.ident));
    }

    /* --- Global declarations --- */

    fn visit_function_decl(&mut self, ast: &FunctionDecl) {
        self.scoped(ast.pos, "FunctionDecl", Some(&ast.name), |v| {
            visitor::walk_function_decl(v, ast)
        });
    }

    fn visit_uniform_buffer_decl(&mut self, ast: &UniformBufferDecl) {
        let info = format!("{} ({})", ast.name, ast.buffer_type);
        self.scoped(ast.pos, "UniformBufferDecl", Some(&info), |v| {
            visitor::walk_uniform_buffer_decl(v, ast)
        });
    }

    fn visit_texture_decl(&mut self, ast: &TextureDecl) {
        self.scoped(ast.pos, "TextureDecl", None, |v| {
            visitor::walk_texture_decl(v, ast)
        });
    }

    fn visit_sampler_decl(&mut self, ast: &SamplerDecl) {
        self.scoped(ast.pos, "SamplerDecl", None, |v| {
            visitor::walk_sampler_decl(v, ast)
        });
    }

    fn visit_struct_decl(&mut self, ast: &StructDecl) {
        self.scoped(ast.pos, "StructDecl", None, |v| {
            visitor::walk_struct_decl(v, ast)
        });
    }

    fn visit_directive_decl(&mut self, ast: &DirectiveDecl) {
        self.print(ast.pos, "DirectiveDecl", Some(&ast.line));
    }

    /* --- Statements --- */

    fn visit_null_stmnt(&mut self, ast: &NullStmnt) {
        self.print(ast.pos, "NullStmnt", None);
    }

    fn visit_directive_stmnt(&mut self, ast: &DirectiveStmnt) {
        self.print(ast.pos, "DirectiveStmnt", Some(&ast.line));
    }

    fn visit_code_block_stmnt(&mut self, ast: &CodeBlockStmnt) {
        self.scoped(ast.pos, "CodeBlockStmnt", None, |v| {
            visitor::walk_code_block_stmnt(v, ast)
        });
    }

    fn visit_for_loop_stmnt(&mut self, ast: &ForLoopStmnt) {
        self.scoped(ast.pos, "ForLoopStmnt", None, |v| {
            visitor::walk_for_loop_stmnt(v, ast)
        });
    }

    fn visit_while_loop_stmnt(&mut self, ast: &WhileLoopStmnt) {
        self.scoped(ast.pos, "WhileLoopStmnt", None, |v| {
            visitor::walk_while_loop_stmnt(v, ast)
        });
    }

    fn visit_do_while_loop_stmnt(&mut self, ast: &DoWhileLoopStmnt) {
        self.scoped(ast.pos, "DoWhileLoopStmnt", None, |v| {
            visitor::walk_do_while_loop_stmnt(v, ast)
        });
    }

    fn visit_if_stmnt(&mut self, ast: &IfStmnt) {
        self.scoped(ast.pos, "IfStmnt", None, |v| visitor::walk_if_stmnt(v, ast));
    }

    fn visit_else_stmnt(&mut self, ast: &ElseStmnt) {
        self.scoped(ast.pos, "ElseStmnt", None, |v| {
            visitor::walk_else_stmnt(v, ast)
        });
    }

    fn visit_switch_stmnt(&mut self, ast: &SwitchStmnt) {
        self.scoped(ast.pos, "SwitchStmnt", None, |v| {
            visitor::walk_switch_stmnt(v, ast)
        });
    }

    fn visit_var_decl_stmnt(&mut self, ast: &VarDeclStmnt) {
        self.scoped(ast.pos, "VarDeclStmnt", None, |v| {
            visitor::walk_var_decl_stmnt(v, ast)
        });
    }

    fn visit_assign_stmnt(&mut self, ast: &AssignStmnt) {
        self.scoped(ast.pos, "AssignStmnt", Some(&ast.op), |v| {
            visitor::walk_assign_stmnt(v, ast)
        });
    }

    fn visit_expr_stmnt(&mut self, ast: &ExprStmnt) {
        self.scoped(ast.pos, "ExprStmnt", None, |v| {
            visitor::walk_expr_stmnt(v, ast)
        });
    }

    fn visit_function_call_stmnt(&mut self, ast: &FunctionCallStmnt) {
        self.scoped(ast.pos, "FunctionCallStmnt", None, |v| {
            visitor::walk_function_call_stmnt(v, ast)
        });
    }

    fn visit_return_stmnt(&mut self, ast: &ReturnStmnt) {
        self.scoped(ast.pos, "ReturnStmnt", None, |v| {
            visitor::walk_return_stmnt(v, ast)
        });
    }

    fn visit_struct_decl_stmnt(&mut self, ast: &StructDeclStmnt) {
        self.scoped(ast.pos, "StructDeclStmnt", None, |v| {
            visitor::walk_struct_decl_stmnt(v, ast)
        });
    }

    fn visit_ctrl_transfer_stmnt(&mut self, ast: &CtrlTransferStmnt) {
        self.print(ast.pos, "CtrlTransferStmnt", Some(&ast.instruction));
    }

    /* --- Expressions --- */

    fn visit_list_expr(&mut self, ast: &ListExpr) {
        self.scoped(ast.pos, "ListExpr", None, |v| {
            visitor::walk_list_expr(v, ast)
        });
    }

    fn visit_literal_expr(&mut self, ast: &LiteralExpr) {
        self.print(ast.pos, "LiteralExpr", Some(&ast.literal));
    }

    fn visit_type_name_expr(&mut self, ast: &TypeNameExpr) {
        self.print(ast.pos, "TypeNameExpr", Some(&ast.type_name));
    }

    fn visit_ternary_expr(&mut self, ast: &TernaryExpr) {
        self.scoped(ast.pos, "TernaryExpr", None, |v| {
            visitor::walk_ternary_expr(v, ast)
        });
    }

    fn visit_binary_expr(&mut self, ast: &BinaryExpr) {
        self.scoped(ast.pos, "BinaryExpr", Some(&ast.op), |v| {
            visitor::walk_binary_expr(v, ast)
        });
    }

    fn visit_unary_expr(&mut self, ast: &UnaryExpr) {
        self.scoped(ast.pos, "UnaryExpr", Some(&ast.op), |v| {
            visitor::walk_unary_expr(v, ast)
        });
    }

    fn visit_post_unary_expr(&mut self, ast: &PostUnaryExpr) {
        self.scoped(ast.pos, "PostUnaryExpr", Some(&ast.op), |v| {
            visitor::walk_post_unary_expr(v, ast)
        });
    }

    fn visit_function_call_expr(&mut self, ast: &FunctionCallExpr) {
        self.scoped(ast.pos, "FunctionCallExpr", None, |v| {
            visitor::walk_function_call_expr(v, ast)
        });
    }

    fn visit_bracket_expr(&mut self, ast: &BracketExpr) {
        self.scoped(ast.pos, "BracketExpr", None, |v| {
            visitor::walk_bracket_expr(v, ast)
        });
    }

    fn visit_cast_expr(&mut self, ast: &CastExpr) {
        self.scoped(ast.pos, "CastExpr", None, |v| {
            visitor::walk_cast_expr(v, ast)
        });
    }

    fn visit_var_access_expr(&mut self, ast: &VarAccessExpr) {
        self.scoped(ast.pos, "VarAccessExpr", ast.assign_op.as_deref(), |v| {
            visitor::walk_var_access_expr(v, ast)
        });
    }

    fn visit_initializer_expr(&mut self, ast: &InitializerExpr) {
        self.scoped(ast.pos, "InitializerExpr", None, |v| {
            visitor::walk_initializer_expr(v, ast)
        });
    }

    /* --- Variable facets --- */

    fn visit_pack_offset(&mut self, ast: &PackOffset) {
        let mut info = ast.register_name.clone();
        if let Some(component) = &ast.vector_component {
            info.push_str(&format!(" ({component})"));
        }
        self.print(ast.pos, "PackOffset", Some(&info));
    }

    fn visit_var_semantic(&mut self, ast: &VarSemantic) {
        let info = match &ast.binding {
            VarBinding::Semantic(semantic) => Some(semantic.clone()),
            VarBinding::Register(register) => Some(format!("({register})")),
            VarBinding::PackOffset(_) => None,
        };
        self.scoped(ast.pos, "VarSemantic", info.as_deref(), |v| {
            visitor::walk_var_semantic(v, ast)
        });
    }

    fn visit_var_type(&mut self, ast: &VarType) {
        self.scoped(ast.pos, "VarType", ast.base_type(), |v| {
            visitor::walk_var_type(v, ast)
        });
    }

    fn visit_var_ident(&mut self, ast: &VarIdent) {
        self.scoped(ast.pos, "VarIdent", Some(&ast.ident), |v| {
            visitor::walk_var_ident(v, ast)
        });
    }

    fn visit_var_decl(&mut self, ast: &VarDecl) {
        self.scoped(ast.pos, "VarDecl", Some(&ast.name), |v| {
            visitor::walk_var_decl(v, ast)
        });
    }
}
