//! AST visitor
//!
//! Uniform traversal contract over the tree: one method per node kind, each
//! defaulting to "recurse into the children in declaration order" through
//! the matching `walk_*` function.  Concrete consumers override the kinds
//! they care about and either call the walk function themselves or drop the
//! subtree.
//!
//! Traversal is pre-order and deterministic; children are visited in source
//! order, so a full default traversal yields every node exactly once.

use crate::parser::ast::*;

pub trait Visitor {
    /* --- Dispatchers --- */

    fn visit_global_decl(&mut self, ast: &GlobalDecl) {
        walk_global_decl(self, ast);
    }

    fn visit_stmnt(&mut self, ast: &Stmnt) {
        walk_stmnt(self, ast);
    }

    fn visit_expr(&mut self, ast: &Expr) {
        walk_expr(self, ast);
    }

    /* --- Common nodes --- */

    fn visit_program(&mut self, ast: &Program) {
        walk_program(self, ast);
    }

    fn visit_code_block(&mut self, ast: &CodeBlock) {
        walk_code_block(self, ast);
    }

    fn visit_function_call(&mut self, ast: &FunctionCall) {
        walk_function_call(self, ast);
    }

    fn visit_structure(&mut self, ast: &Structure) {
        walk_structure(self, ast);
    }

    fn visit_switch_case(&mut self, ast: &SwitchCase) {
        walk_switch_case(self, ast);
    }

    fn visit_buffer_decl_ident(&mut self, _ast: &BufferDeclIdent) {}

    /* --- Global declarations --- */

    fn visit_function_decl(&mut self, ast: &FunctionDecl) {
        walk_function_decl(self, ast);
    }

    fn visit_uniform_buffer_decl(&mut self, ast: &UniformBufferDecl) {
        walk_uniform_buffer_decl(self, ast);
    }

    fn visit_texture_decl(&mut self, ast: &TextureDecl) {
        walk_texture_decl(self, ast);
    }

    fn visit_sampler_decl(&mut self, ast: &SamplerDecl) {
        walk_sampler_decl(self, ast);
    }

    fn visit_struct_decl(&mut self, ast: &StructDecl) {
        walk_struct_decl(self, ast);
    }

    fn visit_directive_decl(&mut self, _ast: &DirectiveDecl) {}

    /* --- Statements --- */

    fn visit_null_stmnt(&mut self, _ast: &NullStmnt) {}

    fn visit_directive_stmnt(&mut self, _ast: &DirectiveStmnt) {}

    fn visit_code_block_stmnt(&mut self, ast: &CodeBlockStmnt) {
        walk_code_block_stmnt(self, ast);
    }

    fn visit_for_loop_stmnt(&mut self, ast: &ForLoopStmnt) {
        walk_for_loop_stmnt(self, ast);
    }

    fn visit_while_loop_stmnt(&mut self, ast: &WhileLoopStmnt) {
        walk_while_loop_stmnt(self, ast);
    }

    fn visit_do_while_loop_stmnt(&mut self, ast: &DoWhileLoopStmnt) {
        walk_do_while_loop_stmnt(self, ast);
    }

    fn visit_if_stmnt(&mut self, ast: &IfStmnt) {
        walk_if_stmnt(self, ast);
    }

    fn visit_else_stmnt(&mut self, ast: &ElseStmnt) {
        walk_else_stmnt(self, ast);
    }

    fn visit_switch_stmnt(&mut self, ast: &SwitchStmnt) {
        walk_switch_stmnt(self, ast);
    }

    fn visit_var_decl_stmnt(&mut self, ast: &VarDeclStmnt) {
        walk_var_decl_stmnt(self, ast);
    }

    fn visit_assign_stmnt(&mut self, ast: &AssignStmnt) {
        walk_assign_stmnt(self, ast);
    }

    fn visit_expr_stmnt(&mut self, ast: &ExprStmnt) {
        walk_expr_stmnt(self, ast);
    }

    fn visit_function_call_stmnt(&mut self, ast: &FunctionCallStmnt) {
        walk_function_call_stmnt(self, ast);
    }

    fn visit_return_stmnt(&mut self, ast: &ReturnStmnt) {
        walk_return_stmnt(self, ast);
    }

    fn visit_struct_decl_stmnt(&mut self, ast: &StructDeclStmnt) {
        walk_struct_decl_stmnt(self, ast);
    }

    fn visit_ctrl_transfer_stmnt(&mut self, _ast: &CtrlTransferStmnt) {}

    /* --- Expressions --- */

    fn visit_list_expr(&mut self, ast: &ListExpr) {
        walk_list_expr(self, ast);
    }

    fn visit_literal_expr(&mut self, _ast: &LiteralExpr) {}

    fn visit_type_name_expr(&mut self, _ast: &TypeNameExpr) {}

    fn visit_ternary_expr(&mut self, ast: &TernaryExpr) {
        walk_ternary_expr(self, ast);
    }

    fn visit_binary_expr(&mut self, ast: &BinaryExpr) {
        walk_binary_expr(self, ast);
    }

    fn visit_unary_expr(&mut self, ast: &UnaryExpr) {
        walk_unary_expr(self, ast);
    }

    fn visit_post_unary_expr(&mut self, ast: &PostUnaryExpr) {
        walk_post_unary_expr(self, ast);
    }

    fn visit_function_call_expr(&mut self, ast: &FunctionCallExpr) {
        walk_function_call_expr(self, ast);
    }

    fn visit_bracket_expr(&mut self, ast: &BracketExpr) {
        walk_bracket_expr(self, ast);
    }

    fn visit_cast_expr(&mut self, ast: &CastExpr) {
        walk_cast_expr(self, ast);
    }

    fn visit_var_access_expr(&mut self, ast: &VarAccessExpr) {
        walk_var_access_expr(self, ast);
    }

    fn visit_initializer_expr(&mut self, ast: &InitializerExpr) {
        walk_initializer_expr(self, ast);
    }

    /* --- Variable facets --- */

    fn visit_pack_offset(&mut self, _ast: &PackOffset) {}

    fn visit_var_semantic(&mut self, ast: &VarSemantic) {
        walk_var_semantic(self, ast);
    }

    fn visit_var_type(&mut self, ast: &VarType) {
        walk_var_type(self, ast);
    }

    fn visit_var_ident(&mut self, ast: &VarIdent) {
        walk_var_ident(self, ast);
    }

    fn visit_var_decl(&mut self, ast: &VarDecl) {
        walk_var_decl(self, ast);
    }
}

/* ------- Walk functions ------- */

pub fn walk_global_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &GlobalDecl) {
    match ast {
        GlobalDecl::Function(decl) => visitor.visit_function_decl(decl),
        GlobalDecl::UniformBuffer(decl) => visitor.visit_uniform_buffer_decl(decl),
        GlobalDecl::Texture(decl) => visitor.visit_texture_decl(decl),
        GlobalDecl::Sampler(decl) => visitor.visit_sampler_decl(decl),
        GlobalDecl::Struct(decl) => visitor.visit_struct_decl(decl),
        GlobalDecl::Directive(decl) => visitor.visit_directive_decl(decl),
    }
}

pub fn walk_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &Stmnt) {
    match ast {
        Stmnt::Null(s) => visitor.visit_null_stmnt(s),
        Stmnt::Directive(s) => visitor.visit_directive_stmnt(s),
        Stmnt::CodeBlock(s) => visitor.visit_code_block_stmnt(s),
        Stmnt::ForLoop(s) => visitor.visit_for_loop_stmnt(s),
        Stmnt::WhileLoop(s) => visitor.visit_while_loop_stmnt(s),
        Stmnt::DoWhileLoop(s) => visitor.visit_do_while_loop_stmnt(s),
        Stmnt::If(s) => visitor.visit_if_stmnt(s),
        Stmnt::Switch(s) => visitor.visit_switch_stmnt(s),
        Stmnt::VarDecl(s) => visitor.visit_var_decl_stmnt(s),
        Stmnt::Assign(s) => visitor.visit_assign_stmnt(s),
        Stmnt::Expr(s) => visitor.visit_expr_stmnt(s),
        Stmnt::FunctionCall(s) => visitor.visit_function_call_stmnt(s),
        Stmnt::Return(s) => visitor.visit_return_stmnt(s),
        Stmnt::StructDecl(s) => visitor.visit_struct_decl_stmnt(s),
        Stmnt::CtrlTransfer(s) => visitor.visit_ctrl_transfer_stmnt(s),
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &Expr) {
    match ast {
        Expr::List(e) => visitor.visit_list_expr(e),
        Expr::Literal(e) => visitor.visit_literal_expr(e),
        Expr::TypeName(e) => visitor.visit_type_name_expr(e),
        Expr::Ternary(e) => visitor.visit_ternary_expr(e),
        Expr::Binary(e) => visitor.visit_binary_expr(e),
        Expr::Unary(e) => visitor.visit_unary_expr(e),
        Expr::PostUnary(e) => visitor.visit_post_unary_expr(e),
        Expr::FunctionCall(e) => visitor.visit_function_call_expr(e),
        Expr::Bracket(e) => visitor.visit_bracket_expr(e),
        Expr::Cast(e) => visitor.visit_cast_expr(e),
        Expr::VarAccess(e) => visitor.visit_var_access_expr(e),
        Expr::Initializer(e) => visitor.visit_initializer_expr(e),
    }
}

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, ast: &Program) {
    for decl in &ast.global_decls {
        visitor.visit_global_decl(decl);
    }
}

pub fn walk_code_block<V: Visitor + ?Sized>(visitor: &mut V, ast: &CodeBlock) {
    for stmnt in &ast.stmnts {
        visitor.visit_stmnt(stmnt);
    }
}

pub fn walk_function_call<V: Visitor + ?Sized>(visitor: &mut V, ast: &FunctionCall) {
    visitor.visit_var_ident(&ast.name);
    for arg in &ast.arguments {
        visitor.visit_expr(arg);
    }
}

pub fn walk_structure<V: Visitor + ?Sized>(visitor: &mut V, ast: &Structure) {
    for member in &ast.members {
        visitor.visit_var_decl_stmnt(member);
    }
}

pub fn walk_switch_case<V: Visitor + ?Sized>(visitor: &mut V, ast: &SwitchCase) {
    if let Some(expr) = &ast.expr {
        visitor.visit_expr(expr);
    }
    for stmnt in &ast.stmnts {
        visitor.visit_stmnt(stmnt);
    }
}

pub fn walk_function_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &FunctionDecl) {
    for attrib in &ast.attribs {
        visitor.visit_function_call(attrib);
    }
    visitor.visit_var_type(&ast.return_type);
    for param in &ast.parameters {
        visitor.visit_var_decl_stmnt(param);
    }
    if let Some(code_block) = &ast.code_block {
        visitor.visit_code_block(code_block);
    }
}

pub fn walk_uniform_buffer_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &UniformBufferDecl) {
    for member in &ast.members {
        visitor.visit_var_decl_stmnt(member);
    }
}

pub fn walk_texture_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &TextureDecl) {
    for name in &ast.names {
        visitor.visit_buffer_decl_ident(name);
    }
}

pub fn walk_sampler_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &SamplerDecl) {
    for name in &ast.names {
        visitor.visit_buffer_decl_ident(name);
    }
}

pub fn walk_struct_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &StructDecl) {
    visitor.visit_structure(&ast.structure);
}

pub fn walk_code_block_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &CodeBlockStmnt) {
    visitor.visit_code_block(&ast.code_block);
}

pub fn walk_for_loop_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &ForLoopStmnt) {
    for attrib in &ast.attribs {
        visitor.visit_function_call(attrib);
    }
    visitor.visit_stmnt(&ast.init_stmnt);
    if let Some(condition) = &ast.condition {
        visitor.visit_expr(condition);
    }
    if let Some(iteration) = &ast.iteration {
        visitor.visit_expr(iteration);
    }
    visitor.visit_stmnt(&ast.body_stmnt);
}

pub fn walk_while_loop_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &WhileLoopStmnt) {
    for attrib in &ast.attribs {
        visitor.visit_function_call(attrib);
    }
    visitor.visit_expr(&ast.condition);
    visitor.visit_stmnt(&ast.body_stmnt);
}

pub fn walk_do_while_loop_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &DoWhileLoopStmnt) {
    for attrib in &ast.attribs {
        visitor.visit_function_call(attrib);
    }
    visitor.visit_stmnt(&ast.body_stmnt);
    visitor.visit_expr(&ast.condition);
}

pub fn walk_if_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &IfStmnt) {
    for attrib in &ast.attribs {
        visitor.visit_function_call(attrib);
    }
    visitor.visit_expr(&ast.condition);
    visitor.visit_stmnt(&ast.body_stmnt);
    if let Some(else_stmnt) = &ast.else_stmnt {
        visitor.visit_else_stmnt(else_stmnt);
    }
}

pub fn walk_else_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &ElseStmnt) {
    visitor.visit_stmnt(&ast.body_stmnt);
}

pub fn walk_switch_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &SwitchStmnt) {
    for attrib in &ast.attribs {
        visitor.visit_function_call(attrib);
    }
    visitor.visit_expr(&ast.selector);
    for case in &ast.cases {
        visitor.visit_switch_case(case);
    }
}

pub fn walk_var_decl_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &VarDeclStmnt) {
    visitor.visit_var_type(&ast.var_type);
    for var_decl in &ast.var_decls {
        visitor.visit_var_decl(var_decl);
    }
}

pub fn walk_assign_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &AssignStmnt) {
    visitor.visit_var_ident(&ast.var_ident);
    visitor.visit_expr(&ast.expr);
}

pub fn walk_expr_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &ExprStmnt) {
    visitor.visit_expr(&ast.expr);
}

pub fn walk_function_call_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &FunctionCallStmnt) {
    visitor.visit_function_call(&ast.call);
}

pub fn walk_return_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &ReturnStmnt) {
    if let Some(expr) = &ast.expr {
        visitor.visit_expr(expr);
    }
}

pub fn walk_struct_decl_stmnt<V: Visitor + ?Sized>(visitor: &mut V, ast: &StructDeclStmnt) {
    visitor.visit_structure(&ast.structure);
}

pub fn walk_list_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &ListExpr) {
    visitor.visit_expr(&ast.first_expr);
    visitor.visit_expr(&ast.next_expr);
}

pub fn walk_ternary_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &TernaryExpr) {
    visitor.visit_expr(&ast.condition);
    visitor.visit_expr(&ast.if_expr);
    visitor.visit_expr(&ast.else_expr);
}

pub fn walk_binary_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &BinaryExpr) {
    visitor.visit_expr(&ast.lhs_expr);
    visitor.visit_expr(&ast.rhs_expr);
}

pub fn walk_unary_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &UnaryExpr) {
    visitor.visit_expr(&ast.expr);
}

pub fn walk_post_unary_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &PostUnaryExpr) {
    visitor.visit_expr(&ast.expr);
}

pub fn walk_function_call_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &FunctionCallExpr) {
    visitor.visit_function_call(&ast.call);
}

pub fn walk_bracket_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &BracketExpr) {
    visitor.visit_expr(&ast.expr);
}

pub fn walk_cast_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &CastExpr) {
    visitor.visit_expr(&ast.type_expr);
    visitor.visit_expr(&ast.expr);
}

pub fn walk_var_access_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &VarAccessExpr) {
    visitor.visit_var_ident(&ast.var_ident);
    if let Some(assign_expr) = &ast.assign_expr {
        visitor.visit_expr(assign_expr);
    }
}

pub fn walk_initializer_expr<V: Visitor + ?Sized>(visitor: &mut V, ast: &InitializerExpr) {
    for expr in &ast.exprs {
        visitor.visit_expr(expr);
    }
}

pub fn walk_var_semantic<V: Visitor + ?Sized>(visitor: &mut V, ast: &VarSemantic) {
    if let VarBinding::PackOffset(pack_offset) = &ast.binding {
        visitor.visit_pack_offset(pack_offset);
    }
}

pub fn walk_var_type<V: Visitor + ?Sized>(visitor: &mut V, ast: &VarType) {
    if let Some(structure) = ast.struct_type() {
        visitor.visit_structure(structure);
    }
}

pub fn walk_var_ident<V: Visitor + ?Sized>(visitor: &mut V, ast: &VarIdent) {
    for index in &ast.array_indices {
        visitor.visit_expr(index);
    }
    if let Some(next) = &ast.next {
        visitor.visit_var_ident(next);
    }
}

pub fn walk_var_decl<V: Visitor + ?Sized>(visitor: &mut V, ast: &VarDecl) {
    for dim in &ast.array_dims {
        visitor.visit_expr(dim);
    }
    for semantic in &ast.semantics {
        visitor.visit_var_semantic(semantic);
    }
    if let Some(initializer) = &ast.initializer {
        visitor.visit_expr(initializer);
    }
}
