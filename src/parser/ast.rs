//! AST node definitions for the HLSL parser
//!
//! The tree is built bottom-up by the parser and owned top-down: a parent
//! exclusively owns its children and dropping the root [`Program`] releases
//! everything.  Every node records the [`SourcePos`] of its first lexeme.
//!
//! There is exactly one non-owning relation in the whole tree: each
//! [`VarDecl`] that is the child of a [`VarDeclStmnt`] stores the statement's
//! [`NodeId`] in `decl_stmnt_ref`.  An id is a lookup, never a lifetime, so
//! the ownership stays single.

use crate::source::SourcePos;

/// Unique identifier for variable declaration statements, used as the target
/// of the `decl_stmnt_ref` back-reference.
pub type NodeId = usize;

/// The AST root: an ordered sequence of global declarations.
#[derive(Debug, Clone)]
pub struct Program {
    pub pos: SourcePos,
    pub global_decls: Vec<GlobalDecl>,
}

/// An ordered sequence of statements between `{` and `}`.
#[derive(Debug, Clone)]
pub struct CodeBlock {
    pub pos: SourcePos,
    pub stmnts: Vec<Stmnt>,
}

/// Callee identifier plus ordered argument expressions.
///
/// Shared grammar artifact: embedded in [`FunctionCallExpr`],
/// [`FunctionCallStmnt`] and used for square-bracket attributes (where the
/// argument list may be absent entirely).
#[derive(Debug, Clone)]
pub struct FunctionCall {
    pub pos: SourcePos,
    pub name: VarIdent,
    pub arguments: Vec<Expr>,
}

/// A structure: optionally named, members are variable declaration
/// statements.  The name is empty for anonymous structures.
#[derive(Debug, Clone)]
pub struct Structure {
    pub pos: SourcePos,
    pub name: String,
    pub members: Vec<VarDeclStmnt>,
}

/// One `case expr:` or `default:` section of a switch statement.
/// `expr` is `None` for the default case.
#[derive(Debug, Clone)]
pub struct SwitchCase {
    pub pos: SourcePos,
    pub expr: Option<Expr>,
    pub stmnts: Vec<Stmnt>,
}

/// Identifier with optional register binding, as used by texture and
/// sampler declarations (`Texture2D t : register(t0);`).
#[derive(Debug, Clone)]
pub struct BufferDeclIdent {
    pub pos: SourcePos,
    pub ident: String,
    pub register_name: Option<String>,
}

/* --- Global declarations --- */

#[derive(Debug, Clone)]
pub enum GlobalDecl {
    Function(FunctionDecl),
    UniformBuffer(UniformBufferDecl),
    Texture(TextureDecl),
    Sampler(SamplerDecl),
    Struct(StructDecl),
    Directive(DirectiveDecl),
}

impl GlobalDecl {
    pub fn pos(&self) -> SourcePos {
        match self {
            GlobalDecl::Function(decl) => decl.pos,
            GlobalDecl::UniformBuffer(decl) => decl.pos,
            GlobalDecl::Texture(decl) => decl.pos,
            GlobalDecl::Sampler(decl) => decl.pos,
            GlobalDecl::Struct(decl) => decl.pos,
            GlobalDecl::Directive(decl) => decl.pos,
        }
    }
}

/// Function prototype or definition.  `code_block` is `None` for a
/// prototype (`float f(int x);`).
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub pos: SourcePos,
    pub attribs: Vec<FunctionCall>,
    pub return_type: VarType,
    pub name: String,
    pub parameters: Vec<VarDeclStmnt>,
    pub semantic: Option<String>,
    pub code_block: Option<CodeBlock>,
}

/// `cbuffer`/`tbuffer` declaration with optional register binding.
#[derive(Debug, Clone)]
pub struct UniformBufferDecl {
    pub pos: SourcePos,
    pub buffer_type: String,
    pub name: String,
    pub register_name: Option<String>,
    pub members: Vec<VarDeclStmnt>,
}

/// Texture declaration, e.g. `Texture2D<float4> diffuse : register(t0);`.
#[derive(Debug, Clone)]
pub struct TextureDecl {
    pub pos: SourcePos,
    pub texture_type: String,
    pub color_type: Option<String>,
    pub names: Vec<BufferDeclIdent>,
}

/// Sampler state declaration, e.g. `SamplerState samplerLinear;`.
#[derive(Debug, Clone)]
pub struct SamplerDecl {
    pub pos: SourcePos,
    pub sampler_type: String,
    pub names: Vec<BufferDeclIdent>,
}

/// Global `struct name { ... };` declaration.
#[derive(Debug, Clone)]
pub struct StructDecl {
    pub pos: SourcePos,
    pub structure: Structure,
}

/// Preprocessor directive kept verbatim as a raw line.
#[derive(Debug, Clone)]
pub struct DirectiveDecl {
    pub pos: SourcePos,
    pub line: String,
}

/* --- Statements --- */

#[derive(Debug, Clone)]
pub enum Stmnt {
    Null(NullStmnt),
    Directive(DirectiveStmnt),
    CodeBlock(CodeBlockStmnt),
    ForLoop(ForLoopStmnt),
    WhileLoop(WhileLoopStmnt),
    DoWhileLoop(DoWhileLoopStmnt),
    If(IfStmnt),
    Switch(SwitchStmnt),
    VarDecl(VarDeclStmnt),
    Assign(AssignStmnt),
    Expr(ExprStmnt),
    FunctionCall(FunctionCallStmnt),
    Return(ReturnStmnt),
    StructDecl(StructDeclStmnt),
    CtrlTransfer(CtrlTransferStmnt),
}

impl Stmnt {
    pub fn pos(&self) -> SourcePos {
        match self {
            Stmnt::Null(s) => s.pos,
            Stmnt::Directive(s) => s.pos,
            Stmnt::CodeBlock(s) => s.pos,
            Stmnt::ForLoop(s) => s.pos,
            Stmnt::WhileLoop(s) => s.pos,
            Stmnt::DoWhileLoop(s) => s.pos,
            Stmnt::If(s) => s.pos,
            Stmnt::Switch(s) => s.pos,
            Stmnt::VarDecl(s) => s.pos,
            Stmnt::Assign(s) => s.pos,
            Stmnt::Expr(s) => s.pos,
            Stmnt::FunctionCall(s) => s.pos,
            Stmnt::Return(s) => s.pos,
            Stmnt::StructDecl(s) => s.pos,
            Stmnt::CtrlTransfer(s) => s.pos,
        }
    }
}

/// A lone `;`.
#[derive(Debug, Clone)]
pub struct NullStmnt {
    pub pos: SourcePos,
}

#[derive(Debug, Clone)]
pub struct DirectiveStmnt {
    pub pos: SourcePos,
    pub line: String,
}

#[derive(Debug, Clone)]
pub struct CodeBlockStmnt {
    pub pos: SourcePos,
    pub code_block: CodeBlock,
}

/// `for (init; condition; iteration) body` — the init is a full statement,
/// so `for (;;)` parses through a null statement.
#[derive(Debug, Clone)]
pub struct ForLoopStmnt {
    pub pos: SourcePos,
    pub attribs: Vec<FunctionCall>,
    pub init_stmnt: Box<Stmnt>,
    pub condition: Option<Expr>,
    pub iteration: Option<Expr>,
    pub body_stmnt: Box<Stmnt>,
}

#[derive(Debug, Clone)]
pub struct WhileLoopStmnt {
    pub pos: SourcePos,
    pub attribs: Vec<FunctionCall>,
    pub condition: Expr,
    pub body_stmnt: Box<Stmnt>,
}

#[derive(Debug, Clone)]
pub struct DoWhileLoopStmnt {
    pub pos: SourcePos,
    pub attribs: Vec<FunctionCall>,
    pub body_stmnt: Box<Stmnt>,
    pub condition: Expr,
}

#[derive(Debug, Clone)]
pub struct IfStmnt {
    pub pos: SourcePos,
    pub attribs: Vec<FunctionCall>,
    pub condition: Expr,
    pub body_stmnt: Box<Stmnt>,
    pub else_stmnt: Option<ElseStmnt>,
}

/// The `else` branch of an if statement; a node of its own so the body can
/// be another `if` (an `else if` cascade) or any statement.
#[derive(Debug, Clone)]
pub struct ElseStmnt {
    pub pos: SourcePos,
    pub body_stmnt: Box<Stmnt>,
}

#[derive(Debug, Clone)]
pub struct SwitchStmnt {
    pub pos: SourcePos,
    pub attribs: Vec<FunctionCall>,
    pub selector: Expr,
    pub cases: Vec<SwitchCase>,
}

/// Variable declaration statement: modifiers, one type, one or more
/// declarators.  Carries the [`NodeId`] its declarators refer back to.
#[derive(Debug, Clone)]
pub struct VarDeclStmnt {
    pub pos: SourcePos,
    pub id: NodeId,
    pub input_modifier: Option<String>,
    pub storage_modifiers: Vec<String>,
    pub type_modifiers: Vec<String>,
    pub var_type: VarType,
    pub var_decls: Vec<VarDecl>,
}

#[derive(Debug, Clone)]
pub struct AssignStmnt {
    pub pos: SourcePos,
    pub var_ident: VarIdent,
    pub op: String,
    pub expr: Expr,
}

#[derive(Debug, Clone)]
pub struct ExprStmnt {
    pub pos: SourcePos,
    pub expr: Expr,
}

#[derive(Debug, Clone)]
pub struct FunctionCallStmnt {
    pub pos: SourcePos,
    pub call: FunctionCall,
}

#[derive(Debug, Clone)]
pub struct ReturnStmnt {
    pub pos: SourcePos,
    pub expr: Option<Expr>,
}

#[derive(Debug, Clone)]
pub struct StructDeclStmnt {
    pub pos: SourcePos,
    pub structure: Structure,
}

/// `break`, `continue` or `discard`.
#[derive(Debug, Clone)]
pub struct CtrlTransferStmnt {
    pub pos: SourcePos,
    pub instruction: String,
}

/* --- Expressions --- */

#[derive(Debug, Clone)]
pub enum Expr {
    List(ListExpr),
    Literal(LiteralExpr),
    TypeName(TypeNameExpr),
    Ternary(TernaryExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    PostUnary(PostUnaryExpr),
    FunctionCall(FunctionCallExpr),
    Bracket(BracketExpr),
    Cast(CastExpr),
    VarAccess(VarAccessExpr),
    Initializer(InitializerExpr),
}

impl Expr {
    pub fn pos(&self) -> SourcePos {
        match self {
            Expr::List(e) => e.pos,
            Expr::Literal(e) => e.pos,
            Expr::TypeName(e) => e.pos,
            Expr::Ternary(e) => e.pos,
            Expr::Binary(e) => e.pos,
            Expr::Unary(e) => e.pos,
            Expr::PostUnary(e) => e.pos,
            Expr::FunctionCall(e) => e.pos,
            Expr::Bracket(e) => e.pos,
            Expr::Cast(e) => e.pos,
            Expr::VarAccess(e) => e.pos,
            Expr::Initializer(e) => e.pos,
        }
    }
}

/// Comma-joined expression pair, e.g. the `a, b` in `for (;; a, b)`.
#[derive(Debug, Clone)]
pub struct ListExpr {
    pub pos: SourcePos,
    pub first_expr: Box<Expr>,
    pub next_expr: Box<Expr>,
}

/// Literal with its exact source spelling (`1.5f`, `0x1F`, `true`).
#[derive(Debug, Clone)]
pub struct LiteralExpr {
    pub pos: SourcePos,
    pub literal: String,
}

/// A bare built-in type name in expression position, e.g. the `float` in
/// `(float)x`.
#[derive(Debug, Clone)]
pub struct TypeNameExpr {
    pub pos: SourcePos,
    pub type_name: String,
}

#[derive(Debug, Clone)]
pub struct TernaryExpr {
    pub pos: SourcePos,
    pub condition: Box<Expr>,
    pub if_expr: Box<Expr>,
    pub else_expr: Box<Expr>,
}

/// Binary expression.  The tree encodes the input order: no precedence or
/// associativity normalization happens here; consumers that need precedence
/// shape it themselves.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub pos: SourcePos,
    pub lhs_expr: Box<Expr>,
    pub op: String,
    pub rhs_expr: Box<Expr>,
}

/// Prefix unary expression (`-x`, `!x`, `~x`, `++x`).
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub pos: SourcePos,
    pub op: String,
    pub expr: Box<Expr>,
}

/// Postfix `++`/`--`.
#[derive(Debug, Clone)]
pub struct PostUnaryExpr {
    pub pos: SourcePos,
    pub expr: Box<Expr>,
    pub op: String,
}

#[derive(Debug, Clone)]
pub struct FunctionCallExpr {
    pub pos: SourcePos,
    pub call: FunctionCall,
}

/// Parenthesized expression.
#[derive(Debug, Clone)]
pub struct BracketExpr {
    pub pos: SourcePos,
    pub expr: Box<Expr>,
}

/// C-style cast `(type) expr`.  `type_expr` is the parenthesized expression
/// that was judged to be a type form.
#[derive(Debug, Clone)]
pub struct CastExpr {
    pub pos: SourcePos,
    pub type_expr: Box<Expr>,
    pub expr: Box<Expr>,
}

/// Variable access with an optional trailing assignment
/// (`a.b = expr` in expression position).
#[derive(Debug, Clone)]
pub struct VarAccessExpr {
    pub pos: SourcePos,
    pub var_ident: VarIdent,
    pub assign_op: Option<String>,
    pub assign_expr: Option<Box<Expr>>,
}

/// Brace-enclosed initializer list, e.g. `{ 1, 2, 3 }`.
#[derive(Debug, Clone)]
pub struct InitializerExpr {
    pub pos: SourcePos,
    pub exprs: Vec<Expr>,
}

/* --- Variable facets --- */

/// Chained identifier with array indices, e.g. `light[0].color`.
#[derive(Debug, Clone)]
pub struct VarIdent {
    pub pos: SourcePos,
    pub ident: String,
    pub array_indices: Vec<Expr>,
    pub next: Option<Box<VarIdent>>,
}

/// The type slot of a declaration: either a base type name or an inline
/// (possibly anonymous) structure.
#[derive(Debug, Clone)]
pub struct VarType {
    pub pos: SourcePos,
    pub denoter: TypeDenoter,
}

/// Exactly one of the two forms is ever populated, enforced by construction.
#[derive(Debug, Clone)]
pub enum TypeDenoter {
    /// A type or struct name, e.g. `float4` or `LightSource`.
    Base(String),
    /// An inline structure declaration owned by this type slot.
    Struct(Box<Structure>),
}

impl VarType {
    pub fn base_type(&self) -> Option<&str> {
        match &self.denoter {
            TypeDenoter::Base(name) => Some(name),
            TypeDenoter::Struct(_) => None,
        }
    }

    pub fn struct_type(&self) -> Option<&Structure> {
        match &self.denoter {
            TypeDenoter::Base(_) => None,
            TypeDenoter::Struct(structure) => Some(structure),
        }
    }

    /// Reference to the structure this type denotes.
    ///
    /// Computed on demand as a borrow of the owned inline structure; only
    /// populated by the parser for inline struct types.  Name resolution for
    /// base type names belongs to a later pass.
    pub fn symbol_ref(&self) -> Option<&Structure> {
        self.struct_type()
    }
}

/// One declarator of a [`VarDeclStmnt`]: name, array dimensions, semantics
/// and an optional initializer.
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub pos: SourcePos,
    pub name: String,
    pub array_dims: Vec<Expr>,
    pub semantics: Vec<VarSemantic>,
    pub initializer: Option<Expr>,
    /// Back-reference to the enclosing [`VarDeclStmnt`], set by the parser.
    /// `None` only while the declarator is still being built.
    pub decl_stmnt_ref: Option<NodeId>,
}

/// One `:`-introduced binding on a declarator.
#[derive(Debug, Clone)]
pub struct VarSemantic {
    pub pos: SourcePos,
    pub binding: VarBinding,
}

/// The three binding forms a declarator semantic can take.
#[derive(Debug, Clone)]
pub enum VarBinding {
    /// A pipeline semantic like `SV_POSITION`.
    Semantic(String),
    /// A `register(...)` slot name like `b0`.
    Register(String),
    /// A `packoffset(...)` placement.
    PackOffset(PackOffset),
}

/// Explicit placement of a field within a constant buffer register,
/// e.g. `packoffset(c0.y)`.
#[derive(Debug, Clone)]
pub struct PackOffset {
    pub pos: SourcePos,
    pub register_name: String,
    pub vector_component: Option<String>,
}
