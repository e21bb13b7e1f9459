// Integration tests for the HLSL parser

use hlslparse::logger::MemoryLogger;
use hlslparse::parser::ast::*;
use hlslparse::parser::parse::ParseError;
use hlslparse::visitor::{self, Visitor};
use hlslparse::{parse, parse_with_logger, print_ast, SourceCode};

fn parse_ok(text: &str) -> Program {
    parse(&SourceCode::from_string("test", text)).expect("parse failed")
}

fn parse_err(text: &str) -> ParseError {
    parse(&SourceCode::from_string("test", text)).expect_err("parse unexpectedly succeeded")
}

/// Wrap a statement into a function body and return it parsed.
fn parse_stmnt(text: &str) -> Stmnt {
    let program = parse_ok(&format!("void f() {{ {text} }}"));
    let function = only_function(&program);
    let block = function.code_block.as_ref().expect("missing body");
    assert_eq!(block.stmnts.len(), 1, "expected a single statement");
    block.stmnts[0].clone()
}

fn only_function(program: &Program) -> &FunctionDecl {
    assert_eq!(program.global_decls.len(), 1);
    match &program.global_decls[0] {
        GlobalDecl::Function(decl) => decl,
        other => panic!("expected function declaration, got {other:?}"),
    }
}

fn var_access_ident(expr: &Expr) -> &str {
    match expr {
        Expr::VarAccess(access) => &access.var_ident.ident,
        other => panic!("expected variable access, got {other:?}"),
    }
}

// === Scenario: simple function ===

#[test]
fn test_simple_function() {
    let program = parse_ok("float4 main(float4 p : POSITION) : SV_POSITION { return p; }");
    let function = only_function(&program);

    assert_eq!(function.name, "main");
    assert_eq!(function.return_type.base_type(), Some("float4"));
    assert_eq!(function.semantic.as_deref(), Some("SV_POSITION"));

    assert_eq!(function.parameters.len(), 1);
    let param = &function.parameters[0];
    assert_eq!(param.var_type.base_type(), Some("float4"));
    assert_eq!(param.var_decls.len(), 1);
    assert_eq!(param.var_decls[0].name, "p");
    assert!(matches!(
        &param.var_decls[0].semantics[0].binding,
        VarBinding::Semantic(s) if s == "POSITION"
    ));

    let block = function.code_block.as_ref().expect("missing body");
    assert_eq!(block.stmnts.len(), 1);
    match &block.stmnts[0] {
        Stmnt::Return(ret) => {
            let expr = ret.expr.as_ref().expect("missing return expression");
            assert_eq!(var_access_ident(expr), "p");
        }
        other => panic!("expected return statement, got {other:?}"),
    }
}

#[test]
fn test_function_prototype_has_no_body() {
    let program = parse_ok("float f(int x);");
    let function = only_function(&program);
    assert!(function.code_block.is_none());
}

#[test]
fn test_function_attributes() {
    let program = parse_ok("[numthreads(8, 8, 1)] void f() {}");
    let function = only_function(&program);

    assert_eq!(function.attribs.len(), 1);
    assert_eq!(function.attribs[0].name.ident, "numthreads");
    assert_eq!(function.attribs[0].arguments.len(), 3);
}

#[test]
fn test_parameter_modifiers_last_writer_wins() {
    let program = parse_ok("void f(in out const float x) {}");
    let function = only_function(&program);
    let param = &function.parameters[0];

    // A repeated input modifier overwrites the previous one
    assert_eq!(param.input_modifier.as_deref(), Some("out"));
    assert_eq!(param.type_modifiers, vec!["const".to_string()]);
}

#[test]
fn test_void_parameter_type_is_rejected() {
    let err = parse_err("float f(void x) {}");
    assert!(err.to_string().contains("'void' type not allowed"));
}

// === Scenario: cbuffer with register and packoffset ===

#[test]
fn test_cbuffer_with_register_and_packoffset() {
    let program = parse_ok("cbuffer B : register(b0) { float4 x : packoffset(c0.y); };");

    let buffer = match &program.global_decls[0] {
        GlobalDecl::UniformBuffer(decl) => decl,
        other => panic!("expected uniform buffer declaration, got {other:?}"),
    };

    assert_eq!(buffer.buffer_type, "cbuffer");
    assert_eq!(buffer.name, "B");
    assert_eq!(buffer.register_name.as_deref(), Some("b0"));

    assert_eq!(buffer.members.len(), 1);
    let member = &buffer.members[0];
    assert_eq!(member.var_type.base_type(), Some("float4"));
    assert_eq!(member.var_decls[0].name, "x");

    match &member.var_decls[0].semantics[0].binding {
        VarBinding::PackOffset(pack_offset) => {
            assert_eq!(pack_offset.register_name, "c0");
            assert_eq!(pack_offset.vector_component.as_deref(), Some("y"));
        }
        other => panic!("expected packoffset binding, got {other:?}"),
    }
}

#[test]
fn test_texture_decl_with_color_type_and_registers() {
    let program = parse_ok("Texture2D<float4> diffuse : register(t0), normals;");

    let texture = match &program.global_decls[0] {
        GlobalDecl::Texture(decl) => decl,
        other => panic!("expected texture declaration, got {other:?}"),
    };

    assert_eq!(texture.texture_type, "Texture2D");
    assert_eq!(texture.color_type.as_deref(), Some("float4"));
    assert_eq!(texture.names.len(), 2);
    assert_eq!(texture.names[0].ident, "diffuse");
    assert_eq!(texture.names[0].register_name.as_deref(), Some("t0"));
    assert_eq!(texture.names[1].ident, "normals");
    assert!(texture.names[1].register_name.is_none());
}

#[test]
fn test_sampler_decl() {
    let program = parse_ok("SamplerState linearSampler : register(s0);");

    match &program.global_decls[0] {
        GlobalDecl::Sampler(decl) => {
            assert_eq!(decl.sampler_type, "SamplerState");
            assert_eq!(decl.names[0].ident, "linearSampler");
            assert_eq!(decl.names[0].register_name.as_deref(), Some("s0"));
        }
        other => panic!("expected sampler declaration, got {other:?}"),
    }
}

#[test]
fn test_global_directive_kept_verbatim() {
    let program = parse_ok("#include \"lighting.hlsl\"\nvoid f() {}");

    match &program.global_decls[0] {
        GlobalDecl::Directive(decl) => {
            assert_eq!(decl.line, "#include \"lighting.hlsl\"");
        }
        other => panic!("expected directive declaration, got {other:?}"),
    }
}

// === Scenario: cast vs. bracket ===

#[test]
fn test_cast_of_builtin_type() {
    let stmnt = parse_stmnt("y = (float)x;");

    let assign = match stmnt {
        Stmnt::Assign(assign) => assign,
        other => panic!("expected assignment, got {other:?}"),
    };

    match &assign.expr {
        Expr::Cast(cast) => {
            match cast.type_expr.as_ref() {
                Expr::TypeName(name) => assert_eq!(name.type_name, "float"),
                other => panic!("expected type name expression, got {other:?}"),
            }
            assert_eq!(var_access_ident(&cast.expr), "x");
        }
        other => panic!("expected cast expression, got {other:?}"),
    }
}

#[test]
fn test_bracket_when_no_primary_follows() {
    // `+` cannot start a primary expression, so `(x)` stays a bracket
    let stmnt = parse_stmnt("y = (x) + 1;");

    let assign = match stmnt {
        Stmnt::Assign(assign) => assign,
        other => panic!("expected assignment, got {other:?}"),
    };

    match &assign.expr {
        Expr::Binary(binary) => {
            assert_eq!(binary.op, "+");
            match binary.lhs_expr.as_ref() {
                Expr::Bracket(bracket) => {
                    assert_eq!(var_access_ident(&bracket.expr), "x");
                }
                other => panic!("expected bracket expression, got {other:?}"),
            }
            assert!(matches!(
                binary.rhs_expr.as_ref(),
                Expr::Literal(lit) if lit.literal == "1"
            ));
        }
        other => panic!("expected binary expression, got {other:?}"),
    }
}

#[test]
fn test_identifier_cast_is_syntactic() {
    // `(S) y` reads as a cast whenever S is a pure identifier path, even
    // though S may turn out to be a variable; that check is semantic
    let stmnt = parse_stmnt("z = (S)y;");

    let assign = match stmnt {
        Stmnt::Assign(assign) => assign,
        other => panic!("expected assignment, got {other:?}"),
    };

    match &assign.expr {
        Expr::Cast(cast) => {
            assert_eq!(var_access_ident(&cast.type_expr), "S");
            assert_eq!(var_access_ident(&cast.expr), "y");
        }
        other => panic!("expected cast expression, got {other:?}"),
    }
}

// === Scenario: identifier-led statement disambiguation ===

#[test]
fn test_ident_then_paren_is_function_call_stmnt() {
    let stmnt = parse_stmnt("foo(1, 2);");

    match stmnt {
        Stmnt::FunctionCall(call_stmnt) => {
            assert_eq!(call_stmnt.call.name.ident, "foo");
            assert_eq!(call_stmnt.call.arguments.len(), 2);
        }
        other => panic!("expected function call statement, got {other:?}"),
    }
}

#[test]
fn test_ident_then_assign_op_is_assignment() {
    let stmnt = parse_stmnt("foo = 1;");

    match stmnt {
        Stmnt::Assign(assign) => {
            assert_eq!(assign.var_ident.ident, "foo");
            assert_eq!(assign.op, "=");
        }
        other => panic!("expected assignment, got {other:?}"),
    }
}

#[test]
fn test_compound_assignment() {
    let stmnt = parse_stmnt("foo.bar += 2;");

    match stmnt {
        Stmnt::Assign(assign) => {
            assert_eq!(assign.var_ident.ident, "foo");
            assert_eq!(assign.var_ident.next.as_ref().unwrap().ident, "bar");
            assert_eq!(assign.op, "+=");
        }
        other => panic!("expected assignment, got {other:?}"),
    }
}

#[test]
fn test_ident_then_increment_is_expr_stmnt() {
    let stmnt = parse_stmnt("foo++;");

    match stmnt {
        Stmnt::Expr(expr_stmnt) => match &expr_stmnt.expr {
            Expr::PostUnary(post) => {
                assert_eq!(post.op, "++");
                assert_eq!(var_access_ident(&post.expr), "foo");
            }
            other => panic!("expected postfix unary expression, got {other:?}"),
        },
        other => panic!("expected expression statement, got {other:?}"),
    }
}

#[test]
fn test_ident_pair_is_var_decl_stmnt() {
    let stmnt = parse_stmnt("foo bar;");

    match stmnt {
        Stmnt::VarDecl(decl) => {
            assert_eq!(decl.var_type.base_type(), Some("foo"));
            assert_eq!(decl.var_decls.len(), 1);
            assert_eq!(decl.var_decls[0].name, "bar");
        }
        other => panic!("expected variable declaration, got {other:?}"),
    }
}

#[test]
fn test_dotted_ident_without_continuation_is_error() {
    let err = parse_err("void f() { foo.bar baz; }");
    assert!(err
        .to_string()
        .contains("expected variable declaration, assignment or function call statement"));
}

// === Scenario: anonymous struct variable ===

#[test]
fn test_anonymous_struct_variable() {
    let stmnt = parse_stmnt("struct { float a; } v;");

    let decl = match stmnt {
        Stmnt::VarDecl(decl) => decl,
        other => panic!("expected variable declaration, got {other:?}"),
    };

    let structure = decl.var_type.struct_type().expect("missing struct type");
    assert_eq!(structure.name, "");
    assert_eq!(structure.members.len(), 1);
    assert_eq!(decl.var_decls[0].name, "v");

    // symbol_ref borrows the same owned structure
    let symbol = decl.var_type.symbol_ref().expect("missing symbol ref");
    assert!(std::ptr::eq(symbol, structure));
}

#[test]
fn test_named_struct_decl_stmnt() {
    let stmnt = parse_stmnt("struct Light { float3 dir; };");

    match stmnt {
        Stmnt::StructDecl(decl) => {
            assert_eq!(decl.structure.name, "Light");
            assert_eq!(decl.structure.members.len(), 1);
        }
        other => panic!("expected structure declaration, got {other:?}"),
    }
}

#[test]
fn test_global_struct_decl() {
    let program = parse_ok("struct VsOut { float4 pos : SV_POSITION; };");

    match &program.global_decls[0] {
        GlobalDecl::Struct(decl) => {
            assert_eq!(decl.structure.name, "VsOut");
        }
        other => panic!("expected struct declaration, got {other:?}"),
    }
}

// === Scenario: switch with fallthrough ===

#[test]
fn test_switch_with_fallthrough() {
    let stmnt = parse_stmnt("switch (x) { case 1: case 2: break; default: break; }");

    let switch = match stmnt {
        Stmnt::Switch(switch) => switch,
        other => panic!("expected switch statement, got {other:?}"),
    };

    assert_eq!(var_access_ident(&switch.selector), "x");
    assert_eq!(switch.cases.len(), 3);

    assert!(matches!(
        switch.cases[0].expr.as_ref(),
        Some(Expr::Literal(lit)) if lit.literal == "1"
    ));
    assert!(switch.cases[0].stmnts.is_empty());

    assert!(matches!(
        switch.cases[1].expr.as_ref(),
        Some(Expr::Literal(lit)) if lit.literal == "2"
    ));
    assert_eq!(switch.cases[1].stmnts.len(), 1);
    assert!(matches!(
        &switch.cases[1].stmnts[0],
        Stmnt::CtrlTransfer(ctrl) if ctrl.instruction == "break"
    ));

    assert!(switch.cases[2].expr.is_none());
    assert_eq!(switch.cases[2].stmnts.len(), 1);
}

// === Control flow statements ===

#[test]
fn test_for_loop_with_empty_clauses() {
    let stmnt = parse_stmnt("for (;;) discard;");

    let for_loop = match stmnt {
        Stmnt::ForLoop(for_loop) => for_loop,
        other => panic!("expected for loop, got {other:?}"),
    };

    assert!(matches!(for_loop.init_stmnt.as_ref(), Stmnt::Null(_)));
    assert!(for_loop.condition.is_none());
    assert!(for_loop.iteration.is_none());
    assert!(matches!(
        for_loop.body_stmnt.as_ref(),
        Stmnt::CtrlTransfer(ctrl) if ctrl.instruction == "discard"
    ));
}

#[test]
fn test_for_loop_with_decl_and_iteration() {
    let stmnt = parse_stmnt("for (int i = 0; i < 4; i++) { x += i; }");

    let for_loop = match stmnt {
        Stmnt::ForLoop(for_loop) => for_loop,
        other => panic!("expected for loop, got {other:?}"),
    };

    assert!(matches!(for_loop.init_stmnt.as_ref(), Stmnt::VarDecl(_)));
    assert!(for_loop.condition.is_some());
    assert!(for_loop.iteration.is_some());
    assert!(matches!(for_loop.body_stmnt.as_ref(), Stmnt::CodeBlock(_)));
}

#[test]
fn test_loop_attributes() {
    let stmnt = parse_stmnt("[unroll] for (;;) break;");

    match stmnt {
        Stmnt::ForLoop(for_loop) => {
            assert_eq!(for_loop.attribs.len(), 1);
            assert_eq!(for_loop.attribs[0].name.ident, "unroll");
            assert!(for_loop.attribs[0].arguments.is_empty());
        }
        other => panic!("expected for loop, got {other:?}"),
    }
}

#[test]
fn test_if_else_cascade() {
    let stmnt = parse_stmnt("if (a) x = 1; else if (b) x = 2; else x = 3;");

    let if_stmnt = match stmnt {
        Stmnt::If(if_stmnt) => if_stmnt,
        other => panic!("expected if statement, got {other:?}"),
    };

    let else_stmnt = if_stmnt.else_stmnt.expect("missing else branch");
    match else_stmnt.body_stmnt.as_ref() {
        Stmnt::If(nested) => {
            assert!(nested.else_stmnt.is_some());
        }
        other => panic!("expected nested if, got {other:?}"),
    }
}

#[test]
fn test_do_while_loop() {
    let stmnt = parse_stmnt("do { x--; } while (x > 0);");

    match stmnt {
        Stmnt::DoWhileLoop(do_while) => {
            assert!(matches!(do_while.body_stmnt.as_ref(), Stmnt::CodeBlock(_)));
            assert!(matches!(do_while.condition, Expr::Binary(_)));
        }
        other => panic!("expected do-while loop, got {other:?}"),
    }
}

#[test]
fn test_while_loop() {
    let stmnt = parse_stmnt("while (x) x = x - 1;");
    assert!(matches!(stmnt, Stmnt::WhileLoop(_)));
}

// === Declarations and expressions ===

#[test]
fn test_var_decl_with_modifiers_and_array() {
    let stmnt = parse_stmnt("static const float weights[4] = { 0.1, 0.2, 0.3, 0.4, };");

    let decl = match stmnt {
        Stmnt::VarDecl(decl) => decl,
        other => panic!("expected variable declaration, got {other:?}"),
    };

    assert_eq!(decl.storage_modifiers, vec!["static".to_string()]);
    assert_eq!(decl.type_modifiers, vec!["const".to_string()]);
    assert_eq!(decl.var_decls[0].array_dims.len(), 1);

    // Initializer lists tolerate a trailing comma
    match decl.var_decls[0].initializer.as_ref() {
        Some(Expr::Initializer(init)) => assert_eq!(init.exprs.len(), 4),
        other => panic!("expected initializer list, got {other:?}"),
    }
}

#[test]
fn test_multiple_declarators_share_one_statement() {
    let stmnt = parse_stmnt("float a = 1, b, c = 3;");

    match stmnt {
        Stmnt::VarDecl(decl) => {
            assert_eq!(decl.var_decls.len(), 3);
            assert!(decl.var_decls[0].initializer.is_some());
            assert!(decl.var_decls[1].initializer.is_none());
            assert!(decl.var_decls[2].initializer.is_some());
        }
        other => panic!("expected variable declaration, got {other:?}"),
    }
}

#[test]
fn test_constructor_call_expression() {
    let stmnt = parse_stmnt("p = float4(0, 0, 0, 1);");

    let assign = match stmnt {
        Stmnt::Assign(assign) => assign,
        other => panic!("expected assignment, got {other:?}"),
    };

    match &assign.expr {
        Expr::FunctionCall(call) => {
            assert_eq!(call.call.name.ident, "float4");
            assert_eq!(call.call.arguments.len(), 4);
        }
        other => panic!("expected function call expression, got {other:?}"),
    }
}

#[test]
fn test_chained_ident_with_array_indices() {
    let stmnt = parse_stmnt("c = lights[0].color;");

    let assign = match stmnt {
        Stmnt::Assign(assign) => assign,
        other => panic!("expected assignment, got {other:?}"),
    };

    match &assign.expr {
        Expr::VarAccess(access) => {
            assert_eq!(access.var_ident.ident, "lights");
            assert_eq!(access.var_ident.array_indices.len(), 1);
            assert_eq!(access.var_ident.next.as_ref().unwrap().ident, "color");
        }
        other => panic!("expected variable access, got {other:?}"),
    }
}

#[test]
fn test_ternary_expression() {
    let stmnt = parse_stmnt("y = a ? 1 : 0;");

    let assign = match stmnt {
        Stmnt::Assign(assign) => assign,
        other => panic!("expected assignment, got {other:?}"),
    };

    assert!(matches!(&assign.expr, Expr::Ternary(_)));
}

#[test]
fn test_binary_chain_is_right_nested() {
    // No precedence: `1 + 2 * 3` nests to the right as `1 + (2 * 3)` purely
    // by input order
    let stmnt = parse_stmnt("y = 1 + 2 * 3;");

    let assign = match stmnt {
        Stmnt::Assign(assign) => assign,
        other => panic!("expected assignment, got {other:?}"),
    };

    match &assign.expr {
        Expr::Binary(outer) => {
            assert_eq!(outer.op, "+");
            assert!(matches!(outer.lhs_expr.as_ref(), Expr::Literal(_)));
            match outer.rhs_expr.as_ref() {
                Expr::Binary(inner) => assert_eq!(inner.op, "*"),
                other => panic!("expected nested binary expression, got {other:?}"),
            }
        }
        other => panic!("expected binary expression, got {other:?}"),
    }
}

#[test]
fn test_unary_minus() {
    let stmnt = parse_stmnt("y = -x;");

    let assign = match stmnt {
        Stmnt::Assign(assign) => assign,
        other => panic!("expected assignment, got {other:?}"),
    };

    match &assign.expr {
        Expr::Unary(unary) => {
            assert_eq!(unary.op, "-");
            assert_eq!(var_access_ident(&unary.expr), "x");
        }
        other => panic!("expected unary expression, got {other:?}"),
    }
}

#[test]
fn test_comma_list_in_for_iteration() {
    let stmnt = parse_stmnt("for (; x < 4; x++, y--) ;");

    let for_loop = match stmnt {
        Stmnt::ForLoop(for_loop) => for_loop,
        other => panic!("expected for loop, got {other:?}"),
    };

    assert!(matches!(for_loop.iteration.as_ref(), Some(Expr::List(_))));
}

#[test]
fn test_directive_inside_function_body() {
    let program = parse_ok("void f() {\n#if SHADOWS\nx = 1;\n#endif\n}");
    let function = only_function(&program);
    let block = function.code_block.as_ref().unwrap();

    assert!(matches!(
        &block.stmnts[0],
        Stmnt::Directive(d) if d.line == "#if SHADOWS"
    ));
    assert!(matches!(&block.stmnts[1], Stmnt::Assign(_)));
    assert!(matches!(
        &block.stmnts[2],
        Stmnt::Directive(d) if d.line == "#endif"
    ));
}

// === Errors ===

#[test]
fn test_unbalanced_delimiters_are_rejected() {
    for text in [
        "void f() {",
        "void f() { x = (1; }",
        "void f() { a[1 = 2; }",
        "void f( { }",
        "cbuffer B { float x; ",
        "void f() { } }",
    ] {
        assert!(
            parse(&SourceCode::from_string("test", text)).is_err(),
            "expected parse failure for: {text}"
        );
    }
}

#[test]
fn test_error_carries_position() {
    let err = parse_err("void f() {\n  @\n}");
    let pos = err.pos();
    assert_eq!(pos.line, 2);
    assert_eq!(pos.column, 3);
}

#[test]
fn test_spelling_mismatch_error() {
    let err = parse_err("Texture2D<float4 < tex;");
    assert!(matches!(err, ParseError::SpellingMismatch { .. }));
}

#[test]
fn test_error_is_routed_to_logger() {
    let source = SourceCode::from_string("test", "void f() { !!! }");
    let mut log = MemoryLogger::new();

    assert!(parse_with_logger(&source, &mut log).is_none());
    assert_eq!(log.lines().len(), 1);
    assert!(log.lines()[0].starts_with("error: syntax error ("));
}

// === Invariants ===

const CORPUS: &str = r#"
#include "common.hlsl"

Texture2D<float4> diffuseMap : register(t0);
SamplerState linearSampler : register(s0);

cbuffer Scene : register(b0)
{
    float4x4 worldViewProj : packoffset(c0);
    float4 tint;
};

struct VsIn
{
    float3 pos : POSITION;
    float2 uv : TEXCOORD0;
};

float4 shade(float2 uv, uniform float gain)
{
    float4 color = diffuseMap.Sample(linearSampler, uv);
    return color * gain;
}

[earlydepthstencil]
float4 main(VsIn input) : SV_TARGET
{
    struct { float2 uv; } locals;
    locals.uv = input.uv;

    float gain = 1.0f;
    for (int i = 0; i < 4; i++)
    {
        if (gain > 2.0f)
            break;
        else
            gain += 0.5f;
    }

    switch ((int)gain)
    {
        case 1:
        case 2:
            gain++;
            break;
        default:
            gain = 1.0f;
            break;
    }

    return shade(locals.uv, gain) * tint;
}
"#;

/// Checks that every declarator points back at its enclosing statement.
#[derive(Default)]
struct BackRefCheck {
    checked: usize,
}

impl Visitor for BackRefCheck {
    fn visit_var_decl_stmnt(&mut self, ast: &VarDeclStmnt) {
        for var_decl in &ast.var_decls {
            assert_eq!(var_decl.decl_stmnt_ref, Some(ast.id));
            self.checked += 1;
        }
        visitor::walk_var_decl_stmnt(self, ast);
    }
}

#[test]
fn test_decl_stmnt_back_references() {
    let program = parse_ok(CORPUS);

    let mut check = BackRefCheck::default();
    check.visit_program(&program);

    // parameters, buffer members, struct members and locals all count
    assert!(check.checked >= 10, "only {} declarators seen", check.checked);
}

#[test]
fn test_every_printed_node_has_valid_position() {
    let program = parse_ok(CORPUS);

    let mut log = MemoryLogger::new();
    print_ast(&program, &mut log);

    assert!(log.lines().len() > 50);
    for line in log.lines() {
        let open = line.find('(').expect("missing position");
        let close = line[open..].find(')').expect("missing position") + open;
        let (line_no, column) = line[open + 1..close]
            .split_once(':')
            .expect("malformed position");
        assert!(line_no.parse::<u32>().unwrap() >= 1);
        assert!(column.parse::<u32>().unwrap() >= 1);
    }
}

#[test]
fn test_traversal_is_deterministic() {
    let program = parse_ok(CORPUS);

    let mut first = MemoryLogger::new();
    print_ast(&program, &mut first);
    let mut second = MemoryLogger::new();
    print_ast(&program, &mut second);

    assert_eq!(first.lines(), second.lines());
}

#[test]
fn test_statement_order_is_preserved() {
    let program = parse_ok("void f() { a = 1; b = 2; c = 3; }");
    let function = only_function(&program);
    let block = function.code_block.as_ref().unwrap();

    let idents: Vec<&str> = block
        .stmnts
        .iter()
        .map(|stmnt| match stmnt {
            Stmnt::Assign(assign) => assign.var_ident.ident.as_str(),
            other => panic!("expected assignment, got {other:?}"),
        })
        .collect();

    assert_eq!(idents, vec!["a", "b", "c"]);
}
