//! # Introduction
//!
//! `hlslparse` is the front-end of an HLSL translator: it scans HLSL source
//! text into a token stream and parses that stream into a strongly-typed
//! Abstract Syntax Tree.  Later stages (semantic analysis, code generation)
//! consume the tree through the visitor contract; the bundled AST printer is
//! the reference consumer.
//!
//! ## Pipeline
//!
//! ```text
//! SourceCode → Lexer → Parser → AST → Visitor consumers (printer, ...)
//! ```
//!
//! 1. [`source`] — named source text with a line/column tracking cursor.
//! 2. [`parser`] — tokenises the source and builds the AST; any lexical or
//!    syntactic error aborts the parse with a single positioned diagnostic.
//! 3. [`visitor`] — one-method-per-kind traversal with default pre-order
//!    recursion.
//! 4. [`printer`] — dumps the tree as indented `Kind (line:column)` lines.
//! 5. [`logger`] — the abstract sink the parser and printer report through.
//!
//! ## Example
//!
//! ```
//! use hlslparse::{parse, SourceCode};
//!
//! let source = SourceCode::from_string(
//!     "example.hlsl",
//!     "float4 main(float4 p : POSITION) : SV_POSITION { return p; }",
//! );
//! let program = parse(&source).expect("parse failed");
//! assert_eq!(program.global_decls.len(), 1);
//! ```
//!
//! ## Supported HLSL subset
//!
//! Functions with semantics and attributes, `cbuffer`/`tbuffer`, texture and
//! sampler declarations, structs (named, nested and anonymous), the usual
//! statement set (`if/else`, `for`, `while`, `do-while`, `switch/case`,
//! `break`/`continue`/`discard`, `return`) and C-style expressions including
//! casts, constructor calls and initializer lists.  Preprocessor directives
//! are kept verbatim as single tokens; expansion is out of scope.

pub mod logger;
pub mod parser;
pub mod printer;
pub mod source;
pub mod visitor;

pub use logger::{Logger, MemoryLogger, NullLogger, StdLogger};
pub use parser::ast::Program;
pub use parser::lexer::ScanError;
pub use parser::parse::{parse, parse_with_logger, ParseError};
pub use printer::print_ast;
pub use source::{SourceCode, SourcePos};
