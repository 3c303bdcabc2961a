//! # stone
//!
//! stone is a tree-walking interpreter for the Stone programming language:
//! a small dynamically-typed imperative language with first-class closures,
//! single-inheritance classes, arrays, strings, and integers. Source text is
//! lexed into tokens, parsed into an abstract syntax tree, and evaluated
//! against a lexically-scoped environment; the value of the final top-level
//! expression is the program result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use crate::interpreter::{
    environment::EnvRef,
    evaluator::core::eval_program,
    parser::core::parse_program,
    stream::TokenStream,
    value::{core::Value, function::NativeFunction},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Stmt` and `Expr` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Keeps dispatch exhaustive through closed tagged unions.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Both error kinds carry the offending line number and
/// render as `error at line N: <message>`; there is no recovery from either.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, environments, and
/// value representations to provide a complete runtime for Stone programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::error::{ParseError, RuntimeError};

/// Creates a token stream over `source`.
///
/// Nothing is lexed until the stream is first read, and lexing errors
/// surface through the parser as parse failures.
#[must_use]
pub fn lex(source: &str) -> TokenStream<'_> {
    TokenStream::new(source)
}

/// Parses a token stream into a program.
///
/// # Errors
/// Returns a `ParseError` on malformed input, carrying the offending line
/// number.
pub fn parse(stream: &mut TokenStream<'_>) -> Result<crate::ast::Program, ParseError> {
    parse_program(stream)
}

/// Creates the empty top-level environment.
///
/// The host is expected to bind its built-ins into the returned environment
/// before calling [`evaluate`]; [`install_builtins`] does so for the
/// standard set.
#[must_use]
pub fn global_env() -> EnvRef {
    interpreter::evaluator::core::global_env()
}

/// Evaluates a parsed program against `env` and returns the value of its
/// final top-level expression.
///
/// # Errors
/// Returns a `RuntimeError` on evaluation failure, carrying the offending
/// line number.
pub fn evaluate(program: &crate::ast::Program, env: &EnvRef) -> Result<Value, RuntimeError> {
    eval_program(program, env)
}

/// Binds the standard built-in functions into `env`.
///
/// Currently that is `print`: arity 1, writes its argument's string form to
/// stdout followed by a newline, and returns the argument.
pub fn install_builtins(env: &EnvRef) {
    let print = NativeFunction::new("print", 1, |arguments: &[Value]| {
        println!("{}", arguments[0]);
        arguments[0].clone()
    });

    env.borrow_mut().put("print", Value::Native(Rc::new(print)));
}

/// Parses and evaluates `source` in a fresh global environment with the
/// standard built-ins installed, returning the final value.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use stone::run;
///
/// let value = run("def fact(n) { if n < 2 { 1 } else { n * fact(n - 1) } }; fact(5)").unwrap();
/// assert_eq!(value.to_string(), "120");
///
/// // Unparseable input is reported as an error.
/// assert!(run("1 +").is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut stream = lex(source);
    let program = parse(&mut stream)?;

    let env = global_env();
    install_builtins(&env);

    Ok(evaluate(&program, &env)?)
}
