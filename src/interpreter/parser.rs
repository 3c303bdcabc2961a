/// Core parsing entry points.
///
/// Contains the program loop (statements joined by `;` or end-of-line) and
/// the expression entry point that seeds precedence climbing.
pub mod core;

/// Statement parsing.
///
/// Implements `if`, `while`, compound blocks, `def` declarations, `class`
/// declarations, null statements, and expression statements.
pub mod statement;

/// Binary expression parsing.
///
/// Implements precedence climbing over the operator level table, with
/// assignment as the single right-associative level.
pub mod binary;

/// Unary, postfix, and primary expression parsing.
///
/// Handles negation, the call / member / index postfix chain, grouping,
/// closures, array literals, and leaf tokens.
pub mod unary;

/// Utility functions for the parser.
///
/// Token-consumption primitives and shared helpers such as comma-separated
/// list parsing.
pub mod utils;
