/// Core evaluation logic.
///
/// Contains the statement and expression dispatch that walks the AST
/// against the current environment.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic with the integer/string overload of `+`,
/// comparisons, and the unified equality rule.
pub mod binary;

/// Assignment evaluation.
///
/// Resolves the left-hand side of `=` into a storage slot (variable,
/// instance member, or array element) and performs the store uniformly.
pub mod assign;

/// Call evaluation.
///
/// Invokes function values and host natives, enforcing exact arity and
/// binding parameters into a fresh call frame.
pub mod call;

/// Class and instance evaluation.
///
/// Implements member access, instantiation through `new` (superclass chain
/// first, subclass body overriding), and `this` binding.
pub mod object;
