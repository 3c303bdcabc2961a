use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_binary, statement::parse_top_statement, utils::expect_separator},
        stream::TokenStream,
    },
};

/// Result type used by the parser.
///
/// All parsing functions return either a parsed node of type `T` or a
/// `ParseError` describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// The rule is: `program := statement (separator statement)*` where
/// `separator := ';' | end-of-line`. Null statements are permitted between
/// separators, which is what tolerates blank lines, stray semicolons, and
/// trailing newlines; they produce no node.
///
/// # Parameters
/// - `stream`: The token stream to parse.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Returns a `ParseError` on malformed input. The parser does not attempt
/// to resynchronize.
pub fn parse_program(stream: &mut TokenStream<'_>) -> ParseResult<Program> {
    let mut statements = Vec::new();

    // statement
    if let Some(statement) = parse_top_statement(stream)? {
        statements.push(statement);
    }

    // (separator statement)*
    while stream.peek(0)?.0 != Token::EndOfFile {
        expect_separator(stream)?;

        if let Some(statement) = parse_top_statement(stream)? {
            statements.push(statement);
        }
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing: precedence climbing
/// starting from the lowest level, so assignment binds loosest.
///
/// Grammar: `expression := binary(0)`
///
/// # Parameters
/// - `stream`: The token stream to parse.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(stream: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_binary(stream, 0)
}
