use std::rc::Rc;

use crate::{
    ast::Stmt,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{consume_if, expect, expect_separator, parse_comma_separated,
                    parse_identifier},
        },
        stream::TokenStream,
    },
};

/// Parses a top-level statement.
///
/// Class declarations are only legal at the top level; everything else
/// defers to [`parse_statement`].
///
/// The rule is: `top-statement := class-statement | statement`
///
/// # Parameters
/// - `stream`: The token stream.
///
/// # Returns
/// `Some(Stmt)` for real statements, `None` for null statements.
pub(in crate::interpreter::parser) fn parse_top_statement(stream: &mut TokenStream<'_>)
                                                          -> ParseResult<Option<Stmt>> {
    if stream.peek(0)?.0 == Token::Class {
        return Ok(Some(parse_class_statement(stream)?));
    }

    parse_statement(stream)
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - an `if` statement,
/// - a `while` statement,
/// - a compound statement,
/// - a `def` function declaration,
/// - a null statement,
/// - an expression used as a statement.
///
/// A null statement is recognized whenever the next token ends a statement
/// position (end of file, end of line, `;`, or `}`); it consumes nothing and
/// produces no node, which is how blank lines and stray separators are
/// tolerated.
///
/// # Parameters
/// - `stream`: The token stream.
///
/// # Returns
/// `Some(Stmt)` for real statements, `None` for null statements.
pub(in crate::interpreter::parser) fn parse_statement(stream: &mut TokenStream<'_>)
                                                      -> ParseResult<Option<Stmt>> {
    let (token, line) = stream.peek(0)?.clone();

    match token {
        Token::If => Ok(Some(parse_if_statement(stream)?)),
        Token::While => Ok(Some(parse_while_statement(stream)?)),
        Token::LeftBrace => Ok(Some(parse_compound_statement(stream)?)),
        Token::Def => Ok(Some(parse_procedure_statement(stream)?)),

        // null-statement
        Token::EndOfFile | Token::EndOfLine | Token::Semicolon | Token::RightBrace => Ok(None),

        _ => {
            let expr = parse_expression(stream)?;
            Ok(Some(Stmt::Expression { expr, line }))
        },
    }
}

/// Parses an `if` statement with optional `else` and chained `else if`.
///
/// The rule is:
/// ```text
///     if-statement := 'if' expression compound-statement
///                     ('else' (if-statement | compound-statement))?
/// ```
///
/// # Parameters
/// - `stream`: Token stream positioned at the `if` keyword.
///
/// # Returns
/// A `Stmt::If` node representing the full conditional.
fn parse_if_statement(stream: &mut TokenStream<'_>) -> ParseResult<Stmt> {
    // 'if'
    let (_, line) = expect(stream, &Token::If)?;

    // expression
    let condition = parse_expression(stream)?;

    // compound-statement
    let then_branch = Box::new(parse_compound_statement(stream)?);

    // 'else'?
    if consume_if(stream, &Token::Else)?.is_none() {
        return Ok(Stmt::If { condition,
                             then_branch,
                             else_branch: None,
                             line });
    }

    // if-statement | compound-statement
    let otherwise = if stream.peek(0)?.0 == Token::If {
        parse_if_statement(stream)?
    } else {
        parse_compound_statement(stream)?
    };

    Ok(Stmt::If { condition,
                  then_branch,
                  else_branch: Some(Box::new(otherwise)),
                  line })
}

/// Parses a `while` statement.
///
/// The rule is: `while-statement := 'while' expression compound-statement`
///
/// # Parameters
/// - `stream`: Token stream positioned at the `while` keyword.
///
/// # Returns
/// A `Stmt::While` node.
fn parse_while_statement(stream: &mut TokenStream<'_>) -> ParseResult<Stmt> {
    // 'while'
    let (_, line) = expect(stream, &Token::While)?;

    // expression
    let condition = parse_expression(stream)?;

    // compound-statement
    let body = Box::new(parse_compound_statement(stream)?);

    Ok(Stmt::While { condition, body, line })
}

/// Parses a brace-delimited block.
///
/// The rule is:
/// `compound-statement := '{' statement (separator statement)* '}'`
///
/// Null statements between separators are tolerated, so `{}` and blocks
/// containing blank lines parse fine.
///
/// # Parameters
/// - `stream`: Token stream positioned at `{`.
///
/// # Returns
/// A `Stmt::Compound` node with its child statements.
pub(in crate::interpreter::parser) fn parse_compound_statement(stream: &mut TokenStream<'_>)
                                                               -> ParseResult<Stmt> {
    // '{'
    let (_, line) = expect(stream, &Token::LeftBrace)?;

    let mut statements = Vec::new();

    // statement
    if let Some(statement) = parse_statement(stream)? {
        statements.push(statement);
    }

    // (separator statement)* '}'
    while consume_if(stream, &Token::RightBrace)?.is_none() {
        expect_separator(stream)?;

        if let Some(statement) = parse_statement(stream)? {
            statements.push(statement);
        }
    }

    Ok(Stmt::Compound { statements, line })
}

/// Parses a named function declaration.
///
/// The rule is:
/// `procedure-statement := 'def' identifier parameter-list compound-statement`
///
/// # Parameters
/// - `stream`: Token stream positioned at the `def` keyword.
///
/// # Returns
/// A `Stmt::Procedure` node.
fn parse_procedure_statement(stream: &mut TokenStream<'_>) -> ParseResult<Stmt> {
    // 'def'
    let (_, line) = expect(stream, &Token::Def)?;

    // identifier
    let name = parse_identifier(stream)?;

    // parameter-list
    let parameters = parse_parameter_list(stream)?;

    // compound-statement
    let body = Rc::new(parse_compound_statement(stream)?);

    Ok(Stmt::Procedure { name,
                         parameters,
                         body,
                         line })
}

/// Parses a class declaration.
///
/// The rule is:
/// ```text
///     class-statement := 'class' identifier ('extends' identifier)?
///                        compound-statement
/// ```
///
/// # Parameters
/// - `stream`: Token stream positioned at the `class` keyword.
///
/// # Returns
/// A `Stmt::Class` node.
fn parse_class_statement(stream: &mut TokenStream<'_>) -> ParseResult<Stmt> {
    // 'class'
    let (_, line) = expect(stream, &Token::Class)?;

    // identifier
    let name = parse_identifier(stream)?;

    // ('extends' identifier)?
    let superclass = if consume_if(stream, &Token::Extends)?.is_some() {
        Some(parse_identifier(stream)?)
    } else {
        None
    };

    // compound-statement
    let body = Rc::new(parse_compound_statement(stream)?);

    Ok(Stmt::Class { name,
                     superclass,
                     body,
                     line })
}

/// Parses a parenthesized parameter list.
///
/// The rule is:
/// `parameter-list := '(' (identifier (',' identifier)*)? ')'`
///
/// # Parameters
/// - `stream`: Token stream positioned at `(`.
///
/// # Returns
/// The parameter names in declaration order.
pub(in crate::interpreter::parser) fn parse_parameter_list(stream: &mut TokenStream<'_>)
                                                           -> ParseResult<Vec<String>> {
    expect(stream, &Token::LeftParen)?;

    parse_comma_separated(stream, parse_identifier, &Token::RightParen)
}
