use std::rc::Rc;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            statement::{parse_compound_statement, parse_parameter_list},
            utils::{consume_if, expect, parse_comma_separated, parse_identifier},
        },
        stream::TokenStream,
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is `-` (numeric negation), and it applies to a
/// full postfix chain, so `-p.x` negates the member value.
///
/// The rule is:
/// ```text
///     unary := '-' postfix
///            | postfix
/// ```
///
/// # Parameters
/// - `stream`: The token stream.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression with its postfix operators
/// folded in.
pub(in crate::interpreter::parser) fn parse_unary(stream: &mut TokenStream<'_>)
                                                  -> ParseResult<Expr> {
    if let Some((_, line)) = consume_if(stream, &Token::Minus)? {
        let operand = parse_postfix_chain(stream)?;

        return Ok(Expr::Unary { op: UnaryOperator::Negate,
                                operand: Box::new(operand),
                                line });
    }

    parse_postfix_chain(stream)
}

fn parse_postfix_chain(stream: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let primary = parse_primary(stream)?;

    parse_postfix(stream, primary)
}

/// Parses postfix operators applied to an expression.
///
/// Three postfix constructs chain freely after a primary:
///
/// 1. **Calls** `expr(arg1, arg2, ...)`
/// 2. **Member access** `expr.name`
/// 3. **Array indexing** `expr[index]`
///
/// Parsing continues until no further postfix operator follows, so chains
/// like `b[1][0]` and `p.move(3, 4)` fold left to right.
///
/// The rule is:
/// ```text
///     postfix := primary ('(' arguments? ')' | '.' identifier
///                | '[' expression ']')*
/// ```
///
/// # Parameters
/// - `stream`: Token stream after a primary expression.
/// - `node`: The expression to which postfix operators are applied.
///
/// # Returns
/// An updated [`Expr`] with all postfix operators folded in.
fn parse_postfix(stream: &mut TokenStream<'_>, mut node: Expr) -> ParseResult<Expr> {
    loop {
        let (token, line) = stream.peek(0)?.clone();

        match token {
            // Call.
            Token::LeftParen => {
                stream.read()?;
                let arguments =
                    parse_comma_separated(stream, parse_expression, &Token::RightParen)?;

                node = Expr::Call { callee: Box::new(node),
                                    arguments,
                                    line };
            },
            // Member access.
            Token::Period => {
                stream.read()?;
                let member = parse_identifier(stream)?;

                node = Expr::Member { operand: Box::new(node),
                                      member,
                                      line };
            },
            // Array indexing.
            Token::LeftBracket => {
                stream.read()?;
                let index = parse_expression(stream)?;
                expect(stream, &Token::RightBracket)?;

                node = Expr::Index { operand: Box::new(node),
                                     index: Box::new(index),
                                     line };
            },
            _ => break,
        }
    }

    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - parenthesized expressions,
/// - closures (`fun`),
/// - array literals (a `[` in primary position, as opposed to the postfix
///   index; the distinction is purely positional),
/// - identifiers,
/// - integer literals,
/// - string literals.
///
/// # Parameters
/// - `stream`: Token stream positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`], or a `ParseError` if no expression can
/// start here.
fn parse_primary(stream: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let (token, line) = stream.peek(0)?.clone();

    match token {
        // '(' expression ')'
        Token::LeftParen => {
            stream.read()?;
            let expression = parse_expression(stream)?;
            expect(stream, &Token::RightParen)?;

            Ok(expression)
        },
        Token::Fun => parse_closure(stream),
        Token::LeftBracket => parse_array_literal(stream),
        Token::Identifier(name) => {
            stream.read()?;
            Ok(Expr::Identifier { name, line })
        },
        Token::Integer(value) => {
            stream.read()?;
            Ok(Expr::IntegerLiteral { value, line })
        },
        Token::Str(value) => {
            stream.read()?;
            Ok(Expr::StringLiteral { value, line })
        },
        token => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                   expected: "expression".to_string(),
                                                   line }),
    }
}

/// Parses an anonymous function expression.
///
/// The rule is: `closure := 'fun' parameter-list compound-statement`
///
/// # Parameters
/// - `stream`: Token stream positioned at the `fun` keyword.
///
/// # Returns
/// An [`Expr::Closure`] node.
fn parse_closure(stream: &mut TokenStream<'_>) -> ParseResult<Expr> {
    // 'fun'
    let (_, line) = expect(stream, &Token::Fun)?;

    // parameter-list
    let parameters = parse_parameter_list(stream)?;

    // compound-statement
    let body = Rc::new(parse_compound_statement(stream)?);

    Ok(Expr::Closure { parameters,
                       body,
                       line })
}

/// Parses an array literal.
///
/// The rule is: `array-literal := '[' (expression (',' expression)*)? ']'`
///
/// # Parameters
/// - `stream`: Token stream positioned at `[`.
///
/// # Returns
/// An [`Expr::ArrayLiteral`] with its element expressions.
fn parse_array_literal(stream: &mut TokenStream<'_>) -> ParseResult<Expr> {
    // '['
    let (_, line) = expect(stream, &Token::LeftBracket)?;

    let elements = parse_comma_separated(stream, parse_expression, &Token::RightBracket)?;

    Ok(Expr::ArrayLiteral { elements, line })
}
