use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult, stream::TokenStream},
};

/// Consumes the next token if it equals `acceptable`.
///
/// # Parameters
/// - `stream`: The token stream.
/// - `acceptable`: The token to consume if present.
///
/// # Returns
/// - `Ok(Some((token, line)))` when the token matched and was consumed.
/// - `Ok(None)` when it did not; nothing is consumed.
pub(in crate::interpreter::parser) fn consume_if(stream: &mut TokenStream<'_>,
                                                 acceptable: &Token)
                                                 -> ParseResult<Option<(Token, usize)>> {
    if &stream.peek(0)?.0 == acceptable {
        return Ok(Some(stream.read()?));
    }

    Ok(None)
}

/// Consumes the next token, requiring it to equal `expected`.
///
/// # Parameters
/// - `stream`: The token stream.
/// - `expected`: The token that must come next.
///
/// # Returns
/// The consumed `(token, line)` pair.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` naming the expected spelling when
/// anything else comes next.
pub(in crate::interpreter::parser) fn expect(stream: &mut TokenStream<'_>,
                                             expected: &Token)
                                             -> ParseResult<(Token, usize)> {
    let (token, line) = stream.peek(0)?.clone();
    if &token == expected {
        return stream.read();
    }

    Err(ParseError::UnexpectedToken { token: token.to_string(),
                                      expected: expected.to_string(),
                                      line })
}

/// Consumes one statement separator: either end-of-line or `;`.
///
/// # Errors
/// Returns a `ParseError` when neither separator comes next.
pub(in crate::interpreter::parser) fn expect_separator(stream: &mut TokenStream<'_>)
                                                       -> ParseResult<()> {
    if consume_if(stream, &Token::EndOfLine)?.is_none() {
        expect(stream, &Token::Semicolon)?;
    }

    Ok(())
}

/// Parses a plain identifier and returns its name.
///
/// # Parameters
/// - `stream`: Token stream positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier(stream: &mut TokenStream<'_>)
                                                       -> ParseResult<String> {
    match stream.read()? {
        (Token::Identifier(name), _) => Ok(name),
        (token, line) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                           expected: "identifier".to_string(),
                                                           line }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists, argument lists, and array
/// literals. It repeatedly calls `parse_item` to parse one element,
/// expecting either a comma to continue the list or the closing token to
/// end it. An immediately encountered closing token produces an empty list.
/// The closing token is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `stream`: Token stream positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or anything other than
/// `,` or the closing token follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'src, T>(
    stream: &mut TokenStream<'src>,
    parse_item: impl Fn(&mut TokenStream<'src>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();

    if consume_if(stream, closing)?.is_some() {
        return Ok(items);
    }

    loop {
        items.push(parse_item(stream)?);

        if consume_if(stream, &Token::Comma)?.is_some() {
            continue;
        }

        expect(stream, closing)?;
        break;
    }

    Ok(items)
}
