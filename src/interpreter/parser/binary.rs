use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
        stream::TokenStream,
    },
};

/// Maps a token to its binary operator, precedence level, and
/// associativity.
///
/// Returns `Some((operator, level, right_assoc))` for binary operator
/// tokens and `None` for everything else, which is what terminates the
/// precedence-climbing loop. Higher levels bind tighter; assignment is the
/// only right-associative operator.
///
/// | Level | Operators           |
/// |-------|---------------------|
/// | 5     | `*` `/` `%`         |
/// | 4     | `+` `-`             |
/// | 3     | `<` `<=` `>` `>=`   |
/// | 2     | `==` `!=`           |
/// | 1     | `=`                 |
#[must_use]
pub(in crate::interpreter::parser) const fn binary_operator(token: &Token)
                                                            -> Option<(BinaryOperator, u8, bool)> {
    match token {
        Token::Star => Some((BinaryOperator::Mul, 5, false)),
        Token::Slash => Some((BinaryOperator::Div, 5, false)),
        Token::Percent => Some((BinaryOperator::Mod, 5, false)),
        Token::Plus => Some((BinaryOperator::Add, 4, false)),
        Token::Minus => Some((BinaryOperator::Sub, 4, false)),
        Token::Less => Some((BinaryOperator::Less, 3, false)),
        Token::LessEqual => Some((BinaryOperator::LessEqual, 3, false)),
        Token::Greater => Some((BinaryOperator::Greater, 3, false)),
        Token::GreaterEqual => Some((BinaryOperator::GreaterEqual, 3, false)),
        Token::Equal => Some((BinaryOperator::Equal, 2, false)),
        Token::NotEqual => Some((BinaryOperator::NotEqual, 2, false)),
        Token::Assign => Some((BinaryOperator::Assign, 1, true)),
        _ => None,
    }
}

/// Parses a binary expression by precedence climbing.
///
/// Parses a unary expression, then folds in every following binary operator
/// whose level is at least `min_level`. The right-hand side recurses with
/// `level + 1` for left-associative operators and `level` for
/// right-associative ones, which is what makes `a = b = 0` parse as
/// `a = (b = 0)` while `a - b - c` parses as `(a - b) - c`.
///
/// The rule is:
/// `binary := unary (binary-operator binary)*` (levels permitting)
///
/// # Parameters
/// - `stream`: The token stream.
/// - `min_level`: The minimum operator level this invocation may consume.
///
/// # Returns
/// The parsed expression tree.
pub(in crate::interpreter::parser) fn parse_binary(stream: &mut TokenStream<'_>,
                                                   min_level: u8)
                                                   -> ParseResult<Expr> {
    // unary
    let mut left = parse_unary(stream)?;

    // (binary-operator binary)*
    loop {
        let Some((op, level, right_assoc)) = binary_operator(&stream.peek(0)?.0) else {
            break;
        };

        if level < min_level {
            break;
        }

        // binary-operator
        let (_, line) = stream.read()?;

        // right-hand side
        let next_level = if right_assoc { level } else { level + 1 };
        let right = parse_binary(stream, next_level)?;

        left = Expr::Binary { op,
                              left: Box::new(left),
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}
