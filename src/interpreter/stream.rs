use std::collections::VecDeque;

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::lexer::{LexerExtras, Token},
};

/// A peekable adapter over the lexer with arbitrary lookahead.
///
/// Tokens are pulled from the lexer on demand into a FIFO queue, so the
/// parser can peek any number of tokens ahead without consuming them. Once
/// the source is exhausted the stream yields `Token::EndOfFile` forever,
/// which keeps lookahead safe past the end of input.
///
/// Every token is paired with the 1-based line number it appeared on. Line
/// numbers are monotonically non-decreasing across the stream.
pub struct TokenStream<'src> {
    lexer:     logos::Lexer<'src, Token>,
    queue:     VecDeque<(Token, usize)>,
    exhausted: bool,
}

impl<'src> TokenStream<'src> {
    /// Creates a token stream over `source`. Nothing is lexed until the
    /// first `peek` or `read`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:     Token::lexer_with_extras(source, LexerExtras { line: 1 }),
               queue:     VecDeque::new(),
               exhausted: false, }
    }

    /// Looks `position` tokens ahead without consuming anything. `peek(0)`
    /// is the token `read` would return next.
    ///
    /// # Errors
    /// Returns a `ParseError` if the lexer hits an unexpected character
    /// while filling the queue.
    pub fn peek(&mut self, position: usize) -> Result<&(Token, usize), ParseError> {
        self.fill_queue(position + 1)?;

        Ok(&self.queue[position])
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// Returns a `ParseError` if the lexer hits an unexpected character.
    pub fn read(&mut self) -> Result<(Token, usize), ParseError> {
        self.fill_queue(1)?;

        let line = self.lexer.extras.line;
        Ok(self.queue.pop_front().unwrap_or((Token::EndOfFile, line)))
    }

    fn fill_queue(&mut self, amount: usize) -> Result<(), ParseError> {
        while self.queue.len() < amount {
            let token = self.next_token()?;
            self.queue.push_back(token);
        }

        Ok(())
    }

    fn next_token(&mut self) -> Result<(Token, usize), ParseError> {
        if self.exhausted {
            return Ok((Token::EndOfFile, self.lexer.extras.line));
        }

        match self.lexer.next() {
            Some(Ok(token)) => {
                // The newline callback has already advanced the counter, but
                // the separator itself belongs to the line it ends.
                let line = match token {
                    Token::EndOfLine => self.lexer.extras.line - 1,
                    _ => self.lexer.extras.line,
                };

                Ok((token, line))
            },
            Some(Err(())) => {
                Err(ParseError::UnexpectedCharacter { text: self.lexer.slice().to_string(),
                                                      line: self.lexer.extras.line, })
            },
            None => {
                self.exhausted = true;
                Ok((Token::EndOfFile, self.lexer.extras.line))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TokenStream;
    use crate::interpreter::lexer::Token;

    fn read_all(source: &str) -> Vec<(Token, usize)> {
        let mut stream = TokenStream::new(source);
        let mut tokens = Vec::new();

        loop {
            let token = stream.read().expect("lexing failed");
            let done = token.0 == Token::EndOfFile;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    #[test]
    fn stream_ends_in_repeatable_end_of_file() {
        let mut stream = TokenStream::new("x");
        assert_eq!(stream.read().unwrap().0,
                   Token::Identifier("x".to_string()));
        assert_eq!(stream.read().unwrap().0, Token::EndOfFile);
        assert_eq!(stream.read().unwrap().0, Token::EndOfFile);
        assert_eq!(stream.peek(10).unwrap().0, Token::EndOfFile);
    }

    #[test]
    fn lookahead_does_not_consume() {
        let mut stream = TokenStream::new("a + b");
        assert_eq!(stream.peek(1).unwrap().0, Token::Plus);
        assert_eq!(stream.peek(0).unwrap().0,
                   Token::Identifier("a".to_string()));
        assert_eq!(stream.read().unwrap().0,
                   Token::Identifier("a".to_string()));
        assert_eq!(stream.read().unwrap().0, Token::Plus);
    }

    #[test]
    fn line_numbers_are_monotonic_and_one_based() {
        let tokens = read_all("a = 1\nb = 2\n\nc = 3");

        let mut previous = 1;
        for (_, line) in &tokens {
            assert!(*line >= previous);
            previous = *line;
        }
        assert_eq!(tokens.first().unwrap().1, 1);
    }

    #[test]
    fn end_of_line_keeps_the_line_it_ends() {
        let tokens = read_all("a\nb");

        assert_eq!(tokens[0], (Token::Identifier("a".to_string()), 1));
        assert_eq!(tokens[1], (Token::EndOfLine, 1));
        assert_eq!(tokens[2], (Token::Identifier("b".to_string()), 2));
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        let tokens = read_all("a // trailing comment\nb");

        assert_eq!(tokens[0].0, Token::Identifier("a".to_string()));
        assert_eq!(tokens[1].0, Token::EndOfLine);
        assert_eq!(tokens[2].0, Token::Identifier("b".to_string()));
    }

    #[test]
    fn longest_punctuator_wins() {
        let tokens = read_all("a <= b == c");

        assert_eq!(tokens[1].0, Token::LessEqual);
        assert_eq!(tokens[3].0, Token::Equal);
    }

    #[test]
    fn string_escapes_are_resolved() {
        let tokens = read_all(r#""a\n\"b\\""#);

        assert_eq!(tokens[0].0, Token::Str("a\n\"b\\".to_string()));
    }

    #[test]
    fn unexpected_character_is_an_error() {
        let mut stream = TokenStream::new("a ? b");

        stream.read().unwrap();
        assert!(stream.read().is_err());
    }

    #[test]
    fn integer_overflow_is_an_error() {
        let mut stream = TokenStream::new("99999999999999999999");

        assert!(stream.read().is_err());
    }
}
