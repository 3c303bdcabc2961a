#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer hit input it has no rule for, or a malformed literal.
    UnexpectedCharacter {
        /// The offending source text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered, in its source spelling.
        token:    String,
        /// A description of what the parser expected instead.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl ParseError {
    /// The source line the error occurred on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnexpectedToken { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { text, line } => {
                write!(f, "error at line {line}: unexpected character `{text}'.")
            },

            Self::UnexpectedToken { token,
                                    expected,
                                    line, } => {
                write!(f,
                       "error at line {line}: unexpected token `{token}', expected {expected}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
