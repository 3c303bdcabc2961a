use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Newlines are significant: they separate statements, so `\n` is a real
/// token rather than skipped whitespace. Horizontal whitespace and `//`
/// comments are skipped.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `def`
    #[token("def")]
    Def,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `return`
    #[token("return")]
    Return,
    /// `class`
    #[token("class")]
    Class,
    /// `extends`
    #[token("extends")]
    Extends,
    /// Identifier tokens; variable, function, class, or member names such as
    /// `x` or `counter`. ASCII letters, digits, and `_` only.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`. Decimal, 32-bit signed; a
    /// literal that overflows `i32` is a lexing error.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i32),
    /// String literal tokens, such as `"three"`. The payload is the
    /// unescaped text. Raw newlines inside a literal are not allowed.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_string)]
    Str(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `.`
    #[token(".")]
    Period,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `[`
    #[token("[")]
    LeftBracket,
    /// `]`
    #[token("]")]
    RightBracket,

    /// A statement separator. The line counter advances when this token is
    /// produced; the token itself belongs to the line it ends.
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    EndOfLine,
    /// Spaces, tabs, and carriage returns.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// End of input. Never produced by the lexer itself; the token stream
    /// synthesizes it once the source is exhausted, and keeps yielding it so
    /// lookahead past the end is always safe.
    EndOfFile,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized. 1-based.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i32)`: The parsed integer value if it fits.
/// - `None`: If the literal overflows `i32`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i32> {
    lex.slice().parse().ok()
}

/// Unescapes a string literal from the current token slice.
///
/// The surrounding quotes are stripped and the escapes `\n`, `\t`, `\r`,
/// `\"`, and `\\` are resolved. Any other escape is a lexing error.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(String)`: The unescaped text.
/// - `None`: If the literal contains an unknown escape.
fn parse_string(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some('r') => text.push('\r'),
            Some('"') => text.push('"'),
            Some('\\') => text.push('\\'),
            _ => return None,
        }
    }

    Some(text)
}

impl std::fmt::Display for Token {
    /// Renders the token the way it is spelled in source, for use in
    /// `unexpected token` diagnostics.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::While => write!(f, "while"),
            Self::Def => write!(f, "def"),
            Self::Fun => write!(f, "fun"),
            Self::Return => write!(f, "return"),
            Self::Class => write!(f, "class"),
            Self::Extends => write!(f, "extends"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Str(text) => write!(f, "\"{text}\""),
            Self::Comment => write!(f, "comment"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Assign => write!(f, "="),
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
            Self::Less => write!(f, "<"),
            Self::LessEqual => write!(f, "<="),
            Self::Greater => write!(f, ">"),
            Self::GreaterEqual => write!(f, ">="),
            Self::Period => write!(f, "."),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::LeftBracket => write!(f, "["),
            Self::RightBracket => write!(f, "]"),
            Self::EndOfLine => write!(f, "end of line"),
            Self::Ignored => write!(f, "whitespace"),
            Self::EndOfFile => write!(f, "end of file"),
        }
    }
}
