#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The left-hand side of `=` does not designate a storage slot.
    InvalidAssignment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to call a value that is not a function.
    NotAFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a call.
    InvalidArgumentCount {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer was required, but the value has a different type.
    ExpectedInteger {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An array was required, but the value has a different type.
    ExpectedArray {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to access an array element outside its bounds.
    IndexOutOfBounds {
        /// The index that was requested.
        index:  i32,
        /// The length of the array.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Looked up a member that the object does not have.
    InvalidMemberName {
        /// The member name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The `extends` clause names something that is not a class.
    UnknownSuperclass {
        /// The superclass name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// The source line the error occurred on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::InvalidAssignment { line }
            | Self::NotAFunction { line }
            | Self::InvalidArgumentCount { line }
            | Self::ExpectedInteger { line }
            | Self::ExpectedArray { line }
            | Self::IndexOutOfBounds { line, .. }
            | Self::InvalidMemberName { line, .. }
            | Self::UnknownSuperclass { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAssignment { line } => {
                write!(f, "error at line {line}: invalid assignment.")
            },
            Self::NotAFunction { line } => {
                write!(f, "error at line {line}: value is not a function.")
            },
            Self::InvalidArgumentCount { line } => {
                write!(f, "error at line {line}: invalid number of arguments.")
            },
            Self::ExpectedInteger { line } => {
                write!(f, "error at line {line}: value is not an integer.")
            },
            Self::ExpectedArray { line } => {
                write!(f, "error at line {line}: value is not an array.")
            },
            Self::IndexOutOfBounds { index, length, line } => write!(f,
                                                                     "error at line {line}: array index {index} out of bounds (length {length})."),
            Self::InvalidMemberName { name, line } => {
                write!(f, "error at line {line}: invalid member name `{name}'.")
            },
            Self::UnknownSuperclass { name, line } => {
                write!(f, "error at line {line}: `{name}' is not a class.")
            },
            Self::DivisionByZero { line } => write!(f, "error at line {line}: division by zero."),
            Self::Overflow { line } => write!(f,
                                              "error at line {line}: integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
