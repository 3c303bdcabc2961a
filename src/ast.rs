use std::rc::Rc;

/// A complete parsed program: the sequence of top-level statements.
///
/// Evaluating a program yields the value of its last statement, which is how
/// scripts report their result to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Stmt>,
}

/// An abstract syntax tree (AST) node representing a statement.
///
/// Statements are the units separated by `;` or end-of-line. Expressions may
/// appear wherever statements are allowed, so a bare expression is itself a
/// statement variant. Null statements (blank lines, stray separators) never
/// produce a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A conditional statement with an optional `else` branch.
    If {
        /// The branch condition; non-zero integers are truthy.
        condition:   Expr,
        /// Statement evaluated when the condition is non-zero.
        then_branch: Box<Self>,
        /// Statement evaluated when the condition is zero, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A `while` loop.
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A brace-delimited block of statements.
    Compound {
        /// Statements inside the block, in source order.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A named function declaration (`def name(params) { ... }`).
    Procedure {
        /// The name the function is bound to.
        name:       String,
        /// Parameter names, in declaration order.
        parameters: Vec<String>,
        /// The function body. Shared so closure values can hold it without
        /// copying the tree.
        body:       Rc<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A class declaration (`class Name extends Super { ... }`).
    Class {
        /// The name the class is bound to.
        name:       String,
        /// Name of the superclass, if the declaration has `extends`.
        superclass: Option<String>,
        /// The class body, evaluated once per instantiation.
        body:       Rc<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Stmt {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Compound { line, .. }
            | Self::Procedure { line, .. }
            | Self::Class { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers all value-producing constructs, from literals and variables
/// to calls, member access, indexing, closures, and array literals. Each
/// variant carries the source line it started on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary operation, including assignment.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand. For assignment this is the place expression.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation.
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A call expression (`callee(args...)`).
    Call {
        /// The expression evaluating to the callee.
        callee:    Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An indexing expression (`operand[index]`).
    Index {
        /// The expression evaluating to the array.
        operand: Box<Self>,
        /// The index expression.
        index:   Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A member access expression (`operand.member`).
    Member {
        /// The expression evaluating to the object.
        operand: Box<Self>,
        /// The member name.
        member:  String,
        /// Line number in the source code.
        line:    usize,
    },
    /// An anonymous function (`fun (params) { ... }`).
    Closure {
        /// Parameter names, in declaration order.
        parameters: Vec<String>,
        /// The closure body, shared with the values built from it.
        body:       Rc<Stmt>,
        /// Line number in the source code.
        line:       usize,
    },
    /// An array literal (`[e1, e2, ...]`).
    ArrayLiteral {
        /// Element expressions, evaluated left to right.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i32,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal, already unescaped by the lexer.
    StringLiteral {
        /// The literal text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use stone::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Binary { line, .. }
            | Self::Unary { line, .. }
            | Self::Call { line, .. }
            | Self::Index { line, .. }
            | Self::Member { line, .. }
            | Self::Closure { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::StringLiteral { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, equality, and
/// assignment. Assignment is the only right-associative operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition, or string concatenation when neither operand is an integer
    /// (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Integer division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Assignment (`=`)
    Assign,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Assign, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual,
            Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            Assign => "=",
        };
        write!(f, "{operator}")
    }
}
