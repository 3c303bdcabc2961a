use std::{cell::RefCell, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::EnvRef,
        evaluator::core::EvalResult,
        value::{
            function::{FunctionValue, NativeFunction},
            object::ClassValue,
        },
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations. Composite
/// values are reference-shared: cloning a `Value` clones a handle, never the
/// underlying storage.
#[derive(Clone)]
pub enum Value {
    /// A 32-bit signed integer.
    Integer(i32),
    /// An immutable string.
    Str(Rc<str>),
    /// An array of values. Elements are shared; assignment replaces a slot
    /// in place, visible through every handle.
    Array(Rc<RefCell<Vec<Self>>>),
    /// A function value: a closure over the environment in force at its
    /// definition site. Produced by `def` statements and `fun` expressions.
    Function(Rc<FunctionValue>),
    /// A host-provided callable of fixed arity.
    Native(Rc<NativeFunction>),
    /// A class declaration, instantiable through its `new` member.
    Class(Rc<ClassValue>),
    /// An instance: its state lives in a dedicated member environment with
    /// `this` bound to the instance itself.
    Instance(EnvRef),
    /// The absent value, produced by empty blocks, missing `else` branches,
    /// loops that never ran, and unbound identifiers.
    Null,
}

impl Value {
    /// Converts the value to an `i32`, or returns an error if it is not an
    /// integer.
    ///
    /// This is the coercion used by arithmetic, comparisons, and `if` /
    /// `while` conditions.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i32)`: The integer value.
    /// - `Err(RuntimeError::ExpectedInteger)`: If not an integer.
    pub const fn as_integer(&self, line: usize) -> EvalResult<i32> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedInteger { line }),
        }
    }

    /// Returns `true` if the value is [`Integer`](Self::Integer).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Str`](Self::Str).
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::Str(..))
    }

    /// Compares two values by reference identity.
    ///
    /// Composite values are identical only when they are the same shared
    /// object; `Null` is identical to `Null`. Integers and strings never
    /// compare identical here, since value equality for those is handled
    /// before identity is consulted.
    #[must_use]
    pub fn identity_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Array(l), Self::Array(r)) => Rc::ptr_eq(l, r),
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Native(l), Self::Native(r)) => Rc::ptr_eq(l, r),
            (Self::Class(l), Self::Class(r)) => Rc::ptr_eq(l, r),
            (Self::Instance(l), Self::Instance(r)) => Rc::ptr_eq(l, r),
            _ => false,
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    /// Comparison operators produce integer `1` / `0`.
    fn from(v: bool) -> Self {
        Self::Integer(i32::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl std::fmt::Display for Value {
    /// Renders the language-level string form of the value, used by `print`,
    /// string concatenation, and string-coercing equality.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(text) => write!(f, "{text}"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Function(_) => write!(f, "[function]"),
            Self::Native(_) => write!(f, "[native function]"),
            Self::Class(class) => write!(f, "[class {}]", class.name),
            Self::Instance(_) => write!(f, "[object]"),
            Self::Null => write!(f, "null"),
        }
    }
}

impl std::fmt::Debug for Value {
    /// Shallow debug form. Environments can be cyclic through `this` and
    /// captured closures, so this never descends into them.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "Integer({n})"),
            Self::Str(text) => write!(f, "Str({text:?})"),
            Self::Array(elements) => write!(f, "Array(len = {})", elements.borrow().len()),
            Self::Function(function) => {
                write!(f, "Function(arity = {})", function.parameters.len())
            },
            Self::Native(native) => write!(f, "Native({})", native.name),
            Self::Class(class) => write!(f, "Class({})", class.name),
            Self::Instance(_) => write!(f, "Instance"),
            Self::Null => write!(f, "Null"),
        }
    }
}
