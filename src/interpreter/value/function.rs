use std::rc::Rc;

use crate::{
    ast::Stmt,
    interpreter::{environment::EnvRef, value::core::Value},
};

/// A function value: parameters, a shared body, and the environment captured
/// at the definition site.
///
/// Both `def` statements and `fun` expressions build one of these. Calling
/// it chains a fresh frame onto `env`, binds the parameters there, and
/// evaluates `body`; assignments inside the body that name an outer variable
/// update the captured frame, which is what makes counter-style closures
/// carry state across calls.
pub struct FunctionValue {
    /// Parameter names, in declaration order. Arity must match exactly.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Rc<Stmt>,
    /// The environment in force where the function was defined.
    pub env:        EnvRef,
}

/// A host-provided callable bound into the global environment before
/// evaluation begins (e.g. `print`).
///
/// Natives declare a fixed arity; the evaluator rejects calls with any other
/// argument count before invoking the host function.
pub struct NativeFunction {
    /// The name the host registered the callable under.
    pub name:  String,
    /// The exact number of arguments the callable accepts.
    pub arity: usize,
    function:  Box<dyn Fn(&[Value]) -> Value>,
}

impl NativeFunction {
    /// Wraps a host function with its registration name and arity.
    pub fn new(name: impl Into<String>,
               arity: usize,
               function: impl Fn(&[Value]) -> Value + 'static)
               -> Self {
        Self { name: name.into(),
               arity,
               function: Box::new(function) }
    }

    /// Invokes the host function. The caller has already checked the arity.
    #[must_use]
    pub fn invoke(&self, arguments: &[Value]) -> Value {
        (self.function)(arguments)
    }
}
