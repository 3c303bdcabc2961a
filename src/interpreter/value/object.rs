use std::rc::Rc;

use crate::{ast::Stmt, interpreter::environment::EnvRef};

/// The runtime representation of a class declaration.
///
/// A class is an ordinary value; its one externally useful member is `new`,
/// which builds an instance. Instantiation evaluates `body` in a fresh
/// member environment chained onto `env`, after the superclass chain (if
/// any) has done the same, so later bindings override inherited ones.
pub struct ClassValue {
    /// The declared class name, as shown by `[class Name]`.
    pub name:       String,
    /// The superclass, resolved when the declaration was evaluated.
    pub superclass: Option<Rc<ClassValue>>,
    /// The class body, run once per instantiation.
    pub body:       Rc<Stmt>,
    /// The environment the class was declared in.
    pub env:        EnvRef,
}
