use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared, mutable handle to an [`Environment`].
///
/// Environments are reference-shared: closures capture the environment in
/// force at their definition site, instances *are* an environment, and a
/// call frame chains onto the captured environment of its callee.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A lexical scope frame: a name→value table with an optional parent.
///
/// Fresh environments are created for the program's global scope, for every
/// function call, and for every class instance. Lookups walk the parent
/// chain; writes are governed by the [`put`](Self::put) / [`set`](Self::set)
/// distinction, which is what lets assignments in inner scopes mutate outer
/// variables while parameter bindings stay local.
pub struct Environment {
    table:  HashMap<String, Value>,
    parent: Option<EnvRef>,
}

impl Environment {
    /// Creates a new top-level environment with no parent.
    #[must_use]
    pub fn root() -> EnvRef {
        Rc::new(RefCell::new(Self { table:  HashMap::new(),
                                    parent: None, }))
    }

    /// Creates a new environment chained onto `parent`.
    #[must_use]
    pub fn with_parent(parent: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { table:  HashMap::new(),
                                    parent: Some(Rc::clone(parent)), }))
    }

    /// Looks up `name`, walking the parent chain outward.
    ///
    /// Returns `None` when no scope binds the name; identifier evaluation
    /// maps that to a null value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.table.get(name) {
            return Some(value.clone());
        }

        self.parent.as_ref().and_then(|parent| parent.borrow().get(name))
    }

    /// Looks up `name` in this frame only, ignoring parents.
    ///
    /// Instance member resolution uses this so that inherited scope does not
    /// leak into `obj.member`.
    #[must_use]
    pub fn get_local(&self, name: &str) -> Option<Value> {
        self.table.get(name).cloned()
    }

    /// Binds `name` in this frame, shadowing any outer binding.
    pub fn put(&mut self, name: impl Into<String>, value: Value) {
        self.table.insert(name.into(), value);
    }

    /// Assigns to an existing binding of `name`, searching outward through
    /// the parent chain. If no scope binds the name, it is bound locally in
    /// `env` instead, exactly like [`put`](Self::put).
    pub fn set(env: &EnvRef, name: &str, value: Value) {
        let mut current = Rc::clone(env);

        loop {
            if current.borrow().table.contains_key(name) {
                current.borrow_mut().table.insert(name.to_string(), value);
                return;
            }

            let parent = current.borrow().parent.clone();
            match parent {
                Some(parent) => current = parent,
                None => break,
            }
        }

        env.borrow_mut().put(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;
    use crate::interpreter::value::core::Value;

    fn integer(env: Option<Value>) -> i32 {
        match env {
            Some(Value::Integer(n)) => n,
            other => panic!("expected integer, got {other:?}"),
        }
    }

    #[test]
    fn get_walks_parents() {
        let outer = Environment::root();
        outer.borrow_mut().put("x", Value::Integer(1));

        let inner = Environment::with_parent(&outer);
        assert_eq!(integer(inner.borrow().get("x")), 1);
        assert!(inner.borrow().get("y").is_none());
    }

    #[test]
    fn get_local_ignores_parents() {
        let outer = Environment::root();
        outer.borrow_mut().put("x", Value::Integer(1));

        let inner = Environment::with_parent(&outer);
        assert!(inner.borrow().get_local("x").is_none());
    }

    #[test]
    fn set_updates_the_outer_binding() {
        let outer = Environment::root();
        outer.borrow_mut().put("x", Value::Integer(1));

        let inner = Environment::with_parent(&outer);
        Environment::set(&inner, "x", Value::Integer(2));

        assert_eq!(integer(outer.borrow().get("x")), 2);
        assert!(inner.borrow().get_local("x").is_none());
    }

    #[test]
    fn set_falls_back_to_a_local_binding() {
        let outer = Environment::root();
        let inner = Environment::with_parent(&outer);

        Environment::set(&inner, "x", Value::Integer(3));

        assert_eq!(integer(inner.borrow().get_local("x")), 3);
        assert!(outer.borrow().get("x").is_none());
    }

    #[test]
    fn put_shadows_instead_of_updating() {
        let outer = Environment::root();
        outer.borrow_mut().put("x", Value::Integer(1));

        let inner = Environment::with_parent(&outer);
        inner.borrow_mut().put("x", Value::Integer(2));

        assert_eq!(integer(outer.borrow().get("x")), 1);
        assert_eq!(integer(inner.borrow().get("x")), 2);
    }
}
