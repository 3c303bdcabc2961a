use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::core::{EvalResult, eval_expression},
        value::core::Value,
    },
};

/// A resolved storage slot: what the left-hand side of `=` designates.
///
/// Resolving the place happens before the right-hand side is evaluated, so
/// the object and index subexpressions of the target run first, keeping
/// evaluation strictly left to right.
enum Place {
    /// A variable. The store searches outward for an existing binding and
    /// falls back to binding locally.
    Name(EnvRef, String),
    /// A member of an instance. The store always binds in the instance's
    /// own member environment.
    Member(EnvRef, String),
    /// An element of an array, stored by slot replacement. Bounds are
    /// checked at store time.
    Index(Rc<RefCell<Vec<Value>>>, i32, usize),
}

/// Evaluates an assignment expression.
///
/// The target is resolved into a [`Place`], the right-hand side is
/// evaluated, and the store is performed uniformly. The value of the whole
/// expression is the assigned value, which is what makes chains like
/// `a = b = 0` work.
///
/// # Parameters
/// - `target`: The left-hand side expression.
/// - `value`: The right-hand side expression.
/// - `env`: The environment in force.
///
/// # Errors
/// Fails when the target is not a place expression, when a member target is
/// not an instance, or when an indexed target is out of bounds.
pub(crate) fn eval_assignment(target: &Expr, value: &Expr, env: &EnvRef) -> EvalResult<Value> {
    let place = resolve_place(target, env)?;
    let value = eval_expression(value, env)?;

    store(&place, value.clone())?;

    Ok(value)
}

fn resolve_place(target: &Expr, env: &EnvRef) -> EvalResult<Place> {
    match target {
        Expr::Identifier { name, .. } => Ok(Place::Name(Rc::clone(env), name.clone())),
        Expr::Member { operand, member, line } => match eval_expression(operand, env)? {
            Value::Instance(members) => Ok(Place::Member(members, member.clone())),
            _ => Err(RuntimeError::InvalidMemberName { name: member.clone(),
                                                       line: *line, }),
        },
        Expr::Index { operand, index, line } => {
            let target = eval_expression(operand, env)?;
            let index = eval_expression(index, env)?.as_integer(*line)?;

            match target {
                Value::Array(elements) => Ok(Place::Index(elements, index, *line)),
                _ => Err(RuntimeError::ExpectedArray { line: *line }),
            }
        },
        _ => Err(RuntimeError::InvalidAssignment { line: target.line_number() }),
    }
}

fn store(place: &Place, value: Value) -> EvalResult<()> {
    match place {
        Place::Name(env, name) => {
            Environment::set(env, name, value);
            Ok(())
        },
        Place::Member(members, name) => {
            members.borrow_mut().put(name.clone(), value);
            Ok(())
        },
        Place::Index(elements, index, line) => {
            let mut elements = elements.borrow_mut();
            let length = elements.len();

            let slot = usize::try_from(*index).ok()
                                              .filter(|slot| *slot < length)
                                              .ok_or(RuntimeError::IndexOutOfBounds { index:
                                                                                          *index,
                                                                                      length,
                                                                                      line:
                                                                                          *line, })?;

            elements[slot] = value;
            Ok(())
        },
    }
}
