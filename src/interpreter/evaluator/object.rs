use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::core::{EvalResult, eval_expression, eval_statement},
        value::{core::Value, object::ClassValue},
    },
};

/// Evaluates a member access expression `operand.member`.
///
/// - On an instance, the member is looked up in the instance's own member
///   environment only; an unbound name is an error, unlike plain variable
///   reads.
/// - On a class, the single meaningful member is `new`, which instantiates.
/// - Member access on any other value is an error.
///
/// # Parameters
/// - `operand`: The expression evaluating to the object.
/// - `member`: The member name.
/// - `line`: Source line of the access, for error reporting.
/// - `env`: The environment in force.
pub(crate) fn eval_member(operand: &Expr,
                          member: &str,
                          line: usize,
                          env: &EnvRef)
                          -> EvalResult<Value> {
    match eval_expression(operand, env)? {
        Value::Instance(members) => {
            members.borrow()
                   .get_local(member)
                   .ok_or_else(|| RuntimeError::InvalidMemberName { name: member.to_string(),
                                                                    line })
        },
        Value::Class(class) if member == "new" => instantiate(&class),
        _ => Err(RuntimeError::InvalidMemberName { name: member.to_string(),
                                                   line }),
    }
}

/// Instantiates a class.
///
/// Instantiation order is what gives single inheritance its override
/// semantics:
///
/// 1. The superclass chain instantiates first (recursively), producing the
///    member environment that already holds every inherited member and the
///    shared `this` binding.
/// 2. This class's body then evaluates in that same environment, so its
///    `def`s and assignments override inherited bindings of the same name.
///
/// For a class with no superclass, a fresh member environment is chained
/// onto the class's defining environment and `this` is bound to the new
/// instance before the body runs. Methods defined in the body are closures
/// capturing the member environment, which is how they reach `this` and
/// sibling members.
pub(crate) fn instantiate(class: &ClassValue) -> EvalResult<Value> {
    Ok(Value::Instance(build_instance(class)?))
}

fn build_instance(class: &ClassValue) -> EvalResult<EnvRef> {
    let members = match &class.superclass {
        Some(superclass) => build_instance(superclass)?,
        None => {
            let members = Environment::with_parent(&class.env);
            let this = Value::Instance(Rc::clone(&members));

            members.borrow_mut().put("this", this);
            members
        },
    };

    eval_statement(&class.body, &members)?;

    Ok(members)
}
