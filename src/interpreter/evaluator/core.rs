use std::rc::Rc;

use crate::{
    ast::{Expr, Program, Stmt},
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::{binary::eval_binary, call::eval_call, object::eval_member},
        value::{core::Value, function::FunctionValue, object::ClassValue},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. Failures propagate to the host
/// unchanged; there is no evaluator-level recovery.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a program against the given global environment.
///
/// Statements are evaluated in order; the result is the value of the last
/// one, or null for an empty program. This is the main entry point for
/// execution; the host is expected to have bound its built-ins into `env`
/// beforehand.
///
/// # Parameters
/// - `program`: The parsed program.
/// - `env`: The global environment.
///
/// # Errors
/// Returns a `RuntimeError` when any statement fails to evaluate.
pub fn eval_program(program: &Program, env: &EnvRef) -> EvalResult<Value> {
    let mut last = Value::Null;

    for statement in &program.statements {
        last = eval_statement(statement, env)?;
    }

    Ok(last)
}

/// Evaluates a single statement.
///
/// Dispatches on the statement variant. Declarations (`def`, `class`) bind
/// into the current environment and yield the declared value; control-flow
/// statements yield the value of the branch or final iteration they ran, or
/// null if nothing ran.
///
/// # Parameters
/// - `statement`: Statement to evaluate.
/// - `env`: The environment in force.
pub(crate) fn eval_statement(statement: &Stmt, env: &EnvRef) -> EvalResult<Value> {
    match statement {
        Stmt::If { condition,
                   then_branch,
                   else_branch,
                   .. } => {
            if eval_condition(condition, env)? {
                eval_statement(then_branch, env)
            } else if let Some(otherwise) = else_branch {
                eval_statement(otherwise, env)
            } else {
                Ok(Value::Null)
            }
        },
        Stmt::While { condition, body, .. } => {
            let mut last = Value::Null;

            while eval_condition(condition, env)? {
                last = eval_statement(body, env)?;
            }

            Ok(last)
        },
        Stmt::Compound { statements, .. } => {
            let mut last = Value::Null;

            for statement in statements {
                last = eval_statement(statement, env)?;
            }

            Ok(last)
        },
        Stmt::Procedure { name,
                          parameters,
                          body,
                          .. } => {
            let function =
                Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                        body:       Rc::clone(body),
                                                        env:        Rc::clone(env), }));

            env.borrow_mut().put(name.clone(), function.clone());
            Ok(function)
        },
        Stmt::Class { name,
                      superclass,
                      body,
                      line, } => {
            let superclass = match superclass {
                Some(super_name) => match env.borrow().get(super_name) {
                    Some(Value::Class(class)) => Some(class),
                    _ => {
                        return Err(RuntimeError::UnknownSuperclass { name: super_name.clone(),
                                                                     line: *line, });
                    },
                },
                None => None,
            };

            let class = Value::Class(Rc::new(ClassValue { name: name.clone(),
                                                          superclass,
                                                          body: Rc::clone(body),
                                                          env: Rc::clone(env) }));

            env.borrow_mut().put(name.clone(), class.clone());
            Ok(class)
        },
        Stmt::Expression { expr, .. } => eval_expression(expr, env),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// Dispatches on the expression variant. Evaluation order is strictly left
/// to right everywhere an order is observable: argument lists, array
/// literal elements, and binary operands.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `env`: The environment in force.
pub(crate) fn eval_expression(expr: &Expr, env: &EnvRef) -> EvalResult<Value> {
    match expr {
        Expr::Binary { op,
                       left,
                       right,
                       line, } => eval_binary(*op, left, right, *line, env),
        Expr::Unary { operand, line, .. } => {
            let value = eval_expression(operand, env)?.as_integer(*line)?;

            value.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line: *line })
        },
        Expr::Call { callee,
                     arguments,
                     line, } => eval_call(callee, arguments, *line, env),
        Expr::Index { operand, index, line } => eval_index(operand, index, *line, env),
        Expr::Member { operand, member, line } => eval_member(operand, member, *line, env),
        Expr::Closure { parameters, body, .. } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       Rc::clone(body),
                                                       env:        Rc::clone(env), })))
        },
        Expr::ArrayLiteral { elements, .. } => {
            let mut values = Vec::with_capacity(elements.len());

            for element in elements {
                values.push(eval_expression(element, env)?);
            }

            Ok(Value::from(values))
        },
        Expr::Identifier { name, .. } => {
            // Unbound names read as null; only assignment creates bindings.
            Ok(env.borrow().get(name).unwrap_or(Value::Null))
        },
        Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expr::StringLiteral { value, .. } => Ok(Value::from(value.as_str())),
    }
}

/// Evaluates a condition expression: coerced to integer, non-zero is true.
fn eval_condition(condition: &Expr, env: &EnvRef) -> EvalResult<bool> {
    let value = eval_expression(condition, env)?;

    Ok(value.as_integer(condition.line_number())? != 0)
}

/// Evaluates a bounds-checked array lookup.
fn eval_index(operand: &Expr, index: &Expr, line: usize, env: &EnvRef) -> EvalResult<Value> {
    let value = eval_expression(operand, env)?;
    let index = eval_expression(index, env)?.as_integer(line)?;

    match value {
        Value::Array(elements) => {
            let elements = elements.borrow();

            usize::try_from(index).ok()
                                  .and_then(|slot| elements.get(slot).cloned())
                                  .ok_or(RuntimeError::IndexOutOfBounds { index,
                                                                          length: elements.len(),
                                                                          line })
        },
        _ => Err(RuntimeError::ExpectedArray { line }),
    }
}

/// Creates the empty top-level environment.
///
/// The host binds its built-ins (such as `print`) into the returned
/// environment before running a program.
#[must_use]
pub fn global_env() -> EnvRef {
    Environment::root()
}
