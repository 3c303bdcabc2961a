use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{EnvRef, Environment},
        evaluator::core::{EvalResult, eval_expression, eval_statement},
        value::{core::Value, function::FunctionValue},
    },
};

/// Evaluates a call expression.
///
/// The callee is evaluated first, then each argument left to right.
/// Dispatch is on the callee's kind:
///
/// - Function values are invoked with a fresh call frame (see
///   [`invoke_function`]).
/// - Natives are invoked after an arity check.
/// - Everything else is not callable, classes included: instantiation goes
///   through `C.new`.
///
/// # Parameters
/// - `callee`: The expression evaluating to the callee.
/// - `arguments`: Argument expressions.
/// - `line`: Source line of the call, for error reporting.
/// - `env`: The environment in force.
pub(crate) fn eval_call(callee: &Expr,
                        arguments: &[Expr],
                        line: usize,
                        env: &EnvRef)
                        -> EvalResult<Value> {
    let function = eval_expression(callee, env)?;

    let mut values = Vec::with_capacity(arguments.len());
    for argument in arguments {
        values.push(eval_expression(argument, env)?);
    }

    match function {
        Value::Function(function) => invoke_function(&function, &values, line),
        Value::Native(native) => {
            if values.len() != native.arity {
                return Err(RuntimeError::InvalidArgumentCount { line });
            }

            Ok(native.invoke(&values))
        },
        _ => Err(RuntimeError::NotAFunction { line }),
    }
}

/// Invokes a function value with already-evaluated arguments.
///
/// A new environment is chained onto the function's captured environment
/// and each parameter is bound there locally, so parameters always shadow
/// outer bindings of the same name. Arity must match exactly. The result is
/// the value of the body.
///
/// # Parameters
/// - `function`: The function value to invoke.
/// - `arguments`: The evaluated arguments.
/// - `line`: Source line of the call, for error reporting.
///
/// # Errors
/// Fails with an argument-count error on arity mismatch, and propagates any
/// failure from the body.
pub(crate) fn invoke_function(function: &FunctionValue,
                              arguments: &[Value],
                              line: usize)
                              -> EvalResult<Value> {
    if arguments.len() != function.parameters.len() {
        return Err(RuntimeError::InvalidArgumentCount { line });
    }

    let callee_env = Environment::with_parent(&function.env);

    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        callee_env.borrow_mut().put(parameter.clone(), argument.clone());
    }

    eval_statement(&function.body, &callee_env)
}
