use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        environment::EnvRef,
        evaluator::{
            assign::eval_assignment,
            core::{EvalResult, eval_expression},
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation.
///
/// Assignment is dispatched before the operands are evaluated, because its
/// left-hand side designates a storage slot rather than a value. Every
/// other operator evaluates both operands left to right first.
///
/// Semantics by operator class:
/// - `+` is overloaded: if either operand is an integer the result is
///   integer addition; otherwise both operands are rendered to their string
///   forms and concatenated.
/// - `-`, `*`, `/`, `%` coerce both operands to integer. Division is
///   integer division; division or modulo by zero fails, as does overflow.
/// - `<`, `<=`, `>`, `>=` coerce both operands to integer and yield `1` or
///   `0`.
/// - `==`, `!=` use the unified equality rule of [`values_equal`] and yield
///   `1` or `0`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`, `right`: The operand expressions.
/// - `line`: Source line of the operator, for error reporting.
/// - `env`: The environment in force.
pub(crate) fn eval_binary(op: BinaryOperator,
                          left: &Expr,
                          right: &Expr,
                          line: usize,
                          env: &EnvRef)
                          -> EvalResult<Value> {
    if op == BinaryOperator::Assign {
        return eval_assignment(left, right, env);
    }

    let lhs = eval_expression(left, env)?;
    let rhs = eval_expression(right, env)?;

    match op {
        BinaryOperator::Add => eval_add(&lhs, &rhs, line),
        BinaryOperator::Sub => {
            checked_arithmetic(i32::checked_sub, &lhs, &rhs, line)
        },
        BinaryOperator::Mul => {
            checked_arithmetic(i32::checked_mul, &lhs, &rhs, line)
        },
        BinaryOperator::Div => eval_division(i32::checked_div, &lhs, &rhs, line),
        BinaryOperator::Mod => eval_division(i32::checked_rem, &lhs, &rhs, line),

        BinaryOperator::Less => {
            Ok(Value::from(lhs.as_integer(line)? < rhs.as_integer(line)?))
        },
        BinaryOperator::LessEqual => {
            Ok(Value::from(lhs.as_integer(line)? <= rhs.as_integer(line)?))
        },
        BinaryOperator::Greater => {
            Ok(Value::from(lhs.as_integer(line)? > rhs.as_integer(line)?))
        },
        BinaryOperator::GreaterEqual => {
            Ok(Value::from(lhs.as_integer(line)? >= rhs.as_integer(line)?))
        },

        BinaryOperator::Equal => Ok(Value::from(values_equal(&lhs, &rhs))),
        BinaryOperator::NotEqual => Ok(Value::from(!values_equal(&lhs, &rhs))),

        BinaryOperator::Assign => unreachable!("assignment is dispatched before operand evaluation"),
    }
}

/// Evaluates `+`: integer addition when either operand is an integer,
/// string concatenation of both operands' string forms otherwise.
fn eval_add(lhs: &Value, rhs: &Value, line: usize) -> EvalResult<Value> {
    if lhs.is_integer() || rhs.is_integer() {
        return lhs.as_integer(line)?
                  .checked_add(rhs.as_integer(line)?)
                  .map(Value::Integer)
                  .ok_or(RuntimeError::Overflow { line });
    }

    Ok(Value::Str(Rc::from(format!("{lhs}{rhs}"))))
}

fn checked_arithmetic(operation: fn(i32, i32) -> Option<i32>,
                      lhs: &Value,
                      rhs: &Value,
                      line: usize)
                      -> EvalResult<Value> {
    operation(lhs.as_integer(line)?, rhs.as_integer(line)?).map(Value::Integer)
                                                           .ok_or(RuntimeError::Overflow { line })
}

/// Evaluates `/` or `%`, distinguishing a zero divisor from overflow
/// (`i32::MIN / -1` is the one overflowing case).
fn eval_division(operation: fn(i32, i32) -> Option<i32>,
                 lhs: &Value,
                 rhs: &Value,
                 line: usize)
                 -> EvalResult<Value> {
    let dividend = lhs.as_integer(line)?;
    let divisor = rhs.as_integer(line)?;

    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }

    operation(dividend, divisor).map(Value::Integer)
                                .ok_or(RuntimeError::Overflow { line })
}

/// Compares two values for language-level equality.
///
/// The rule, applied in order:
/// 1. Both integers: compare the integers.
/// 2. Either side a string: compare both sides' string forms (so
///    `"3" == 3` holds).
/// 3. Otherwise: reference identity, with null equal to null.
///
/// `!=` is the exact negation of this.
#[must_use]
pub(crate) fn values_equal(left: &Value, right: &Value) -> bool {
    if let (Value::Integer(l), Value::Integer(r)) = (left, right) {
        return l == r;
    }

    if left.is_string() || right.is_string() {
        return left.to_string() == right.to_string();
    }

    left.identity_eq(right)
}
