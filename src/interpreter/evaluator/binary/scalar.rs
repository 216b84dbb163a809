use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Applies an operator to two integers.
    ///
    /// `+`, `-` and `*` wrap on overflow. `/` truncates toward zero; a zero
    /// divisor is an error, and `i64::MIN / -1` wraps to `i64::MIN`. The
    /// comparison operators yield booleans.
    ///
    /// # Example
    /// ```
    /// use macaque::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// assert_eq!(Evaluator::eval_integer_infix(InfixOperator::Divide, -7, 2).unwrap(),
    ///            Value::Integer(-3));
    /// assert_eq!(Evaluator::eval_integer_infix(InfixOperator::LessThan, 1, 2).unwrap(),
    ///            Value::Boolean(true));
    /// assert!(Evaluator::eval_integer_infix(InfixOperator::Divide, 1, 0).is_err());
    /// ```
    pub fn eval_integer_infix(op: InfixOperator, a: i64, b: i64) -> EvalResult<Value> {
        let value = match op {
            InfixOperator::Plus => Value::Integer(a.wrapping_add(b)),
            InfixOperator::Minus => Value::Integer(a.wrapping_sub(b)),
            InfixOperator::Multiply => Value::Integer(a.wrapping_mul(b)),
            InfixOperator::Divide => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Value::Integer(a.wrapping_div(b))
            },
            InfixOperator::LessThan => Value::Boolean(a < b),
            InfixOperator::GreaterThan => Value::Boolean(a > b),
            InfixOperator::Equal => Value::Boolean(a == b),
            InfixOperator::NotEqual => Value::Boolean(a != b),
        };

        Ok(value)
    }
}
