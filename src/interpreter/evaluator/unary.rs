use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a prefix operation on a value.
    ///
    /// Supported operators:
    /// - `Bang`: truthiness negation. Only `false` and `null` are falsy, so
    ///   `!` yields `true` for those two and `false` for every other value.
    /// - `Minus`: integer negation, wrapping on overflow.
    ///
    /// # Parameters
    /// - `op`: Prefix operator.
    /// - `value`: The evaluated operand.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use macaque::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Minus, &Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Bang, &Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Boolean(false));
    ///
    /// let err = Evaluator::eval_prefix(PrefixOperator::Minus, &Value::Boolean(true)).unwrap_err();
    /// assert_eq!(err.to_string(), "unknown operator: -BOOLEAN");
    /// ```
    pub fn eval_prefix(op: PrefixOperator, value: &Value) -> EvalResult<Value> {
        match op {
            PrefixOperator::Bang => Ok(Value::Boolean(!value.is_truthy())),
            PrefixOperator::Minus => match value {
                Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
                _ => Err(RuntimeError::UnknownPrefixOperator { op,
                                                               operand: value.type_name() }),
            },
        }
    }
}
