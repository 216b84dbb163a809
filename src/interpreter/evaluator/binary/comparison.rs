use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Maps an equality operator and an equality result to the final boolean.
///
/// Returns `None` for operators other than `==` and `!=`.
#[must_use]
pub const fn equality_op_result(op: InfixOperator, is_equal: bool) -> Option<bool> {
    match op {
        InfixOperator::Equal => Some(is_equal),
        InfixOperator::NotEqual => Some(!is_equal),
        _ => None,
    }
}

impl Evaluator {
    /// Compares two values of the same non-integer, non-string type.
    ///
    /// Booleans, null and arrays compare structurally; functions compare by
    /// identity. Only `==` and `!=` are defined.
    ///
    /// # Example
    /// ```
    /// use macaque::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let t = Value::Boolean(true);
    ///
    /// assert_eq!(Evaluator::eval_equality(InfixOperator::Equal, &t, &t).unwrap(),
    ///            Value::Boolean(true));
    ///
    /// let err = Evaluator::eval_equality(InfixOperator::Plus, &t, &t).unwrap_err();
    /// assert_eq!(err.to_string(), "unknown operator: BOOLEAN + BOOLEAN");
    /// ```
    pub fn eval_equality(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        equality_op_result(op, left == right).map(Value::Boolean)
                                              .ok_or(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                                                          op,
                                                                                          right: right.type_name() })
    }
}
