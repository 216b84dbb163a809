use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// Operands of different types are rejected with a type mismatch before
    /// any operator is looked at. Same-typed pairs are routed by type:
    /// integers to `eval_integer_infix`, strings to `eval_string_infix`, and
    /// every other type to `eval_equality`, which only knows `==` and `!=`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use macaque::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let result = Evaluator::eval_infix(InfixOperator::Plus, &Value::Integer(3), &Value::Integer(4));
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let err = Evaluator::eval_infix(InfixOperator::Plus, &Value::Integer(5), &Value::Boolean(true));
    /// assert_eq!(err.unwrap_err().to_string(), "type mismatch: INTEGER + BOOLEAN");
    /// ```
    pub fn eval_infix(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        if left.type_name() != right.type_name() {
            return Err(RuntimeError::TypeMismatch { left: left.type_name(),
                                                    op,
                                                    right: right.type_name() });
        }

        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_infix(op, *a, *b),
            (Value::String(a), Value::String(b)) => Self::eval_string_infix(op, a, b),
            _ => Self::eval_equality(op, left, right),
        }
    }
}
