use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Applies an operator to two strings.
    ///
    /// `+` concatenates and `==`/`!=` compare contents. Strings have no
    /// ordering and no other arithmetic.
    pub fn eval_string_infix(op: InfixOperator, a: &str, b: &str) -> EvalResult<Value> {
        match op {
            InfixOperator::Plus => Ok(Value::String(format!("{a}{b}"))),
            InfixOperator::Equal => Ok(Value::Boolean(a == b)),
            InfixOperator::NotEqual => Ok(Value::Boolean(a != b)),
            _ => Err(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                          op,
                                                          right: "STRING" }),
        }
    }
}
