use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::{NULL, Value},
    },
};

impl Evaluator {
    /// Evaluates `collection[index]`.
    ///
    /// Only arrays indexed by integers are supported. An index outside
    /// `[0, len)`, negative ones included, yields `NULL` rather than an
    /// error.
    ///
    /// # Parameters
    /// - `collection`: The indexed value.
    /// - `index`: The index value.
    ///
    /// # Returns
    /// The element, `NULL`, or an error for an unsupported pair of types.
    ///
    /// # Example
    /// ```
    /// use macaque::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let array = Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
    ///
    /// assert_eq!(Evaluator::eval_index(&array, &Value::Integer(1)).unwrap(), Value::Integer(2));
    /// assert_eq!(Evaluator::eval_index(&array, &Value::Integer(3)).unwrap(), Value::Null);
    /// assert_eq!(Evaluator::eval_index(&array, &Value::Integer(-1)).unwrap(), Value::Null);
    /// ```
    pub fn eval_index(collection: &Value, index: &Value) -> EvalResult<Value> {
        match (collection, index) {
            (Value::Array(elements), Value::Integer(i)) => {
                Ok(usize::try_from(*i).ok()
                                      .and_then(|i| elements.get(i))
                                      .cloned()
                                      .unwrap_or(NULL))
            },
            _ => Err(RuntimeError::IndexNotSupported { collection: collection.type_name(),
                                                       index:      index.type_name(), }),
        }
    }
}
