use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Verifies that a function received the expected number of arguments.
///
/// ## Example
/// ```
/// use macaque::interpreter::{evaluator::utils::check_arity, value::core::Value};
///
/// let arg_vals = vec![Value::Integer(2), Value::Integer(1)];
///
/// assert!(check_arity(&arg_vals, 2).is_ok()); // Requires exactly 2 arguments.
/// assert_eq!(check_arity(&arg_vals, 1).unwrap_err().to_string(),
///            "wrong number of arguments. got=2, want=1");
/// ```
pub const fn check_arity<T>(args: &[T], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::WrongArgumentCount { got:  args.len(),
                                               want: expected, })
    }
}

/// Strips a `return` wrapper, leaving any other value as is.
///
/// Applied where a `return` stops unwinding: at the end of a function call
/// and at the top level of a program.
#[must_use]
pub fn unwrap_return_value(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        other => other,
    }
}
