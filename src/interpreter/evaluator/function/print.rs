use crate::interpreter::{
    evaluator::core::EvalResult,
    value::core::{NULL, Value},
};

/// Prints each argument on its own line and returns `NULL`.
///
/// Accepts any number of arguments. Each value is written using its
/// `inspect` rendering, so strings appear without quotes.
///
/// # Parameters
/// - `args`: Values to print.
///
/// # Returns
/// `NULL`.
///
/// # Example
/// ```
/// use macaque::interpreter::{evaluator::function::print::puts, value::core::Value};
///
/// // The function prints the values to stdout, but the doctest
/// // only checks the returned result.
/// let result = puts(&[Value::Integer(42), Value::from("hi")]).unwrap();
///
/// assert_eq!(result, Value::Null);
/// ```
pub fn puts(args: &[Value]) -> EvalResult<Value> {
    for arg in args {
        println!("{}", arg.inspect());
    }

    Ok(NULL)
}
