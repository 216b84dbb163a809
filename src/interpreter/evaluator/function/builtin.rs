use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::{NULL, Value},
    },
};

/// Returns the length of an array or string.
///
/// String length is measured in UTF-8 bytes.
///
/// # Example
/// ```
/// use macaque::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// assert_eq!(len(&[Value::from("")]).unwrap(), Value::Integer(0));
/// assert_eq!(len(&[Value::from("héllo")]).unwrap(), Value::Integer(6));
/// assert_eq!(len(&[Value::Integer(1)]).unwrap_err().to_string(),
///            "argument to `len` not supported, got INTEGER");
/// ```
pub fn len(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    let n = match &args[0] {
        Value::String(s) => s.len(),
        Value::Array(elements) => elements.len(),
        other => {
            return Err(RuntimeError::UnsupportedArgument { function: "len",
                                                           got:      other.type_name(), });
        },
    };

    Ok(Value::Integer(i64::try_from(n).unwrap_or(i64::MAX)))
}

/// Returns the first element of an array, or `NULL` when it is empty.
pub fn first(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    let elements = array_argument("first", &args[0])?;
    Ok(elements.first().cloned().unwrap_or(NULL))
}

/// Returns the last element of an array, or `NULL` when it is empty.
///
/// # Example
/// ```
/// use macaque::interpreter::{evaluator::function::builtin::last, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(1), Value::Integer(2)]);
///
/// assert_eq!(last(&[array]).unwrap(), Value::Integer(2));
/// assert_eq!(last(&[Value::from(Vec::<Value>::new())]).unwrap(), Value::Null);
/// ```
pub fn last(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    let elements = array_argument("last", &args[0])?;
    Ok(elements.last().cloned().unwrap_or(NULL))
}

/// Returns a new array holding every element but the first.
///
/// An empty array yields `NULL`.
pub fn rest(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 1)?;

    let elements = array_argument("rest", &args[0])?;
    match elements.split_first() {
        Some((_, tail)) => Ok(Value::from(tail.to_vec())),
        None => Ok(NULL),
    }
}

/// Returns a new array with the second argument appended to the first.
///
/// The input array is left unchanged.
///
/// # Example
/// ```
/// use macaque::interpreter::{evaluator::function::builtin::push, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(1)]);
/// let pushed = push(&[array.clone(), Value::Integer(2)]).unwrap();
///
/// assert_eq!(pushed.inspect(), "[1, 2]");
/// assert_eq!(array.inspect(), "[1]");
/// ```
pub fn push(args: &[Value]) -> EvalResult<Value> {
    check_arity(args, 2)?;

    let Value::Array(elements) = &args[0] else {
        return Err(RuntimeError::FirstArgumentMustBe { function: "push",
                                                       expected: "ARRAY",
                                                       got:      args[0].type_name(), });
    };

    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend(elements.iter().cloned());
    pushed.push(args[1].clone());

    Ok(Value::Array(Rc::new(pushed)))
}

/// Borrows the elements of an array argument, or reports the builtin as
/// not supporting the argument's type.
fn array_argument<'a>(function: &'static str, arg: &'a Value) -> EvalResult<&'a [Value]> {
    match arg {
        Value::Array(elements) => Ok(elements.as_slice()),
        other => Err(RuntimeError::UnsupportedArgument { function,
                                                         got: other.type_name() }),
    }
}
