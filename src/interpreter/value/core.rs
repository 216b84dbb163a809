use std::{fmt, rc::Rc};

use crate::{
    ast::FunctionLiteral,
    interpreter::{evaluator::function::core::Builtin, value::environment::Env},
};

/// The boolean `true`.
pub const TRUE: Value = Value::Boolean(true);
/// The boolean `false`.
pub const FALSE: Value = Value::Boolean(false);
/// The null value, produced by an `if` without a taken branch, by
/// out-of-range indexing and by several built-ins.
pub const NULL: Value = Value::Null;

/// Represents a runtime value in the interpreter.
///
/// Values are immutable once built. Arrays and closures are reference
/// counted so that copying a value into a binding or an argument list is
/// cheap; built-ins that "modify" an array return a new one.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A string.
    String(String),
    /// `true` or `false`.
    Boolean(bool),
    /// The absence of a value.
    Null,
    /// An ordered sequence of values.
    Array(Rc<Vec<Self>>),
    /// A user-defined function together with the environment it was defined
    /// in.
    Function(Rc<Closure>),
    /// A native function from the built-in catalogue.
    Builtin(Builtin),
    /// Marks a value produced by `return`. It travels outward through
    /// enclosing blocks and is unwrapped at the function call or program
    /// boundary.
    Return(Box<Self>),
    /// A failed evaluation, carrying its message.
    Error(String),
}

/// A function value: the literal it was created from and the environment
/// that was current when the literal was evaluated.
pub struct Closure {
    /// Parameters and body, shared with the syntax tree.
    pub literal: Rc<FunctionLiteral>,
    /// The defining environment. Free variables in the body resolve here.
    pub env:     Env,
}

impl fmt::Debug for Closure {
    // The environment may contain this closure, so it is left out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
         .field("literal", &self.literal)
         .finish_non_exhaustive()
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// The runtime type name used in error messages.
    ///
    /// ## Example
    /// ```
    /// use macaque::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::from(Vec::<Value>::new()).type_name(), "ARRAY");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::String(_) => "STRING",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN_VALUE",
            Self::Error(_) => "ERROR",
        }
    }

    /// Only `false` and `null` are falsy; every other value is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }

    /// Returns `true` for `Value::Error`.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Human-readable rendering of the value.
    ///
    /// Integers print in decimal, strings verbatim, arrays as `[e1, e2]`,
    /// functions as their source form, errors as `ERROR: <message>` and null
    /// as `NULL`.
    ///
    /// ## Example
    /// ```
    /// use macaque::interpreter::value::core::Value;
    ///
    /// let array = Value::from(vec![Value::Integer(1), Value::from("two"), Value::Null]);
    ///
    /// assert_eq!(array.inspect(), "[1, two, NULL]");
    /// assert_eq!(Value::Error("boom".into()).inspect(), "ERROR: boom");
    /// ```
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => f.write_str("NULL"),
            Self::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            },
            Self::Function(closure) => write!(f, "{}", closure.literal),
            Self::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
            Self::Return(value) => write!(f, "{value}"),
            Self::Error(message) => write!(f, "ERROR: {message}"),
        }
    }
}

/// Structural equality for data; identity for functions.
///
/// Two function values are equal only if they come from the same literal
/// evaluated in the same environment. Built-ins compare by name.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::String(a), Self::String(b)) | (Self::Error(a), Self::Error(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => {
                Rc::ptr_eq(a, b)
                || (Rc::ptr_eq(&a.literal, &b.literal) && Rc::ptr_eq(&a.env, &b.env))
            },
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Return(a), Self::Return(b)) => a == b,
            _ => false,
        }
    }
}
