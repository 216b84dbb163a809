use std::{fmt, rc::Rc};

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{builtin, print},
            utils::{check_arity, unwrap_return_value},
        },
        value::{
            core::{Closure, Value},
            environment::Environment,
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns a
/// value or a runtime error.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Variadic` accepts any number of arguments, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments.
    Variadic,
}

impl Arity {
    /// Tests whether `n` arguments satisfy this arity.
    ///
    /// # Returns
    /// `Ok(())` if the count is permitted, otherwise a wrong argument count
    /// error.
    pub const fn check(self, n: usize) -> EvalResult<()> {
        match self {
            Self::Exact(want) if n != want => {
                Err(RuntimeError::WrongArgumentCount { got: n, want })
            },
            _ => Ok(()),
        }
    }
}

/// A native function in the built-in catalogue.
///
/// Builtins are plain data: a name, an arity and a function pointer. They
/// are looked up by name only after the environment chain has no binding
/// for it, so a program may shadow any of them with `let`.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The name programs call it by.
    pub name:  &'static str,
    /// Accepted argument counts, checked before `func` runs.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}

impl Builtin {
    /// Checks the argument count and runs the builtin.
    ///
    /// # Example
    /// ```
    /// use macaque::interpreter::{evaluator::function::core::lookup_builtin, value::core::Value};
    ///
    /// let len = lookup_builtin("len").unwrap();
    ///
    /// assert_eq!(len.call(&[Value::from("hello world")]).unwrap(), Value::Integer(11));
    /// assert_eq!(len.call(&[Value::from("one"), Value::from("two")]).unwrap_err().to_string(),
    ///            "wrong number of arguments. got=2, want=1");
    /// ```
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        self.arity.check(args.len())?;
        (self.func)(args)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the number of arguments it accepts,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "first" => { arity: Arity::Exact(1), func: builtin::first },
    "last"  => { arity: Arity::Exact(1), func: builtin::last },
    "rest"  => { arity: Arity::Exact(1), func: builtin::rest },
    "push"  => { arity: Arity::Exact(2), func: builtin::push },
    "puts"  => { arity: Arity::Variadic, func: print::puts },
}

/// Finds a builtin by name.
///
/// ## Example
/// ```
/// use macaque::interpreter::evaluator::function::core::{BUILTIN_FUNCTIONS, lookup_builtin};
///
/// assert!(BUILTIN_FUNCTIONS.iter().all(|name| lookup_builtin(name).is_some()));
/// assert!(lookup_builtin("map").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter().find(|b| b.name == name).copied()
}

impl Evaluator {
    /// Applies a function value to evaluated arguments.
    ///
    /// User functions run in a fresh frame enclosed by the environment they
    /// captured, with each parameter bound to the argument in the same
    /// position. Builtins check their arity and run directly.
    ///
    /// # Parameters
    /// - `function`: The callee.
    /// - `arguments`: Evaluated arguments, in call order.
    ///
    /// # Returns
    /// The function result, with any `return` wrapper removed.
    pub fn apply_function(&mut self, function: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
        match function {
            Value::Function(closure) => self.call_closure(closure, arguments),
            Value::Builtin(builtin) => {
                trace!(name = builtin.name, args = arguments.len(), "calling builtin");
                builtin.call(&arguments)
            },
            other => Err(RuntimeError::NotAFunction { type_name: other.type_name() }),
        }
    }

    /// Executes a user-defined function.
    ///
    /// # Errors
    /// - Wrong number of arguments.
    /// - Call depth limit reached.
    /// - Any error raised by the body.
    fn call_closure(&mut self, closure: &Rc<Closure>, arguments: Vec<Value>) -> EvalResult<Value> {
        let parameters = &closure.literal.parameters;
        check_arity(&arguments, parameters.len())?;

        trace!(function = %closure.literal, "applying function");

        let mut frame = Environment::new_child(&closure.env);
        for (parameter, argument) in parameters.iter().zip(arguments) {
            frame.bind(parameter.name.clone(), argument);
        }
        let frame = frame.into_shared();

        let result = self.with_call_depth(|evaluator| {
                             evaluator.eval_block(&closure.literal.body, &frame)
                         })?;

        Ok(unwrap_return_value(result))
    }
}
