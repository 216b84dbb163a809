use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{BlockStatement, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::lookup_builtin,
        value::{
            core::{Closure, NULL, Value},
            environment::Env,
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The error is turned into a
/// [`Value::Error`] only when it leaves the evaluator through [`evaluate`]
/// or [`Evaluator::evaluate`].
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 2048;

/// Evaluation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// How many user function calls may be active at once before evaluation
    /// fails with a call depth error.
    pub max_call_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

/// Any syntax tree node the evaluator accepts.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A whole program. A top-level `return` ends it.
    Program(&'a Program),
    /// A single statement.
    Statement(&'a Statement),
    /// A block. A `return` inside it stays wrapped.
    Block(&'a BlockStatement),
    /// A single expression.
    Expression(&'a Expr),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Self::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Self::Statement(statement)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Self::Block(block)
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        Self::Expression(expr)
    }
}

/// Stores the runtime evaluation state.
///
/// The evaluator itself holds no bindings; those live in the environment
/// passed to each call. It only tracks how deeply user functions are
/// currently nested, so one `Evaluator` can be reused for many programs.
///
/// ## Usage
///
/// ```
/// use macaque::{
///     interpreter::{
///         evaluator::core::{EvalConfig, Evaluator},
///         parser::parse,
///         value::{core::Value, environment::Environment},
///     },
/// };
///
/// let env = Environment::new().into_shared();
/// let mut evaluator = Evaluator::new(EvalConfig::default());
///
/// let (program, _) = parse("let double = fn(x) { x * 2 };");
/// evaluator.evaluate(&program, &env);
///
/// let (program, _) = parse("double(21)");
/// assert_eq!(evaluator.evaluate(&program, &env), Value::Integer(42));
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    config: EvalConfig,
    depth:  usize,
}

impl Evaluator {
    /// Creates an evaluator with the given settings.
    #[must_use]
    pub const fn new(config: EvalConfig) -> Self {
        Self { config, depth: 0 }
    }

    /// The settings this evaluator was created with.
    #[must_use]
    pub const fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluates `node` in `env`, reporting failure as [`Value::Error`].
    pub fn evaluate<'a>(&mut self, node: impl Into<Node<'a>>, env: &Env) -> Value {
        match self.eval(node.into(), env) {
            Ok(value) => value,
            Err(error) => {
                debug!(%error, "evaluation failed");
                Value::Error(error.to_string())
            },
        }
    }

    /// Evaluates any node.
    ///
    /// This is the main entry point for evaluation. Programs unwrap a
    /// `return` value; blocks, statements and expressions pass it through
    /// wrapped.
    pub fn eval(&mut self, node: Node<'_>, env: &Env) -> EvalResult<Value> {
        match node {
            Node::Program(program) => self.eval_program(program, env),
            Node::Statement(statement) => self.eval_statement(statement, env),
            Node::Block(block) => self.eval_block(block, env),
            Node::Expression(expr) => self.eval_expression(expr, env),
        }
    }

    /// Evaluates each statement in order.
    ///
    /// # Returns
    /// The payload of the first `return` reached, otherwise the value of the
    /// last statement, or `NULL` for an empty program.
    pub fn eval_program(&mut self, program: &Program, env: &Env) -> EvalResult<Value> {
        let mut result = NULL;

        for statement in &program.statements {
            match self.eval_statement(statement, env)? {
                Value::Return(value) => return Ok(*value),
                value => result = value,
            }
        }

        Ok(result)
    }

    /// Evaluates each statement of a block in order, stopping at the first
    /// `return`.
    ///
    /// The `return` value is handed back still wrapped so that it keeps
    /// unwinding through every enclosing block up to the function call or
    /// program that will unwrap it.
    pub fn eval_block(&mut self, block: &BlockStatement, env: &Env) -> EvalResult<Value> {
        let mut result = NULL;

        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;

            if matches!(result, Value::Return(_)) {
                break;
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// - `let` binds in the frame `env` refers to and yields the bound value.
    /// - `return` yields its value (or `NULL`) wrapped in `Value::Return`.
    /// - An expression statement yields the expression's value.
    pub fn eval_statement(&mut self, statement: &Statement, env: &Env) -> EvalResult<Value> {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.borrow_mut().bind(name.name.clone(), value.clone());
                Ok(value)
            },
            Statement::Return { value } => {
                let value = match value {
                    Some(expr) => self.eval_expression(expr, env)?,
                    None => NULL,
                };
                Ok(Value::Return(Box::new(value)))
            },
            Statement::Expression(expr) => self.eval_expression(expr, env),
        }
    }

    /// Evaluates an expression.
    ///
    /// The evaluator dispatches on the expression variant: literals,
    /// identifiers, prefix and infix operators, conditionals, function
    /// literals, calls and indexing.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Environment free identifiers resolve in.
    ///
    /// # Returns
    /// The computed `Value`, or the first runtime error raised anywhere in
    /// the expression.
    pub fn eval_expression(&mut self, expr: &Expr, env: &Env) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Integer(value) => Ok(Value::Integer(*value)),
            Expr::String(value) => Ok(Value::String(value.clone())),
            Expr::Boolean(value) => Ok(Value::Boolean(*value)),
            Expr::Identifier(ident) => Self::eval_identifier(&ident.name, env),
            Expr::Array(elements) => Ok(Value::from(self.eval_expressions(elements, env)?)),
            Expr::Prefix { op, right } => {
                let right = self.eval_expression(right, env)?;
                Self::eval_prefix(*op, &right)
            },
            Expr::Infix { left, op, right } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                Self::eval_infix(*op, &left, &right)
            },
            Expr::If { condition,
                       consequence,
                       alternative, } => {
                self.eval_if_expr(condition, consequence, alternative.as_ref(), env)
            },
            Expr::Function(literal) => {
                Ok(Value::Function(Rc::new(Closure { literal: Rc::clone(literal),
                                                     env:     Rc::clone(env), })))
            },
            Expr::Call { function,
                         arguments, } => {
                let function = self.eval_expression(function, env)?;
                let arguments = self.eval_expressions(arguments, env)?;
                self.apply_function(&function, arguments)
            },
            Expr::Index { left, index } => {
                let left = self.eval_expression(left, env)?;
                let index = self.eval_expression(index, env)?;
                Self::eval_index(&left, &index)
            },
            Expr::Missing => Err(RuntimeError::MissingExpression),
        })
    }

    /// Evaluates expressions left to right, stopping at the first error.
    pub fn eval_expressions(&mut self, exprs: &[Expr], env: &Env) -> EvalResult<Vec<Value>> {
        exprs.iter()
             .map(|expr| self.eval_expression(expr, env))
             .collect()
    }

    /// Resolves a name: the environment chain first, then the built-ins.
    fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
        if let Some(value) = env.borrow().lookup(name) {
            return Ok(value);
        }

        lookup_builtin(name).map(Value::Builtin)
                            .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })
    }

    /// Evaluates a conditional expression.
    ///
    /// Only `false` and `null` select the alternative. Without an
    /// alternative, a falsy condition yields `NULL`.
    fn eval_if_expr(&mut self,
                    condition: &Expr,
                    consequence: &BlockStatement,
                    alternative: Option<&BlockStatement>,
                    env: &Env)
                    -> EvalResult<Value> {
        let condition = self.eval_expression(condition, env)?;

        if condition.is_truthy() {
            self.eval_block(consequence, env)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative, env)
        } else {
            Ok(NULL)
        }
    }

    /// Runs `f` one call level deeper, failing once the configured limit is
    /// reached.
    pub(crate) fn with_call_depth<T>(&mut self,
                                     f: impl FnOnce(&mut Self) -> EvalResult<T>)
                                     -> EvalResult<T> {
        if self.depth >= self.config.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.config.max_call_depth });
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

/// Evaluates `node` in `env` with the default settings.
///
/// Runtime errors come back as [`Value::Error`] carrying the error message.
///
/// # Example
/// ```
/// use macaque::interpreter::{
///     evaluator::core::evaluate,
///     parser::parse,
///     value::{core::Value, environment::Environment},
/// };
///
/// let env = Environment::new().into_shared();
///
/// let (program, _) = parse("let newAdder = fn(x) { fn(y) { x + y } }; newAdder(2)(6)");
/// assert_eq!(evaluate(&program, &env), Value::Integer(8));
///
/// let (program, _) = parse("5 + true");
/// assert_eq!(evaluate(&program, &env).inspect(), "ERROR: type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn evaluate<'a>(node: impl Into<Node<'a>>, env: &Env) -> Value {
    Evaluator::default().evaluate(node, env)
}

