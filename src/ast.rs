use std::{fmt, mem, rc::Rc};

use crate::util::stack::ensure_sufficient_stack;

/// The root of a parsed source text: an ordered list of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// The literal of the first statement's defining token, or an empty
    /// string for an empty program.
    #[must_use]
    pub fn token_literal(&self) -> String {
        self.statements
            .first()
            .map_or_else(String::new, Statement::token_literal)
    }
}

/// A statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The name being bound.
        name:  Identifier,
        /// The bound expression.
        value: Expr,
    },
    /// `return <value>;`, or a bare `return;`.
    Return {
        /// The returned expression, if any.
        value: Option<Expr>,
    },
    /// A bare expression used as a statement.
    Expression(Expr),
}

impl Statement {
    /// Text of the token this statement starts with.
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Let { .. } => "let".to_string(),
            Self::Return { .. } => "return".to_string(),
            Self::Expression(expr) => expr.token_literal(),
        }
    }
}

/// A brace-delimited sequence of statements, the body of an `if` branch or
/// a function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockStatement {
    /// Statements inside the braces, in source order.
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    /// Text of the token a block starts with.
    #[must_use]
    pub const fn token_literal(&self) -> &'static str {
        "{"
    }
}

/// A name, as written in source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The identifier's text.
    pub name: String,
}

impl Identifier {
    /// Creates an identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An anonymous function: `fn(<parameters>) { <body> }`.
///
/// Held behind an `Rc` in the tree so that function values produced during
/// evaluation can share the parameter list and body without copying them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLiteral {
    /// Parameter names in declaration order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body:       BlockStatement,
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal, verbatim.
    String(String),
    /// `true` or `false`.
    Boolean(bool),
    /// `[e1, e2, ...]`
    Array(Vec<Self>),
    /// `!x` or `-x`.
    Prefix {
        /// The operator.
        op:    PrefixOperator,
        /// The operand.
        right: Box<Self>,
    },
    /// `left <op> right`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `if (<condition>) { ... } else { ... }`.
    If {
        /// The predicate.
        condition:   Box<Self>,
        /// Block evaluated when the predicate is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// A function literal.
    Function(Rc<FunctionLiteral>),
    /// `<function>(<arguments>)`.
    Call {
        /// The callee: an identifier or any expression yielding a function.
        function:  Box<Self>,
        /// Argument expressions in call order.
        arguments: Vec<Self>,
    },
    /// `<left>[<index>]`.
    Index {
        /// The collection being indexed.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
    },
    /// Placeholder for an expression the parser could not build. A parse
    /// error has always been recorded when this appears in a tree.
    Missing,
}

impl Expr {
    /// Text of the token this expression is defined by.
    ///
    /// ## Example
    /// ```
    /// use macaque::ast::{Expr, InfixOperator};
    ///
    /// let sum = Expr::Infix { left:  Box::new(Expr::Integer(1)),
    ///                         op:    InfixOperator::Plus,
    ///                         right: Box::new(Expr::Integer(2)), };
    ///
    /// assert_eq!(sum.token_literal(), "+");
    /// ```
    #[must_use]
    pub fn token_literal(&self) -> String {
        match self {
            Self::Identifier(ident) => ident.name.clone(),
            Self::Integer(value) => value.to_string(),
            Self::String(value) => value.clone(),
            Self::Boolean(value) => value.to_string(),
            Self::Array(_) | Self::Index { .. } => "[".to_string(),
            Self::Prefix { op, .. } => op.to_string(),
            Self::Infix { op, .. } => op.to_string(),
            Self::If { .. } => "if".to_string(),
            Self::Function(_) => "fn".to_string(),
            Self::Call { .. } => "(".to_string(),
            Self::Missing => String::new(),
        }
    }
}

impl Expr {
    /// Moves every direct subexpression of `self` into `out`, leaving
    /// `Missing` (or empty lists) behind.
    fn detach_children(&mut self, out: &mut Vec<Self>) {
        match self {
            Self::Identifier(_) | Self::Integer(_) | Self::String(_) | Self::Boolean(_) | Self::Missing => {},
            Self::Array(elements) => out.append(elements),
            Self::Prefix { right, .. } => out.push(take_boxed(right)),
            Self::Infix { left, right, .. } | Self::Index { left, index: right } => {
                out.push(take_boxed(left));
                out.push(take_boxed(right));
            },
            Self::If { condition,
                       consequence,
                       alternative, } => {
                out.push(take_boxed(condition));
                consequence.detach_expressions(out);
                if let Some(alternative) = alternative {
                    alternative.detach_expressions(out);
                }
            },
            // A literal still shared with a closure is freed by whoever drops it last.
            Self::Function(literal) => {
                if let Some(literal) = Rc::get_mut(literal) {
                    literal.body.detach_expressions(out);
                }
            },
            Self::Call { function,
                         arguments, } => {
                out.push(take_boxed(function));
                out.append(arguments);
            },
        }
    }
}

fn take_boxed(expr: &mut Box<Expr>) -> Expr {
    mem::replace(&mut **expr, Expr::Missing)
}

impl BlockStatement {
    fn detach_expressions(&mut self, out: &mut Vec<Expr>) {
        for statement in self.statements.drain(..) {
            match statement {
                Statement::Let { value, .. } | Statement::Expression(value) => out.push(value),
                Statement::Return { value } => out.extend(value),
            }
        }
    }
}

/// Frees the tree with an explicit work list, so dropping a deeply nested
/// expression uses constant stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

/// Operators that may start an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!`).
    Bang,
    /// Arithmetic negation (`-`).
    Minus,
}

/// Binary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition or string concatenation (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Multiply,
    /// Truncating division (`/`)
    Divide,
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bang => f.write_str("!"),
            Self::Minus => f.write_str("-"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        f.write_str(operator)
    }
}

/// Writes `items` separated by `", "`.
fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value) } => write!(f, "return {value};"),
            Self::Return { value: None } => f.write_str("return;"),
            Self::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

/// Renders as `{ s1 s2 }`, or `{ }` when empty.
impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for statement in &self.statements {
            write!(f, "{statement} ")?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_comma_separated(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Array(elements) => {
                f.write_str("[")?;
                write_comma_separated(f, elements)?;
                f.write_str("]")
            },
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Function(literal) => write!(f, "{literal}"),
            Self::Call { function,
                         arguments, } => {
                write!(f, "{function}(")?;
                write_comma_separated(f, arguments)?;
                f.write_str(")")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::Missing => f.write_str("<missing>"),
        })
    }
}
