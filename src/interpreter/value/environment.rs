use std::{cell::RefCell, collections::HashMap, rc::Rc};

use tracing::trace;

use crate::interpreter::value::core::Value;

/// A shared handle to an environment frame.
///
/// Frames are reference counted because a closure keeps its defining frame
/// alive after the call that created it has returned, and several closures
/// may share one frame.
pub type Env = Rc<RefCell<Environment>>;

/// One frame of a lexical scope chain.
///
/// Lookup searches this frame, then each enclosing frame outward. Binding
/// always writes to the frame it is called on, never to an ancestor, so an
/// inner scope can shadow an outer name but cannot change it.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    parent:   Option<Env>,
}

impl Environment {
    /// Creates a root frame with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty frame enclosed by `parent`.
    ///
    /// ## Example
    /// ```
    /// use macaque::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let root = Environment::new().into_shared();
    /// root.borrow_mut().bind("x", Value::Integer(1));
    ///
    /// let mut child = Environment::new_child(&root);
    /// child.bind("x", Value::Integer(2));
    ///
    /// assert_eq!(child.lookup("x"), Some(Value::Integer(2)));
    /// assert_eq!(root.borrow().lookup("x"), Some(Value::Integer(1)));
    /// ```
    #[must_use]
    pub fn new_child(parent: &Env) -> Self {
        trace!("new child environment");
        Self { bindings: HashMap::new(),
               parent:   Some(Rc::clone(parent)), }
    }

    /// Wraps this frame in a shared handle.
    #[must_use]
    pub fn into_shared(self) -> Env {
        Rc::new(RefCell::new(self))
    }

    /// Binds `name` to `value` in this frame, replacing any earlier binding
    /// of the same name in this frame.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Resolves `name`, searching this frame and then its ancestors.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }

        self.parent
            .as_ref()
            .and_then(|parent| parent.borrow().lookup(name))
    }

    /// Returns `true` if `name` is bound in this frame itself.
    #[must_use]
    pub fn is_bound_locally(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// The enclosing frame, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&Env> {
        self.parent.as_ref()
    }
}
