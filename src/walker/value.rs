use std::{fmt, rc::Rc};
use crate::{error::ExecError, expr::Expr, Ident};
use super::env::Env;

/// A fully-evaluated value. Values are immutable once produced: evaluation
/// clones them freely and never writes through one.
#[derive(Clone)]
pub enum Value {
    Null,
    Num(f64),
    Str(String),
    Bool(bool),
    Func(Rc<Closure>),
    Native(Native),
}

/// A user-defined function paired with the scope that was current at its
/// definition site. Free variables in `body` resolve against `env`, not
/// against the caller's scope.
pub struct Closure {
    pub params: Vec<Ident>,
    pub body: Expr,
    pub env: Rc<Env>,
}

/// A host-provided function. Performs no scope lookups of its own; it only
/// sees the already-evaluated arguments it is handed.
#[derive(Clone)]
pub struct Native {
    name: &'static str,
    arity: Option<usize>,
    f: Rc<dyn Fn(&[Value]) -> Result<Value, ExecError>>,
}

impl Native {
    /// An `arity` of `None` accepts any number of arguments.
    pub fn new(
        name: &'static str,
        arity: impl Into<Option<usize>>,
        f: impl Fn(&[Value]) -> Result<Value, ExecError> + 'static,
    ) -> Self {
        Self {
            name,
            arity: arity.into(),
            f: Rc::new(f),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, ExecError> {
        (self.f)(args)
    }
}

impl Value {
    /// Whether this value may stand in the head position of a call.
    pub fn is_callable(&self) -> bool {
        match self {
            Value::Func(_) | Value::Native(_) => true,
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Num(a), Value::Num(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // Callables compare by identity, not structure.
            (Value::Func(a), Value::Func(b)) => Rc::ptr_eq(a, b),
            (Value::Native(a), Value::Native(b)) => Rc::ptr_eq(&a.f, &b.f),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Num(x) => write!(f, "{}", x),
            Value::Str(x) => write!(f, "\"{}\"", x),
            Value::Bool(x) => write!(f, "{}", x),
            Value::Func(_) => write!(f, "<func>"),
            Value::Native(n) => write!(f, "<native {}>", n.name),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Num(x)
    }
}

impl From<bool> for Value {
    fn from(x: bool) -> Self {
        Value::Bool(x)
    }
}

impl From<&str> for Value {
    fn from(x: &str) -> Self {
        Value::Str(x.into())
    }
}

impl From<String> for Value {
    fn from(x: String) -> Self {
        Value::Str(x)
    }
}

impl From<Native> for Value {
    fn from(native: Native) -> Self {
        Value::Native(native)
    }
}
