//! A tiny tree-walking evaluator. Expression trees are built directly by the
//! embedder (there is no parser) and reduced to values against a chain of
//! lexically nested scopes.

mod error;
mod expr;
mod walker;

pub use self::{
    error::ExecError,
    expr::Expr,
    walker::{apply, eval, Closure, Env, Native, Value},
};

use std::rc::Rc;
use internment::Intern;

/// Interned name, used for bindings and parameters.
pub type Ident = Intern<String>;

/// The embedding entry point. An engine owns one global scope, populated
/// with the native prelude before anything is evaluated. Engines are
/// independent of one another.
pub struct Engine {
    global: Rc<Env>,
}

impl Default for Engine {
    fn default() -> Self {
        let global = Env::new(None);
        for (name, value) in walker::native::prelude() {
            global.add(Intern::new(name.into()), value);
        }
        Self { global }
    }
}

impl Engine {
    pub fn insert_global(&mut self, name: &str, value: Value) {
        self.global.add(Intern::new(name.into()), value);
    }

    pub fn with_global(mut self, name: &str, value: Value) -> Self {
        self.insert_global(name, value);
        self
    }

    /// The global scope, for embedders that build child scopes of their own.
    pub fn global(&self) -> &Rc<Env> {
        &self.global
    }

    pub fn eval(&self, expr: &Expr) -> Result<Value, ExecError> {
        eval(expr, &self.global)
    }
}
