use internment::Intern;
use crate::{walker::Value, Ident};

/// An expression tree. Trees are built directly by the embedder (a textual
/// front-end would sit above this crate and produce them); evaluation never
/// mutates a tree, so one tree may be evaluated any number of times.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// An already-produced value. Evaluates to itself.
    Literal(Value),
    /// A free variable, resolved against the scope chain.
    Name(Ident),
    /// Application: `func` is evaluated to a callable, then every argument
    /// is evaluated left-to-right in the same scope, then the callable is
    /// invoked with the results.
    Call { func: Box<Expr>, args: Vec<Expr> },
    /// A function definition. Evaluates to a closure over the current scope.
    Func { params: Vec<Ident>, body: Box<Expr> },
}

impl Expr {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn name(name: &str) -> Self {
        Expr::Name(Intern::new(name.into()))
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            func: Box::new(func),
            args,
        }
    }

    pub fn func(params: &[&str], body: Expr) -> Self {
        Expr::Func {
            params: params.iter().map(|name| Intern::new((*name).into())).collect(),
            body: Box::new(body),
        }
    }
}
