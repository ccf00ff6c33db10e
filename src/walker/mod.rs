mod env;
pub(crate) mod native;
mod value;

pub use self::{
    env::Env,
    value::{Closure, Native, Value},
};

use std::rc::Rc;
use tracing::trace;
use crate::{error::ExecError, expr::Expr};

/// Reduce an expression tree to a value against the given scope. Pure and
/// stack-recursive: no state survives between calls, and a deep enough tree
/// exhausts the call stack rather than failing recoverably.
pub fn eval(expr: &Expr, env: &Rc<Env>) -> Result<Value, ExecError> {
    match expr {
        Expr::Literal(value) => Ok(value.clone()),
        Expr::Name(name) => {
            trace!(%name, "resolving name");
            env.get(*name).ok_or_else(|| ExecError::NoSuchBinding(*name))
        },
        Expr::Call { func, args } => {
            let func = eval(func, env)?;
            // A non-callable head aborts the call before any argument runs.
            if !func.is_callable() {
                return Err(ExecError::NotCallable(func));
            }
            // Left-to-right, all in the caller's scope, stopping at the
            // first failure.
            let args = args
                .iter()
                .map(|arg| eval(arg, env))
                .collect::<Result<Vec<_>, _>>()?;
            apply(&func, args)
        },
        Expr::Func { params, body } => Ok(Value::Func(Rc::new(Closure {
            params: params.clone(),
            body: (**body).clone(),
            env: env.clone(),
        }))),
    }
}

/// Invoke a callable value with already-evaluated arguments.
///
/// A closure gets one fresh frame per invocation, parented on the scope it
/// captured at definition time, never on the caller's. The frame dies with
/// the call unless a closure created inside the body captured it.
pub fn apply(func: &Value, args: Vec<Value>) -> Result<Value, ExecError> {
    match func {
        Value::Func(closure) => {
            if closure.params.len() != args.len() {
                return Err(ExecError::WrongNumberOfArgs {
                    expected: closure.params.len(),
                    found: args.len(),
                });
            }
            trace!(params = closure.params.len(), "entering closure frame");
            let frame = Env::new(closure.env.clone());
            for (param, arg) in closure.params.iter().zip(args) {
                frame.add(*param, arg);
            }
            eval(&closure.body, &frame)
        },
        Value::Native(native) => {
            if let Some(expected) = native.arity() {
                if expected != args.len() {
                    return Err(ExecError::WrongNumberOfArgs {
                        expected,
                        found: args.len(),
                    });
                }
            }
            trace!(name = native.name(), "calling native");
            native.call(&args)
        },
        other => Err(ExecError::NotCallable(other.clone())),
    }
}
