use super::value::{Native, Value};
use crate::error::ExecError;

/// Bindings installed into every fresh engine's global scope.
pub fn prelude() -> Vec<(&'static str, Value)> {
    vec![
        ("+", binary_num("+", |a, b| a + b)),
        ("-", binary_num("-", |a, b| a - b)),
        ("*", binary_num("*", |a, b| a * b)),
    ]
}

fn binary_num(name: &'static str, f: impl Fn(f64, f64) -> f64 + 'static) -> Value {
    Value::Native(Native::new(name, 2, move |args| match args {
        [Value::Num(a), Value::Num(b)] => Ok(Value::Num(f(*a, *b))),
        [Value::Num(_), other] | [other, _] => Err(ExecError::InvalidOperation {
            op: name,
            operand: other.clone(),
        }),
        _ => Err(ExecError::WrongNumberOfArgs {
            expected: 2,
            found: args.len(),
        }),
    }))
}
