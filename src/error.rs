use thiserror::Error;
use crate::{walker::Value, Ident};

/// A runtime failure. The first of these aborts the whole evaluation and
/// unwinds to the caller; there is no recovery and no partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecError {
    #[error("no such binding '{0}' in scope")]
    NoSuchBinding(Ident),

    #[error("{0} is not callable")]
    NotCallable(Value),

    #[error("wrong number of args: expected {expected}, found {found}")]
    WrongNumberOfArgs { expected: usize, found: usize },

    #[error("cannot apply '{op}' to {operand}")]
    InvalidOperation { op: &'static str, operand: Value },
}
