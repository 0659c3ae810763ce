//! Expression trees, their canonical order and their rendering

mod ascii;
mod ast;
mod canonical;
mod display;
mod errors;
mod eval;

pub use ast::{Expression, ExpressionKind, Operator, OperatorProfile};
pub use errors::ExpressionError;
