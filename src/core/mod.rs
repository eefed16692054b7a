// Core computation exports
pub mod arithmetic;
pub mod expression;
pub mod operations;

pub use arithmetic::MathError;
pub use expression::{normalize, Evaluator, Expr, ExpressionError, Function};
pub use operations::{BinaryOperation, SpecialOperation};
