//! Solid Calc - stateless calculator HTTP API
//!
//! This library provides the arithmetic primitives, a self-contained arithmetic
//! expression evaluator and the actix-web routes that expose them as JSON.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use self::core::{BinaryOperation, Evaluator, ExpressionError, MathError, SpecialOperation};
pub use error::ApiError;
pub use models::{CalculationRequest, EvaluateRequest, SpecialRequest};
pub use routes::{configure_routes, AppState};
