// Model exports
pub mod requests;
pub mod responses;

pub use requests::{operand_or_zero, CalculationRequest, EvaluateRequest, Operand, SpecialRequest, MAX_EXPRESSION_LENGTH};
pub use responses::{CalculationResponse, ErrorResponse, EvaluateResponse, HealthResponse, IndexResponse, SpecialResponse};
