use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Longest expression accepted by `/api/evaluate`, in characters
pub const MAX_EXPRESSION_LENGTH: u64 = 1000;

/// A numeric field as clients send it
///
/// JSON numbers are taken as-is, strings are parsed as floats after trimming
/// whitespace and booleans count as 1 or 0. Any other JSON value is kept so
/// that coercion can report it as invalid input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Number(f64),
    Text(String),
    Flag(bool),
    Other(Value),
}

impl Operand {
    /// Coerce to `f64`, returning the offending text when it is not numeric
    pub fn to_f64(&self) -> Result<f64, String> {
        match self {
            Operand::Number(value) => Ok(*value),
            Operand::Text(text) => text.trim().parse::<f64>().map_err(|_| text.clone()),
            Operand::Flag(flag) => Ok(if *flag { 1.0 } else { 0.0 }),
            Operand::Other(value) => Err(value.to_string()),
        }
    }
}

/// Coerce an optional operand, treating an absent (or `null`) field as zero
pub fn operand_or_zero(operand: Option<&Operand>) -> Result<f64, String> {
    operand.map_or(Ok(0.0), Operand::to_f64)
}

/// Request for a two-operand calculation
///
/// `operation` is any JSON value; only known symbol strings resolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub num1: Option<Operand>,
    #[serde(default)]
    pub num2: Option<Operand>,
    #[serde(default)]
    pub operation: Option<Value>,
}

/// Request for a single-operand operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecialRequest {
    #[serde(default)]
    pub num: Option<Operand>,
    #[serde(default)]
    pub operation: Option<Value>,
}

/// Request to evaluate a free-form expression
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EvaluateRequest {
    #[validate(length(max = MAX_EXPRESSION_LENGTH))]
    #[serde(default)]
    pub expression: String,
}
