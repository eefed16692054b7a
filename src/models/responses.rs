use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response for `/api/calculate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub result: f64,
    pub operation: String,
    pub num1: f64,
    pub num2: f64,
}

/// Response for `/api/special`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialResponse {
    pub result: f64,
    pub operation: String,
    pub num: f64,
}

/// Response for `/api/evaluate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub result: f64,
    pub expression: String,
}

/// Service description returned from `/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
