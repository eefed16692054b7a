use actix_web::{web, HttpResponse};
use serde_json::Value;
use validator::Validate;

use crate::core::{normalize, BinaryOperation, Evaluator, SpecialOperation};
use crate::error::ApiError;
use crate::models::{
    operand_or_zero, CalculationRequest, CalculationResponse, EvaluateRequest, EvaluateResponse,
    Operand, SpecialRequest, SpecialResponse, MAX_EXPRESSION_LENGTH,
};

/// Application state shared across all handlers
///
/// Read-only: handlers never mutate it, so it is shared without locks.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub evaluator: Evaluator,
}

/// Configure all calculation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/calculate", web::post().to(calculate))
        .route("/special", web::post().to(special_operation))
        .service(
            web::resource("/evaluate")
                .app_data(super::expression_json_config())
                .route(web::post().to(evaluate)),
        );
}

fn coerce(operand: Option<&Operand>) -> Result<f64, ApiError> {
    operand_or_zero(operand).map_err(|text| {
        ApiError::InvalidInput(format!("Please provide valid numbers (got \"{}\")", text))
    })
}

/// Look up the `operation` field, echoing what was sent when it is unknown
///
/// Absent, `null` and non-string values never match an operation.
fn resolve<T>(
    operation: Option<&Value>,
    lookup: impl Fn(&str) -> Option<T>,
) -> Result<(T, String), ApiError> {
    match operation {
        Some(Value::String(name)) => lookup(name)
            .map(|op| (op, name.clone()))
            .ok_or_else(|| ApiError::InvalidOperation(name.clone())),
        Some(other) => Err(ApiError::InvalidOperation(other.to_string())),
        None => Err(ApiError::InvalidOperation(String::new())),
    }
}

/// Basic calculation endpoint
///
/// POST /api/calculate
///
/// Request body:
/// ```json
/// {
///   "num1": 5,
///   "num2": 3,
///   "operation": "+|-|*|×|/|÷|%"
/// }
/// ```
async fn calculate(req: web::Json<CalculationRequest>) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();

    // Operands first: a bad number wins over a bad operation
    let num1 = coerce(req.num1.as_ref())?;
    let num2 = coerce(req.num2.as_ref())?;

    let (operation, symbol) = resolve(req.operation.as_ref(), BinaryOperation::from_symbol)?;
    let result = operation.apply(num1, num2)?;

    tracing::debug!("calculate: {} {} {} = {}", num1, symbol, num2, result);

    Ok(HttpResponse::Ok().json(CalculationResponse {
        result,
        operation: symbol,
        num1,
        num2,
    }))
}

/// Special operation endpoint
///
/// POST /api/special
///
/// Request body:
/// ```json
/// {
///   "num": 9,
///   "operation": "sqrt|square|reciprocal"
/// }
/// ```
async fn special_operation(req: web::Json<SpecialRequest>) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let num = coerce(req.num.as_ref())?;

    let (operation, name) = resolve(req.operation.as_ref(), SpecialOperation::from_name)?;
    let result = operation.apply(num)?;

    tracing::debug!("special: {}({}) = {}", name, num, result);

    Ok(HttpResponse::Ok().json(SpecialResponse {
        result,
        operation: name,
        num,
    }))
}

/// Expression evaluation endpoint
///
/// POST /api/evaluate
///
/// The echoed expression has `×` and `÷` already replaced by `*` and `/`.
async fn evaluate(
    state: web::Data<AppState>,
    req: web::Json<EvaluateRequest>,
) -> Result<HttpResponse, ApiError> {
    if req.validate().is_err() {
        return Err(ApiError::InvalidExpression(format!(
            "Expression exceeds {} characters",
            MAX_EXPRESSION_LENGTH
        )));
    }

    let expression = normalize(&req.expression);
    let result = state.evaluator.evaluate(&expression)?;

    tracing::debug!("evaluate: {} = {}", expression, result);

    Ok(HttpResponse::Ok().json(EvaluateResponse { result, expression }))
}
