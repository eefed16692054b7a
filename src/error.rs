use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::core::{ExpressionError, MathError};
use crate::models::ErrorResponse;

/// Errors returned to API clients
///
/// Every variant has a stable kind string (the `error` field of the body)
/// and a free-text message. Clients branch on the kind only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Operation \"{0}\" is not supported")]
    InvalidOperation(String),

    #[error("{0}")]
    Math(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    InvalidExpression(String),

    #[error("{0}")]
    Server(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidOperation(_) => "Invalid operation",
            ApiError::Math(_) => "Math error",
            ApiError::InvalidInput(_) => "Invalid input",
            ApiError::InvalidExpression(_) => "Invalid expression",
            ApiError::Server(_) => "Server error",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        }
    }
}

impl From<MathError> for ApiError {
    fn from(e: MathError) -> Self {
        ApiError::Math(e.to_string())
    }
}

impl From<ExpressionError> for ApiError {
    fn from(e: ExpressionError) -> Self {
        match e {
            ExpressionError::DivisionByZero => ApiError::Math(e.to_string()),
            _ => ApiError::InvalidExpression(e.to_string()),
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "Request failed");
        } else {
            tracing::warn!(kind = self.kind(), error = %self, "Request rejected");
        }

        HttpResponse::build(status).json(self.to_response())
    }
}

/// Map JSON body extraction failures on `/api/calculate` and `/api/special`
///
/// Every field of those bodies accepts any JSON value, so extraction only
/// fails when the body is not a JSON object at all (or cannot be read).
pub fn handle_json_payload_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Server(format!("Invalid request body: {}", err)).into()
}

/// Map JSON body extraction failures on `/api/evaluate`
///
/// A non-string expression or an unreadable body is an invalid expression.
pub fn handle_expression_payload_error(
    err: error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    ApiError::InvalidExpression(format!("Invalid request body: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_kinds_and_statuses() {
        let cases = [
            (ApiError::InvalidOperation("^".into()), "Invalid operation", 400),
            (ApiError::from(MathError::DivisionByZero), "Math error", 400),
            (ApiError::InvalidInput("bad".into()), "Invalid input", 400),
            (ApiError::InvalidExpression("bad".into()), "Invalid expression", 400),
            (ApiError::Server("boom".into()), "Server error", 500),
        ];

        for (err, kind, status) in cases {
            assert_eq!(err.kind(), kind);
            assert_eq!(err.status_code().as_u16(), status);
        }
    }

    #[test]
    fn test_expression_error_mapping() {
        assert_eq!(ApiError::from(ExpressionError::DivisionByZero).kind(), "Math error");
        assert_eq!(ApiError::from(ExpressionError::Empty).kind(), "Invalid expression");
        assert_eq!(
            ApiError::from(ExpressionError::UnknownName("x".into())).kind(),
            "Invalid expression"
        );
    }

    #[test]
    fn test_payload_errors_per_endpoint() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let parse_error = || {
            error::JsonPayloadError::Deserialize(
                serde_json::from_str::<serde_json::Value>("{not json").unwrap_err(),
            )
        };

        let err = handle_json_payload_error(parse_error(), &req);
        assert_eq!(err.as_response_error().status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.as_error::<ApiError>().map(ApiError::kind), Some("Server error"));

        let err = handle_expression_payload_error(parse_error(), &req);
        assert_eq!(err.as_response_error().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.as_error::<ApiError>().map(ApiError::kind), Some("Invalid expression"));
    }

    #[test]
    fn test_invalid_operation_message() {
        let body = ApiError::InvalidOperation("^".into()).to_response();
        assert_eq!(body.error, "Invalid operation");
        assert_eq!(body.message, "Operation \"^\" is not supported");
    }
}
