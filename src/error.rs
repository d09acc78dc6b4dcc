use axum::{http::StatusCode, response::Json};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Restaurant not found")]
    RestaurantNotFound,
    #[error("{0} not found")]
    MissingReference(&'static str),
    #[error("Validation failed")]
    Validation(Vec<String>),
    #[error(transparent)]
    Database(#[from] diesel::result::Error),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            // Single-restaurant lookups report a scalar error field
            ApiError::RestaurantNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Restaurant not found" }),
            ),
            // Reference checks on offering creation report an error list
            ApiError::MissingReference(entity) => (
                StatusCode::NOT_FOUND,
                json!({ "errors": [format!("{entity} not found")] }),
            ),
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": errors }))
            }
            ApiError::Database(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": format!("Database error: {err}") }),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}
