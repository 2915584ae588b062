use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::order_models::PaymentMethod;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Checkout link is not configured yet for {} payments", .0.code())]
    CheckoutUnconfigured(PaymentMethod),
    #[error("Invalid value for {var}: {reason}")]
    InvalidConfig { var: &'static str, reason: String },
}

impl StoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::CheckoutUnconfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            StoreError::InvalidConfig { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"error": self.to_string()}))).into_response()
    }
}
