//! Simulated Google Pay checkout.

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, instrument};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Request body for POST /api/google-pay.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayRequest {
    /// The opaque payment token from the Google Pay client. Its contents
    /// are not inspected; only its presence is required.
    #[serde(default)]
    pub payment_data: Option<Value>,
}

/// An empty payload counts as missing: null, `{}`, `[]`, `""`, `0`, and
/// `false` are all rejected, not just an absent field.
fn payment_data_present(data: &Value) -> bool {
    match data {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// POST /api/google-pay
///
/// Simulated checkout: no payment processor is contacted. The cart is
/// emptied and a confirmation is returned. Checking out an empty cart
/// succeeds the same way.
#[instrument(skip(state, identity, request), fields(user = %identity.0))]
pub async fn google_pay(
    State(state): State<AppState>,
    identity: RequireAuth,
    Json(request): Json<GooglePayRequest>,
) -> Result<Json<Value>> {
    if !request
        .payment_data
        .as_ref()
        .is_some_and(payment_data_present)
    {
        return Err(AppError::BadRequest("Payment data is required".to_owned()));
    }

    state.accounts().clear_cart(&identity.0)?;
    info!("Checkout completed");

    Ok(Json(json!({
        "success": true,
        "message": "Payment processed successfully"
    })))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_payloads_count_as_missing() {
        for value in [json!(null), json!({}), json!([]), json!(""), json!(0), json!(false)] {
            assert!(!payment_data_present(&value), "accepted {value}");
        }
    }

    #[test]
    fn test_non_empty_payloads_are_present() {
        for value in [json!({ "token": "opaque" }), json!("tok"), json!(1), json!(true)] {
            assert!(payment_data_present(&value), "rejected {value}");
        }
    }
}
