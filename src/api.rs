//! Thin wrappers over the order-management REST API.
//!
//! Every call sends/expects JSON and includes credentials so the backend's
//! auth cookie travels with the request. Responses arrive in a
//! `{ success, message, error, data }` envelope; a `success: false`
//! envelope surfaces as [`ApiError::Rejected`].

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::config;
use crate::model::{NewOrder, OrderStatus, Section, ServicePrices, StatusUpdate};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    // No `default` here: it would put a `T: Default` bound on the derived
    // impl, and serde yields `None` for a missing `Option` field anyway.
    data: Option<T>,
}

fn url(path: &str) -> String {
    format!("{}{}", config::api_base(), path)
}

/// Non-2xx responses carry a `detail` field worth surfacing verbatim.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<ApiResponse<T>, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        #[derive(Deserialize)]
        struct ErrorBody {
            detail: serde_json::Value,
        }
        if let Ok(body) = resp.json::<ErrorBody>().await {
            let detail = match body.detail {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            return Err(ApiError::Rejected(detail));
        }
        return Err(ApiError::Status(status));
    }
    Ok(resp.json().await?)
}

fn require_data<T>(envelope: ApiResponse<T>) -> Result<T, ApiError> {
    if !envelope.success {
        return Err(ApiError::Rejected(rejection_text(
            envelope.error,
            envelope.message,
        )));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Rejected("empty response".to_string()))
}

fn require_success<T>(envelope: ApiResponse<T>) -> Result<String, ApiError> {
    if !envelope.success {
        return Err(ApiError::Rejected(rejection_text(
            envelope.error,
            envelope.message,
        )));
    }
    Ok(envelope.message.unwrap_or_default())
}

fn rejection_text(error: Option<String>, message: Option<String>) -> String {
    error
        .or(message)
        .unwrap_or_else(|| "request rejected".to_string())
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<ApiResponse<T>, ApiError> {
    let resp = Request::post(&url(path))
        .credentials(RequestCredentials::Include)
        .json(body)?
        .send()
        .await?;
    decode(resp).await
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    mobile: &'a str,
    password: &'a str,
}

pub async fn login(mobile: &str, password: &str) -> Result<(), ApiError> {
    let envelope: ApiResponse<serde_json::Value> =
        post_json("/login", &LoginRequest { mobile, password }).await?;
    require_success(envelope).map(|_| ())
}

/// Orders pre-grouped by the backend into status sections, date groups,
/// and time-slot groups.
pub async fn grouped_orders(statuses: &[OrderStatus]) -> Result<Vec<Section>, ApiError> {
    let status_param = statuses
        .iter()
        .map(OrderStatus::as_str)
        .collect::<Vec<_>>()
        .join(",");
    let resp = Request::get(&url("/agentOrdersByStatusGroupByStatusAndDateAndTimeSlot"))
        .query([("order_status", status_param.as_str())])
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    require_data(decode(resp).await?)
}

/// Per-location service price lists, keyed by service location id.
pub async fn service_location_prices() -> Result<HashMap<String, Vec<ServicePrices>>, ApiError> {
    let resp = Request::get(&url("/servicePricesForServiceLocations"))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    require_data(decode(resp).await?)
}

/// Asks the backend to move an order to its next status. The backend
/// validates the transition; we only report its verdict.
pub async fn update_order(update: &StatusUpdate) -> Result<String, ApiError> {
    let envelope: ApiResponse<serde_json::Value> = post_json("/updateOrder", update).await?;
    require_success(envelope)
}

pub async fn create_order(order: &NewOrder) -> Result<String, ApiError> {
    let envelope: ApiResponse<serde_json::Value> = post_json("/createOrder", order).await?;
    require_success(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_success_yields_data() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3]}"#).unwrap();
        assert_eq!(require_data(envelope).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn rejected_envelope_prefers_error_over_message() {
        let envelope: ApiResponse<Vec<u32>> = serde_json::from_str(
            r#"{"success":false,"error":"no slots","message":"ignored"}"#,
        )
        .unwrap();
        match require_data(envelope) {
            Err(ApiError::Rejected(text)) => assert_eq!(text, "no slots"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn success_without_data_is_fine_for_action_calls() {
        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"success":true,"message":"Order updated successfully!"}"#)
                .unwrap();
        assert_eq!(
            require_success(envelope).unwrap(),
            "Order updated successfully!"
        );
    }

    #[test]
    fn envelope_decodes_payloads_without_default_impls() {
        // Section has no Default impl; the envelope must not require one.
        let envelope: ApiResponse<Vec<crate::model::Section>> = serde_json::from_str(
            r#"{"success":true,"data":[{"key":"PICKUP_PENDING","label":"Pickup","dates":[]}]}"#,
        )
        .unwrap();
        let sections = require_data(envelope).unwrap();
        assert_eq!(sections[0].key, "PICKUP_PENDING");

        let empty: ApiResponse<Vec<crate::model::Section>> =
            serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(empty.data.is_none());
    }

    #[test]
    fn missing_data_on_query_calls_is_a_rejection() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(require_data(envelope), Err(ApiError::Rejected(_))));
    }
}
