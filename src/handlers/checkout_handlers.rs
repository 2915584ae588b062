use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};
use url::Url;

use crate::config::CheckoutLinks;
use crate::error::StoreError;
use crate::handlers::storefront_handlers::render_storefront;
use crate::models::order_models::{OrderSelection, PaymentMethod, SelectionParams};
use crate::AppState;

pub const UNCONFIGURED_NOTICE: &str =
    "Checkout link is not configured yet. Try the other payment method or check back soon.";

/// Unknown or missing methods fall back to card, as the product form does.
#[derive(Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub payment_method: Option<String>,
}

impl CheckoutRequest {
    pub fn method(&self) -> PaymentMethod {
        self.payment_method
            .as_deref()
            .map(PaymentMethod::from_code)
            .unwrap_or_default()
    }
}

/// Picks the external checkout destination for a payment method.
pub fn resolve_checkout_url(method: PaymentMethod, links: &CheckoutLinks) -> Result<Url, StoreError> {
    links
        .for_method(method)
        .cloned()
        .ok_or(StoreError::CheckoutUnconfigured(method))
}

/// Form post from the product page. Leaves the site on success; otherwise
/// re-renders the page with a notice and does not navigate anywhere.
pub async fn checkout(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let selection = OrderSelection::from_params(&SelectionParams::from_urlencoded(&body));
    match resolve_checkout_url(selection.payment_method, &state.config.checkout) {
        Ok(url) => {
            info!(
                payment_method = selection.payment_method.code(),
                quantity = selection.quantity,
                region = selection.shipping_region.code(),
                "Redirecting to checkout provider"
            );
            Redirect::to(url.as_str()).into_response()
        }
        Err(e) => {
            warn!("Checkout blocked: {}", e);
            let page = render_storefront(&state, &selection, Some(UNCONFIGURED_NOTICE));
            (e.status(), Html(page)).into_response()
        }
    }
}

pub async fn create_checkout_link(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<Value>, StoreError> {
    let url = resolve_checkout_url(request.method(), &state.config.checkout).map_err(|e| {
        warn!("Checkout link requested but unavailable: {}", e);
        e
    })?;
    Ok(Json(json!({ "url": url.as_str() })))
}
