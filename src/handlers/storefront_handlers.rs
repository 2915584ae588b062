use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    response::Html,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::models::order_models::{OrderSelection, SelectionParams};
use crate::pages::landing::{render_landing_page, LandingContext};
use crate::utils::pricing::{quote, PriceBreakdown};
use crate::AppState;

#[derive(Serialize)]
pub struct QuoteResponse {
    pub selection: OrderSelection,
    pub breakdown: PriceBreakdown,
    pub total_display: String,
}

pub fn selection_from_query(query: Option<&str>) -> OrderSelection {
    let params = SelectionParams::from_urlencoded(query.unwrap_or("").as_bytes());
    OrderSelection::from_params(&params)
}

/// Renders the product page for `selection`, optionally with a blocking notice.
pub fn render_storefront(state: &AppState, selection: &OrderSelection, notice: Option<&str>) -> String {
    let breakdown = quote(selection);
    let countdown = state.countdown.current();
    render_landing_page(&LandingContext {
        selection,
        breakdown: &breakdown,
        countdown: &countdown,
        email_list_endpoint: state.config.email_list_endpoint.as_ref(),
        notice,
    })
}

pub async fn storefront_page(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Html<String> {
    let selection = selection_from_query(query.as_deref());
    Html(render_storefront(&state, &selection, None))
}

pub async fn get_quote(RawQuery(query): RawQuery) -> Json<QuoteResponse> {
    let selection = selection_from_query(query.as_deref());
    let breakdown = quote(&selection);
    debug!(
        quantity = selection.quantity,
        region = selection.shipping_region.code(),
        total = breakdown.total,
        "Computed quote"
    );
    Json(QuoteResponse {
        total_display: breakdown.display_total(),
        selection,
        breakdown,
    })
}

pub async fn get_countdown(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "remaining": state.countdown.current(),
        "target": state.countdown.target().to_rfc3339(),
    }))
}

pub async fn health_check() -> &'static str {
    "OK"
}
