use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::pages::policies::{render_contact, render_refunds, render_terms};
use crate::AppState;

pub async fn contact_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_contact(&state.config.contact_email))
}

pub async fn refunds_page() -> Html<String> {
    Html(render_refunds())
}

pub async fn terms_page() -> Html<String> {
    Html(render_terms())
}
