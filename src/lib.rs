use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod handlers {
    pub mod checkout_handlers;
    pub mod page_handlers;
    pub mod storefront_handlers;
}
pub mod models {
    pub mod order_models;
}
pub mod pages {
    pub mod landing;
    pub mod layout;
    pub mod policies;
}
pub mod utils {
    pub mod countdown;
    pub mod pricing;
    pub mod theme;
}

use config::StoreConfig;
use handlers::{checkout_handlers, page_handlers, storefront_handlers};
use utils::countdown::CountdownTicker;

pub struct AppState {
    pub config: StoreConfig,
    pub countdown: CountdownTicker,
}

impl AppState {
    /// Starts the countdown ticker, so it needs a running tokio runtime.
    pub fn new(config: StoreConfig) -> Self {
        let countdown = CountdownTicker::spawn(config.batch_opens_at);
        Self { config, countdown }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes: Router<Arc<AppState>> = Router::new()
        .route("/api/health", get(storefront_handlers::health_check))
        .route("/api/quote", get(storefront_handlers::get_quote))
        .route("/api/countdown", get(storefront_handlers::get_countdown))
        .route("/api/checkout", post(checkout_handlers::create_checkout_link));
    let page_routes: Router<Arc<AppState>> = Router::new()
        .route("/", get(storefront_handlers::storefront_page))
        .route("/checkout", post(checkout_handlers::checkout))
        .route("/contact", get(page_handlers::contact_page))
        .route("/refunds", get(page_handlers::refunds_page))
        .route("/terms", get(page_handlers::terms_page));
    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
