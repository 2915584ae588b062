use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use godcandle::{
    build_router,
    config::{CheckoutLinks, StoreConfig},
    AppState,
};

const CARD_LINK: &str = "https://buy.stripe.com/test_123";
const CRYPTO_LINK: &str = "https://commerce.coinbase.com/checkout/abc";

fn app_with_links(card: Option<&str>, crypto: Option<&str>) -> Router {
    let config = StoreConfig {
        checkout: CheckoutLinks::from_raw(card, crypto),
        ..StoreConfig::default()
    };
    build_router(Arc::new(AppState::new(config)))
}

fn app() -> Router {
    app_with_links(Some(CARD_LINK), Some(CRYPTO_LINK))
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_storefront_renders_defaults() {
    let response = get(app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("God Candle"));
    assert!(html.contains("$11.10"));
    // The default batch date is in the past, so the countdown sits at zero.
    assert!(html.contains("Batch 2 opens in 0d 0h 0m 0s"));
}

#[tokio::test]
async fn test_storefront_uses_query_selection() {
    let response = get(
        app(),
        "/?quantity=12&region=europe&custom=on&ticker=%24FART&tithing=10&mood=bear",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("$96.74"));
    assert!(html.contains("Custom blessing ($FART)"));
    assert!(html.contains("Summoning the Ultimate Rug Pull"));
}

#[tokio::test]
async fn test_malformed_query_never_rejects() {
    let response = get(app(), "/?quantity=many&tithing=abc&region=moon&payment=paypal").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    // One candle shipped at the rest-of-world rate: 4.20 + 21.90.
    assert!(html.contains("$26.10"));
}

#[tokio::test]
async fn test_quote_api() {
    let response = get(app(), "/api/quote?quantity=4&region=usa").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["total_display"], "28.36");
    assert_eq!(json["selection"]["quantity"], 4);
    assert_eq!(json["selection"]["shipping_region"], "usa");
    let shipping = json["breakdown"]["shipping_cost"].as_f64().unwrap();
    assert!((shipping - 12.90).abs() < 1e-9);
}

#[tokio::test]
async fn test_quote_api_treats_bad_tithing_as_zero() {
    let with_garbage = body_text(get(app(), "/api/quote?tithing=abc").await).await;
    let with_zero = body_text(get(app(), "/api/quote?tithing=0").await).await;
    assert_eq!(with_garbage, with_zero);
}

#[tokio::test]
async fn test_checkout_redirects_card_payments() {
    let response = app()
        .oneshot(form_post("/checkout", "quantity=4&region=usa&payment=usd"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], CARD_LINK);
}

#[tokio::test]
async fn test_checkout_redirects_crypto_payments() {
    let response = app()
        .oneshot(form_post("/checkout", "quantity=1&payment=crypto"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], CRYPTO_LINK);
}

#[tokio::test]
async fn test_unconfigured_checkout_shows_notice() {
    let app = app_with_links(Some(CARD_LINK), Some("#"));
    let response = app
        .oneshot(form_post("/checkout", "quantity=12&region=asia&payment=crypto"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.headers().get(header::LOCATION).is_none());
    let html = body_text(response).await;
    assert!(html.contains("Checkout link is not configured yet"));
    // The page keeps the visitor's selection.
    assert!(html.contains(r#"value="asia" selected"#));
}

#[tokio::test]
async fn test_checkout_api() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/checkout")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"payment_method":"crypto"}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["url"], CRYPTO_LINK);
}

#[tokio::test]
async fn test_checkout_api_unknown_method_uses_card() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/checkout")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"payment_method":"paypal"}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["url"], CARD_LINK);
}

#[tokio::test]
async fn test_checkout_accepts_decimal_tithing() {
    let response = app()
        .oneshot(form_post("/checkout", "quantity=1&tithing=2.5&payment=usd"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], CARD_LINK);
}

#[tokio::test]
async fn test_checkout_api_unconfigured() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/checkout")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"payment_method":"usd"}"#))
        .unwrap();
    let response = app_with_links(None, Some(CRYPTO_LINK)).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(json["error"].as_str().unwrap().contains("not configured"));
}

#[tokio::test]
async fn test_countdown_api() {
    let response = get(app(), "/api/countdown").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["remaining"], "0d 0h 0m 0s");
    assert_eq!(json["target"], "2025-10-01T17:00:00+00:00");
}

#[tokio::test]
async fn test_static_pages() {
    for (uri, heading) in [
        ("/contact", "Contact Us"),
        ("/refunds", "Refund Policy"),
        ("/terms", "Terms of Sale"),
    ] {
        let response = get(app(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert!(body_text(response).await.contains(heading), "{}", uri);
    }
}

#[tokio::test]
async fn test_health_check() {
    let response = get(app(), "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}
