//! End-to-end API tests
//!
//! Drives the real router against an in-memory store, one fresh store per
//! test.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use tower::ServiceExt;

use surf_store::api::build_app;
use surf_store::core::{Config, ServerState};
use surf_store::db::models::Order;

async fn mem_db() -> Surreal<Any> {
    let db = any::connect("mem://").await.expect("mem store");
    db.use_ns("store")
        .use_db("surfstore")
        .await
        .expect("select db");
    db
}

fn test_config() -> Config {
    Config {
        database_url: Some("mem://".to_string()),
        database_name: Some("surfstore".to_string()),
        http_port: 0,
    }
}

async fn test_app() -> (Router, Surreal<Any>) {
    let db = mem_db().await;
    let state = ServerState::new(test_config(), Some(db.clone()));
    (build_app().with_state(state), db)
}

/// App with no store configured at all
fn storeless_app() -> Router {
    let config = Config {
        database_url: None,
        database_name: None,
        http_port: 0,
    };
    let state = ServerState::new(config, None);
    build_app().with_state(state)
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

async fn seed(app: &Router) -> Value {
    let (status, body) = request(app, "POST", "/seed", None).await;
    assert_eq!(status, StatusCode::OK);
    body
}

async fn product_by_title(app: &Router, title: &str) -> Value {
    let (status, products) = request(app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    products
        .as_array()
        .expect("array")
        .iter()
        .find(|p| p["title"] == title)
        .cloned()
        .expect("seeded product")
}

fn order_payload(product_id: &str, title: &str, quantity: i64) -> Value {
    json!({
        "items": [{
            "product_id": product_id,
            "title": title,
            "price": 29.0,
            "size": "M",
            "color": "white",
            "quantity": quantity
        }],
        "subtotal": 29.0 * quantity as f64,
        "shipping": 5.0,
        "total": 29.0 * quantity as f64 + 5.0,
        "customer": {
            "name": "Kai",
            "email": "kai@example.com",
            "address": "1 Beach Rd"
        }
    })
}

#[tokio::test]
async fn root_reports_liveness() {
    let (app, _db) = test_app().await;
    let (status, body) = request(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Surf Shirts Store Backend is running");
}

#[tokio::test]
async fn seed_inserts_three_then_short_circuits() {
    let (app, _db) = test_app().await;

    let first = seed(&app).await;
    assert_eq!(first["seeded"], true);
    assert_eq!(first["count"], 3);

    let second = seed(&app).await;
    assert_eq!(second["seeded"], false);
    assert_eq!(second["message"], "Products already exist");

    let (status, products) = request(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(products.as_array().expect("array").len(), 3);
}

#[tokio::test]
async fn seed_without_store_is_server_error() {
    let app = storeless_app();
    let (status, body) = request(&app, "POST", "/seed", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Database not configured");
}

#[tokio::test]
async fn listed_products_round_trip_through_get_by_id() {
    let (app, _db) = test_app().await;
    seed(&app).await;

    let (_, products) = request(&app, "GET", "/products", None).await;
    for listed in products.as_array().expect("array") {
        let id = listed["id"].as_str().expect("string id");
        assert!(id.starts_with("product:"), "plain string id, got {id}");

        let (status, fetched) = request(&app, "GET", &format!("/products/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&fetched, listed);
    }
}

#[tokio::test]
async fn malformed_id_is_distinct_from_missing() {
    let (app, _db) = test_app().await;
    seed(&app).await;

    let (status, body) = request(&app, "GET", "/products/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid product id");

    let (status, body) = request(&app, "GET", "/products/product:doesnotexist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn featured_returns_only_featured_products() {
    let (app, _db) = test_app().await;
    seed(&app).await;

    let (status, featured) = request(&app, "GET", "/products/featured", None).await;
    assert_eq!(status, StatusCode::OK);
    let featured = featured.as_array().expect("array");
    assert_eq!(featured.len(), 2);
    assert!(featured.len() <= 6);
    assert!(featured.iter().all(|p| p["featured"] == true));
}

#[tokio::test]
async fn valid_order_is_received_and_decrements_stock() {
    let (app, _db) = test_app().await;
    seed(&app).await;

    let product = product_by_title(&app, "Sunset Barrel Tee").await;
    let id = product["id"].as_str().expect("id");
    assert_eq!(product["stock_count"], 80);

    let (status, receipt) =
        request(&app, "POST", "/orders", Some(order_payload(id, "Sunset Barrel Tee", 2))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["status"], "received");
    assert!(
        receipt["id"].as_str().expect("order id").starts_with("order:"),
        "order id should be a plain string"
    );

    let (_, after) = request(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(after["stock_count"], 78);
}

#[tokio::test]
async fn insufficient_stock_names_product_and_writes_nothing() {
    let (app, db) = test_app().await;
    seed(&app).await;

    let product = product_by_title(&app, "Reef Break Tee").await;
    let id = product["id"].as_str().expect("id");

    let (status, body) =
        request(&app, "POST", "/orders", Some(order_payload(id, "Reef Break Tee", 10_000))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Insufficient stock for Reef Break Tee");

    // No order document was created and stock is untouched
    let orders: Vec<Order> = db.select("order").await.expect("select orders");
    assert!(orders.is_empty());

    let (_, after) = request(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(after["stock_count"], 40);
}

#[tokio::test]
async fn order_with_malformed_product_id_names_the_id() {
    let (app, _db) = test_app().await;
    seed(&app).await;

    let (status, body) =
        request(&app, "POST", "/orders", Some(order_payload("abc", "Sunset Barrel Tee", 1))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid product id: abc");
}

#[tokio::test]
async fn order_for_missing_product_names_the_id() {
    let (app, _db) = test_app().await;
    seed(&app).await;

    let (status, body) = request(
        &app,
        "POST",
        "/orders",
        Some(order_payload("product:nope", "Ghost Tee", 1)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found: product:nope");
}

#[tokio::test]
async fn invalid_order_payload_is_unprocessable() {
    let (app, _db) = test_app().await;
    seed(&app).await;

    let product = product_by_title(&app, "Aqua Lineup Tee").await;
    let id = product["id"].as_str().expect("id");

    // Bad email
    let mut payload = order_payload(id, "Aqua Lineup Tee", 1);
    payload["customer"]["email"] = json!("not-an-email");
    let (status, _) = request(&app, "POST", "/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Negative total
    let mut payload = order_payload(id, "Aqua Lineup Tee", 1);
    payload["total"] = json!(-1.0);
    let (status, _) = request(&app, "POST", "/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Missing required field
    let mut payload = order_payload(id, "Aqua Lineup Tee", 1);
    payload.as_object_mut().expect("object").remove("customer");
    let (status, _) = request(&app, "POST", "/orders", Some(payload)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was written
    let (_, after) = request(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(after["stock_count"], 60);
}

#[tokio::test]
async fn test_endpoint_reports_working_store() {
    let (app, _db) = test_app().await;
    seed(&app).await;

    let (status, body) = request(&app, "GET", "/test", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "✅ Set");
    assert_eq!(body["connection_status"], "Connected");
    let collections = body["collections"].as_array().expect("array");
    assert!(collections.iter().any(|c| c.as_str() == Some("product")));
    assert!(collections.len() <= 10);
}

#[tokio::test]
async fn test_endpoint_never_fails_without_store() {
    let app = storeless_app();

    let (status, body) = request(&app, "GET", "/test", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "❌ Not Available");
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"].as_array().expect("array").len(), 0);
}
