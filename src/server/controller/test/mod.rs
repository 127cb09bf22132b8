use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router, state::AppState};


/// Builds the application over a fresh migrated in-memory database.
///
/// The context is returned alongside the router so the connection outlives the test.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap().clone();
    let app = router::app(AppState::new(db));
    (test, app)
}

/// Sends a request and returns status, headers and the JSON body (`Null` when empty).
async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, headers, body)
}

/// A many-side request body that passes every schema rule.
fn recipe(name: &str, fk_neve: i32) -> Value {
    json!({
        "name": name,
        "description": "Layered pasta with ricotta",
        "isGlutenFree": false,
        "enumExample": "Tea",
        "minMaxExample": 2,
        "customValidatorExample": 10,
        "dateExample": (Utc::now() + Duration::days(2)).to_rfc3339(),
        "FK_neve": fk_neve,
    })
}
