//! End-to-end smoke tests for the full catboxd stack.
//!
//! Each test spins up the complete application (real in-memory store, real
//! service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use catbox_adapter_http_axum::router;
use catbox_adapter_http_axum::state::AppState;
use catbox_adapter_storage_memory::InMemoryCatRepository;
use catbox_app::services::cat_service::CatService;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by a fresh record store.
fn app() -> axum::Router {
    let state = AppState::new(CatService::new(InMemoryCatRepository::new()));
    router::build(state)
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, String) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// Record store round trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_empty_collection_on_fresh_process() {
    let (status, body) = send(&app(), get("/cats/findAll")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!([]));
}

#[tokio::test]
async fn should_list_exactly_the_created_cat() {
    let app = app();

    let (status, body) = send(
        &app,
        with_json("POST", "/cats/create", &json!({"name": "Tom"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({"code": 200, "message": "success"})
    );

    let (status, body) = send(&app, get("/cats/findAll")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!([{"name": "Tom"}])
    );
}

#[tokio::test]
async fn should_return_attributes_in_the_order_received() {
    let app = app();
    send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/cats/create")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Tom","age":3,"breed":"Tabby"}"#))
            .unwrap(),
    )
    .await;

    let (_, body) = send(&app, get("/cats/findAll")).await;
    assert_eq!(body, r#"[{"name":"Tom","age":3,"breed":"Tabby"}]"#);
}

#[tokio::test]
async fn should_keep_creation_order() {
    let app = app();
    for name in ["Tom", "Felix", "Garfield"] {
        send(&app, with_json("POST", "/cats/create", &json!({"name": name}))).await;
    }

    let (_, body) = send(&app, get("/cats/findAll")).await;
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!([{"name": "Tom"}, {"name": "Felix"}, {"name": "Garfield"}])
    );
}

#[tokio::test]
async fn should_not_share_store_between_processes() {
    send(&app(), with_json("POST", "/cats/create", &json!({"name": "Tom"}))).await;

    let (_, body) = send(&app(), get("/cats/findAll")).await;
    assert_eq!(body, "[]");
}

// ---------------------------------------------------------------------------
// Echo and descriptive routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_echo_id_on_test03() {
    let (status, body) = send(&app(), get("/cats/test03/42")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "id=>:42");
}

#[tokio::test]
async fn should_answer_fixed_texts_on_test_routes() {
    let app = app();
    assert_eq!(send(&app, get("/cats/test01?x=1")).await.1, "test01");
    assert_eq!(send(&app, get("/cats/test02/1")).await.1, "param=>:");
    assert_eq!(send(&app, get("/cats/test04?x=1&y=2")).await.1, "test04");
}

#[tokio::test]
async fn should_describe_find_one() {
    let (status, body) = send(&app(), get("/cats/findOne/7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "This action returns a #7 cat");
}

#[tokio::test]
async fn should_describe_update_without_touching_store() {
    let app = app();
    send(&app, with_json("POST", "/cats/create", &json!({"name": "Tom"}))).await;

    let (status, body) = send(
        &app,
        with_json("PUT", "/cats/update/5", &json!({"name": "Felix", "age": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "This action updates a #5 cat");

    let (_, body) = send(&app, get("/cats/findAll")).await;
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!([{"name": "Tom"}])
    );
}

#[tokio::test]
async fn should_describe_update_without_body() {
    let app = app();
    for request in [
        Request::builder()
            .method("PUT")
            .uri("/cats/update/5")
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .method("PUT")
            .uri("/cats/update/5")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("rename please"))
            .unwrap(),
    ] {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "This action updates a #5 cat");
    }

    let (_, body) = send(&app, get("/cats/findAll")).await;
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn should_describe_remove_without_touching_store() {
    let app = app();
    send(&app, with_json("POST", "/cats/create", &json!({"name": "Tom"}))).await;

    let (status, body) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri("/cats/remove/9")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "This action removes a #9 cat");

    let (_, body) = send(&app, get("/cats/findAll")).await;
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!([{"name": "Tom"}])
    );
}

// ---------------------------------------------------------------------------
// Directly written responses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_send_literal_text_on_create01() {
    let (status, body) = send(
        &app(),
        Request::builder()
            .method("POST")
            .uri("/cats/create01")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "kkkkkkkkk");
}

#[tokio::test]
async fn should_send_empty_json_array_on_test05() {
    let (status, body) = send(&app(), get("/cats/test05")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

// ---------------------------------------------------------------------------
// Framework defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_malformed_create_body() {
    let app = app();
    let (status, _) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/cats/create")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, get("/cats/findAll")).await;
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn should_return_not_found_for_unknown_route() {
    let (status, _) = send(&app(), get("/cats/unknown")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
