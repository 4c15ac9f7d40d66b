//! Router-level tests: requests through the full middleware + handler
//! stack against the in-memory KV store and a stub contact store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use cafe_api_server::{build_router, security::AccessPolicy};
use cafe_core::domain::{ContactSubmission, NewContactSubmission};
use cafe_core::error::DomainError;
use cafe_core::repositories::ContactStore;
use cafe_core::services::{ContactService, MenuService};
use cafe_infrastructure::MemoryKvStore;

const TOKEN: &str = "test-token";

#[derive(Default)]
struct StubContactStore {
    rows: Mutex<Vec<ContactSubmission>>,
}

#[async_trait]
impl ContactStore for StubContactStore {
    async fn insert(
        &self,
        submission: NewContactSubmission,
    ) -> Result<ContactSubmission, DomainError> {
        let stored = ContactSubmission {
            id: Uuid::new_v4(),
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            subject: submission.subject,
            message: submission.message,
            status: submission.status,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_recent(&self) -> Result<Vec<ContactSubmission>, DomainError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

fn test_app() -> Router {
    let menu_service = Arc::new(MenuService::new(Arc::new(MemoryKvStore::new())));
    let contact_service = Arc::new(ContactService::new(Arc::new(StubContactStore::default())));
    let access_policy = Arc::new(AccessPolicy::new(TOKEN.to_string()));
    build_router(menu_service, contact_service, access_policy)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"));
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn breakfast_seed() -> Value {
    json!({
        "menuData": {
            "mainCategory": "eats",
            "categories": [
                {
                    "id": 102,
                    "name": "Soup",
                    "icon": "SoupIcon",
                    "color": "#E67E22",
                    "items": [
                        { "name": "Vegetable Soup", "price": "4,000 RWF" }
                    ]
                },
                {
                    "id": 101,
                    "name": "Breakfast",
                    "icon": "Egg",
                    "color": "#FFB347",
                    "items": [
                        { "name": "Tea", "price": "1000" },
                        { "name": "Coffee", "price": "1500 RWF" }
                    ]
                }
            ]
        }
    })
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn menu_routes_require_bearer_token() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::get("/menu/complete/eats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn unknown_main_category_is_a_bad_request() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/menu/complete/snacks", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("snacks"));
}

#[tokio::test]
async fn initialize_then_complete_menu_is_sorted_and_normalized() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/menu/initialize",
        Some(breakfast_seed()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (status, body) = send(&app, Method::GET, "/menu/complete/eats", None).await;
    assert_eq!(status, StatusCode::OK);

    let menu = body["menu"].as_array().unwrap();
    assert_eq!(menu.len(), 2);
    assert_eq!(menu[0]["id"], json!(101));
    assert_eq!(menu[1]["id"], json!(102));

    let breakfast_items = menu[0]["items"].as_array().unwrap();
    assert_eq!(breakfast_items[0]["name"], json!("Tea"));
    assert_eq!(breakfast_items[0]["price"], json!("1000 RWF"));
    assert_eq!(breakfast_items[1]["price"], json!("1500 RWF"));
    assert_eq!(breakfast_items[1]["order"], json!(1));
}

#[tokio::test]
async fn initialize_rejects_malformed_payload() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/menu/initialize",
        Some(json!({ "menuData": { "mainCategory": "eats" } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid menu data format"));
}

#[tokio::test]
async fn create_and_delete_item_over_http() {
    let app = test_app();
    send(
        &app,
        Method::POST,
        "/menu/initialize",
        Some(breakfast_seed()),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/menu/item",
        Some(json!({
            "mainCategory": "eats",
            "categoryId": 101,
            "name": "Juice",
            "price": "2000"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["order"], json!(2));
    assert_eq!(body["item"]["price"], json!("2000 RWF"));

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/menu/item",
        Some(json!({
            "mainCategory": "eats",
            "categoryId": 101,
            "itemOrder": 0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (_, body) = send(&app, Method::GET, "/menu/items/eats/101", None).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], json!("Coffee"));
    assert_eq!(items[0]["order"], json!(0));
    assert_eq!(items[1]["name"], json!("Juice"));
    assert_eq!(items[1]["order"], json!(1));
}

#[tokio::test]
async fn create_item_with_missing_fields_is_rejected() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/menu/item",
        Some(json!({
            "mainCategory": "eats",
            "categoryId": 101,
            "name": "",
            "price": "2000"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn updating_a_missing_item_is_not_found() {
    let app = test_app();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/menu/item",
        Some(json!({
            "mainCategory": "drinks",
            "categoryId": 201,
            "itemOrder": 4,
            "name": "Ghost",
            "price": "1,000"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_category_over_http() {
    let app = test_app();
    send(
        &app,
        Method::POST,
        "/menu/initialize",
        Some(breakfast_seed()),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/menu/category",
        Some(json!({
            "mainCategory": "eats",
            "categoryId": 101,
            "name": "Early Bird",
            "color": "#FFD700"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"]["name"], json!("Early Bird"));
    assert_eq!(body["category"]["icon"], json!("Egg"));
    assert_eq!(body["category"]["color"], json!("#FFD700"));
}

#[tokio::test]
async fn contact_submit_validates_and_stores() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/contact/submit",
        Some(json!({
            "name": "Alice",
            "email": "not-an-email",
            "subject": "Hello",
            "message": "Hi there"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid email address"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/contact/submit",
        Some(json!({
            "name": "Alice",
            "email": "Alice@Example.com",
            "subject": "Hello",
            "message": "Hi there"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(body["submissionId"].as_str().is_some());

    let (status, body) = send(&app, Method::GET, "/contact/submissions", None).await;
    assert_eq!(status, StatusCode::OK);
    let submissions = body["submissions"].as_array().unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0]["email"], json!("alice@example.com"));
}
