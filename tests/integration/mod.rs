//! Integration tests for the coaster catalog HTTP API.
//!
//! These drive the public router end to end without binding a socket.

use std::collections::HashSet;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

use coaster_catalog::admin::AdminPortal;
use coaster_catalog::api::{create_router, AppState};
use coaster_catalog::config::Config;

/// Build a router the same way the binary does, from config values.
fn test_app() -> (Router, AppState) {
    let config = Config::from_vars(vec![(
        "ADMIN_PASSWORD".to_string(),
        "integration-secret".to_string(),
    )])
    .unwrap();
    let state = AppState::new(AdminPortal::new(config.admin_password));
    (create_router(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/coasters")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Create, list, fetch by id, and miss on an unknown id.
#[tokio::test]
async fn test_fury_325_scenario() {
    let (app, _) = test_app();

    let (status, body) = send(
        &app,
        post_json(
            r#"{"Name":"Fury 325","Manufacturer":"B&M","InPark":"Carowinds","Height":99}"#
                .to_string(),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: Value = serde_json::from_str(&body).unwrap();
    let id = created["ID"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let (status, body) = send(&app, get("/coasters")).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["Name"], "Fury 325");
    assert_eq!(listed[0]["Manufacturer"], "B&M");
    assert_eq!(listed[0]["InPark"], "Carowinds");
    assert_eq!(listed[0]["Height"], 99);
    assert_eq!(listed[0]["ID"], id.as_str());

    let (status, body) = send(&app, get(&format!("/coasters/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), listed[0]);

    let (status, _) = send(&app, get("/coasters/doesnotexist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Many simultaneous POSTs each get their own id and none are lost.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates() {
    let (app, state) = test_app();

    let tasks: Vec<_> = (0..64)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let body = format!(
                    r#"{{"Name":"ride {i}","Manufacturer":"Intamin","InPark":"Park","Height":{i}}}"#
                );
                let (status, body) = send(&app, post_json(body)).await;
                assert_eq!(status, StatusCode::CREATED);
                let created: Value = serde_json::from_str(&body).unwrap();
                created["ID"].as_str().unwrap().to_string()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for task in tasks {
        ids.insert(task.await.unwrap());
    }

    assert_eq!(ids.len(), 64);
    assert_eq!(state.store.len(), 64);

    let (_, body) = send(&app, get("/coasters")).await;
    let listed: Vec<Value> = serde_json::from_str(&body).unwrap();
    let listed_ids: HashSet<String> = listed
        .iter()
        .map(|c| c["ID"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed_ids, ids);
}

/// Random selection only ever returns stored coasters.
#[tokio::test]
async fn test_random_membership() {
    let (app, _) = test_app();

    let (status, _) = send(&app, get("/coasters/random")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let mut ids = HashSet::new();
    for name in ["Fury 325", "Millennium Force", "Steel Vengeance"] {
        let (_, body) = send(
            &app,
            post_json(format!(r#"{{"Name":"{name}","Height":300}}"#)),
        )
        .await;
        let created: Value = serde_json::from_str(&body).unwrap();
        ids.insert(created["ID"].as_str().unwrap().to_string());
    }

    for _ in 0..20 {
        let (status, body) = send(&app, get("/coasters/random")).await;
        assert_eq!(status, StatusCode::OK);
        let picked: Value = serde_json::from_str(&body).unwrap();
        assert!(ids.contains(picked["ID"].as_str().unwrap()));
    }
}

/// Rejected writes leave the store untouched.
#[tokio::test]
async fn test_rejected_posts_do_not_store() {
    let (app, state) = test_app();

    let wrong_type = Request::builder()
        .method("POST")
        .uri("/coasters")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("Name=Fury"))
        .unwrap();
    let (status, body) = send(&app, wrong_type).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body.contains("application/x-www-form-urlencoded"));

    let (status, _) = send(&app, post_json("[1, 2".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(state.store.is_empty());
}

/// Admin page requires the configured password.
#[tokio::test]
async fn test_admin_access() {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    let (app, _) = test_app();

    let (status, _) = send(&app, get("/admin")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let authed = |pair: &str| {
        Request::builder()
            .uri("/admin")
            .header(header::AUTHORIZATION, format!("Basic {}", STANDARD.encode(pair)))
            .body(Body::empty())
            .unwrap()
    };

    let (status, body) = send(&app, authed("admin:wrong")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(!body.contains("integration-secret"));

    let (status, body) = send(&app, authed("admin:integration-secret")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Super secret admin portal"));
}
