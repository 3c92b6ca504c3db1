mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_end_to_end_booking() {
    let app = TestApp::new();

    // 1. Fresh draft defaults to today and is not ready
    let draft = parse_body(app.get("/api/v1/draft").await).await;
    assert_eq!(draft["date"], "2025-06-04");
    assert_eq!(draft["professional"], serde_json::Value::Null);
    assert_eq!(draft["ready"], false);

    // 2. Select professional, service and time
    let res = app.send_json("PUT", "/api/v1/draft/professional", json!({"professional_id": "1"})).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = app.send_json("PUT", "/api/v1/draft/service", json!({"service_id": "2"})).await;
    assert_eq!(res.status(), StatusCode::OK);
    let res = app.send_json("PUT", "/api/v1/draft/time", json!({"time": "09:00"})).await;
    assert_eq!(res.status(), StatusCode::OK);

    let draft = parse_body(res).await;
    assert_eq!(draft["ready"], true);
    assert_eq!(draft["professional"]["name"], "Carlos Silva");
    assert_eq!(draft["service"]["name"], "Degradê/Fade");
    assert_eq!(draft["time"], "09:00");

    // 3. Submit
    let res = app.send_json("POST", "/api/v1/draft/submit", json!({
        "customer_name": "Ana", "customer_phone": "11999999999"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let created = parse_body(res).await;
    assert_eq!(created["id"], "apt-1");
    assert_eq!(created["professional_id"], "1");
    assert_eq!(created["service_id"], "2");
    assert_eq!(created["time"], "09:00");
    assert_eq!(created["date"], "2025-06-04");
    assert_eq!(created["status"], "scheduled");
    assert_eq!(created["professional_name"], "Carlos Silva");

    // 4. Draft is back to defaults
    let draft = parse_body(app.get("/api/v1/draft").await).await;
    assert_eq!(draft["professional"], serde_json::Value::Null);
    assert_eq!(draft["service"], serde_json::Value::Null);
    assert_eq!(draft["time"], serde_json::Value::Null);
    assert_eq!(draft["date"], "2025-06-04");
    assert_eq!(draft["confirming"], false);
    assert_eq!(draft["ready"], false);

    // 5. Appointment is listed
    let list = parse_body(app.get("/api/v1/appointments").await).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["customer_name"], "Ana");
    assert_eq!(list[0]["service_name"], "Degradê/Fade");
}

#[tokio::test]
async fn test_submit_incomplete_is_rejected() {
    let app = TestApp::new();
    app.send_json("PUT", "/api/v1/draft/professional", json!({"professional_id": "1"})).await;

    let res = app.send_json("POST", "/api/v1/draft/submit", json!({
        "customer_name": "Ana", "customer_phone": "11999999999"
    })).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let list = parse_body(app.get("/api/v1/appointments").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_blank_customer_keeps_draft() {
    let app = TestApp::new();
    app.send_json("PUT", "/api/v1/draft/professional", json!({"professional_id": "2"})).await;
    app.send_json("PUT", "/api/v1/draft/service", json!({"service_id": "1"})).await;
    app.send_json("PUT", "/api/v1/draft/time", json!({"time": "11:30"})).await;

    let res = app.send_json("POST", "/api/v1/draft/submit", json!({
        "customer_name": "   ", "customer_phone": "11999999999"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["error"], "Customer name and phone are required");

    let draft = parse_body(app.get("/api/v1/draft").await).await;
    assert_eq!(draft["ready"], true);
    assert_eq!(draft["time"], "11:30");

    let list = parse_body(app.get("/api/v1/appointments").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_confirmation_flag() {
    let app = TestApp::new();

    let res = app.post_empty("/api/v1/draft/confirmation").await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    app.send_json("PUT", "/api/v1/draft/professional", json!({"professional_id": "1"})).await;
    app.send_json("PUT", "/api/v1/draft/service", json!({"service_id": "3"})).await;
    app.send_json("PUT", "/api/v1/draft/time", json!({"time": "08:00"})).await;

    let res = app.post_empty("/api/v1/draft/confirmation").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["confirming"], true);

    let res = app.delete("/api/v1/draft/confirmation").await;
    let draft = parse_body(res).await;
    assert_eq!(draft["confirming"], false);
    assert_eq!(draft["ready"], true);
}

#[tokio::test]
async fn test_reset_restores_defaults() {
    let app = TestApp::new();
    app.send_json("PUT", "/api/v1/draft/professional", json!({"professional_id": "4"})).await;
    app.send_json("PUT", "/api/v1/draft/date", json!({"date": "2025-06-06"})).await;

    let res = app.delete("/api/v1/draft").await;
    assert_eq!(res.status(), StatusCode::OK);
    let draft = parse_body(res).await;
    assert_eq!(draft["professional"], serde_json::Value::Null);
    assert_eq!(draft["date"], "2025-06-04");

    // Idempotent
    let draft = parse_body(app.delete("/api/v1/draft").await).await;
    assert_eq!(draft["ready"], false);
}

#[tokio::test]
async fn test_unknown_catalog_entries_are_not_found() {
    let app = TestApp::new();

    let res = app.send_json("PUT", "/api/v1/draft/professional", json!({"professional_id": "99"})).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.send_json("PUT", "/api/v1/draft/service", json!({"service_id": "99"})).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.send_json("PUT", "/api/v1/draft/date", json!({"date": "06/04/2025"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unavailable_professional_can_still_be_selected() {
    let app = TestApp::new();
    let res = app.send_json("PUT", "/api/v1/draft/professional", json!({"professional_id": "3"})).await;
    assert_eq!(res.status(), StatusCode::OK);
    let draft = parse_body(res).await;
    assert_eq!(draft["professional"]["available"], false);
}
