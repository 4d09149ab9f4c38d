use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{donation_body, stamp, test_app};

fn ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap().to_owned())
        .collect()
}

#[tokio::test]
async fn should_create_donation_request_with_defaults() {
    let app = test_app();

    let resp = app
        .server
        .post("/donation_requests")
        .json(&donation_body("d1", "u1"))
        .await;
    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["title"], "Test Donation");
    assert_eq!(body["data"]["amount"], 100.0);
    assert_eq!(body["data"]["fulfilled"], false);
    assert_eq!(body["data"]["created_at"], stamp(0));
}

#[tokio::test]
async fn should_list_all_without_filter() {
    let app = test_app();

    app.server
        .get("/donation_requests")
        .await
        .assert_json(&json!({"data": []}));

    for (id, user) in [("d1", "u1"), ("d2", "u2")] {
        app.server
            .post("/donation_requests")
            .json(&donation_body(id, user))
            .await
            .assert_status_ok();
    }

    let body: Value = app.server.get("/donation_requests").await.json();
    let mut all = ids(&body);
    all.sort();
    assert_eq!(all, vec!["d1", "d2"]);
}

#[tokio::test]
async fn should_filter_by_user_id() {
    let app = test_app();

    for (id, user) in [("d1", "u1"), ("d2", "u2"), ("d3", "u1")] {
        app.server
            .post("/donation_requests")
            .json(&donation_body(id, user))
            .await
            .assert_status_ok();
    }

    let body: Value = app
        .server
        .get("/donation_requests")
        .add_query_param("user_id", "u1")
        .await
        .json();
    let mut mine = ids(&body);
    mine.sort();
    assert_eq!(mine, vec!["d1", "d3"]);

    let body: Value = app
        .server
        .get("/donation_requests")
        .add_query_param("user_id", "u3")
        .await
        .json();
    assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn should_treat_empty_user_id_as_unfiltered() {
    let app = test_app();

    app.server
        .post("/donation_requests")
        .json(&donation_body("d1", "u1"))
        .await
        .assert_status_ok();

    let body: Value = app.server.get("/donation_requests?user_id=").await.json();
    assert_eq!(ids(&body), vec!["d1"]);
}

#[tokio::test]
async fn should_patch_only_fulfilled() {
    let app = test_app();

    let created: Value = app
        .server
        .post("/donation_requests")
        .json(&donation_body("d1", "u1"))
        .await
        .json();

    let resp = app
        .server
        .put("/donation_requests/d1")
        .json(&json!({"fulfilled": true}))
        .await;
    resp.assert_status_ok();
    let patched: Value = resp.json();
    assert_eq!(patched["status"], "success");

    let mut expected = created["data"].clone();
    expected["fulfilled"] = json!(true);
    assert_eq!(patched["data"], expected);

    let listed: Value = app
        .server
        .get("/donation_requests")
        .add_query_param("user_id", "u1")
        .await
        .json();
    assert_eq!(listed["data"][0], expected);
}

#[tokio::test]
async fn should_return_404_when_patching_unknown_donation() {
    let app = test_app();

    let resp = app
        .server
        .put("/donation_requests/missing")
        .json(&json!({"fulfilled": true}))
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["message"], "Donation request not found");
}

#[tokio::test]
async fn should_reject_update_without_fulfilled() {
    let app = test_app();

    app.server
        .post("/donation_requests")
        .json(&donation_body("d1", "u1"))
        .await
        .assert_status_ok();

    app.server
        .put("/donation_requests/d1")
        .json(&json!({"title": "renamed"}))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn should_reject_non_numeric_amount() {
    let app = test_app();

    let mut body = donation_body("d1", "u1");
    body["amount"] = json!("a lot");
    app.server
        .post("/donation_requests")
        .json(&body)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    app.server
        .get("/donation_requests")
        .await
        .assert_json(&json!({"data": []}));
}
