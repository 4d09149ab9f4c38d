use axum::http::StatusCode;
use chrono::{Duration, SubsecRound, Utc};
use serde_json::{Value, json};

use crate::helpers::{parse_stamp, profile_body, stamp, system_clock_server, test_app};

#[tokio::test]
async fn should_create_and_fetch_profile() {
    let app = test_app();

    let created = app
        .server
        .post("/profiles")
        .json(&profile_body("u1", "testuser"))
        .await;
    created.assert_status_ok();
    let created: Value = created.json();
    assert_eq!(created["status"], "success");
    assert_eq!(created["data"]["id"], "u1");
    assert_eq!(created["data"]["created_at"], stamp(0));
    assert_eq!(created["data"]["updated_at"], stamp(0));

    let fetched = app.server.get("/profiles/u1").await;
    fetched.assert_status_ok();
    let fetched: Value = fetched.json();
    assert!(fetched.get("status").is_none());
    assert_eq!(fetched["data"], created["data"]);
}

#[tokio::test]
async fn should_default_optional_fields() {
    let app = test_app();

    let resp = app
        .server
        .post("/profiles")
        .json(&json!({"id": "u1", "username": "alice", "usertype": "donor"}))
        .await;
    resp.assert_status_ok();
    let body: Value = resp.json();
    assert_eq!(body["data"]["isverified"], false);
    assert_eq!(body["data"]["locality"], Value::Null);
    assert_eq!(body["data"]["licensenumber"], Value::Null);
    assert_eq!(body["data"]["phone"], Value::Null);
}

#[tokio::test]
async fn should_ignore_caller_supplied_timestamps() {
    let app = test_app();

    let mut body = profile_body("u1", "alice");
    body["created_at"] = json!("1999-01-01T00:00:00Z");
    body["updated_at"] = json!("1999-01-01T00:00:00Z");
    let resp = app.server.post("/profiles").json(&body).await;
    let resp: Value = resp.json();
    assert_eq!(resp["data"]["created_at"], stamp(0));
    assert_eq!(resp["data"]["updated_at"], stamp(0));
}

#[tokio::test]
async fn should_overwrite_on_repeated_create() {
    let app = test_app();

    app.server
        .post("/profiles")
        .json(&profile_body("u1", "first"))
        .await
        .assert_status_ok();
    app.clock.advance(Duration::seconds(5));
    app.server
        .post("/profiles")
        .json(&profile_body("u1", "second"))
        .await
        .assert_status_ok();

    assert_eq!(
        app.state
            .store
            .len(tailmate_mock_api::domain::types::Table::Profiles)
            .unwrap(),
        1
    );
    let fetched: Value = app.server.get("/profiles/u1").await.json();
    assert_eq!(fetched["data"]["username"], "second");
    assert_eq!(fetched["data"]["created_at"], stamp(5));
}

#[tokio::test]
async fn should_replace_profile_and_refresh_updated_at() {
    let app = test_app();

    app.server
        .post("/profiles")
        .json(&profile_body("u1", "alice"))
        .await
        .assert_status_ok();
    app.clock.advance(Duration::seconds(30));

    let mut update = profile_body("u1", "alice");
    update["locality"] = json!("Updated City");
    update["phone"] = Value::Null;
    let resp = app.server.put("/profiles/u1").json(&update).await;
    resp.assert_status_ok();
    let resp: Value = resp.json();
    assert_eq!(resp["status"], "success");
    assert_eq!(resp["data"]["locality"], "Updated City");
    assert_eq!(resp["data"]["phone"], Value::Null);
    assert_eq!(resp["data"]["created_at"], stamp(0));
    assert_eq!(resp["data"]["updated_at"], stamp(30));

    let fetched: Value = app.server.get("/profiles/u1").await.json();
    assert_eq!(fetched["data"], resp["data"]);
}

#[tokio::test]
async fn should_follow_alice_scenario() {
    let app = test_app();

    let resp = app
        .server
        .post("/profiles")
        .json(&json!({"id": "u1", "username": "alice", "usertype": "donor"}))
        .await;
    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>()["data"]["isverified"], false);

    let resp = app
        .server
        .put("/profiles/u1")
        .json(&json!({"id": "u1", "username": "alice2", "usertype": "donor"}))
        .await;
    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>()["data"]["username"], "alice2");

    app.server
        .get("/profiles/u2")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_404_for_unknown_profile() {
    let app = test_app();

    let resp = app.server.get("/profiles/nobody").await;
    resp.assert_status(StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "PROFILE_NOT_FOUND");
    assert_eq!(body["message"], "Profile not found");
}

#[tokio::test]
async fn should_not_create_profile_through_update() {
    let app = test_app();

    app.server
        .put("/profiles/u1")
        .json(&profile_body("u1", "alice"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .get("/profiles/u1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_body_missing_required_field() {
    let app = test_app();

    let resp = app
        .server
        .post("/profiles")
        .json(&json!({"id": "u1", "usertype": "donor"}))
        .await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json();
    assert_eq!(body["kind"], "INVALID_BODY");
    assert!(body["message"].as_str().unwrap().contains("username"));

    app.server
        .get("/profiles/u1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_mistyped_field() {
    let app = test_app();

    let mut body = profile_body("u1", "alice");
    body["isverified"] = json!("yes please");
    app.server
        .post("/profiles")
        .json(&body)
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn should_order_timestamps_under_system_clock() {
    let server = system_clock_server();

    for i in 0..100 {
        let id = format!("u{i}");
        let issued = Utc::now().trunc_subsecs(6);
        let created: Value = server
            .post("/profiles")
            .json(&profile_body(&id, "alice"))
            .await
            .json();
        let created_at = parse_stamp(&created["data"]["created_at"]);
        assert!(created_at >= issued, "created_at {created_at} before {issued}");
        assert_eq!(created["data"]["updated_at"], created["data"]["created_at"]);

        let updated: Value = server
            .put(&format!("/profiles/{id}"))
            .json(&profile_body(&id, "alice2"))
            .await
            .json();
        assert_eq!(updated["data"]["created_at"], created["data"]["created_at"]);
        let updated_at = parse_stamp(&updated["data"]["updated_at"]);
        assert!(
            updated_at > created_at,
            "updated_at {updated_at} not after {created_at}"
        );
    }
}
