//! Administrator list lifecycle and settings pass-through, including bearer gating
//! and the porn-detection config read that goes through the settings store.

use group_admin_api::{create_router, AppState};
use reqwest::StatusCode;
use serde_json::{json, Value};

const TOKEN: &str = "Bearer console-session";

async fn spawn_server() -> String {
    let router = create_router(AppState::in_memory());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

async fn admin_count(client: &reqwest::Client, base: &str) -> usize {
    let body: Value = client
        .get(format!("{}/api/admins", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let admins = body["data"]["admins"].as_array().unwrap();
    assert_eq!(body["data"]["total"].as_u64().unwrap() as usize, admins.len());
    admins.len()
}

#[tokio::test]
async fn add_then_delete_restores_admin_list() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let before = admin_count(&client, &base).await;
    assert_eq!(before, 2);

    let resp = client
        .post(format!("{}/api/admins", base))
        .header("Authorization", TOKEN)
        .json(&json!({"user_id": 555, "username": "new_mod", "role": "moderator"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Administrator added");
    assert_eq!(body["data"]["role"], "moderator");
    let id = body["data"]["id"].as_u64().unwrap();
    assert_eq!(admin_count(&client, &base).await, before + 1);

    let resp = client
        .delete(format!("{}/api/admins/{}", base, id))
        .header("Authorization", TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(admin_count(&client, &base).await, before);

    let resp = client
        .delete(format!("{}/api/admins/{}", base, id))
        .header("Authorization", TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn servers_do_not_share_admin_state() {
    let a = spawn_server().await;
    let b = spawn_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/api/admins", a))
        .header("Authorization", TOKEN)
        .json(&json!({"user_id": 1}))
        .send()
        .await
        .unwrap();

    assert_eq!(admin_count(&client, &a).await, 3);
    assert_eq!(admin_count(&client, &b).await, 2);
}

#[tokio::test]
async fn admin_mutations_require_bearer_token() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/admins", base))
        .json(&json!({"user_id": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "error": "Unauthorized"}));

    let resp = client
        .delete(format!("{}/api/admins/1", base))
        .header("Authorization", "Bearer ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(admin_count(&client, &base).await, 2);
}

#[tokio::test]
async fn admin_input_errors() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/admins", base))
        .header("Authorization", TOKEN)
        .json(&json!({"username": "nobody"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Missing required parameter: user_id");

    let resp = client
        .post(format!("{}/api/admins", base))
        .header("Authorization", TOKEN)
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = client
        .delete(format!("{}/api/admins/abc", base))
        .header("Authorization", TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn settings_crud_round_trip() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let group = format!("{}/api/settings/-100777", base);

    let resp = client.get(&group).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = client
        .put(&group)
        .header("Authorization", TOKEN)
        .json(&json!({"welcome_message": "hi", "auto-ban": {"enabled": true}}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["message"], "Settings updated");
    assert_eq!(body["data"]["welcome_message"], "hi");

    let body: Value = client
        .put(format!("{}/welcome_message", group))
        .header("Authorization", TOKEN)
        .json(&json!({"value": "hello"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"], json!({"key": "welcome_message", "value": "hello"}));

    let body: Value = client
        .get(format!("{}/welcome_message", group))
        .header("Authorization", TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["value"], "hello");

    let body: Value = client
        .delete(format!("{}/welcome_message", group))
        .header("Authorization", TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["deleted"], true);

    let body: Value = client
        .get(format!("{}/welcome_message", group))
        .header("Authorization", TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["value"], Value::Null);

    let body: Value = client
        .get(&group)
        .header("Authorization", TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"], json!({"auto-ban": {"enabled": true}}));
}

#[tokio::test]
async fn settings_reject_non_object_bodies_and_missing_value() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{}/api/settings/-1", base))
        .header("Authorization", TOKEN)
        .json(&json!([1, 2, 3]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = client
        .put(format!("{}/api/settings/-1/key", base))
        .header("Authorization", TOKEN)
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Missing required parameter: value");
}

#[tokio::test]
async fn porn_detection_config_reads_through_settings() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let stored = json!({"enabled": true, "sensitivity": "high", "action": "ban"});

    client
        .put(format!("{}/api/settings/-100555/porn-detection", base))
        .header("Authorization", TOKEN)
        .json(&json!({ "value": stored }))
        .send()
        .await
        .unwrap();

    let body: Value = client
        .get(format!("{}/api/config/porn-detection?group_id=-100555", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"], stored);

    let body: Value = client
        .get(format!("{}/api/config/porn-detection?group_id=-100999", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["enabled"], false);
    assert_eq!(body["data"]["sensitivity"], "medium");
}
