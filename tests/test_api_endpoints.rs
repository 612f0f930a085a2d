//! End-to-end checks for the read-only endpoints: crypto query, exchange rates,
//! chat stats, config router and the shared HTTP behaviour (CORS, OPTIONS, 405).

use group_admin_api::{create_router, AppState};
use reqwest::StatusCode;
use serde_json::{json, Value};

const ERC20_ADDRESS: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

/// Starts an isolated server on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let router = create_router(AppState::in_memory());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

async fn get_json(url: &str) -> (StatusCode, Value) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn crypto_query_returns_first_page() {
    let base = spawn_server().await;
    let (status, body) = get_json(&format!(
        "{}/api/crypto-query?chain=ERC20&address={}",
        base, ERC20_ADDRESS
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = &body["data"];
    let total = data["total_transactions"].as_u64().unwrap();
    let page_size = data["page_size"].as_u64().unwrap();
    assert_eq!(page_size, 10);
    assert_eq!(
        data["transactions"].as_array().unwrap().len() as u64,
        page_size.min(total)
    );
    assert_eq!(data["total_pages"].as_u64().unwrap(), (total + 9) / 10);
    assert_eq!(data["chain"], "ERC20");
    assert_eq!(data["balance"], data["balance_usd"]);
}

#[tokio::test]
async fn crypto_query_beyond_last_page_is_empty() {
    let base = spawn_server().await;
    let (status, body) = get_json(&format!(
        "{}/api/crypto-query?chain=erc20&address={}&page=50&page_size=100",
        base, ERC20_ADDRESS
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["transactions"].as_array().unwrap().is_empty());
    assert_eq!(body["data"]["page"], 50);
}

#[tokio::test]
async fn crypto_query_rejects_malformed_address() {
    let base = spawn_server().await;
    let short = &ERC20_ADDRESS[..41];
    let (status, body) = get_json(&format!(
        "{}/api/crypto-query?chain=ERC20&address={}",
        base, short
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("ERC20"));
}

#[tokio::test]
async fn crypto_query_skips_validation_for_unpatterned_chains() {
    let base = spawn_server().await;
    for chain in ["BEP2", "SOL", "BTC"] {
        let (status, body) = get_json(&format!(
            "{}/api/crypto-query?chain={}&address=anything-goes",
            base, chain
        ))
        .await;
        assert_eq!(status, StatusCode::OK, "{}", chain);
        assert_eq!(body["data"]["address"], "anything-goes");
    }
}

#[tokio::test]
async fn crypto_query_parameter_errors() {
    let base = spawn_server().await;

    let (status, body) = get_json(&format!("{}/api/crypto-query?chain=ERC20", base)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required parameter: address");

    let (status, body) =
        get_json(&format!("{}/api/crypto-query?address={}", base, ERC20_ADDRESS)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required parameter: chain");

    let (status, body) = get_json(&format!(
        "{}/api/crypto-query?chain=DOGE&address={}",
        base, ERC20_ADDRESS
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unsupported chain: DOGE");

    let (status, _) = get_json(&format!(
        "{}/api/crypto-query?chain=ERC20&address={}&page=abc",
        base, ERC20_ADDRESS
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn exchange_rates_are_sorted_and_summarized() {
    let base = spawn_server().await;
    let (status, body) = get_json(&format!("{}/api/exchange-rates", base)).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    let parse = |v: &Value| v.as_str().unwrap().parse::<f64>().unwrap();
    let buys: Vec<f64> = data["exchanges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| parse(&q["buy_price"]))
        .collect();
    assert_eq!(buys.len(), 3);
    assert!(buys.windows(2).all(|w| w[0] >= w[1]));
    assert!(parse(&data["highest_buy"]) >= parse(&data["lowest_sell"]));

    let avg = parse(&data["avg_price"]);
    assert!(avg >= buys[2] - 1e-9 && avg <= buys[0] + 1e-9);
    // Four decimal places on the wire.
    assert_eq!(data["avg_price"].as_str().unwrap().split('.').nth(1).unwrap().len(), 4);
}

#[tokio::test]
async fn chat_stats_requires_group_and_paginates() {
    let base = spawn_server().await;

    let (status, body) = get_json(&format!("{}/api/chat-stats", base)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required parameter: group_id");

    let (status, body) = get_json(&format!(
        "{}/api/chat-stats?group_id=-100123&page=1&page_size=5",
        base
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["group_id"], "-100123");
    assert_eq!(body["data"]["daily_activity"].as_array().unwrap().len(), 7);
    assert_eq!(body["data"]["top_members"]["members"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn config_reads_defaults_logs_and_unknown() {
    let base = spawn_server().await;

    let (status, body) = get_json(&format!("{}/api/config/auto-delete", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["delete_after_seconds"], 300);

    let (status, body) = get_json(&format!("{}/api/config/auto-ban/logs?page=4", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({"logs": [], "total": 0, "page": 1, "pageSize": 20})
    );

    let (status, body) = get_json(&format!("{}/api/config/anti-flood", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!({}));
}

#[tokio::test]
async fn config_without_a_type_is_an_empty_object() {
    let base = spawn_server().await;

    for path in ["/api/config", "/api/config/", "/api/config/?group_id=1"] {
        let (status, body) = get_json(&format!("{}{}", base, path)).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert_eq!(body, json!({"success": true, "data": {}}), "{}", path);
    }

    let (status, body) = get_json(&format!("{}/api/config/logs-retention", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({}));
}

#[tokio::test]
async fn config_writes_echo_the_submission() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let submitted = json!({"enabled": true, "delete_after_seconds": 60, "extra": [1, 2]});

    for method in [reqwest::Method::POST, reqwest::Method::PUT] {
        let resp = client
            .request(method, format!("{}/api/config/auto-delete", base))
            .json(&submitted)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Configuration updated");
        assert_eq!(body["data"], submitted);
    }

    // Writes do not persist.
    let (_, body) = get_json(&format!("{}/api/config/auto-delete", base)).await;
    assert_eq!(body["data"]["delete_after_seconds"], 300);

    let resp = client
        .delete(format!("{}/api/config/auto-delete", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn options_and_cors() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    // Plain OPTIONS without preflight headers.
    let resp = client
        .request(reqwest::Method::OPTIONS, format!("{}/api/exchange-rates", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().is_empty());

    // Browser preflight.
    let resp = client
        .request(reqwest::Method::OPTIONS, format!("{}/api/admins", base))
        .header("Origin", "https://console.example")
        .header("Access-Control-Request-Method", "DELETE")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let resp = client
        .get(format!("{}/api/exchange-rates", base))
        .header("Origin", "https://console.example")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn unsupported_method_is_405_envelope() {
    let base = spawn_server().await;
    let resp = reqwest::Client::new()
        .post(format!("{}/api/exchange-rates", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"success": false, "error": "Method not allowed"}));
}

#[tokio::test]
async fn health_reports_ok_with_memory_store() {
    let base = spawn_server().await;
    let (status, body) = get_json(&format!("{}/health", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}
