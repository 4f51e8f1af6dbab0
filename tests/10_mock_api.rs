mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use gateway_console::mock::SUPPORTED_ENDPOINTS;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["mode"], json!("demo"));
    Ok(())
}

#[tokio::test]
async fn every_supported_endpoint_returns_the_envelope() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for (method, endpoint) in SUPPORTED_ENDPOINTS {
        let method: Method = method.parse()?;
        let url = format!("{}/api/{}", server.base_url, endpoint);

        let mut request = client.request(method.clone(), &url);
        // The two write endpoints need a JSON body
        request = match *endpoint {
            "payment/checkout" => request.json(&json!({ "planId": "plan_starter" })),
            "user/preferences" => request.json(&json!({ "theme": "light" })),
            _ => request,
        };

        let res = request.send().await?;
        assert_eq!(
            res.status(),
            StatusCode::OK,
            "{} {} returned {}",
            method,
            endpoint,
            res.status()
        );

        let body = res.json::<Value>().await?;
        assert_eq!(body["success"], json!(true), "{} {} not successful", method, endpoint);
        assert!(!body["data"].is_null(), "{} {} has no data", method, endpoint);
    }
    Ok(())
}

#[tokio::test]
async fn list_endpoints_carry_pagination_meta() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let body = client
        .get(format!(
            "{}/api/admin/payments?page=2&limit=10",
            server.base_url
        ))
        .send()
        .await?
        .json::<Value>()
        .await?;

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["meta"]["page"], json!(2));
    assert_eq!(body["meta"]["limit"], json!(10));
    assert_eq!(body["meta"]["total"], json!(24));
    assert_eq!(body["meta"]["totalPages"], json!(3));
    assert_eq!(body["data"].as_array().map(Vec::len), Some(10));
    Ok(())
}

#[tokio::test]
async fn unknown_endpoint_yields_a_failure_envelope() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/not/a/thing", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("endpoint not found"));
    Ok(())
}

#[tokio::test]
async fn preference_writes_round_trip_through_the_profile() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let updated = client
        .put(format!("{}/api/user/preferences", server.base_url))
        .json(&json!({ "timezone": "Asia/Tokyo" }))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(updated["success"], json!(true));
    assert_eq!(updated["data"]["timezone"], json!("Asia/Tokyo"));

    let profile = client
        .get(format!("{}/api/user/profile", server.base_url))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(profile["data"]["preferences"]["timezone"], json!("Asia/Tokyo"));
    Ok(())
}
