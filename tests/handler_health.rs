mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::default_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["registry"]["status"], "ok");
    assert_eq!(json["checks"]["registry"]["message"], "2 links");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::make_server(common::create_empty_state());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();

    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json.get("started_at").is_some());
    assert!(json["uptime_seconds"].as_i64().unwrap() >= 0);
    assert_eq!(json["checks"]["registry"]["message"], "0 links");
}
