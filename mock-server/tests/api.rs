use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, MockApi};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, "Bearer t")
        .body(String::new())
        .unwrap()
}

// --- fixtures ---

#[tokio::test]
async fn serves_registered_fixture() {
    let api = MockApi::new();
    api.respond("GET", "user", 200, Some(r#"{"username":"alice"}"#));

    let resp = app(api).oneshot(empty_request("GET", "/rest/1.0/user")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[http::header::CONTENT_TYPE], "application/json");
    assert_eq!(body_json(resp).await["username"], "alice");
}

#[tokio::test]
async fn bodiless_fixture_sends_no_body() {
    let api = MockApi::new();
    api.respond("DELETE", "torrents/delete/T1", 204, None);

    let resp = app(api)
        .oneshot(empty_request("DELETE", "/rest/1.0/torrents/delete/T1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn fixture_is_method_specific() {
    let api = MockApi::new();
    api.respond("GET", "downloads/delete/X", 204, None);

    let resp = app(api)
        .oneshot(empty_request("DELETE", "/rest/1.0/downloads/delete/X"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_answers_api_error() {
    let resp = app(MockApi::new())
        .oneshot(empty_request("GET", "/rest/1.0/nothing/here"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "unknown_ressource");
    assert_eq!(body["error_code"], 0);
}

#[tokio::test]
async fn outside_prefix_is_not_routed() {
    let resp = app(MockApi::new())
        .oneshot(empty_request("GET", "/user"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

// --- recording ---

#[tokio::test]
async fn records_form_request() {
    let api = MockApi::new();
    api.respond("POST", "unrestrict/check", 200, Some("{}"));

    let req = Request::builder()
        .method("POST")
        .uri("/rest/1.0/unrestrict/check")
        .header(http::header::AUTHORIZATION, "Bearer secret")
        .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("link=x&password=".to_string())
        .unwrap();
    app(api.clone()).oneshot(req).await.unwrap();

    let recorded = api.last_request().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "unrestrict/check");
    assert_eq!(recorded.query, None);
    assert_eq!(recorded.authorization.as_deref(), Some("Bearer secret"));
    assert_eq!(
        recorded.content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(recorded.body_str(), "link=x&password=");
}

#[tokio::test]
async fn records_raw_query() {
    let api = MockApi::new();
    api.respond("GET", "torrents", 200, Some("[]"));

    app(api.clone())
        .oneshot(empty_request(
            "GET",
            "/rest/1.0/torrents?offset=&page=&limit=50&filter=active",
        ))
        .await
        .unwrap();

    let recorded = api.last_request().unwrap();
    assert_eq!(recorded.path, "torrents");
    assert_eq!(
        recorded.query.as_deref(),
        Some("offset=&page=&limit=50&filter=active")
    );
}

#[tokio::test]
async fn records_every_request_in_order() {
    use tower::Service;

    let api = MockApi::new();
    api.respond("GET", "time", 200, Some(r#""2024-01-01 00:00:00""#))
        .respond("GET", "hosts", 200, Some("{}"));
    let mut svc = app(api.clone()).into_service();

    for uri in ["/rest/1.0/time", "/rest/1.0/hosts", "/rest/1.0/missing"] {
        let resp = ServiceExt::ready(&mut svc)
            .await
            .unwrap()
            .call(empty_request("GET", uri))
            .await
            .unwrap();
        let _ = body_bytes(resp).await;
    }

    let paths: Vec<_> = api.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["time", "hosts", "missing"]);
}
