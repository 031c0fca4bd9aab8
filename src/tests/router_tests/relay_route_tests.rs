use crate::catalog::SIMULATED_SOURCE;
use crate::router::handle;
use crate::tests::utils::{read_body, test_app, ScriptedSource, GOOD_URL};
use astra::Body;
use http::{Method, Request};
use std::sync::Arc;

fn assert_cors(resp: &astra::Response) {
    let header = |name: &str| {
        resp.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string()
    };

    assert_eq!(header("Access-Control-Allow-Origin"), "*");
    assert_eq!(header("Access-Control-Allow-Methods"), "GET, OPTIONS");
    assert_eq!(header("Access-Control-Allow-Headers"), "Content-Type");
}

#[test]
fn preflight_is_empty_with_cors() {
    let app = test_app(&[GOOD_URL], Arc::new(ScriptedSource::new()));
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/products")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_cors(&resp);
    assert!(read_body(resp).is_empty());
}

#[test]
fn failed_upstream_still_answers_200_with_simulated_source() {
    // No reply scripted for the upstream, so it is unreachable.
    let app = test_app(&[GOOD_URL], Arc::new(ScriptedSource::new()));
    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/products")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_cors(&resp);
    assert_eq!(
        resp.headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let json: serde_json::Value = serde_json::from_str(&read_body(resp)).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["source"], SIMULATED_SOURCE);
}
