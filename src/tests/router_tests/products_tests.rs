// src/tests/router_tests/products_tests.rs

use crate::app::App;
use crate::catalog::ProbeError;
use crate::router::handle;
use crate::storefront::Action;
use crate::templates::pages::ProductsVm;
use crate::templates::product_card;
use crate::tests::utils::{
    read_body, test_app, test_config, ReplySequence, ScriptedSource, BAD_URL, GOOD_URL,
    ONE_PRODUCT,
};
use astra::Body;
use http::{Method, Request};
use std::sync::Arc;

fn request(method: Method, uri: &str) -> astra::Request {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn home_page_links_to_products_and_api() {
    let app = test_app(&[GOOD_URL], Arc::new(ScriptedSource::new()));

    let resp = handle(request(Method::GET, "/"), &app).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains(r#"href="/products""#));
    assert!(body.contains(r#"href="/api/products""#));
}

#[test]
fn first_visit_probes_and_renders_live_products() {
    let source = Arc::new(
        ScriptedSource::new()
            .fail(BAD_URL, ProbeError::Timeout(1))
            .ok(GOOD_URL, ONE_PRODUCT),
    );
    let app = test_app(&[BAD_URL, GOOD_URL], source.clone());

    let resp = handle(request(Method::GET, "/products"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("Live data from Endpoint 2"));
    assert!(body.contains("10.00 SAR"));
    assert!(body.contains("Out of stock"));
    assert!(body.contains("Timed out after 1s"));
    assert_eq!(source.calls().len(), 2);
}

#[test]
fn each_visit_renders_current_upstream_data() {
    let source = Arc::new(ReplySequence::new(&[
        r#"{"status":"success","data":[{"id":1,"name":"Old Cable","price":"5.00"}]}"#,
        r#"{"status":"success","data":[{"id":1,"name":"New Cable","price":"6.00"}]}"#,
    ]));
    let app = App::with_sources(&test_config(&[GOOD_URL]), source.clone(), source.clone());

    let first = read_body(handle(request(Method::GET, "/products"), &app).unwrap());
    let second = read_body(handle(request(Method::GET, "/products/"), &app).unwrap());

    assert!(first.contains("Old Cable"));
    assert!(second.contains("New Cable"));
    assert!(!second.contains("Old Cable"));
    assert_eq!(source.calls(), 2);
}

#[test]
fn unreachable_endpoints_render_backup_data() {
    let app = test_app(&[BAD_URL], Arc::new(ScriptedSource::new()));

    let body = read_body(handle(request(Method::GET, "/products"), &app).unwrap());

    assert!(body.contains("Backup data"));
    assert!(body.contains("All 1 endpoints failed; showing backup data"));
    assert!(body.contains("iPhone 15 Pro Case - Clear"));
    assert!(body.contains("Wired Earphone Pouch"));
}

#[test]
fn retry_probes_again_and_redirects() {
    let source = Arc::new(ScriptedSource::new().ok(GOOD_URL, ONE_PRODUCT));
    let app = test_app(&[GOOD_URL], source.clone());

    handle(request(Method::GET, "/products"), &app).unwrap();
    let resp = handle(request(Method::POST, "/products/retry"), &app).unwrap();

    assert_eq!(resp.status(), 303);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/products");
    assert_eq!(source.calls().len(), 2);
}

#[test]
fn refetch_with_same_upstream_renders_same_grid() {
    let source = Arc::new(ScriptedSource::new().ok(GOOD_URL, ONE_PRODUCT));
    let app = test_app(&[GOOD_URL], source);

    let render = |action| {
        let state = app.storefront.dispatch(action).unwrap();
        let vm = ProductsVm::from_state(&state, &app.display);
        let grid: String = vm
            .cards
            .iter()
            .map(|c| product_card(c).into_string())
            .collect();
        (vm.cards, grid)
    };

    let (first_cards, first_grid) = render(Action::Mount);
    let (second_cards, second_grid) = render(Action::Retry);

    assert_eq!(first_cards, second_cards);
    assert_eq!(first_grid, second_grid);
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app(&[GOOD_URL], Arc::new(ScriptedSource::new()));

    let status = |method: Method, uri: &str| match handle(request(method, uri), &app) {
        Ok(resp) => resp.status().as_u16(),
        Err(err) => err.status(),
    };

    assert_eq!(status(Method::GET, "/nope"), 404);
    assert_eq!(status(Method::DELETE, "/products"), 405);
    assert_eq!(status(Method::GET, "/products/retry"), 405);
}

#[test]
fn error_page_carries_status() {
    let resp = crate::responses::error_response(crate::errors::ServerError::NotFound);

    assert_eq!(resp.status(), 404);
    let body = read_body(resp);
    assert!(body.contains("Error 404"));
    assert!(body.contains("Back to home"));
}
