// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde_json::Value;

/// Any origin may read relay responses.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

fn cors_builder(status: u16) -> ResponseBuilder {
    CORS_HEADERS
        .iter()
        .fold(ResponseBuilder::new().status(status), |b, (k, v)| {
            b.header(*k, *v)
        })
}

pub fn cors_json_response(value: &Value) -> ResultResp {
    let body =
        serde_json::to_string(value).map_err(|e| ServerError::Internal(e.to_string()))?;

    cors_builder(200)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|e| ServerError::Internal(e.to_string()))
}

pub fn cors_preflight_response() -> ResultResp {
    cors_builder(200)
        .body(Body::empty())
        .map_err(|e| ServerError::Internal(e.to_string()))
}
