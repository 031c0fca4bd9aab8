use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper HTML response page
pub fn error_response(err: ServerError) -> Response {
    let status = err.status();

    match &err {
        ServerError::Internal(detail) => tracing::error!("💥 {detail}"),
        other => tracing::debug!("{status} {other}"),
    }

    // Internal details stay in the log.
    let message = match &err {
        ServerError::Internal(_) => "Internal Server Error".to_string(),
        other => other.to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
