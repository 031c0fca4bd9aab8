pub mod errors;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;
pub use errors::error_response;

// Normal HTML responses
pub use html::{html_response, see_other};
pub use json::{cors_json_response, cors_preflight_response};
