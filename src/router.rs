use crate::app::App;
use crate::errors::ServerError;
use crate::responses::{
    cors_json_response, cors_preflight_response, html_response, see_other, ResultResp,
};
use crate::storefront::Action;
use crate::templates::pages::{self, ProductsVm};
use astra::Request;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = normalize_path(req.uri().path());

    tracing::debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => html_response(pages::home_page()),

        ("GET", "/products") => {
            let state = app.storefront.dispatch(Action::Mount)?;
            html_response(pages::products_page(&ProductsVm::from_state(
                &state,
                &app.display,
            )))
        }
        ("POST", "/products/retry") => {
            app.storefront.dispatch(Action::Retry)?;
            see_other("/products")
        }

        // Relay
        ("GET", "/api/products") => cors_json_response(&app.relay.fetch()),
        ("OPTIONS", "/api/products") => cors_preflight_response(),

        (_, "/" | "/products" | "/products/retry" | "/api/products") => {
            Err(ServerError::MethodNotAllowed)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// `/products/` and `/products` are the same page.
fn normalize_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
