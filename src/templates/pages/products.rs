use crate::catalog::DataSource;
use crate::config::StorefrontConfig;
use crate::domain::display::CardView;
use crate::storefront::ViewState;
use crate::templates::{desktop_layout, product_card};
use maud::{html, Markup};

pub struct ProductsVm {
    pub cards: Vec<CardView>,
    pub source: Option<DataSource>,
    pub loading: bool,
    pub error: Option<String>,
    pub attempt_log: Vec<String>,
}

impl ProductsVm {
    pub fn from_state(state: &ViewState, cfg: &StorefrontConfig) -> Self {
        Self {
            cards: state
                .products
                .iter()
                .map(|p| CardView::from_product(p, &cfg.currency, cfg.description_limit))
                .collect(),
            source: state.source.clone(),
            loading: state.loading,
            error: state.error.clone(),
            attempt_log: state.attempt_log.clone(),
        }
    }
}

pub fn products_page(vm: &ProductsVm) -> Markup {
    desktop_layout(
        "Products",
        html! {
            main class="container" {
                h1 { "Our Products" }

                div class="source-bar" {
                    @match &vm.source {
                        Some(source @ DataSource::Live { .. }) => {
                            span class="source-live" { "🟢 " (source.label()) }
                        }
                        Some(source @ DataSource::Fallback) => {
                            span class="source-fallback" { "🟠 " (source.label()) }
                        }
                        None => {}
                    }
                    (retry_form(vm.loading))
                }

                @if let Some(error) = &vm.error {
                    div class="notice" role="status" { (error) }
                }

                @if vm.loading {
                    div class="loading" {
                        p { "Loading products…" }
                        a href="/products" { "Refresh" }
                    }
                } @else if vm.cards.is_empty() {
                    div class="loading" { "No products to show." }
                } @else {
                    div class="products-grid" {
                        @for card in &vm.cards {
                            (product_card(card))
                        }
                    }
                }

                @if !vm.attempt_log.is_empty() {
                    details class="attempt-log" {
                        summary { "Connection log" }
                        ol {
                            @for line in &vm.attempt_log {
                                li { (line) }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn retry_form(loading: bool) -> Markup {
    html! {
        form method="post" action="/products/retry" {
            button type="submit" class="btn" disabled[loading] { "🔄 Retry" }
        }
    }
}
