use maud::{html, Markup};

pub mod error;
pub mod product_card;

pub use error::error_page;
pub use product_card::{price_tag, product_card};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
