// templates/pages/home.rs

use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        html! {
            main class="container" style="text-align: center;" {
                h1 style="font-size: 3rem; color: #3b82f6;" { "🚀 Accessories Store" }
                p style="font-size: 1.5rem; color: #6b7280;" { "Phone cases, chargers and audio gear." }

                div style="display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; margin: 2rem 0 4rem;" {
                    a href="/products" class="card" { "Browse products ›" }
                    a href="/api/products" target="_blank" class="card" { "Test the API ›" }
                }

                div class="products-grid" style="max-width: 800px; margin: 0 auto;" {
                    (card("✅ Live catalogue", html! {
                        p { "Products come straight from the store API when it is reachable." }
                    }))
                    (card("✅ Always available", html! {
                        p { "Backup data keeps the shelves stocked when it is not." }
                    }))
                    (card("✅ Cross-origin relay", html! {
                        p { "/api/products relays the upstream catalogue with open CORS headers." }
                    }))
                }
            }
        },
    )
}
