use crate::domain::display::{CardView, PriceDisplay, StockBadge};
use maud::{html, Markup};

pub fn product_card(card: &CardView) -> Markup {
    html! {
        div class="product-card" data-product-id=(card.id) {
            div class="product-image" {
                @if card.price.is_discounted() {
                    span class="sale-badge" { "Sale" }
                }
                "📱"
            }

            div class="product-info" {
                h3 class="product-name" { (card.name) }
                @if let Some(category) = &card.category {
                    p class="product-category" { (category) }
                }

                (price_tag(&card.price))

                @if let Some(description) = &card.description {
                    p class="product-description" { (description) }
                }

                div class="product-meta" {
                    (stock_badge(card.stock))
                    @if let Some(sku) = &card.sku {
                        span class="sku" { "SKU: " (sku) }
                    }
                }
            }
        }
    }
}

pub fn price_tag(price: &PriceDisplay) -> Markup {
    html! {
        div class="product-price" {
            @match price {
                PriceDisplay::Discounted { original, sale } => {
                    span class="current-price" { (sale) }
                    s class="old-price" { (original) }
                }
                PriceDisplay::Regular { price } => {
                    span class="current-price" { (price) }
                }
            }
        }
    }
}

pub fn stock_badge(stock: StockBadge) -> Markup {
    let class = match stock {
        StockBadge::InStock(_) => "stock in-stock",
        StockBadge::OutOfStock => "stock out-of-stock",
    };

    html! {
        span class=(class) { (stock.text()) }
    }
}
