// src/domain/display.rs

use crate::catalog::{Amount, Product};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceDisplay {
    Regular { price: String },
    Discounted { original: String, sale: String },
}

impl PriceDisplay {
    /// The sale price only counts when both amounts parse and the sale is lower.
    /// The API does not enforce this, so a "sale" at or above list price is shown
    /// as the regular price.
    pub fn for_product(product: &Product, currency: &str) -> Self {
        match &product.sale_price {
            Some(sale) if is_discount(&product.price, sale) => PriceDisplay::Discounted {
                original: with_currency(&product.price, currency),
                sale: with_currency(sale, currency),
            },
            _ => PriceDisplay::Regular {
                price: with_currency(&product.price, currency),
            },
        }
    }

    pub fn is_discounted(&self) -> bool {
        matches!(self, PriceDisplay::Discounted { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockBadge {
    InStock(i64),
    OutOfStock,
}

impl StockBadge {
    pub fn for_stock(stock: i64) -> Self {
        if stock > 0 {
            StockBadge::InStock(stock)
        } else {
            StockBadge::OutOfStock
        }
    }

    pub fn text(&self) -> String {
        match self {
            StockBadge::InStock(n) => format!("🟢 In stock ({n})"),
            StockBadge::OutOfStock => "🔴 Out of stock".to_string(),
        }
    }
}

/// Everything a product card shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub price: PriceDisplay,
    pub stock: StockBadge,
    pub sku: Option<String>,
    pub description: Option<String>,
}

impl CardView {
    pub fn from_product(product: &Product, currency: &str, description_limit: usize) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category().map(str::to_string),
            price: PriceDisplay::for_product(product, currency),
            stock: StockBadge::for_stock(product.stock),
            sku: Some(product.sku.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            description: product
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(|d| truncate_description(d, description_limit)),
        }
    }
}

/// Cuts `text` to at most `limit` characters, ending in an ellipsis when shortened.
/// Counts chars, not bytes, so multi-byte text is never split mid-character.
pub fn truncate_description(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let kept: String = text.chars().take(limit.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

fn is_discount(price: &Amount, sale: &Amount) -> bool {
    match (price.value(), sale.value()) {
        (Some(p), Some(s)) => s < p,
        _ => false,
    }
}

fn with_currency(amount: &Amount, currency: &str) -> String {
    if currency.is_empty() {
        amount.to_string()
    } else {
        format!("{amount} {currency}")
    }
}
