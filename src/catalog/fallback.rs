use crate::catalog::{Amount, Product, ProductId};

/// Built-in catalogue shown when no endpoint produces usable data.
/// The relay serves the same list when its upstream is down.
pub fn sample_products() -> Vec<Product> {
    vec![
        sample(
            1,
            "iPhone 15 Pro Case - Clear",
            "Clear protective case made for the iPhone 15 Pro",
            "49.99",
            Some("39.99"),
            "CASE-IP15P-REAL",
            50,
            "Cases & Protection",
        ),
        sample(
            2,
            "20W Fast Charger",
            "20W fast charger with PD certification",
            "79.99",
            None,
            "CHG-20W-REAL",
            30,
            "Chargers",
        ),
        sample(
            3,
            "Wireless Bluetooth Earbuds",
            "High quality wireless earbuds",
            "129.99",
            Some("99.99"),
            "EAR-WLS-REAL",
            25,
            "Audio",
        ),
        sample(
            4,
            "Wired Earphone Pouch",
            "A neat pouch that keeps your earphones safe",
            "29.99",
            Some("19.99"),
            "EAR-CASE-REAL",
            100,
            "Accessories",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: i64,
    name: &str,
    description: &str,
    price: &str,
    sale_price: Option<&str>,
    sku: &str,
    stock: i64,
    category: &str,
) -> Product {
    Product {
        id: ProductId::Number(id),
        name: name.to_string(),
        description: Some(description.to_string()),
        price: Amount::new(price),
        sale_price: sale_price.map(Amount::new),
        sku: sku.to_string(),
        stock,
        category_name: Some(category.to_string()),
        category: None,
        created_at: Some("2024-01-15 10:00:00".to_string()),
    }
}
