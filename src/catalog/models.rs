use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// `source` tag a relay puts on canned data it made up because its upstream failed.
pub const SIMULATED_SOURCE: &str = "database_simulation";

// envelope
//  ├── status        "success" | anything else
//  ├── data[]        product
//  │    ├── id, name, description
//  │    ├── price, sale_price     "49.99" | 49.99 | null
//  │    ├── sku
//  │    ├── stock                 "50" | 50
//  │    └── category_name | category.name
//  ├── count
//  ├── message
//  └── source        "database" | "database_simulation" (relay only)

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(default)]
    pub data: Option<Vec<Product>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    pub fn is_simulated(&self) -> bool {
        self.source.as_deref() == Some(SIMULATED_SOURCE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Amount,
    #[serde(default)]
    pub sale_price: Option<Amount>,
    #[serde(default)]
    pub sku: String,
    #[serde(default, deserialize_with = "lenient_stock")]
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Product {
    /// Flat `category_name` wins over the nested `category.name`.
    pub fn category(&self) -> Option<&str> {
        self.category_name
            .as_deref()
            .or_else(|| self.category.as_ref().and_then(|c| c.name.as_deref()))
            .filter(|name| !name.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A price for display. String prices are kept verbatim; numeric ones are
/// written with two decimals. Parsed on demand for comparisons.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn value(&self) -> Option<f64> {
        self.0.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Amount(s),
            Raw::Int(n) => Amount(format!("{n}.00")),
            Raw::Float(f) => Amount(format!("{f:.2}")),
        })
    }
}

/// Stock arrives as `"50"`, `50`, or `null`. Anything unparseable counts as zero.
fn lenient_stock<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(n)) => n,
        Some(Raw::Float(f)) => f as i64,
        Some(Raw::Text(s)) => s.trim().parse().unwrap_or(0),
        None => 0,
    })
}
