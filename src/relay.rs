// relay.rs
use crate::catalog::{JsonSource, ProbeError, Product, SIMULATED_SOURCE};
use serde_json::{json, Value};
use std::sync::Arc;

pub const LIVE_SOURCE: &str = "database";

const LIVE_MESSAGE: &str = "Products fetched through the relay";
const SIMULATED_MESSAGE: &str = "Simulated products (upstream unavailable)";

/// Forwards one GET to a fixed upstream so browsers on other origins can read it.
///
/// Always answers with a success envelope. Whether the data is real is only
/// visible through the `source` field.
pub struct Relay {
    source: Arc<dyn JsonSource>,
    upstream_url: String,
    fallback: Vec<Product>,
}

impl Relay {
    pub fn new(source: Arc<dyn JsonSource>, upstream_url: String, fallback: Vec<Product>) -> Self {
        Self {
            source,
            upstream_url,
            fallback,
        }
    }

    pub fn fetch(&self) -> Value {
        match self.forward() {
            Ok(body) => {
                tracing::info!("✅ Relay upstream answered");
                body
            }
            Err(e) => {
                tracing::warn!("❌ Relay upstream failed: {e}");
                self.simulated()
            }
        }
    }

    fn forward(&self) -> Result<Value, ProbeError> {
        tracing::debug!("🔗 Relaying to {}", self.upstream_url);

        let resp = self.source.get_json(&self.upstream_url)?;
        if !resp.is_success() {
            return Err(ProbeError::Status(resp.status));
        }

        let upstream: Value = serde_json::from_str(&resp.body)
            .map_err(|e| ProbeError::MalformedJson(e.to_string()))?;

        let data = upstream
            .get("data")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let message = upstream
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(LIVE_MESSAGE);

        Ok(json!({
            "status": "success",
            "count": data.len(),
            "data": data,
            "message": message,
            "source": LIVE_SOURCE,
            "timestamp": now_rfc3339(),
        }))
    }

    fn simulated(&self) -> Value {
        json!({
            "status": "success",
            "data": self.fallback,
            "count": self.fallback.len(),
            "message": SIMULATED_MESSAGE,
            "source": SIMULATED_SOURCE,
            "timestamp": now_rfc3339(),
        })
    }
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
