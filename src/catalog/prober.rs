// prober.rs
use crate::catalog::{Envelope, JsonSource, ProbeError, Product, RawResponse};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

/// One endpoint to try, with the name shown to shoppers when it answers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    pub url: String,
    pub label: String,
}

impl Candidate {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}

/// Where the products on screen came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Live { label: String },
    Fallback,
}

impl DataSource {
    pub fn is_live(&self) -> bool {
        matches!(self, DataSource::Live { .. })
    }

    pub fn label(&self) -> String {
        match self {
            DataSource::Live { label } => format!("Live data from {label}"),
            DataSource::Fallback => "Backup data".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    LiveSuccess { count: usize },
    EmptySuccess,
    Failed(ProbeError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    pub label: String,
    pub url: String,
    pub outcome: FetchOutcome,
    pub elapsed_ms: u128,
}

impl Attempt {
    pub fn summary(&self) -> String {
        match &self.outcome {
            FetchOutcome::LiveSuccess { count } => {
                format!("✅ {}: {count} products ({} ms)", self.label, self.elapsed_ms)
            }
            FetchOutcome::EmptySuccess => {
                format!("⚪ {}: empty product list ({} ms)", self.label, self.elapsed_ms)
            }
            FetchOutcome::Failed(e) => {
                format!("⚠️ {}: {e} ({} ms)", self.label, self.elapsed_ms)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub products: Vec<Product>,
    pub source: DataSource,
    pub attempts: Vec<Attempt>,
}

impl ProbeReport {
    /// Attempts that did not end the probe. A live report's last attempt is the winner.
    pub fn failures(&self) -> usize {
        let tried = self.attempts.len();
        if self.source.is_live() {
            tried.saturating_sub(1)
        } else {
            tried
        }
    }
}

/// Walks the candidate list in order and stops at the first usable envelope.
pub struct EndpointProber {
    source: Arc<dyn JsonSource>,
    candidates: Vec<Candidate>,
    fallback: Vec<Product>,
    accept_empty_success: bool,
}

impl EndpointProber {
    pub fn new(
        source: Arc<dyn JsonSource>,
        candidates: Vec<Candidate>,
        fallback: Vec<Product>,
    ) -> Self {
        Self {
            source,
            candidates,
            fallback,
            accept_empty_success: false,
        }
    }

    /// When set, `{status: "success", data: []}` ends the probe with an empty live list
    /// instead of moving on to the next candidate.
    pub fn accept_empty_success(mut self, accept: bool) -> Self {
        self.accept_empty_success = accept;
        self
    }

    pub fn probe(&self) -> ProbeReport {
        let mut attempts = Vec::with_capacity(self.candidates.len());

        for candidate in &self.candidates {
            tracing::debug!("🔗 Trying {} ({})", candidate.label, candidate.url);

            let start = Instant::now();
            let result = self.fetch_products(candidate);
            let elapsed_ms = start.elapsed().as_millis();

            let (outcome, products) = match result {
                Ok(products) if products.is_empty() => (FetchOutcome::EmptySuccess, products),
                Ok(products) => (
                    FetchOutcome::LiveSuccess {
                        count: products.len(),
                    },
                    products,
                ),
                Err(e) => (FetchOutcome::Failed(e), Vec::new()),
            };

            let accepted = match outcome {
                FetchOutcome::LiveSuccess { .. } => true,
                FetchOutcome::EmptySuccess => self.accept_empty_success,
                FetchOutcome::Failed(_) => false,
            };

            let attempt = Attempt {
                label: candidate.label.clone(),
                url: candidate.url.clone(),
                outcome,
                elapsed_ms,
            };

            if accepted {
                tracing::info!("{}", attempt.summary());
                attempts.push(attempt);
                return ProbeReport {
                    products,
                    source: DataSource::Live {
                        label: candidate.label.clone(),
                    },
                    attempts,
                };
            }

            tracing::warn!("{}", attempt.summary());
            attempts.push(attempt);
        }

        tracing::warn!(
            "❌ All {} endpoints failed, serving backup data",
            self.candidates.len()
        );

        ProbeReport {
            products: self.fallback.clone(),
            source: DataSource::Fallback,
            attempts,
        }
    }

    fn fetch_products(&self, candidate: &Candidate) -> Result<Vec<Product>, ProbeError> {
        let resp = self.source.get_json(&candidate.url)?;
        let envelope = parse_envelope(&resp)?;

        if !envelope.is_success() {
            return Err(ProbeError::Rejected {
                status: envelope.status,
                message: envelope.message.unwrap_or_default(),
            });
        }

        // A relay's stand-in data is not live, whatever the status says.
        if envelope.is_simulated() {
            return Err(ProbeError::Simulated(envelope.source.unwrap_or_default()));
        }

        Ok(envelope.data.unwrap_or_default())
    }
}

/// Status check plus JSON decode. The envelope's own `status` is left to the caller.
fn parse_envelope(resp: &RawResponse) -> Result<Envelope, ProbeError> {
    if !resp.is_success() {
        return Err(ProbeError::Status(resp.status));
    }

    serde_json::from_str::<Envelope>(&resp.body).map_err(|e| ProbeError::MalformedJson(e.to_string()))
}
