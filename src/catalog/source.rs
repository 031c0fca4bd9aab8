// source.rs
use crate::catalog::ProbeError;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Status and body of one GET, before any envelope checks.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can GET a URL and hand back the raw JSON text.
///
/// Only transport failures are errors here. Status codes are returned as-is
/// so the caller decides what counts as usable.
pub trait JsonSource: Send + Sync {
    fn get_json(&self, url: &str) -> Result<RawResponse, ProbeError>;
}

pub struct HttpSource {
    client: Client,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ProbeError::Network(e.to_string()))?;

        Ok(Self { client, timeout })
    }
}

impl JsonSource for HttpSource {
    fn get_json(&self, url: &str) -> Result<RawResponse, ProbeError> {
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| self.classify(e))?;

        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| self.classify(e))?;

        Ok(RawResponse { status, body })
    }
}

impl HttpSource {
    fn classify(&self, err: reqwest::Error) -> ProbeError {
        if err.is_timeout() {
            ProbeError::Timeout(self.timeout.as_secs())
        } else {
            ProbeError::Network(err.to_string())
        }
    }
}
