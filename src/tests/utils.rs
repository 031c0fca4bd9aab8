use crate::app::App;
use crate::catalog::{Candidate, JsonSource, ProbeError, RawResponse};
use crate::config::{
    AppConfig, LoggingConfig, ProbeConfig, RelayConfig, ServerConfig, StorefrontConfig,
};
use astra::Response;
use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};

pub const GOOD_URL: &str = "http://good.test/api/products";
pub const BAD_URL: &str = "http://bad.test/api/products";
pub const UPSTREAM_URL: &str = "http://upstream.test/api/real-products";

pub const ONE_PRODUCT: &str =
    r#"{"status":"success","data":[{"id":1,"name":"X","price":"10.00"}]}"#;
pub const EMPTY_SUCCESS: &str = r#"{"status":"success","data":[],"count":0}"#;

/// Canned replies per URL. Unknown URLs fail like an unreachable host.
#[derive(Default)]
pub struct ScriptedSource {
    replies: HashMap<String, Result<RawResponse, ProbeError>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(self, url: &str, body: &str) -> Self {
        self.status(url, 200, body)
    }

    pub fn status(mut self, url: &str, status: u16, body: &str) -> Self {
        self.replies.insert(
            url.to_string(),
            Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
        );
        self
    }

    pub fn fail(mut self, url: &str, err: ProbeError) -> Self {
        self.replies.insert(url.to_string(), Err(err));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl JsonSource for ScriptedSource {
    fn get_json(&self, url: &str) -> Result<RawResponse, ProbeError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.replies
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(ProbeError::Network("no route to host".into())))
    }
}

/// Answers every URL with the next body in line, repeating the last one.
pub struct ReplySequence {
    bodies: Vec<String>,
    calls: Mutex<usize>,
}

impl ReplySequence {
    pub fn new(bodies: &[&str]) -> Self {
        Self {
            bodies: bodies.iter().map(|b| b.to_string()).collect(),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl JsonSource for ReplySequence {
    fn get_json(&self, _url: &str) -> Result<RawResponse, ProbeError> {
        let mut calls = self.calls.lock().unwrap();
        let idx = (*calls).min(self.bodies.len().saturating_sub(1));
        *calls += 1;
        Ok(RawResponse {
            status: 200,
            body: self.bodies[idx].clone(),
        })
    }
}

pub fn candidates(urls: &[&str]) -> Vec<Candidate> {
    urls.iter()
        .enumerate()
        .map(|(i, url)| Candidate::new(*url, format!("Endpoint {}", i + 1)))
        .collect()
}

pub fn test_config(urls: &[&str]) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            addr: "127.0.0.1:0".into(),
            max_workers: 1,
        },
        logging: LoggingConfig {
            level: "debug".into(),
        },
        probe: ProbeConfig {
            candidates: candidates(urls),
            timeout_secs: 1,
            accept_empty_success: false,
        },
        relay: RelayConfig {
            upstream_url: UPSTREAM_URL.into(),
            timeout_secs: 1,
        },
        storefront: StorefrontConfig {
            currency: "SAR".into(),
            description_limit: 120,
        },
    }
}

/// App wired to one scripted source for both the prober and the relay.
pub fn test_app(urls: &[&str], source: Arc<ScriptedSource>) -> App {
    App::with_sources(&test_config(urls), source.clone(), source)
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}
