use crate::catalog::{sample_products, EndpointProber, HttpSource, JsonSource, ProbeError};
use crate::config::{AppConfig, StorefrontConfig};
use crate::relay::Relay;
use crate::storefront::Storefront;
use std::sync::Arc;

/// Shared by every worker thread for the life of the server.
pub struct App {
    pub storefront: Storefront,
    pub relay: Relay,
    pub display: StorefrontConfig,
}

impl App {
    /// Wires the real HTTP clients, each with its own timeout.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, ProbeError> {
        let probe_source = Arc::new(HttpSource::new(cfg.probe_timeout())?);
        let relay_source = Arc::new(HttpSource::new(cfg.relay_timeout())?);
        Ok(Self::with_sources(cfg, probe_source, relay_source))
    }

    pub fn with_sources(
        cfg: &AppConfig,
        probe_source: Arc<dyn JsonSource>,
        relay_source: Arc<dyn JsonSource>,
    ) -> Self {
        let prober = EndpointProber::new(
            probe_source,
            cfg.probe.candidates.clone(),
            sample_products(),
        )
        .accept_empty_success(cfg.probe.accept_empty_success);

        let relay = Relay::new(
            relay_source,
            cfg.relay.upstream_url.clone(),
            sample_products(),
        );

        Self {
            storefront: Storefront::new(prober),
            relay,
            display: cfg.storefront.clone(),
        }
    }
}
