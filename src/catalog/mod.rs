mod fallback;
mod models;
mod probe_error;
mod prober;
mod source;

pub use fallback::sample_products;
pub use models::{Amount, Category, Envelope, Product, ProductId, SIMULATED_SOURCE};
pub use probe_error::ProbeError;
pub use prober::{Attempt, Candidate, DataSource, EndpointProber, FetchOutcome, ProbeReport};
pub use source::{HttpSource, JsonSource, RawResponse};
