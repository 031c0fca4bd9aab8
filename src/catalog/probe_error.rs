use thiserror::Error;

/// Why a single candidate did not yield products. None of these abort a probe;
/// they are recorded in the attempt log and the next candidate is tried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    #[error("Envelope status was {status:?}: {message}")]
    Rejected { status: String, message: String },

    #[error("Relay served simulated data (source {0:?})")]
    Simulated(String),
}
