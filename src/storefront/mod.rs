mod state;

pub use state::{reduce, Action, Effect, ViewState};

use crate::catalog::EndpointProber;
use crate::errors::ServerError;
use std::sync::Mutex;

/// Holds the one product page's view state and runs probes on its behalf.
///
/// The reducer runs under the lock; the probe itself does not, so rendering
/// other requests is never blocked on the network.
pub struct Storefront {
    prober: EndpointProber,
    state: Mutex<ViewState>,
}

impl Storefront {
    pub fn new(prober: EndpointProber) -> Self {
        Self {
            prober,
            state: Mutex::new(ViewState::default()),
        }
    }

    /// Applies `action` and, if the reducer asks for it, probes and applies the result.
    /// Returns the state to render.
    pub fn dispatch(&self, action: Action) -> Result<ViewState, ServerError> {
        let (snapshot, effect) = self.apply(action)?;

        match effect {
            Effect::None => Ok(snapshot),
            Effect::Probe => {
                let report = self.prober.probe();
                let (snapshot, _) = self.apply(Action::Resolved(report))?;
                Ok(snapshot)
            }
        }
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> Result<ViewState, ServerError> {
        self.state
            .lock()
            .map(|s| s.clone())
            .map_err(|_| ServerError::Internal("view state lock poisoned".into()))
    }

    fn apply(&self, action: Action) -> Result<(ViewState, Effect), ServerError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ServerError::Internal("view state lock poisoned".into()))?;

        let (next, effect) = reduce(&state, action);
        *state = next.clone();
        Ok((next, effect))
    }
}
