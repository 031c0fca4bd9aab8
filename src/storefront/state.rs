use crate::catalog::{DataSource, ProbeReport, Product};

/// Everything the product page renders from. Only `reduce` produces new values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub products: Vec<Product>,
    pub source: Option<DataSource>,
    pub loading: bool,
    pub error: Option<String>,
    pub attempt_log: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A page load. Every load fetches fresh products.
    Mount,
    /// Shopper pressed "Retry".
    Retry,
    Resolved(ProbeReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Probe,
}

pub fn reduce(state: &ViewState, action: Action) -> (ViewState, Effect) {
    match action {
        Action::Mount => {
            if state.loading {
                return (state.clone(), Effect::None);
            }
            let next = ViewState {
                loading: true,
                ..state.clone()
            };
            (next, Effect::Probe)
        }

        // A load or retry while a probe is in flight would race it for the state.
        Action::Retry => {
            if state.loading {
                return (state.clone(), Effect::None);
            }
            let next = ViewState {
                loading: true,
                error: None,
                ..state.clone()
            };
            (next, Effect::Probe)
        }

        Action::Resolved(report) => {
            let error = match &report.source {
                DataSource::Fallback => Some(format!(
                    "All {} endpoints failed; showing backup data",
                    report.failures()
                )),
                DataSource::Live { .. } => None,
            };

            let next = ViewState {
                source: Some(report.source),
                attempt_log: report.attempts.iter().map(|a| a.summary()).collect(),
                products: report.products,
                loading: false,
                error,
            };
            (next, Effect::None)
        }
    }
}
