//! List-view controller
//!
//! Drives the `Loading -> Error | Ready` lifecycle for one collection.

use serde_json::Value;

use super::endpoints::Endpoints;
use super::error::FetchError;
use super::fetch::Fetcher;
use super::normalize::normalize;
use super::state::ViewState;
use crate::model::Entity;

/// Ticket handed out by [`ListController::begin`].
///
/// Only the ticket of the most recent activation may settle the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    generation: u64,
}

/// Owns fetch lifecycle and view state for one entity collection
pub struct ListController<E, F> {
    endpoint: String,
    fetcher: F,
    state: ViewState<E>,
    generation: u64,
    pending: Option<u64>,
}

impl<E: Entity, F: Fetcher> ListController<E, F> {
    /// Create a controller for `endpoint`. Starts in `Loading`.
    pub fn new(endpoint: impl Into<String>, fetcher: F) -> Self {
        Self {
            endpoint: endpoint.into(),
            fetcher,
            state: ViewState::Loading,
            generation: 0,
            pending: None,
        }
    }

    /// Create a controller for the collection of `E` in `endpoints`
    pub fn from_endpoints(endpoints: &Endpoints, fetcher: F) -> Self {
        Self::new(endpoints.url_for(E::KIND), fetcher)
    }

    pub fn state(&self) -> &ViewState<E> {
        &self.state
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Enter `Loading` and open a new activation
    pub fn begin(&mut self) -> Activation {
        self.generation += 1;
        self.pending = Some(self.generation);
        self.state = ViewState::Loading;

        Activation {
            generation: self.generation,
        }
    }

    /// Settle the activation with a fetch outcome.
    ///
    /// Returns `false` and leaves the state alone when `activation` is not the
    /// open one (superseded, or already settled).
    pub fn complete(
        &mut self,
        activation: Activation,
        outcome: Result<Value, FetchError>,
    ) -> bool {
        if self.pending != Some(activation.generation) {
            tracing::debug!(
                endpoint = %self.endpoint,
                generation = activation.generation,
                "Discarding stale response"
            );
            return false;
        }

        self.pending = None;
        self.state = resolve(outcome);
        true
    }

    /// Run one full activation: `begin`, fetch, `complete`
    pub async fn activate(&mut self) -> &ViewState<E> {
        let activation = self.begin();

        tracing::debug!(kind = %E::KIND, url = %self.endpoint, "Fetching collection");
        let outcome = self.fetcher.get_json(&self.endpoint).await;

        if let Err(e) = &outcome {
            tracing::warn!(kind = %E::KIND, error = %e, "Failed to fetch collection");
        }

        self.complete(activation, outcome);
        &self.state
    }
}

/// Map a fetch outcome to the state it settles in
pub fn resolve<E: Entity>(outcome: Result<Value, FetchError>) -> ViewState<E> {
    match outcome {
        Ok(payload) => ViewState::Ready(decode_items(payload)),
        Err(e) => ViewState::Error(e.to_string()),
    }
}

/// Normalize a payload and decode its items.
///
/// Only items that are not JSON objects are skipped. Fields inside an object
/// decode leniently, so a record never disappears over one bad field.
pub fn decode_items<E: Entity>(payload: Value) -> Vec<E> {
    normalize(payload)
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                tracing::warn!(kind = %E::KIND, index, "Skipping non-object item");
                return None;
            }
            match serde_json::from_value::<E>(item) {
                Ok(entity) => Some(entity),
                Err(e) => {
                    tracing::warn!(kind = %E::KIND, index, error = %e, "Skipping malformed item");
                    None
                }
            }
        })
        .collect()
}
