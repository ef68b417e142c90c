//! List state hook
//!
//! Each list page owns one signal holding its controller's view state. The
//! controller is activated once when the page mounts; navigating back to the
//! page mounts it again and starts a fresh activation.

use leptos::*;
use octofit::dashboard::{Endpoints, ListController};
use octofit::{Entity, ViewState};

use crate::api::GlooFetcher;

/// Activate the controller for `E` and expose its state as a signal
pub fn use_list_state<E: Entity>() -> ReadSignal<ViewState<E>> {
    let endpoints = use_context::<Endpoints>().unwrap_or_default();
    let (state, set_state) = create_signal(ViewState::<E>::Loading);

    create_effect(move |_| {
        let endpoints = endpoints.clone();
        spawn_local(async move {
            let mut controller = ListController::<E, _>::from_endpoints(&endpoints, GlooFetcher);
            let settled = controller.activate().await.clone();

            if let ViewState::Error(message) = &settled {
                web_sys::console::error_1(
                    &format!("Failed to load {}: {}", E::KIND, message).into(),
                );
            }

            // The page may have been left while the request was in flight
            let _ = set_state.try_set(settled);
        });
    });

    state
}
