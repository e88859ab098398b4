use std::collections::HashMap;

use serde_json::Value;

use crate::api::api_call;
use crate::models::AppState;

/// The three travel search tabs on the home page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    Flights,
    Hotels,
    Cars,
}

impl SearchKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            SearchKind::Flights => "/api/flights/search",
            SearchKind::Hotels => "/api/hotels/search",
            SearchKind::Cars => "/api/cars/search",
        }
    }

    pub fn tab(self) -> &'static str {
        match self {
            SearchKind::Flights => "flights",
            SearchKind::Hotels => "hotels",
            SearchKind::Cars => "cars",
        }
    }

    /// Toast text shown while the search is forwarded.
    pub fn pending_message(self) -> &'static str {
        match self {
            SearchKind::Flights => "Buscando vuelos...",
            SearchKind::Hotels => "Buscando hoteles...",
            SearchKind::Cars => "Buscando autos disponibles...",
        }
    }
}

/// Forward a submitted search form to the remote backend. The remote answer
/// (or error payload) is logged and returned; the page flow only ever shows
/// the pending toast.
pub async fn forward_search(
    state: &AppState,
    kind: SearchKind,
    form: &HashMap<String, String>,
) -> Option<Value> {
    tracing::info!(kind = kind.tab(), ?form, "Search submitted");
    if !state.has_remote_api() {
        return None;
    }
    let payload = serde_json::to_value(form).ok()?;
    let resp = api_call(
        &state.client,
        &state.api_base_url,
        "POST",
        kind.endpoint(),
        Some(payload),
    )
    .await;
    tracing::info!(kind = kind.tab(), response = ?resp, "Search response");
    Some(resp)
}
