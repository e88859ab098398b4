use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::catalog;
use crate::location::{needs_selection, SelectEvent, SelectorState};
use crate::models::{AppState, PRODUCTS};
use crate::templates::IndexTemplate;

use super::helpers::{build_template_globals, render_template, TemplateGlobals};

#[derive(Deserialize, Default)]
pub struct IndexQuery {
    pub tab: Option<String>,
    pub province: Option<String>,
    pub municipality: Option<String>,
}

/// Home page. The location modal renders whenever the gate reports no stored
/// selection; `province`/`municipality` query parameters replay the cascading
/// selection so the page works without client-side scripting.
pub async fn index_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(q): Query<IndexQuery>,
) -> impl IntoResponse {
    let mut selector = SelectorState::new();
    if let Some(province) = q.province.as_deref() {
        selector.on_province_chosen(&SelectEvent::province(province));
    }
    if let Some(municipality) = q.municipality.as_deref() {
        selector.on_municipality_chosen(&SelectEvent::municipality(municipality));
    }

    let show_location_modal = needs_selection(&jar) || q.province.is_some();

    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        location,
        cart_count,
    } = build_template_globals(&state, &jar);

    render_template(IndexTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        location,
        cart_count,
        active_tab: q.tab.unwrap_or_else(|| "flights".to_string()),
        show_location_modal,
        provinces: catalog::PROVINCES,
        selector,
        products: PRODUCTS,
    })
}

/// Catch-all: unknown paths fall back to the home page, SPA style.
pub async fn fallback_get(
    state: State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    index_get(state, jar, Query(IndexQuery::default())).await
}
