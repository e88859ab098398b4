use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::catalog;
use crate::location::{confirm_location, SelectEvent, SelectorState};
use crate::models::{AppState, Flash};

use super::helpers::push_flash;

#[derive(Deserialize)]
pub struct ConfirmLocationForm {
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub municipality: String,
}

/// Commit the location choice. Display names are derived from the catalog
/// rather than trusted from the form; an incomplete submission degrades to a
/// plain redirect since the confirm control is disabled until both selections
/// are made.
pub async fn location_confirm(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ConfirmLocationForm>,
) -> impl IntoResponse {
    let province_name = catalog::lookup(&form.province)
        .map(|p| p.name.to_string())
        .unwrap_or_else(|| form.province.clone());

    let mut selector = SelectorState::new();
    selector.on_province_chosen(&SelectEvent::province(form.province.as_str()));
    selector.on_municipality_chosen(&SelectEvent::municipality(form.municipality.as_str()));
    let municipality_label = selector
        .selected_label()
        .map(str::to_string)
        .unwrap_or_else(|| form.municipality.clone());

    match confirm_location(
        jar,
        &form.province,
        &form.municipality,
        &province_name,
        &municipality_label,
    ) {
        Ok(jar) => {
            tracing::info!(
                province = %form.province,
                municipality = %form.municipality,
                "Location updated"
            );
            let jar = push_flash(
                &state,
                jar,
                Flash::success("Ubicación actualizada correctamente"),
            );
            (jar, Redirect::to("/")).into_response()
        }
        Err(e) => {
            tracing::debug!(%e, "Incomplete location submission ignored");
            Redirect::to("/").into_response()
        }
    }
}
