use std::collections::HashMap;

use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, Flash};
use crate::services::{forward_search, SearchKind};

use super::helpers::push_flash;

async fn handle_search(
    state: AppState,
    jar: CookieJar,
    kind: SearchKind,
    form: HashMap<String, String>,
) -> axum::response::Response {
    forward_search(&state, kind, &form).await;
    let jar = push_flash(&state, jar, Flash::info(kind.pending_message()));
    let target = format!("/?tab={}", kind.tab());
    (jar, Redirect::to(&target)).into_response()
}

pub async fn flights_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    handle_search(state, jar, SearchKind::Flights, form).await
}

pub async fn hotels_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    handle_search(state, jar, SearchKind::Hotels, form).await
}

pub async fn cars_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    handle_search(state, jar, SearchKind::Cars, form).await
}

/// Contact form: logged and acknowledged, nothing is sent anywhere.
pub async fn contact_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    tracing::info!(?form, "Contact form submitted");
    let jar = push_flash(
        &state,
        jar,
        Flash::success("Mensaje enviado correctamente. Te contactaremos pronto."),
    );
    (jar, Redirect::to("/")).into_response()
}
