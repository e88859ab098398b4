use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use crate::models::{AppState, Flash};
use crate::services::random_session_id;
use crate::templates::{AccountTemplate, LoginTemplate};

use super::helpers::{
    build_template_globals, current_user_from_jar, push_flash, render_template, session_id_from_jar,
    TemplateGlobals,
};

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    #[allow(dead_code)]
    pub password: String,
}

pub async fn login_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if current_user_from_jar(&state, &jar).is_some() {
        return Redirect::to("/account").into_response();
    }
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        location,
        cart_count,
    } = build_template_globals(&state, &jar);
    render_template(LoginTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        location,
        cart_count,
    })
}

/// Stub login: any credentials are accepted, the attempt is logged, and a
/// server-side session cookie is issued.
pub async fn login_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    let email = form.email.trim().to_lowercase();
    tracing::info!(%email, "Login attempt");

    let sid = random_session_id();
    state.sessions.lock().unwrap().insert(sid.clone(), email);
    let mut cookie = Cookie::new("session_id", sid);
    cookie.set_path("/");
    cookie.set_http_only(true);
    let jar = jar.add(cookie);
    let jar = push_flash(&state, jar, Flash::success("Sesión iniciada"));
    (jar, Redirect::to("/account")).into_response()
}

pub async fn logout_post(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(sid) = session_id_from_jar(&jar) {
        state.sessions.lock().unwrap().remove(&sid);
    }
    let cleared = jar.remove(Cookie::new("session_id", ""));
    (cleared, Redirect::to("/")).into_response()
}

pub async fn account_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let Some(user) = current_user_from_jar(&state, &jar) else {
        return Redirect::to("/login").into_response();
    };
    let email = user.email.clone();
    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        location,
        cart_count,
    } = build_template_globals(&state, &jar);
    render_template(AccountTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        location,
        cart_count,
        email,
    })
}
