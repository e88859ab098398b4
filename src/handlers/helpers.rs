use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::location::{stored_location, StoredLocation};
use crate::models::{AppState, CurrentUser, Flash};
use crate::services::{cart_from_jar, random_visitor_id};

const VISITOR_COOKIE: &str = "visitor_id";
const SESSION_COOKIE: &str = "session_id";

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

pub fn current_user_from_jar(state: &AppState, jar: &CookieJar) -> Option<CurrentUser> {
    let sid = session_id_from_jar(jar)?;
    let sessions = state.sessions.lock().unwrap();
    sessions.get(&sid).map(|email| CurrentUser { email: email.clone() })
}

pub fn visitor_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(VISITOR_COOKIE).map(|c| c.value().to_string())
}

/// Return the jar with a visitor-id cookie guaranteed to be present, plus the
/// id itself. Flash messages are keyed by this id.
pub fn ensure_visitor_id(jar: CookieJar) -> (CookieJar, String) {
    if let Some(id) = visitor_id_from_jar(&jar) {
        return (jar, id);
    }
    let id = random_visitor_id();
    let mut cookie = Cookie::new(VISITOR_COOKIE, id.clone());
    cookie.set_path("/");
    (jar.add(cookie), id)
}

/// Queue a notification for the visitor; the returned jar carries the
/// visitor-id cookie when one had to be minted.
pub fn push_flash(state: &AppState, jar: CookieJar, flash: Flash) -> CookieJar {
    let (jar, id) = ensure_visitor_id(jar);
    state
        .flash_store
        .lock()
        .unwrap()
        .entry(id)
        .or_default()
        .push(flash);
    jar
}

pub fn take_flash_messages(state: &AppState, jar: &CookieJar) -> Vec<Flash> {
    let Some(id) = visitor_id_from_jar(jar) else {
        return vec![];
    };
    let mut fs = state.flash_store.lock().unwrap();
    fs.remove(&id).unwrap_or_default()
}

pub struct TemplateGlobals {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<Flash>,
    pub has_flash_messages: bool,
    pub location: Option<StoredLocation>,
    pub cart_count: usize,
}

pub fn build_template_globals(state: &AppState, jar: &CookieJar) -> TemplateGlobals {
    let flash_messages = take_flash_messages(state, jar);
    let has_flash_messages = !flash_messages.is_empty();
    TemplateGlobals {
        current_user: current_user_from_jar(state, jar),
        api_hostname: crate::util::hostname_from_url(&state.api_base_url),
        base_url: state.public_base_url.clone(),
        flash_messages,
        has_flash_messages,
        location: stored_location(jar),
        cart_count: cart_from_jar(jar).len(),
    }
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
