use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::flash::Flash;

#[derive(Clone)]
pub struct AppState {
    /// Session id -> email of the stub-authenticated visitor.
    pub sessions: Arc<Mutex<HashMap<String, String>>>,
    /// Pending notifications keyed by visitor id, drained on next render.
    pub flash_store: Arc<Mutex<HashMap<String, Vec<Flash>>>>,
    pub api_base_url: String,
    pub public_base_url: String,
    pub client: reqwest::Client,
    pub custom_css: Option<String>,
}

impl AppState {
    /// Whether a remote backend is configured for search/health proxying.
    pub fn has_remote_api(&self) -> bool {
        !self.api_base_url.trim().is_empty()
    }
}
