use askama::Template;

use crate::catalog::Province;
use crate::location::{SelectorState, StoredLocation};
use crate::models::{CurrentUser, Flash, Product};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<Flash>,
    pub has_flash_messages: bool,
    pub location: Option<StoredLocation>,
    pub cart_count: usize,
    pub active_tab: String,
    pub show_location_modal: bool,
    pub provinces: &'a [Province],
    pub selector: SelectorState,
    pub products: &'a [Product],
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<Flash>,
    pub has_flash_messages: bool,
    pub location: Option<StoredLocation>,
    pub cart_count: usize,
}

#[derive(Template)]
#[template(path = "account.html")]
pub struct AccountTemplate {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<Flash>,
    pub has_flash_messages: bool,
    pub location: Option<StoredLocation>,
    pub cart_count: usize,
    pub email: String,
}

pub struct CartRow {
    pub name: String,
    pub price_display: String,
    pub quantity: u32,
    pub added_at: String,
}

#[derive(Template)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub current_user: Option<CurrentUser>,
    pub api_hostname: String,
    pub base_url: String,
    pub flash_messages: Vec<Flash>,
    pub has_flash_messages: bool,
    pub location: Option<StoredLocation>,
    pub cart_count: usize,
    pub rows: Vec<CartRow>,
    pub total_display: String,
}
