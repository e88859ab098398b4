pub mod api;
pub mod catalog;
pub mod config;
pub mod handlers;
pub mod location;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;
pub mod util;
