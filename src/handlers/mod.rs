pub mod auth;
pub mod cart;
pub mod helpers;
pub mod location;
pub mod middleware;
pub mod pages;
pub mod search;
pub mod system;
