use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::models::cart::format_price;
use crate::models::{find_product, AppState, Flash};
use crate::services::{cart_from_jar, write_cart};
use crate::templates::{CartRow, CartTemplate};

use super::helpers::{build_template_globals, push_flash, render_template, TemplateGlobals};

pub async fn cart_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let cart = cart_from_jar(&jar);
    let rows = cart
        .items
        .iter()
        .map(|i| CartRow {
            name: i.name.clone(),
            price_display: format_price(i.price),
            quantity: i.quantity,
            added_at: i.added_at.clone(),
        })
        .collect();
    let total_display = format_price(cart.total());

    let TemplateGlobals {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        location,
        cart_count,
    } = build_template_globals(&state, &jar);

    render_template(CartTemplate {
        current_user,
        api_hostname,
        base_url,
        flash_messages,
        has_flash_messages,
        location,
        cart_count,
        rows,
        total_display,
    })
}

#[derive(Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

pub async fn cart_add(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<AddToCartForm>,
) -> impl IntoResponse {
    let Some(product) = find_product(&form.product_id) else {
        tracing::warn!(product_id = %form.product_id, "Unknown product in add-to-cart");
        return Redirect::to("/").into_response();
    };

    let mut cart = cart_from_jar(&jar);
    cart.add(product.id, product.name, product.price);
    tracing::info!(product_id = product.id, items = cart.len(), "Added to cart");

    let jar = write_cart(jar, &cart);
    let jar = push_flash(
        &state,
        jar,
        Flash::success(format!("{} agregado al carrito", product.name)),
    );
    (jar, Redirect::to("/")).into_response()
}
