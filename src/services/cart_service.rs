use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;

use crate::models::cart::{Cart, CART_COOKIE};

const CART_MAX_AGE: Duration = Duration::days(30);

/// Read the cart cookie; anything unreadable is an empty cart.
pub fn cart_from_jar(jar: &CookieJar) -> Cart {
    jar.get(CART_COOKIE)
        .map(|c| Cart::parse(c.value()))
        .unwrap_or_default()
}

pub fn write_cart(jar: CookieJar, cart: &Cart) -> CookieJar {
    // Raw JSON; the jar percent-encodes it on the wire and decodes it back.
    let mut cookie = Cookie::new(CART_COOKIE, cart.serialize());
    cookie.set_path("/");
    cookie.set_max_age(CART_MAX_AGE);
    jar.add(cookie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_the_cookie_jar() {
        let mut cart = Cart::default();
        cart.add("combo-familiar", "Combo Familiar", 39.99);
        let jar = write_cart(CookieJar::new(), &cart);
        let restored = cart_from_jar(&jar);
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.items[0].id, "combo-familiar");
    }

    #[test]
    fn missing_cookie_is_an_empty_cart() {
        assert!(cart_from_jar(&CookieJar::new()).is_empty());
    }
}
