use serde::{Deserialize, Serialize};

pub const CART_COOKIE: &str = "cubalink23_cart";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub added_at: String,
}

/// The visitor's cart as persisted in the `cubalink23_cart` cookie.
/// A missing or unreadable cookie is simply an empty cart.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str::<Vec<CartItem>>(raw)
            .map(|items| Cart { items })
            .unwrap_or_default()
    }

    pub fn serialize(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn add(&mut self, id: &str, name: &str, price: f64) {
        self.items.push(CartItem {
            id: id.to_string(),
            name: name.to_string(),
            price,
            quantity: 1,
            added_at: chrono::Utc::now().to_rfc3339(),
        });
    }

    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.price * f64::from(i.quantity))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// USD price formatting for templates and CLI output.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_cookie_degrades_to_empty_cart() {
        assert!(Cart::parse("not json").is_empty());
        assert!(Cart::parse("").is_empty());
        assert!(Cart::parse("{\"weird\":true}").is_empty());
    }

    #[test]
    fn add_then_roundtrip() {
        let mut cart = Cart::default();
        cart.add("recarga-10", "Recarga Cubacel 10 USD", 10.0);
        cart.add("combo-1", "Combo Familiar", 39.99);
        let restored = Cart::parse(&cart.serialize());
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.items[1].name, "Combo Familiar");
        assert!((restored.total() - 49.99).abs() < 1e-9);
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(10.0), "$10.00");
        assert_eq!(format_price(39.994), "$39.99");
    }
}
