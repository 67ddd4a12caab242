//! Cart State
//!
//! Single source of truth for cart contents. Totals are derived values and
//! are recomputed by every mutation before it returns.

use crate::models::Product;

/// One cart line
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub unit_price: f64,
    pub image: String,
    quantity: u32,
    line_total: f64,
}

impl CartItem {
    fn new(product: &Product) -> Self {
        let mut item = Self {
            id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            quantity: 1,
            line_total: 0.0,
        };
        item.recompute();
        item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// quantity × unit price
    pub fn line_total(&self) -> f64 {
        self.line_total
    }

    fn recompute(&mut self) {
        self.line_total = self.quantity as f64 * self.unit_price;
    }
}

/// Cart contents in insertion (display) order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Vec<CartItem>,
    total_items: u32,
    total_price: f64,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product; an existing line is incremented instead of duplicated
    pub fn add_item(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(existing) => {
                existing.quantity += 1;
                existing.recompute();
            }
            None => self.items.push(CartItem::new(product)),
        }
        self.recompute_totals();
    }

    /// Change a line's quantity by `delta`; a result below 1 removes the line.
    /// Unknown ids are ignored.
    pub fn adjust_quantity(&mut self, id: &str, delta: i32) {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return;
        };
        let next = self.items[pos].quantity as i64 + delta as i64;
        if next < 1 {
            self.items.remove(pos);
        } else {
            let item = &mut self.items[pos];
            item.quantity = next as u32;
            item.recompute();
        }
        self.recompute_totals();
    }

    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
        self.recompute_totals();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute_totals();
    }

    fn recompute_totals(&mut self) {
        self.total_items = self.items.iter().map(|item| item.quantity).sum();
        self.total_price = self.items.iter().map(|item| item.line_total).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "candles".to_string(),
            price,
            image: format!("img/{}.jpg", id),
            description: String::new(),
        }
    }

    fn assert_consistent(cart: &CartState) {
        let qty: u32 = cart.items().iter().map(|i| i.quantity()).sum();
        let price: f64 = cart.items().iter().map(|i| i.quantity() as f64 * i.unit_price).sum();
        assert_eq!(cart.total_items(), qty);
        assert!((cart.total_price() - price).abs() < 1e-9);
        for item in cart.items() {
            assert!(item.quantity() >= 1);
            assert!((item.line_total() - item.quantity() as f64 * item.unit_price).abs() < 1e-9);
        }
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = CartState::new();
        let p1 = product("p1", 10.0);
        cart.add_item(&p1);
        cart.add_item(&p1);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get("p1").unwrap().quantity(), 2);
        assert_eq!(cart.get("p1").unwrap().line_total(), 20.0);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), 20.0);
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut cart = CartState::new();
        cart.add_item(&product("b", 1.0));
        cart.add_item(&product("a", 2.0));
        cart.add_item(&product("b", 1.0));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_adjust_below_one_removes() {
        let mut cart = CartState::new();
        cart.add_item(&product("p1", 4.5));
        cart.adjust_quantity("p1", 2);
        assert_eq!(cart.get("p1").unwrap().quantity(), 3);
        assert_eq!(cart.total_price(), 13.5);

        cart.adjust_quantity("p1", -3);
        assert!(cart.get("p1").is_none());
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_adjust_unknown_id_is_noop() {
        let mut cart = CartState::new();
        cart.add_item(&product("p1", 3.0));
        let before = cart.clone();
        cart.adjust_quantity("nope", 5);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = CartState::new();
        cart.add_item(&product("p1", 3.0));
        cart.add_item(&product("p2", 7.0));
        cart.remove_item("p1");
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_price(), 7.0);

        cart.add_item(&product("p3", 1.0));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_totals_consistent_over_mixed_sequence() {
        let products = [product("a", 2.25), product("b", 10.0), product("c", 0.5)];
        let mut cart = CartState::new();

        // Deterministic pseudo-random op sequence
        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let p = &products[(seed >> 8) as usize % products.len()];
            match (seed >> 16) % 4 {
                0 | 1 => cart.add_item(p),
                2 => cart.adjust_quantity(&p.id, ((seed >> 20) % 5) as i32 - 2),
                _ => cart.remove_item(&p.id),
            }
            assert_consistent(&cart);
        }
    }
}
