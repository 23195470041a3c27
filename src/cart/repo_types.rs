use bson::{DateTime, Uuid};
use serde::{Deserialize, Serialize};

/// Cart lifecycle. `pending` is the user's single active cart; `done` carts
/// are kept as order history and never read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartStatus {
    Pending,
    Done,
}

/// One line of a cart. `book_id` is unique within a cart's item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub book_id: Uuid,
    pub quantity: i64,
}

/// Cart document in the `carts` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<CartItem>,
    pub status: CartStatus,
    pub created_at: DateTime,
    pub last_updated_at: DateTime,
}

impl Cart {
    pub fn new(user_id: Uuid) -> Self {
        let now = DateTime::now();
        Self {
            id: Uuid::new(),
            user_id,
            items: Vec::new(),
            status: CartStatus::Pending,
            created_at: now,
            last_updated_at: now,
        }
    }

    /// Merge a line into the cart: an existing line for the same book
    /// accumulates quantity, otherwise a new line is appended. Quantity is
    /// not range-checked.
    pub fn add_item(&mut self, book_id: Uuid, quantity: i64) {
        match self.items.iter_mut().find(|item| item.book_id == book_id) {
            Some(item) => item.quantity += quantity,
            None => self.items.push(CartItem { book_id, quantity }),
        }
        self.last_updated_at = DateTime::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cart_is_pending_and_empty() {
        let cart = Cart::new(Uuid::new());
        assert_eq!(cart.status, CartStatus::Pending);
        assert!(cart.items.is_empty());
    }

    #[test]
    fn adding_same_book_twice_merges_into_one_line() {
        let mut cart = Cart::new(Uuid::new());
        let book_id = Uuid::new();

        cart.add_item(book_id, 2);
        cart.add_item(book_id, 3);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn adding_different_books_appends_in_order() {
        let mut cart = Cart::new(Uuid::new());
        let first = Uuid::new();
        let second = Uuid::new();

        cart.add_item(first, 1);
        cart.add_item(second, 4);
        cart.add_item(first, 1);

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].book_id, first);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items[1].book_id, second);
        assert_eq!(cart.items[1].quantity, 4);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(CartStatus::Pending).unwrap(),
            serde_json::json!("pending")
        );
        assert_eq!(
            serde_json::to_value(CartStatus::Done).unwrap(),
            serde_json::json!("done")
        );
    }
}
