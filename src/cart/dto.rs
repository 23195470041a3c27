use bson::Uuid;
use serde::{Deserialize, Serialize};

use crate::books::dto::BookResponse;
use crate::cart::repo_types::{Cart, CartStatus};

/// Request body for adding an item to the cart.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub book_id: Uuid,
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub book_id: Uuid,
    pub quantity: i64,
}

/// Raw cart view: line items carry book ids only.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: CartStatus,
    pub items: Vec<CartItemResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            user_id: cart.user_id,
            status: cart.status,
            items: cart
                .items
                .into_iter()
                .map(|item| CartItemResponse {
                    book_id: item.book_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

/// Cart line joined with its full book, as returned by the cart read.
#[derive(Debug, Serialize)]
pub struct PricedCartItem {
    pub book: BookResponse,
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedCart {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: CartStatus,
    pub items: Vec<PricedCartItem>,
}

/// Body of `GET /api/cart`: the joined cart plus the derived total.
#[derive(Debug, Serialize)]
pub struct CartWithTotal {
    pub cart: PricedCart,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_item_request_uses_camel_case() {
        let book_id = Uuid::new();
        let body = serde_json::json!({ "bookId": book_id.to_string(), "quantity": 2 });
        let parsed: AddItemRequest = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.book_id, book_id);
        assert_eq!(parsed.quantity, 2);
    }

    #[test]
    fn cart_response_carries_user_and_items() {
        let mut cart = Cart::new(Uuid::new());
        let book_id = Uuid::new();
        cart.add_item(book_id, 3);
        let user_id = cart.user_id;

        let json = serde_json::to_value(CartResponse::from(cart)).unwrap();
        assert_eq!(json["userId"], serde_json::json!(user_id.to_string()));
        assert_eq!(json["status"], serde_json::json!("pending"));
        assert_eq!(json["items"][0]["bookId"], serde_json::json!(book_id.to_string()));
        assert_eq!(json["items"][0]["quantity"], serde_json::json!(3));
    }
}
