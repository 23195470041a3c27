use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use bson::DateTime;
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    books::repo_types::Book,
    cart::{
        dto::{AddItemRequest, CartResponse, CartWithTotal, PricedCart, PricedCartItem},
        repo_types::{Cart, CartStatus},
    },
    error::AppError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(get_cart).post(add_item))
        .route("/cart/checkout", put(checkout))
}

/// Lazily creates the pending cart on first read, then joins each line with
/// its book so the total can be derived from current prices.
#[instrument(skip(state))]
pub async fn get_cart(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<CartWithTotal>, AppError> {
    let cart = match Cart::find_pending(&state.db, user_id).await? {
        Some(cart) => cart,
        None => {
            let cart = Cart::new(user_id);
            Cart::save(&state.db, &cart).await?;
            info!(cart_id = %cart.id, %user_id, "pending cart created");
            cart
        }
    };

    let mut items = Vec::with_capacity(cart.items.len());
    for item in &cart.items {
        // Line items are not referentially checked on insert, so a book
        // deleted since then surfaces here as a 500.
        let book = Book::find_by_id(&state.db, item.book_id).await?.ok_or_else(|| {
            anyhow::anyhow!("cart {} references missing book {}", cart.id, item.book_id)
        })?;
        items.push(PricedCartItem {
            book: book.into(),
            quantity: item.quantity,
        });
    }
    let total = cart_total(&items);

    Ok(Json(CartWithTotal {
        cart: PricedCart {
            id: cart.id,
            user_id: cart.user_id,
            status: cart.status,
            items,
        },
        total,
    }))
}

#[instrument(skip(state, payload))]
pub async fn add_item(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CartResponse>), AppError> {
    let Json(payload) = payload?;

    let mut cart = Cart::find_pending(&state.db, user_id)
        .await?
        .unwrap_or_else(|| Cart::new(user_id));
    cart.add_item(payload.book_id, payload.quantity);
    Cart::save(&state.db, &cart).await?;

    info!(
        cart_id = %cart.id,
        book_id = %payload.book_id,
        quantity = payload.quantity,
        "item added to cart"
    );
    Ok((StatusCode::CREATED, Json(cart.into())))
}

#[instrument(skip(state))]
pub async fn checkout(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Value>, AppError> {
    let mut cart = Cart::find_pending(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::InvalidState("no pending cart to checkout".into()))?;

    cart.status = CartStatus::Done;
    cart.last_updated_at = DateTime::now();
    Cart::save(&state.db, &cart).await?;

    info!(cart_id = %cart.id, %user_id, "cart checked out");
    Ok(Json(json!({ "message": "Cart checked out successfully" })))
}

/// Live total: prices come from the current book documents, never from a
/// snapshot taken at add or checkout time.
fn cart_total(items: &[PricedCartItem]) -> f64 {
    items
        .iter()
        .map(|item| item.book.price * item.quantity as f64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::dto::BookResponse;
    use bson::Uuid;

    fn priced(price: f64, quantity: i64) -> PricedCartItem {
        PricedCartItem {
            book: BookResponse {
                id: Uuid::new(),
                title: "X".into(),
                author: "Y".into(),
                description: None,
                price,
                owner_id: Uuid::new(),
            },
            quantity,
        }
    }

    #[test]
    fn total_is_sum_of_price_times_quantity() {
        let items = vec![priced(10.0, 2), priced(2.5, 4)];
        assert_eq!(cart_total(&items), 30.0);
    }

    #[test]
    fn total_of_empty_cart_is_zero() {
        assert_eq!(cart_total(&[]), 0.0);
    }
}
