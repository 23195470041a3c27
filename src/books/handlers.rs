use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use bson::Uuid;
use mongodb::Database;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::{
    auth::extractors::AuthUser,
    books::{
        dto::{BookResponse, CreateBookRequest, UpdateBookRequest},
        repo_types::Book,
    },
    error::AppError,
    state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books))
        .route("/books/:id", get(get_book))
}

pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/books", post(create_book))
        .route("/books/:id", put(update_book).delete(delete_book))
        .route("/mybooks", get(list_my_books))
}

#[instrument(skip(state, payload))]
pub async fn create_book(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), AppError> {
    let Json(payload) = payload?;
    validate_book(&payload.title, &payload.author)?;

    let book = Book::new(
        payload.title,
        payload.author,
        payload.description,
        payload.price,
        user_id,
    );
    Book::insert(&state.db, &book).await?;

    info!(book_id = %book.id, owner_id = %user_id, "book created");
    Ok((StatusCode::CREATED, Json(book.into())))
}

#[instrument(skip(state))]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookResponse>, AppError> {
    let book = Book::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("book not found".into()))?;
    Ok(Json(book.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_book(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, AppError> {
    let Json(payload) = payload?;

    let mut book = load_owned_book(&state.db, id, user_id).await?;
    payload.apply(&mut book);
    validate_book(&book.title, &book.author)?;
    Book::save(&state.db, &book).await?;

    info!(book_id = %book.id, "book updated");
    Ok(Json(book.into()))
}

#[instrument(skip(state))]
pub async fn delete_book(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let book = load_owned_book(&state.db, id, user_id).await?;
    Book::delete(&state.db, book.id).await?;

    info!(book_id = %book.id, "book deleted");
    Ok(Json(json!({ "message": "Book deleted" })))
}

#[instrument(skip(state))]
pub async fn list_my_books(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<BookResponse>>, AppError> {
    let books = Book::list_by_owner(&state.db, user_id).await?;
    Ok(Json(books.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state))]
pub async fn list_books(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookResponse>>, AppError> {
    let books = Book::list_all(&state.db).await?;
    Ok(Json(books.into_iter().map(Into::into).collect()))
}

/// Ownership gate: load by id, then compare owner. Absent and not-owned are
/// indistinguishable to the caller.
async fn load_owned_book(db: &Database, id: Uuid, caller: Uuid) -> Result<Book, AppError> {
    let book = Book::find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("book not found or not owned".into()))?;
    if book.owner_id != caller {
        warn!(book_id = %id, caller = %caller, "mutation on book owned by another user");
        return Err(AppError::NotFound("book not found or not owned".into()));
    }
    Ok(book)
}

fn validate_book(title: &str, author: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("title is required".into()));
    }
    if author.trim().is_empty() {
        return Err(AppError::Validation("author is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_fields() {
        assert!(validate_book("", "Umberto Eco").is_err());
        assert!(validate_book("   ", "Umberto Eco").is_err());
        assert!(validate_book("The Name of the Rose", "").is_err());
        assert!(validate_book("The Name of the Rose", "Umberto Eco").is_ok());
    }
}
