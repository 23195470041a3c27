use bson::Uuid;
use serde::{Deserialize, Serialize};

use crate::books::repo_types::Book;

/// Request body for creating a book.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update: absent fields leave the stored value unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl UpdateBookRequest {
    pub fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(price) = self.price {
            book.price = price;
        }
        if let Some(description) = self.description {
            book.description = Some(description);
        }
    }
}

/// Public view of a book.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub price: f64,
    pub owner_id: Uuid,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            description: book.description,
            price: book.price,
            owner_id: book.owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book::new(
            "The Name of the Rose".into(),
            "Umberto Eco".into(),
            None,
            12.5,
            Uuid::new(),
        )
    }

    #[test]
    fn apply_updates_only_provided_fields() {
        let mut book = sample_book();
        let original_author = book.author.clone();

        let update = UpdateBookRequest {
            title: Some("Foucault's Pendulum".into()),
            price: Some(9.99),
            ..Default::default()
        };
        update.apply(&mut book);

        assert_eq!(book.title, "Foucault's Pendulum");
        assert_eq!(book.price, 9.99);
        assert_eq!(book.author, original_author);
        assert_eq!(book.description, None);
    }

    #[test]
    fn response_uses_camel_case_field_names() {
        let book = sample_book();
        let owner_id = book.owner_id;
        let json = serde_json::to_value(BookResponse::from(book)).unwrap();

        assert_eq!(json["ownerId"], serde_json::json!(owner_id.to_string()));
        assert!(json.get("owner_id").is_none());
        assert_eq!(json["price"], serde_json::json!(12.5));
    }
}
