use bson::{DateTime, Uuid};
use serde::{Deserialize, Serialize};

/// Book document in the `books` collection. Readable by anyone; mutable and
/// deletable only by the user stamped as owner at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub price: f64,
    pub owner_id: Uuid,
    pub created_at: DateTime,
}

impl Book {
    pub fn new(
        title: String,
        author: String,
        description: Option<String>,
        price: f64,
        owner_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new(),
            title,
            author,
            description,
            price,
            owner_id,
            created_at: DateTime::now(),
        }
    }
}
