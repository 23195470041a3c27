use bson::{DateTime, Uuid};
use serde::{Deserialize, Serialize};

/// User document in the `users` collection. Created at registration and
/// immutable afterwards; only the argon2 hash of the password is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime,
}

impl User {
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new(),
            username,
            password_hash,
            created_at: DateTime::now(),
        }
    }
}
