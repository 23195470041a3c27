use bson::doc;
use mongodb::{Collection, Database};

use crate::auth::repo_types::User;

fn collection(db: &Database) -> Collection<User> {
    db.collection::<User>("users")
}

impl User {
    /// Find a user by username.
    pub async fn find_by_username(
        db: &Database,
        username: &str,
    ) -> mongodb::error::Result<Option<User>> {
        collection(db)
            .find_one(doc! { "username": username }, None)
            .await
    }

    /// Insert a freshly registered user.
    pub async fn insert(db: &Database, user: &User) -> mongodb::error::Result<()> {
        collection(db).insert_one(user, None).await?;
        Ok(())
    }
}
