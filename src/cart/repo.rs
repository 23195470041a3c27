use bson::{doc, Uuid};
use mongodb::{options::ReplaceOptions, Collection, Database};

use crate::cart::repo_types::Cart;

fn collection(db: &Database) -> Collection<Cart> {
    db.collection::<Cart>("carts")
}

impl Cart {
    /// The single pending cart of a user, if any. Nothing stops a concurrent
    /// pair of requests from creating two; lookup-then-create is not atomic.
    pub async fn find_pending(db: &Database, user_id: Uuid) -> mongodb::error::Result<Option<Cart>> {
        collection(db)
            .find_one(doc! { "user_id": user_id, "status": "pending" }, None)
            .await
    }

    /// Persists the whole cart document, inserting it on first save.
    pub async fn save(db: &Database, cart: &Cart) -> mongodb::error::Result<()> {
        let options = ReplaceOptions::builder().upsert(true).build();
        collection(db)
            .replace_one(doc! { "_id": cart.id }, cart, options)
            .await?;
        Ok(())
    }
}
