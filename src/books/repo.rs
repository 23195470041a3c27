use bson::{doc, Uuid};
use futures::TryStreamExt;
use mongodb::{Collection, Database};

use crate::books::repo_types::Book;

fn collection(db: &Database) -> Collection<Book> {
    db.collection::<Book>("books")
}

impl Book {
    pub async fn find_by_id(db: &Database, id: Uuid) -> mongodb::error::Result<Option<Book>> {
        collection(db).find_one(doc! { "_id": id }, None).await
    }

    pub async fn insert(db: &Database, book: &Book) -> mongodb::error::Result<()> {
        collection(db).insert_one(book, None).await?;
        Ok(())
    }

    /// Persists the book document in place of its stored version.
    pub async fn save(db: &Database, book: &Book) -> mongodb::error::Result<()> {
        collection(db)
            .replace_one(doc! { "_id": book.id }, book, None)
            .await?;
        Ok(())
    }

    pub async fn delete(db: &Database, id: Uuid) -> mongodb::error::Result<()> {
        collection(db).delete_one(doc! { "_id": id }, None).await?;
        Ok(())
    }

    /// Unfiltered, unpaginated full scan.
    pub async fn list_all(db: &Database) -> mongodb::error::Result<Vec<Book>> {
        collection(db).find(doc! {}, None).await?.try_collect().await
    }

    pub async fn list_by_owner(db: &Database, owner_id: Uuid) -> mongodb::error::Result<Vec<Book>> {
        collection(db)
            .find(doc! { "owner_id": owner_id }, None)
            .await?
            .try_collect()
            .await
    }
}
