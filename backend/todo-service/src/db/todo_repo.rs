/// To-do store adapter
///
/// Single-document CRUD against one MongoDB collection. The store owns id
/// generation and the `createdAt`/`updatedAt` stamps; callers never write
/// those fields themselves. No transactions, no retries.
use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use futures::TryStreamExt;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, Database};
use thiserror::Error;

use crate::models::{NewTodo, Todo};

const COLLECTION_NAME: &str = "todos";

/// Store operation failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Identifier is not a valid ObjectId hex string
    #[error("invalid to-do id: {0}")]
    InvalidId(String),

    /// Driver-level failure
    #[error("{0}")]
    Database(#[from] mongodb::error::Error),
}

/// CRUD adapter over the to-do collection, constructed once at startup and
/// shared with the handler layer.
#[derive(Clone)]
pub struct TodoStore {
    collection: Collection<Todo>,
}

impl TodoStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }

    /// All to-do records, natural collection order
    pub async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Look up one record by its hex id
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let id = parse_object_id(id)?;
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Persist a new record, stamping both timestamps from the same instant.
    /// The stamp is truncated to BSON millisecond precision up front so the
    /// returned record is byte-equal to what a later read produces.
    pub async fn insert(&self, new_todo: NewTodo) -> Result<Todo, StoreError> {
        let now = bson::DateTime::now().to_chrono();
        let mut todo = Todo {
            id: None,
            title: new_todo.title,
            brand: new_todo.brand,
            platform: new_todo.platform,
            due_date: new_todo.due_date,
            payment: new_todo.payment,
            status: new_todo.status,
            created_at: now,
            updated_at: now,
        };

        let result = self.collection.insert_one(&todo).await?;
        todo.id = result.inserted_id.as_object_id();
        Ok(todo)
    }

    /// Merge `fields` into the stored record (shallow replacement) and
    /// refresh `updatedAt`. Returns the record after the update, or `None`
    /// when the id does not resolve.
    pub async fn update_by_id(
        &self,
        id: &str,
        mut fields: Document,
    ) -> Result<Option<Todo>, StoreError> {
        let id = parse_object_id(id)?;
        fields.insert("updatedAt", Bson::DateTime(bson::DateTime::now()));

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": fields })
            .with_options(options)
            .await?;
        Ok(updated)
    }

    /// Remove a record; returns whether one existed
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let id = parse_object_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}

fn parse_object_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}
