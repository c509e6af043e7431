use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, to_bson},
    Collection,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{ProgressEntry, User},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<User>>;
    async fn push_progress(&self, id: ObjectId, entry: ProgressEntry) -> AppResult<()>;
    async fn get_progress(&self, id: ObjectId) -> AppResult<Option<Vec<ProgressEntry>>>;
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<User>> {
        let user = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(user)
    }

    async fn push_progress(&self, id: ObjectId, entry: ProgressEntry) -> AppResult<()> {
        let entry = to_bson(&entry)?;
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$push": { "progress": entry } })
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("User with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn get_progress(&self, id: ObjectId) -> AppResult<Option<Vec<ProgressEntry>>> {
        let user = self.find_by_id(id).await?;
        Ok(user.map(|u| u.progress))
    }
}
