use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Question,
};

/// Question storage. List operations return questions in ascending `_id`
/// (insertion) order so that positional quiz scoring sees the same sequence
/// the client was served.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Question>>;
    async fn find_by_topic(&self, topic: &str) -> AppResult<Vec<Question>>;
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Question>>;
    async fn create(&self, question: Question) -> AppResult<Question>;
    /// Returns `false` when no stored question has the replacement's id.
    async fn replace(&self, question: &Question) -> AppResult<bool>;
    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: ObjectId) -> AppResult<bool>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let questions = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }

    async fn find_by_topic(&self, topic: &str) -> AppResult<Vec<Question>> {
        let questions = self
            .collection
            .find(doc! { "topic": topic })
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(question)
    }

    async fn create(&self, mut question: Question) -> AppResult<Question> {
        let result = self.collection.insert_one(&question).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("Inserted question id is not an ObjectId".to_string())
        })?;
        question.id = Some(id);
        Ok(question)
    }

    async fn replace(&self, question: &Question) -> AppResult<bool> {
        let Some(id) = question.id else {
            return Ok(false);
        };

        let result = self
            .collection
            .replace_one(doc! { "_id": id }, question)
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let topic_index = IndexModel::builder()
            .keys(doc! { "topic": 1, "_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("topic_order".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(topic_index).await?;

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }
}
