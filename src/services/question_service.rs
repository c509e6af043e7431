use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Question,
        dto::{
            request::QuestionRequest,
            response::{MessageResponse, QuestionDto},
        },
    },
    repositories::QuestionRepository,
};

/// Question bank management behind the admin gate.
pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_questions(&self) -> AppResult<Vec<QuestionDto>> {
        let questions = self.repository.find_all().await?;
        Ok(questions.into_iter().map(QuestionDto::from).collect())
    }

    pub async fn create_question(&self, request: QuestionRequest) -> AppResult<QuestionDto> {
        let fields = request.into_new_question()?;
        fields.validate()?;

        let saved = self.repository.create(Question::new(fields)).await?;
        log::info!(
            "Created question {} in topic '{}'",
            saved.id.map(|id| id.to_hex()).unwrap_or_default(),
            saved.topic
        );
        Ok(saved.into())
    }

    /// Full replacement of a question's editable fields.
    pub async fn update_question(
        &self,
        id: &str,
        request: QuestionRequest,
    ) -> AppResult<QuestionDto> {
        let fields = request.into_new_question()?;
        fields.validate()?;

        let not_found = || AppError::NotFound("Question not found".to_string());
        let id = parse_id(id).ok_or_else(not_found)?;
        let existing = self.repository.find_by_id(id).await?.ok_or_else(not_found)?;

        let updated = existing.replaced_by(fields);
        if !self.repository.replace(&updated).await? {
            return Err(not_found());
        }

        Ok(updated.into())
    }

    pub async fn delete_question(&self, id: &str) -> AppResult<MessageResponse> {
        let not_found = || AppError::NotFound("Question not found".to_string());
        let id = parse_id(id).ok_or_else(not_found)?;

        if !self.repository.delete(id).await? {
            return Err(not_found());
        }

        log::info!("Deleted question {}", id.to_hex());
        Ok(MessageResponse {
            message: "Question deleted successfully".to_string(),
        })
    }
}

/// Ids that are not valid ObjectIds cannot name a stored question.
fn parse_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}
