use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Identity, ProgressEntry, Topic},
        dto::{
            request::SubmitQuizRequest,
            response::{ProgressEntryDto, QuestionDto, SubmitQuizResponse},
        },
    },
    repositories::{QuestionRepository, UserRepository},
    services::scoring::score_answers,
};

/// Quiz taking for authenticated users.
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
    users: Arc<dyn UserRepository>,
}

impl QuizService {
    pub fn new(questions: Arc<dyn QuestionRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { questions, users }
    }

    pub fn topics(&self) -> Vec<&'static str> {
        Topic::names()
    }

    /// Questions of one topic in serving order. An unknown topic is an empty quiz.
    pub async fn questions_for_topic(&self, topic: &str) -> AppResult<Vec<QuestionDto>> {
        let questions = self.questions.find_by_topic(topic).await?;
        Ok(questions.into_iter().map(QuestionDto::from).collect())
    }

    /// Scores a submission and appends the result to the caller's progress.
    pub async fn submit(
        &self,
        identity: &Identity,
        request: SubmitQuizRequest,
    ) -> AppResult<SubmitQuizResponse> {
        let questions = self.questions.find_by_topic(&request.topic).await?;
        let result = score_answers(&questions, &request.answers);

        self.users
            .push_progress(
                identity.id,
                ProgressEntry::completed_now(&request.topic, result.score),
            )
            .await?;

        log::info!(
            "User {} scored {:.1}% ({}/{}) on '{}'",
            identity.username,
            result.score,
            result.correct_answers,
            result.total_questions,
            request.topic
        );

        Ok(result)
    }

    pub async fn progress(&self, identity: &Identity) -> AppResult<Vec<ProgressEntryDto>> {
        let entries = self
            .users
            .get_progress(identity.id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(entries.into_iter().map(ProgressEntryDto::from).collect())
    }
}
