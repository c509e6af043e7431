use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Difficulty, ProgressEntry, Question, Topic};

/// A question as returned to clients; `_id` is the hex form of the ObjectId.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub topic: Topic,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            id: question.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            topic: question.topic,
            question: question.question,
            options: question.options,
            correct_answer: question.correct_answer,
            explanation: question.explanation,
            difficulty: question.difficulty,
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}

/// A progress entry as returned to clients, with an RFC 3339 `completedAt`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntryDto {
    pub topic: String,
    pub score: f64,
    pub completed_at: DateTime<Utc>,
}

impl From<ProgressEntry> for ProgressEntryDto {
    fn from(entry: ProgressEntry) -> Self {
        ProgressEntryDto {
            topic: entry.topic,
            score: entry.score,
            completed_at: entry.completed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizResponse {
    pub score: f64,
    pub total_questions: usize,
    pub correct_answers: usize,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
