use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::models::domain::question::{Difficulty, NewQuestion, OPTION_COUNT};
use crate::models::domain::Topic;

/// Body of the admin create and replace endpoints. Every field is optional on
/// the wire so a missing field is reported as such rather than as a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub topic: Option<String>,
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
    pub difficulty: Option<String>,
}

impl QuestionRequest {
    /// Runs the request-level checks and parses the vocabulary fields.
    pub fn into_new_question(self) -> AppResult<NewQuestion> {
        let (Some(topic), Some(question), Some(options), Some(correct_answer), Some(explanation)) = (
            non_empty(self.topic),
            non_empty(self.question),
            self.options,
            non_empty(self.correct_answer),
            non_empty(self.explanation),
        ) else {
            return Err(AppError::ValidationError(
                "All fields are required".to_string(),
            ));
        };

        if options.len() != OPTION_COUNT {
            return Err(AppError::ValidationError(
                "Options must be an array of exactly 4 items".to_string(),
            ));
        }

        if !options.contains(&correct_answer) {
            return Err(AppError::ValidationError(
                "Correct answer must be one of the options".to_string(),
            ));
        }

        let topic = topic
            .parse::<Topic>()
            .map_err(|e| AppError::InvalidFields(format!("topic: {}", e)))?;

        let difficulty = match non_empty(self.difficulty) {
            Some(raw) => raw
                .parse::<Difficulty>()
                .map_err(|e| AppError::InvalidFields(format!("difficulty: {}", e)))?,
            None => Difficulty::default(),
        };

        Ok(NewQuestion {
            topic,
            question,
            options,
            correct_answer,
            explanation,
            difficulty,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuizRequest {
    pub topic: String,
    /// Answers in the order the topic's questions were served. Entries that
    /// are not strings, `null` included, are kept as `None` and score as wrong.
    #[serde(default, deserialize_with = "text_answers")]
    pub answers: Vec<Option<String>>,
}

fn text_answers<'de, D>(deserializer: D) -> Result<Vec<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|answer| match answer {
            Value::String(text) => Some(text),
            _ => None,
        })
        .collect())
}
