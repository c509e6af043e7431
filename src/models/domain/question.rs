use std::{borrow::Cow, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{timestamp, topic::Topic};

pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("`{}` is not a valid difficulty", other)),
        }
    }
}

/// A question as stored in the `questions` collection.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub topic: Topic,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Question {
    pub fn new(fields: NewQuestion) -> Self {
        let now = Utc::now();
        Question {
            id: None,
            topic: fields.topic,
            question: fields.question,
            options: fields.options,
            correct_answer: fields.correct_answer,
            explanation: fields.explanation,
            difficulty: fields.difficulty,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Replaces every editable field, keeping identity and creation time.
    pub fn replaced_by(&self, fields: NewQuestion) -> Self {
        Question {
            id: self.id,
            created_at: self.created_at,
            ..Question::new(fields)
        }
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// Parsed question fields that still have to pass schema validation.
#[derive(Clone, Debug, PartialEq, Validate)]
#[validate(schema(function = "validate_answer_in_options"))]
pub struct NewQuestion {
    pub topic: Topic,
    #[validate(length(min = 1, message = "Question text is required"))]
    pub question: String,
    #[validate(length(equal = 4, message = "Questions must have exactly 4 options"))]
    pub options: Vec<String>,
    pub correct_answer: String,
    #[validate(length(min = 1, message = "Explanation is required"))]
    pub explanation: String,
    pub difficulty: Difficulty,
}

fn validate_answer_in_options(question: &NewQuestion) -> Result<(), ValidationError> {
    if question.options.contains(&question.correct_answer) {
        return Ok(());
    }
    Err(ValidationError::new("correct_answer")
        .with_message(Cow::Borrowed("Correct answer must be one of the options")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc, from_document, to_document, Bson};

    fn fields() -> NewQuestion {
        NewQuestion {
            topic: Topic::ThreatTypes,
            question: "Which attack abuses trust between sites?".to_string(),
            options: vec![
                "CSRF".to_string(),
                "SQLi".to_string(),
                "Smurf".to_string(),
                "Vishing".to_string(),
            ],
            correct_answer: "CSRF".to_string(),
            explanation: "Cross-site request forgery rides an existing session.".to_string(),
            difficulty: Difficulty::Medium,
        }
    }

    #[test]
    fn valid_question_passes_schema_validation() {
        assert!(fields().validate().is_ok());
    }

    #[test]
    fn three_options_fail_schema_validation() {
        let mut question = fields();
        question.options.pop();
        let err = question.validate().unwrap_err();
        assert!(err.to_string().contains("exactly 4 options"));
    }

    #[test]
    fn answer_outside_options_fails_schema_validation() {
        let mut question = fields();
        question.correct_answer = "XSS".to_string();
        let err = question.validate().unwrap_err();
        assert!(err.to_string().contains("Correct answer must be one of the options"));
    }

    #[test]
    fn difficulty_defaults_to_medium_and_parses_lowercase() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("Hard".parse::<Difficulty>().is_err());
    }

    #[test]
    fn stored_document_uses_camel_case_names_and_bson_dates() {
        let question = Question::new(fields());
        let document = to_document(&question).unwrap();

        assert_eq!(document.get_str("correctAnswer").unwrap(), "CSRF");
        assert_eq!(document.get_str("topic").unwrap(), "Compare threat types");
        assert_eq!(document.get_str("difficulty").unwrap(), "medium");
        assert!(document.get("_id").is_none());
        assert!(matches!(document.get("createdAt"), Some(Bson::DateTime(_))));
        assert!(matches!(document.get("updatedAt"), Some(Bson::DateTime(_))));
    }

    #[test]
    fn reads_existing_question_document() {
        let id = ObjectId::new();
        let question: Question = from_document(doc! {
            "_id": id,
            "topic": "Explain risk management processes",
            "question": "What is ALE?",
            "options": ["SLE x ARO", "AV x EF", "ARO", "EF"],
            "correctAnswer": "SLE x ARO",
            "explanation": "Annualized loss expectancy.",
            "createdAt": bson::DateTime::from_millis(1_600_000_000_000),
            "updatedAt": bson::DateTime::from_millis(1_700_000_000_000),
            "__v": 0,
        })
        .unwrap();

        assert_eq!(question.id, Some(id));
        assert_eq!(question.topic, Topic::RiskManagement);
        assert_eq!(question.difficulty, Difficulty::Medium);
        assert_eq!(
            question.created_at.map(|at| at.timestamp_millis()),
            Some(1_600_000_000_000)
        );
        assert_eq!(
            question.updated_at.map(|at| at.timestamp_millis()),
            Some(1_700_000_000_000)
        );
    }

    #[test]
    fn replaced_by_keeps_id_and_creation_time() {
        let mut original = Question::new(fields());
        original.id = Some(ObjectId::new());

        let mut changed = fields();
        changed.difficulty = Difficulty::Hard;
        let replaced = original.replaced_by(changed);

        assert_eq!(replaced.id, original.id);
        assert_eq!(replaced.created_at, original.created_at);
        assert_eq!(replaced.difficulty, Difficulty::Hard);
        assert!(replaced.updated_at >= original.updated_at);
    }
}
