#[cfg(test)]
pub mod fixtures {
    use mongodb::bson::oid::ObjectId;

    use crate::models::{
        domain::{Difficulty, Identity, NewQuestion, Question, Topic},
        dto::request::QuestionRequest,
    };

    /// Creates a stored question whose options are `A`..`D`.
    pub fn stored_question(topic: &str, prompt: &str, correct_answer: &str) -> Question {
        let mut question = Question::new(NewQuestion {
            topic: topic.parse().unwrap_or(Topic::FundamentalSecurityConcepts),
            question: prompt.to_string(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: correct_answer.to_string(),
            explanation: "because".to_string(),
            difficulty: Difficulty::Medium,
        });
        question.id = Some(ObjectId::new());
        question
    }

    /// Creates a stored question in a fixed topic, for scoring tests.
    pub fn question_with_answer(prompt: &str, correct_answer: &str) -> Question {
        stored_question("Explain vulnerability management", prompt, correct_answer)
    }

    /// Creates a complete admin request with options `A`..`D`.
    pub fn question_request(topic: &str, correct_answer: &str) -> QuestionRequest {
        QuestionRequest {
            topic: Some(topic.to_string()),
            question: Some("Q1".to_string()),
            options: Some(vec!["A".into(), "B".into(), "C".into(), "D".into()]),
            correct_answer: Some(correct_answer.to_string()),
            explanation: Some("because".to_string()),
            difficulty: Some("hard".to_string()),
        }
    }

    pub fn identity(is_admin: bool, role: &str) -> Identity {
        Identity {
            id: ObjectId::new(),
            username: "tester".to_string(),
            email: "tester@example.com".to_string(),
            is_admin,
            role: role.to_string(),
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_stored_question_fixture() {
        let question = stored_question("Compare threat types", "Q", "C");
        assert!(question.id.is_some());
        assert_eq!(question.topic.as_str(), "Compare threat types");
        assert!(question.options.contains(&question.correct_answer));
    }

    #[test]
    fn test_question_request_fixture_is_valid() {
        let request = question_request("Compare threat types", "A");
        assert!(request.into_new_question().is_ok());
    }

    #[test]
    fn test_status_helpers() {
        assert_error_status(StatusCode::FORBIDDEN);
        assert_success_status(StatusCode::CREATED);
    }
}
