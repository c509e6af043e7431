use crate::models::{domain::Question, dto::response::SubmitQuizResponse};

/// Scores answers against questions by position.
///
/// The answer at index `i` is compared with the correct answer of question `i`;
/// a missing or `null` answer is wrong and surplus answers are ignored. The
/// percentage is `0.0` when there are no questions.
pub fn score_answers(questions: &[Question], answers: &[Option<String>]) -> SubmitQuizResponse {
    let correct_answers = questions
        .iter()
        .zip(answers.iter())
        .filter(|(question, answer)| {
            answer
                .as_deref()
                .is_some_and(|answer| question.is_correct(answer))
        })
        .count();

    let total_questions = questions.len();
    let score = if total_questions == 0 {
        0.0
    } else {
        correct_answers as f64 / total_questions as f64 * 100.0
    };

    SubmitQuizResponse {
        score,
        total_questions,
        correct_answers,
    }
}
