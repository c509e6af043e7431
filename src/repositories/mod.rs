pub mod question_repository;
pub mod user_repository;

pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
