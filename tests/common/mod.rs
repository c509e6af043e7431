#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use secrecy::SecretString;
use tokio::sync::RwLock;

use secplus_quiz_server::{
    app_state::AppState,
    auth::JwtService,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{ProgressEntry, Question, User},
    repositories::{QuestionRepository, UserRepository},
};

/// Keeps questions in insertion order, which is also `_id` order.
#[derive(Default)]
pub struct InMemoryQuestionRepository {
    questions: RwLock<Vec<Question>>,
}

impl InMemoryQuestionRepository {
    pub async fn find_all_now(&self) -> Vec<Question> {
        self.questions.read().await.clone()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<Question>> {
        Ok(self.questions.read().await.clone())
    }

    async fn find_by_topic(&self, topic: &str) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions
            .iter()
            .filter(|q| q.topic.as_str() == topic)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.iter().find(|q| q.id == Some(id)).cloned())
    }

    async fn create(&self, mut question: Question) -> AppResult<Question> {
        question.id = Some(ObjectId::new());
        self.questions.write().await.push(question.clone());
        Ok(question)
    }

    async fn replace(&self, question: &Question) -> AppResult<bool> {
        let mut questions = self.questions.write().await;
        match questions.iter_mut().find(|q| q.id.is_some() && q.id == question.id) {
            Some(slot) => {
                *slot = question.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> AppResult<bool> {
        let mut questions = self.questions.write().await;
        let before = questions.len();
        questions.retain(|q| q.id != Some(id));
        Ok(questions.len() < before)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub async fn insert(&self, mut user: User) -> User {
        if user.id.is_none() {
            user.id = Some(ObjectId::new());
        }
        self.users.write().await.push(user.clone());
        user
    }

    pub async fn find_progress_now(&self, id: ObjectId) -> Vec<ProgressEntry> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|u| u.id == Some(id))
            .map(|u| u.progress.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn push_progress(&self, id: ObjectId, entry: ProgressEntry) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == Some(id))
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))?;
        user.progress.push(entry);
        Ok(())
    }

    async fn get_progress(&self, id: ObjectId) -> AppResult<Option<Vec<ProgressEntry>>> {
        Ok(self.find_by_id(id).await?.map(|u| u.progress))
    }
}

pub const JWT_SECRET: &str = "integration_test_jwt_secret_value_0123456789";

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "secplus-quiz-test".to_string(),
        mongo_max_pool_size: 4,
        mongo_min_pool_size: 1,
        mongo_timeout_secs: 2,
        questions_collection: "questions".to_string(),
        users_collection: "users".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        jwt_secret: SecretString::from(JWT_SECRET.to_string()),
        jwt_expiration_hours: 1,
        cors_allowed_origins: Vec::new(),
        app_env: "test".to_string(),
    }
}

pub struct TestContext {
    pub state: AppState,
    pub questions: Arc<InMemoryQuestionRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub jwt: JwtService,
}

impl TestContext {
    pub fn new() -> Self {
        let questions = Arc::new(InMemoryQuestionRepository::default());
        let users = Arc::new(InMemoryUserRepository::default());
        let state = AppState::from_repositories(test_config(), questions.clone(), users.clone());
        let jwt = JwtService::new(&SecretString::from(JWT_SECRET.to_string()), 1);

        Self {
            state,
            questions,
            users,
            jwt,
        }
    }

    /// Stores a user with the given admin flags and returns a bearer header value.
    pub async fn login(&self, username: &str, is_admin: bool, role: &str) -> (User, String) {
        let mut user = User::new(username, &format!("{}@example.com", username));
        user.is_admin = is_admin;
        user.role = role.to_string();
        let user = self.users.insert(user).await;

        let token = self
            .jwt
            .create_token(&user)
            .expect("token should be created");
        (user, format!("Bearer {}", token))
    }
}
