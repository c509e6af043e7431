use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoQuestionRepository, MongoUserRepository, QuestionRepository, UserRepository,
    },
    services::{question_service::QuestionService, quiz_service::QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
    pub user_repository: Arc<dyn UserRepository>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
    /// `None` when the state was wired from repositories without a live connection.
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(
            &db,
            &config.questions_collection,
        ));
        question_repository.ensure_indexes().await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db, &config.users_collection));

        let mut state = Self::from_repositories(config, question_repository, user_repository);
        state.db = Some(db);
        Ok(state)
    }

    pub fn from_repositories(
        config: Config,
        question_repository: Arc<dyn QuestionRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        let question_service = Arc::new(QuestionService::new(question_repository.clone()));
        let quiz_service = Arc::new(QuizService::new(
            question_repository,
            user_repository.clone(),
        ));
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        Self {
            question_service,
            quiz_service,
            user_repository,
            jwt_service,
            config: Arc::new(config),
            db: None,
        }
    }
}
