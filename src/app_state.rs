use std::sync::Arc;

use crate::{
    cache::FsTestCache,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoExamResultRepository, MongoQuestionSetRepository},
    services::{
        exam_service::ExamService, generation::HttpQuestionGenerator,
        question_set_service::QuestionSetService, scoring::GradingPolicy,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_set_service: Arc<QuestionSetService>,
    pub exam_service: Arc<ExamService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let question_set_repository = Arc::new(MongoQuestionSetRepository::new(
            &db,
            &config.question_sets_collection,
        ));
        question_set_repository.ensure_indexes().await?;

        let exam_result_repository = Arc::new(MongoExamResultRepository::new(
            &db,
            &config.exam_results_collection,
        ));
        exam_result_repository.ensure_indexes().await?;

        let cache = Arc::new(FsTestCache::new(config.cache_dir.clone()));
        let generator = Arc::new(HttpQuestionGenerator::new(
            &config.generator_url,
            config.generator_timeout_secs,
        )?);

        let question_set_service = Arc::new(QuestionSetService::new(
            question_set_repository.clone(),
            cache,
            generator,
        ));
        let exam_service = Arc::new(ExamService::new(
            question_set_repository,
            exam_result_repository,
            GradingPolicy::default(),
        ));

        Ok(Self {
            question_set_service,
            exam_service,
            db,
            config: Arc::new(config),
        })
    }
}
