use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::{FindOneOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::ExamResult};

/// Append-only access to exam results. Results are never updated or
/// deleted; the current result for a set is the most recently created
/// one, resolved at read time.
#[async_trait]
pub trait ExamResultRepository: Send + Sync {
    async fn insert(&self, result: ExamResult) -> AppResult<ExamResult>;
    async fn find_latest_for_set(
        &self,
        user_id: &str,
        question_set_id: &str,
    ) -> AppResult<Option<ExamResult>>;
}

pub struct MongoExamResultRepository {
    collection: Collection<ExamResult>,
}

impl MongoExamResultRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for exam_results collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let user_set_created_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "question_set_id": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("user_set_created".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_set_created_index).await?;

        log::info!("Successfully created indexes for exam_results collection");
        Ok(())
    }
}

#[async_trait]
impl ExamResultRepository for MongoExamResultRepository {
    async fn insert(&self, result: ExamResult) -> AppResult<ExamResult> {
        self.collection.insert_one(&result).await?;
        Ok(result)
    }

    async fn find_latest_for_set(
        &self,
        user_id: &str,
        question_set_id: &str,
    ) -> AppResult<Option<ExamResult>> {
        let options = FindOneOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let result = self
            .collection
            .find_one(doc! {
                "user_id": user_id,
                "question_set_id": question_set_id
            })
            .with_options(options)
            .await?;

        Ok(result)
    }
}
