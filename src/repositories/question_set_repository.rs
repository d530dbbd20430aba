use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::QuestionSet};

/// System-of-record access for question sets. Every operation is
/// scoped to the calling user; a set owned by someone else is
/// indistinguishable from one that does not exist.
#[async_trait]
pub trait QuestionSetRepository: Send + Sync {
    async fn insert(&self, set: QuestionSet) -> AppResult<QuestionSet>;
    async fn find_by_id(&self, user_id: &str, id: &str) -> AppResult<Option<QuestionSet>>;
    async fn list_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<QuestionSet>, i64)>;
}

pub struct MongoQuestionSetRepository {
    collection: Collection<QuestionSet>,
}

impl MongoQuestionSetRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for question_sets collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let user_created_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("user_created".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_created_index).await?;

        log::info!("Successfully created indexes for question_sets collection");
        Ok(())
    }
}

#[async_trait]
impl QuestionSetRepository for MongoQuestionSetRepository {
    async fn insert(&self, set: QuestionSet) -> AppResult<QuestionSet> {
        self.collection.insert_one(&set).await?;
        Ok(set)
    }

    async fn find_by_id(&self, user_id: &str, id: &str) -> AppResult<Option<QuestionSet>> {
        let set = self
            .collection
            .find_one(doc! { "user_id": user_id, "id": id })
            .await?;
        Ok(set)
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<QuestionSet>, i64)> {
        use futures::TryStreamExt;
        use mongodb::options::FindOptions;

        let filter = doc! { "user_id": user_id };

        let total = self.collection.count_documents(filter.clone()).await? as i64;

        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .skip(Some(offset as u64))
            .limit(Some(limit))
            .build();

        let cursor = self.collection.find(filter).with_options(find_options).await?;
        let sets: Vec<QuestionSet> = cursor.try_collect().await?;

        Ok((sets, total))
    }
}
