use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::errors::{AppError, AppResult};
use crate::models::domain::CachedTest;

/// Per-user archive of generated tests, independent of the system of
/// record. Writes are best-effort; reads degrade to empty rather than
/// failing the caller. One logical writer per user is assumed.
#[async_trait]
pub trait TestCache: Send + Sync {
    /// Prepends the entry under a fresh time-derived id and returns
    /// that id. Any id already on the entry is replaced.
    async fn save(&self, user_id: &str, test: CachedTest) -> AppResult<String>;

    /// All entries for the user, newest first. Missing, unreadable or
    /// corrupt storage yields an empty list, never an error.
    async fn list(&self, user_id: &str) -> Vec<CachedTest>;

    async fn get(&self, user_id: &str, id: &str) -> Option<CachedTest>;

    /// Idempotent; deleting an unknown id is a no-op.
    async fn delete(&self, user_id: &str, id: &str) -> AppResult<()>;
}

/// Filesystem implementation: one JSON file per user holding the
/// newest-first entry array.
pub struct FsTestCache {
    dir: PathBuf,
}

impl FsTestCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File stem for a user. Identities that are already plain file
    /// name material are kept readable; anything else is hashed.
    fn storage_key(user_id: &str) -> String {
        let safe = !user_id.is_empty()
            && user_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if safe {
            user_id.to_string()
        } else {
            let mut hasher = Sha256::new();
            hasher.update(user_id.as_bytes());
            format!("{:x}", hasher.finalize())
        }
    }

    fn user_file(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", Self::storage_key(user_id)))
    }

    async fn read_entries(&self, path: &Path) -> Vec<CachedTest> {
        let data = match tokio::fs::read(path).await {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                log::warn!("Cache file {} unreadable: {}", path.display(), err);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&data) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!(
                    "Cache file {} corrupt, treating as empty: {}",
                    path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Serializes in memory first, then writes through a temp file so
    /// a failed write never leaves a half-written entry list behind.
    async fn write_entries(&self, path: &Path, entries: &[CachedTest]) -> AppResult<()> {
        let data = serde_json::to_vec(entries)
            .map_err(|err| AppError::CacheError(format!("Serialization failed: {}", err)))?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|err| AppError::CacheError(format!("Cache directory unavailable: {}", err)))?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &data)
            .await
            .map_err(|err| AppError::CacheError(format!("Cache write failed: {}", err)))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|err| AppError::CacheError(format!("Cache write failed: {}", err)))?;

        Ok(())
    }

    fn fresh_id(existing: &[CachedTest]) -> String {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let candidate = format!("test_{}", millis);
            if !existing.iter().any(|t| t.id == candidate) {
                return candidate;
            }
            millis += 1;
        }
    }
}

#[async_trait]
impl TestCache for FsTestCache {
    async fn save(&self, user_id: &str, mut test: CachedTest) -> AppResult<String> {
        let path = self.user_file(user_id);
        let mut entries = self.read_entries(&path).await;

        let id = Self::fresh_id(&entries);
        test.id = id.clone();
        entries.insert(0, test);

        self.write_entries(&path, &entries).await?;
        Ok(id)
    }

    async fn list(&self, user_id: &str) -> Vec<CachedTest> {
        self.read_entries(&self.user_file(user_id)).await
    }

    async fn get(&self, user_id: &str, id: &str) -> Option<CachedTest> {
        self.list(user_id).await.into_iter().find(|t| t.id == id)
    }

    async fn delete(&self, user_id: &str, id: &str) -> AppResult<()> {
        let path = self.user_file(user_id);
        let entries = self.read_entries(&path).await;
        let before = entries.len();

        let remaining: Vec<CachedTest> = entries.into_iter().filter(|t| t.id != id).collect();

        // Nothing removed means nothing to rewrite.
        if remaining.len() == before {
            return Ok(());
        }

        self.write_entries(&path, &remaining).await
    }
}
