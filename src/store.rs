use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::models::submission::Submission;

/// Errors produced by the submission store and its storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unable to read submissions file: {0}")]
    Read(#[source] std::io::Error),
    #[error("unable to write submissions file: {0}")]
    Write(#[source] std::io::Error),
    #[error("submissions file is not a valid JSON array: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("index {index} is out of range for {len} submissions")]
    OutOfRange { index: usize, len: usize },
}

/// Persistence seam for the submission collection.
///
/// The collection is always loaded and saved in its entirety; there is no
/// partial update. An in-memory implementation can be substituted in tests,
/// or a transactional backend later.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn load(&self) -> Result<Vec<Submission>, StoreError>;
    async fn save(&self, submissions: &[Submission]) -> Result<(), StoreError>;
}

/// File-backed storage: one pretty-printed JSON array in one file.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the store file (and its parent directory) holding an empty
    /// array if it does not exist yet. Called once at startup; requests
    /// still fail with a read error if the file disappears afterwards.
    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        if tokio::fs::try_exists(&self.path)
            .await
            .map_err(StoreError::Read)?
        {
            return Ok(());
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StoreError::Write)?;
        }
        tokio::fs::write(&self.path, "[]")
            .await
            .map_err(StoreError::Write)
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load(&self) -> Result<Vec<Submission>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(StoreError::Read)?;
        serde_json::from_str(&raw).map_err(StoreError::Corrupt)
    }

    async fn save(&self, submissions: &[Submission]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(submissions).map_err(StoreError::Corrupt)?;
        // Write to a sibling temp file and rename over the real one, so a
        // crash mid-write never leaves a truncated array behind.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(StoreError::Write)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(StoreError::Write)
    }
}

/// The submission store: index-addressed CRUD over a fully materialized
/// collection.
///
/// Every mutation is a load-mutate-save cycle over the whole collection.
/// Mutations hold `write_lock` for the full cycle, so two concurrent
/// creates cannot read the same snapshot and clobber each other's write.
/// Reads skip the lock: saves are rename-atomic, so a load observes either
/// the previous array or the new one, never a torn state.
pub struct SubmissionStore {
    storage: Box<dyn Storage>,
    write_lock: Mutex<()>,
}

impl SubmissionStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Append a submission at the end of the collection and persist it.
    /// Returns the new record's index.
    pub async fn create(&self, submission: Submission) -> Result<usize, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut submissions = self.storage.load().await?;
        submissions.push(submission);
        self.storage.save(&submissions).await?;
        Ok(submissions.len() - 1)
    }

    /// Fetch the submission at `index`.
    pub async fn read(&self, index: usize) -> Result<Submission, StoreError> {
        let submissions = self.storage.load().await?;
        submissions
            .get(index)
            .cloned()
            .ok_or(StoreError::OutOfRange {
                index,
                len: submissions.len(),
            })
    }

    /// Replace the whole record at `index` and persist. No partial merge.
    pub async fn edit(&self, index: usize, submission: Submission) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut submissions = self.storage.load().await?;
        let len = submissions.len();
        let slot = submissions
            .get_mut(index)
            .ok_or(StoreError::OutOfRange { index, len })?;
        *slot = submission;
        self.storage.save(&submissions).await
    }

    /// Remove the record at `index` and persist. Later entries shift down
    /// by one position.
    pub async fn delete(&self, index: usize) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut submissions = self.storage.load().await?;
        if index >= submissions.len() {
            return Err(StoreError::OutOfRange {
                index,
                len: submissions.len(),
            });
        }
        submissions.remove(index);
        self.storage.save(&submissions).await
    }
}
