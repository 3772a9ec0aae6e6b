// src/repository/mod.rs

pub mod memory;
pub mod mysql;

use thiserror::Error;

use crate::models::task::Task;

pub use memory::InMemoryTaskGateway;
pub use mysql::MySqlTaskGateway;

/// Maximum number of tasks returned by the "latest" queries.
pub const LATEST_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Queries and writes against the task store.
///
/// The two `latest_*` queries are fixed: at most [`LATEST_LIMIT`] rows, newest
/// first, ties broken by id descending.
#[allow(async_fn_in_trait)]
pub trait TaskGateway {
    /// Completed tasks ordered by `completed_at` descending.
    async fn latest_completed(&self) -> Result<Vec<Task>, StorageError>;

    /// Incomplete tasks ordered by `created_at` descending.
    async fn latest_incomplete(&self) -> Result<Vec<Task>, StorageError>;

    /// `Ok(None)` when no row has this id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, StorageError>;

    /// Inserts when `task.id` is `None`, updates otherwise. Returns the stored
    /// task, including the id assigned on insert.
    async fn save(&self, task: Task) -> Result<Task, StorageError>;
}
