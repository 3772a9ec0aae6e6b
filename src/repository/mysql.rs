use log::info;
use sqlx::MySqlPool;

use super::{StorageError, TaskGateway, LATEST_LIMIT};
use crate::models::task::Task;

const CREATE_TASK_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS task (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        title VARCHAR(200) NOT NULL,
        description VARCHAR(2000) NULL,
        completed BOOLEAN NOT NULL DEFAULT FALSE,
        created_at DATETIME(6) NOT NULL,
        completed_at DATETIME(6) NULL,
        INDEX idx_task_created_at (created_at DESC),
        INDEX idx_task_completed_at (completed_at DESC),
        INDEX idx_task_completed_status (completed, created_at DESC)
    )
"#;

pub struct MySqlTaskGateway {
    pool: MySqlPool,
}

impl MySqlTaskGateway {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlTaskGateway { pool }
    }

    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_TASK_TABLE).execute(&self.pool).await?;
        info!("Task table is ready");
        Ok(())
    }
}

impl TaskGateway for MySqlTaskGateway {
    async fn latest_completed(&self) -> Result<Vec<Task>, StorageError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, completed, created_at, completed_at \
             FROM task WHERE completed = TRUE \
             ORDER BY completed_at DESC, id DESC LIMIT ?",
        )
        .bind(LATEST_LIMIT as u64)
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    async fn latest_incomplete(&self) -> Result<Vec<Task>, StorageError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, completed, created_at, completed_at \
             FROM task WHERE completed = FALSE \
             ORDER BY created_at DESC, id DESC LIMIT ?",
        )
        .bind(LATEST_LIMIT as u64)
        .fetch_all(&self.pool)
        .await?;
        Ok(tasks)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, StorageError> {
        let task = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, completed, created_at, completed_at \
             FROM task WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(task)
    }

    async fn save(&self, mut task: Task) -> Result<Task, StorageError> {
        match task.id {
            None => {
                let result = sqlx::query(
                    "INSERT INTO task (title, description, completed, created_at, completed_at) \
                     VALUES (?, ?, ?, ?, ?)",
                )
                .bind(&task.title)
                .bind(&task.description)
                .bind(task.completed)
                .bind(task.created_at)
                .bind(task.completed_at)
                .execute(&self.pool)
                .await?;
                task.id = Some(result.last_insert_id() as i64);
            }
            Some(id) => {
                // created_at is immutable once inserted
                sqlx::query(
                    "UPDATE task SET title = ?, description = ?, completed = ?, completed_at = ? \
                     WHERE id = ?",
                )
                .bind(&task.title)
                .bind(&task.description)
                .bind(task.completed)
                .bind(task.completed_at)
                .bind(id)
                .execute(&self.pool)
                .await?;
            }
        }
        Ok(task)
    }
}
