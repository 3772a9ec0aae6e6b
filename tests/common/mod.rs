use actix_web::web;

use todo_backend::models::task::Task;
use todo_backend::repository::{StorageError, TaskGateway};
use todo_backend::routes::routes::tasks_configure;
use todo_backend::service::task_service::TaskService;

/// Registers the task routes backed by `gateway`.
pub fn tasks_app<G: TaskGateway + 'static>(gateway: G) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(TaskService::new(gateway)));
        tasks_configure::<G>(cfg);
    }
}

/// A store whose every call fails, as when the database is unreachable.
pub struct UnavailableGateway;

fn unavailable() -> StorageError {
    StorageError::Database(sqlx::Error::PoolTimedOut)
}

impl TaskGateway for UnavailableGateway {
    async fn latest_completed(&self) -> Result<Vec<Task>, StorageError> {
        Err(unavailable())
    }

    async fn latest_incomplete(&self) -> Result<Vec<Task>, StorageError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<Task>, StorageError> {
        Err(unavailable())
    }

    async fn save(&self, _task: Task) -> Result<Task, StorageError> {
        Err(unavailable())
    }
}
