use chrono::{DateTime, SubsecRound, Utc};
use log::info;

use crate::error::TaskError;
use crate::models::task::Task;
use crate::models::task_dto::{TaskRequest, TaskResponse};
use crate::repository::TaskGateway;

// The task table keeps microseconds, so stamps carry no finer precision.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Business rules for tasks. Request validation happens before these calls.
pub struct TaskService<G> {
    gateway: G,
}

impl<G: TaskGateway> TaskService<G> {
    pub fn new(gateway: G) -> Self {
        TaskService { gateway }
    }

    pub async fn list_completed(&self) -> Result<Vec<TaskResponse>, TaskError> {
        let tasks = self.gateway.latest_completed().await?;
        Ok(tasks.iter().map(to_response).collect())
    }

    pub async fn list_incomplete(&self) -> Result<Vec<TaskResponse>, TaskError> {
        let tasks = self.gateway.latest_incomplete().await?;
        Ok(tasks.iter().map(to_response).collect())
    }

    pub async fn create(&self, request: TaskRequest) -> Result<TaskResponse, TaskError> {
        let task = Task::new(request.title, request.description, now());
        let saved = self.gateway.save(task).await?;
        info!("Created task {:?}", saved.id);
        Ok(to_response(&saved))
    }

    pub async fn mark_done(&self, id: i64) -> Result<(), TaskError> {
        let mut task = self
            .gateway
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;
        task.mark_done(now());
        self.gateway.save(task).await?;
        info!("Marked task {} done", id);
        Ok(())
    }
}

pub fn to_response(task: &Task) -> TaskResponse {
    TaskResponse {
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone(),
        created_at: task.created_at,
        completed_at: task.completed_at,
    }
}
