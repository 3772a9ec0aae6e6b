use std::cmp::Ordering;
use std::collections::BTreeMap;

use tokio::sync::RwLock;

use super::{StorageError, TaskGateway, LATEST_LIMIT};
use crate::models::task::Task;

/// Process-local task store. Ids are assigned sequentially starting at 1.
#[derive(Debug, Default)]
pub struct InMemoryTaskGateway {
    state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    tasks: BTreeMap<i64, Task>,
    last_id: i64,
}

impl InMemoryTaskGateway {
    pub fn new() -> Self {
        Self::default()
    }

    async fn latest_where<F>(&self, keep: F, newest_first: fn(&Task, &Task) -> Ordering) -> Vec<Task>
    where
        F: Fn(&Task) -> bool,
    {
        let state = self.state.read().await;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| keep(*task))
            .cloned()
            .collect();
        tasks.sort_by(newest_first);
        tasks.truncate(LATEST_LIMIT);
        tasks
    }
}

impl TaskGateway for InMemoryTaskGateway {
    async fn latest_completed(&self) -> Result<Vec<Task>, StorageError> {
        Ok(self
            .latest_where(
                |task| task.completed,
                |a, b| b.completed_at.cmp(&a.completed_at).then(b.id.cmp(&a.id)),
            )
            .await)
    }

    async fn latest_incomplete(&self) -> Result<Vec<Task>, StorageError> {
        Ok(self
            .latest_where(
                |task| !task.completed,
                |a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)),
            )
            .await)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Task>, StorageError> {
        Ok(self.state.read().await.tasks.get(&id).cloned())
    }

    async fn save(&self, mut task: Task) -> Result<Task, StorageError> {
        let mut state = self.state.write().await;
        let id = match task.id {
            Some(id) => {
                if let Some(existing) = state.tasks.get(&id) {
                    task.created_at = existing.created_at;
                }
                id
            }
            None => {
                state.last_id += 1;
                state.last_id
            }
        };
        task.id = Some(id);
        state.tasks.insert(id, task.clone());
        Ok(task)
    }
}
