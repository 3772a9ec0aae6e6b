use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// A fresh, not yet persisted task. The id is assigned by the store on save.
    pub fn new(title: String, description: Option<String>, now: DateTime<Utc>) -> Self {
        Task {
            id: None,
            title,
            description,
            completed: false,
            created_at: now,
            completed_at: None,
        }
    }

    // Re-stamps completed_at when the task is already done.
    pub fn mark_done(&mut self, now: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_task_is_active() {
        let now = Utc::now();
        let task = Task::new("Buy milk".into(), Some("2%".into()), now);

        assert_eq!(task.id, None);
        assert!(!task.completed);
        assert_eq!(task.created_at, now);
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn mark_done_sets_completion_pair() {
        let created = Utc::now();
        let mut task = Task::new("Buy milk".into(), None, created);

        task.mark_done(created + Duration::seconds(3));

        assert!(task.completed);
        assert_eq!(task.completed_at, Some(created + Duration::seconds(3)));
        assert_eq!(task.created_at, created);
    }

    #[test]
    fn mark_done_twice_restamps_completion() {
        let created = Utc::now();
        let mut task = Task::new("Buy milk".into(), None, created);

        task.mark_done(created + Duration::seconds(1));
        task.mark_done(created + Duration::seconds(9));

        assert!(task.completed);
        assert_eq!(task.completed_at, Some(created + Duration::seconds(9)));
    }
}
