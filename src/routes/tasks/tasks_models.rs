pub use crate::models::task_dto::{TaskRequest, TaskResponse};
