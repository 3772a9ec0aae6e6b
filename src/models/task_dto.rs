use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

// Create task request. A missing or null title deserializes as blank and fails validation.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskRequest {
    #[serde(default, deserialize_with = "null_as_blank")]
    #[validate(
        custom(function = "not_blank"),
        length(max = 200, message = "Title max 200 chars")
    )]
    pub title: String,
    #[validate(length(max = 2000, message = "Description max 2000 chars"))]
    pub description: Option<String>,
}

fn null_as_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("Title is required".into());
        return Err(error);
    }
    Ok(())
}

// Task as seen by clients
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}
