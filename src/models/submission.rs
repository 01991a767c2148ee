use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// A single stored submission.
///
/// There is no record ID: a submission's identity is its position in the
/// persisted array, and positions shift down when an earlier entry is
/// deleted. Callers holding an index across a delete may find it pointing
/// at a different record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub github_link: String,
    pub stopwatch_time: String,
}

/// Request body for `POST /submit`.
///
/// Fields are optional at the serde level so a missing field produces the
/// documented validation message instead of a deserialization error.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateSubmissionRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github_link: Option<String>,
    pub stopwatch_time: Option<String>,
}

impl CreateSubmissionRequest {
    pub fn into_submission(self) -> Result<Submission, AppError> {
        const MESSAGE: &str = "All fields are required";
        Ok(Submission {
            name: required(self.name, MESSAGE)?,
            email: required(self.email, MESSAGE)?,
            phone: required(self.phone, MESSAGE)?,
            github_link: required(self.github_link, MESSAGE)?,
            stopwatch_time: required(self.stopwatch_time, MESSAGE)?,
        })
    }
}

/// Request body for `POST /edit`.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct EditSubmissionRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github_link: Option<String>,
    pub stopwatch_time: Option<String>,
    /// Target position. A JSON number or a numeric string.
    #[schema(value_type = Object)]
    pub index: Option<Value>,
}

impl EditSubmissionRequest {
    /// Validate the request into the target index and the replacement
    /// record. A missing field or index is a validation error; a present
    /// but non-numeric or negative index is an invalid index.
    pub fn into_parts(self) -> Result<(usize, Submission), AppError> {
        const MESSAGE: &str = "All fields and index are required";
        let index = self
            .index
            .ok_or_else(|| AppError::Validation(MESSAGE.into()))?;
        let submission = Submission {
            name: required(self.name, MESSAGE)?,
            email: required(self.email, MESSAGE)?,
            phone: required(self.phone, MESSAGE)?,
            github_link: required(self.github_link, MESSAGE)?,
            stopwatch_time: required(self.stopwatch_time, MESSAGE)?,
        };
        Ok((parse_index_value(&index)?, submission))
    }
}

/// Query parameters for `GET /read`.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct ReadQuery {
    /// Zero-based position of the submission to fetch.
    pub index: Option<String>,
}

fn required(field: Option<String>, message: &str) -> Result<String, AppError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::Validation(message.into())),
    }
}

fn parse_index_value(value: &Value) -> Result<usize, AppError> {
    let index = match value {
        Value::Number(n) => n.as_i64().ok_or(AppError::InvalidIndex)?,
        Value::String(s) => s.trim().parse().map_err(|_| AppError::InvalidIndex)?,
        _ => return Err(AppError::InvalidIndex),
    };
    usize::try_from(index).map_err(|_| AppError::InvalidIndex)
}
