use serde::Serialize;

use crate::error::AppError;

/// Body returned by every endpoint that has no payload of its own.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SuccessBody {
    #[schema(example = true)]
    pub success: bool,
}

impl SuccessBody {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Parse a client-supplied index arriving as a query or path string.
///
/// Absent, non-numeric, and negative values are all invalid indices; range
/// checking against the collection happens in the store.
pub fn parse_index(raw: Option<&str>) -> Result<usize, AppError> {
    let raw = raw.ok_or(AppError::InvalidIndex)?;
    let value: i64 = raw.trim().parse().map_err(|_| AppError::InvalidIndex)?;
    usize::try_from(value).map_err(|_| AppError::InvalidIndex)
}
