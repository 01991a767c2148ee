use axum::Json;

use crate::models::shared::SuccessBody;

#[utoipa::path(
    get,
    path = "/ping",
    tag = "Health",
    operation_id = "ping",
    summary = "Liveness check",
    responses(
        (status = 200, description = "Service is up", body = SuccessBody),
    ),
)]
pub async fn ping() -> Json<SuccessBody> {
    Json(SuccessBody::ok())
}
