use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::health::ping))
        .routes(routes!(handlers::submission::create_submission))
        .routes(routes!(handlers::submission::read_submission))
        .routes(routes!(handlers::submission::edit_submission))
        .routes(routes!(handlers::submission::delete_submission))
}
