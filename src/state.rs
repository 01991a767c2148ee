use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::SubmissionStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SubmissionStore>,
    pub config: AppConfig,
}
