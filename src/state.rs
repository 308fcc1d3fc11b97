use std::sync::Arc;

use crate::api::Backend;
use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub backend: Arc<dyn Backend>,
}
