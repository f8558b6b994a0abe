use crate::config::Config;
use crate::store::KeyValue;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValue>,
    pub config: Arc<Config>,
}
