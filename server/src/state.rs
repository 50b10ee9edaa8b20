use skylapp_client::ShortenerApi;
use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn ShortenerApi>,
    pub short_base: Arc<str>,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(api: Arc<dyn ShortenerApi>, config: &Config) -> Self {
        AppState {
            api,
            short_base: Arc::from(config.short_base.as_str().trim_end_matches('/')),
            secure_cookies: config.secure_cookies,
        }
    }
}
