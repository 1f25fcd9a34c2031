use crate::model::functions::{HttpBackend, SupabaseAuth};
use crate::model::types::*;
use axum::extract::FromRef;

#[derive(FromRef, Clone, Debug)]
pub struct AppState {
    pub backend: HttpBackend,
    pub identity: SupabaseAuth,
    pub leptos_options: leptos::config::LeptosOptions,
}

impl AppState {
    pub fn new(leptos_options: leptos::config::LeptosOptions) -> Result<Self, Error> {
        tracing::info!("Loading configuration for app_state...");
        if dotenvy::dotenv().is_err() {
            tracing::warn!("didn't find env file");
        };
        let reqwest_client = reqwest::Client::new();
        let backend_config = BackendConfig::from_env();
        let identity_config = IdentityConfig::from_env()?;
        tracing::info!(backend = %backend_config.base_url, identity = %identity_config.url, "configuration loaded");

        Ok(Self {
            backend: HttpBackend::new(reqwest_client.clone(), backend_config),
            identity: SupabaseAuth::new(reqwest_client, identity_config),
            leptos_options,
        })
    }
}
