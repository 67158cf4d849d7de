pub mod breadcrumb;
pub mod request;

use anyhow::{Context, Result};
use shopfront_core::{ClientConfig, SessionContext};
use shopfront_infrastructure::ConfigService;
use shopfront_interaction::ApiClient;
use std::path::Path;

pub fn load_config(path: Option<&Path>) -> Result<ClientConfig> {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    service.get_config().context("Failed to load client configuration")
}

pub fn print_config(config: &ClientConfig) {
    println!("base_url = {}", config.base_url);
    println!("timeout  = {}s", config.timeout.as_secs());
}

/// Builds a client whose session holds `token` when one is given.
pub fn build_client(config: ClientConfig, token: Option<&str>) -> Result<ApiClient> {
    let session = SessionContext::new();
    if let Some(token) = token
        && !session.set_token(token)
    {
        tracing::warn!("Ignoring unusable --token value; sending requests unauthenticated");
    }
    Ok(ApiClient::new(config, session)?)
}
