mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path, |key| env::var(key).ok()).await
}

/// Reads the optional YAML file at `config_path`, then applies variables
/// resolved through `lookup` on top of it.
pub async fn load_from<F>(config_path: &str, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => {
            debug!("Loading configuration from: {}", config_path);
            serde_yaml::from_str(&config_str)?
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    apply_overrides(&mut config, lookup)?;
    Ok(config)
}

pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let watsonx = &mut config.watsonx;
    override_opt(&mut watsonx.api_key, get("API_KEY"));
    override_opt(&mut watsonx.project_id, get("PROJECT_ID"));
    override_opt(&mut watsonx.region, get("REGION"));
    override_opt(&mut watsonx.model_id, get("MODEL_ID"));
    override_opt(&mut watsonx.base_url, get("WATSONX_URL"));
    if let Some(iam_url) = get("IAM_URL") {
        watsonx.iam_url = iam_url;
    }

    let storage = &mut config.storage;
    override_opt(&mut storage.api_key, get("COS_API_KEY"));
    override_opt(&mut storage.instance_id, get("COS_RESOURCE_INSTANCE_ID"));
    override_opt(&mut storage.endpoint, get("COS_ENDPOINT"));
    override_opt(&mut storage.bucket, get("COS_BUCKET"));
    override_opt(&mut storage.object_key, get("COS_FILE"));
    override_opt(&mut storage.region, get("COS_REGION"));
    override_opt(&mut storage.access_key_id, get("AWS_ACCESS_KEY_ID"));
    override_opt(&mut storage.secret_access_key, get("AWS_SECRET_ACCESS_KEY"));

    if let Some(host) = get("HOST") {
        config.server.host = host;
    }
    if let Some(port) = get("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT: '{}'", port)))?;
    }
    if let Some(timeout) = get("HTTP_TIMEOUT_SECS") {
        let secs = timeout
            .parse()
            .map_err(|_| Error::config(format!("Invalid HTTP_TIMEOUT_SECS: '{}'", timeout)))?;
        config.http.timeout_secs = Some(secs);
    }

    Ok(())
}

fn override_opt(field: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *field = value;
    }
}
