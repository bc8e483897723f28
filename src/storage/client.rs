use super::{
    dataset::Dataset,
    signing::{self, HmacCredentials},
};
use crate::{Error, Result, auth::IamTokenClient, config::StorageConfig};
use async_trait::async_trait;
use std::time::SystemTime;
use tracing::debug;
use url::Url;

const DEFAULT_SIGNING_REGION: &str = "us-standard";

#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch_dataset(&self) -> Result<Dataset>;
}

enum StorageAuth<'a> {
    OAuth {
        api_key: &'a str,
        instance_id: Option<&'a str>,
    },
    Hmac(HmacCredentials),
}

/// Reads one object from IBM Cloud Object Storage through its S3-compatible API.
pub struct CosClient {
    http: reqwest::Client,
    tokens: IamTokenClient,
    config: StorageConfig,
}

impl CosClient {
    pub fn new(http: reqwest::Client, tokens: IamTokenClient, config: StorageConfig) -> Self {
        Self {
            http,
            tokens,
            config,
        }
    }

    pub fn object_url(&self) -> Result<Url> {
        let endpoint = required(&self.config.endpoint, "COS_ENDPOINT")?;
        let bucket = required(&self.config.bucket, "COS_BUCKET")?;
        let key = required(&self.config.object_key, "COS_FILE")?;

        let endpoint = if endpoint.contains("://") {
            endpoint.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", endpoint.trim_end_matches('/'))
        };

        let key = key
            .split('/')
            .map(urlencoding::encode)
            .collect::<Vec<_>>()
            .join("/");
        let raw = format!("{}/{}/{}", endpoint, urlencoding::encode(bucket), key);
        Url::parse(&raw).map_err(|e| Error::config(format!("Invalid COS_ENDPOINT: {}", e)))
    }

    // OAuth takes precedence when both credential kinds are configured.
    fn auth(&self) -> Result<StorageAuth<'_>> {
        if let Some(api_key) = self.config.api_key.as_deref() {
            return Ok(StorageAuth::OAuth {
                api_key,
                instance_id: self.config.instance_id.as_deref(),
            });
        }

        match (
            &self.config.access_key_id,
            &self.config.secret_access_key,
        ) {
            (Some(access_key_id), Some(secret_access_key)) => {
                Ok(StorageAuth::Hmac(HmacCredentials {
                    access_key_id: access_key_id.clone(),
                    secret_access_key: secret_access_key.clone(),
                }))
            }
            _ => Err(Error::config(
                "No object storage credentials: set COS_API_KEY or AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY",
            )),
        }
    }
}

fn required<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or_else(|| Error::config(format!("{} is not set", name)))
}

#[async_trait]
impl DatasetSource for CosClient {
    async fn fetch_dataset(&self) -> Result<Dataset> {
        let url = self.object_url()?;
        let auth = self.auth()?;

        let mut request = self.http.get(url.clone());
        match auth {
            StorageAuth::OAuth {
                api_key,
                instance_id,
            } => {
                let token = self.tokens.fetch_token(api_key).await?;
                request = request.bearer_auth(token);
                if let Some(instance_id) = instance_id {
                    request = request.header("ibm-service-instance-id", instance_id);
                }
            }
            StorageAuth::Hmac(credentials) => {
                let region = self
                    .config
                    .region
                    .as_deref()
                    .unwrap_or(DEFAULT_SIGNING_REGION);
                let signed =
                    signing::sign_get(&credentials, url.as_str(), region, SystemTime::now())?;
                for (name, value) in signed {
                    request = request.header(name, value);
                }
            }
        }

        debug!("Fetching dataset from {}", url);

        let response = request
            .send()
            .await
            .map_err(|e| Error::storage(format!("Failed to fetch object: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::storage(format!(
                "Object request failed with status {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::storage(format!("Failed to read object body: {}", e)))?;

        debug!("Fetched {} bytes of dataset", bytes.len());

        Dataset::from_csv(&bytes)
    }
}
