//! SigV4 signing for S3-compatible requests made with HMAC keys.

use crate::{Error, Result};
use aws_credential_types::Credentials;
use aws_sigv4::{
    http_request::{
        PayloadChecksumKind, PercentEncodingMode, SignableBody, SignableRequest, SigningParams,
        SigningSettings, UriPathNormalizationMode, sign,
    },
    sign::v4,
};
use std::time::SystemTime;

#[derive(Debug, Clone)]
pub struct HmacCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Signs a bodiless GET, returning the headers to attach to it
/// (`authorization`, `x-amz-date`, `x-amz-content-sha256`).
pub fn sign_get(
    credentials: &HmacCredentials,
    url: &str,
    region: &str,
    time: SystemTime,
) -> Result<Vec<(String, String)>> {
    let identity = Credentials::new(
        credentials.access_key_id.clone(),
        credentials.secret_access_key.clone(),
        None,
        None,
        "cos-hmac",
    )
    .into();

    // S3 object keys are encoded once and never normalized.
    let mut settings = SigningSettings::default();
    settings.payload_checksum_kind = PayloadChecksumKind::XAmzSha256;
    settings.percent_encoding_mode = PercentEncodingMode::Single;
    settings.uri_path_normalization_mode = UriPathNormalizationMode::Disabled;

    let params: SigningParams<'_> = v4::SigningParams::builder()
        .identity(&identity)
        .region(region)
        .name("s3")
        .time(time)
        .settings(settings)
        .build()
        .map_err(|e| Error::internal(format!("Invalid signing parameters: {}", e)))?
        .into();

    let request = SignableRequest::new(
        "GET",
        url,
        std::iter::empty(),
        SignableBody::UnsignedPayload,
    )
    .map_err(|e| Error::storage(format!("Failed to prepare signed request: {}", e)))?;

    let (instructions, _signature) = sign(request, &params)
        .map_err(|e| Error::storage(format!("Failed to sign request: {}", e)))?
        .into_parts();

    Ok(instructions
        .headers()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect())
}
