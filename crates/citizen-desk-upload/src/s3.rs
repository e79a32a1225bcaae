// crates/citizen-desk-upload/src/s3.rs
// ============================================================================
// Module: S3 Blob Store
// Description: S3-backed attachment storage.
// Purpose: Store uploaded attachments in S3-compatible object storage.
// Dependencies: aws-config, aws-sdk-s3, citizen-desk-config
// ============================================================================

//! ## Overview
//! [`S3BlobStore`] writes each attachment as a single object under an
//! optional bucket prefix. Returned URLs use the configured public base URL,
//! then a path-style URL on the custom endpoint, and finally an `s3://` URI.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use citizen_desk_config::ObjectStoreConfig;

use crate::blob::BlobStore;
use crate::blob::BlobStoreError;

// ============================================================================
// SECTION: Store
// ============================================================================

/// S3-backed attachment store.
pub struct S3BlobStore {
    /// S3 client.
    client: Client,
    /// Bucket name.
    bucket: String,
    /// Normalized key prefix (empty or ending in `/`).
    prefix: String,
    /// Base URL used to build returned object URLs.
    url_base: Option<String>,
}

impl S3BlobStore {
    /// Creates an S3 store from validated object-store configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BlobStoreError`] when the configuration is unusable.
    pub async fn from_config(config: &ObjectStoreConfig) -> Result<Self, BlobStoreError> {
        if config.bucket.trim().is_empty() {
            return Err(BlobStoreError::Invalid("bucket must be set".to_string()));
        }
        let prefix = normalize_prefix(config.prefix.as_deref())?;
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint.trim());
        }
        let shared_config = loader.load().await;
        let mut s3_builder = aws_sdk_s3::config::Builder::from(&shared_config);
        if config.force_path_style {
            s3_builder = s3_builder.force_path_style(true);
        }
        let client = Client::from_conf(s3_builder.build());
        let bucket = config.bucket.trim().to_string();
        let url_base = config
            .public_base_url
            .as_deref()
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .or_else(|| {
                config.endpoint.as_deref().map(|endpoint| {
                    format!("{}/{bucket}", endpoint.trim().trim_end_matches('/'))
                })
            });
        Ok(Self {
            client,
            bucket,
            prefix,
            url_base,
        })
    }

    /// Returns the bucket key for an object name.
    fn object_key(&self, object_name: &str) -> String {
        format!("{}{object_name}", self.prefix)
    }

    /// Returns the retrievable URL for a bucket key.
    fn object_url(&self, key: &str) -> String {
        match &self.url_base {
            Some(base) => format!("{base}/{key}"),
            None => format!("s3://{}/{key}", self.bucket),
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put(
        &self,
        object_name: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<String, BlobStoreError> {
        let key = self.object_key(object_name);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|err| BlobStoreError::Io(err.to_string()))?;
        Ok(self.object_url(&key))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Normalizes an optional prefix into a safe S3 path prefix.
pub(crate) fn normalize_prefix(prefix: Option<&str>) -> Result<String, BlobStoreError> {
    let Some(prefix) = prefix else {
        return Ok(String::new());
    };
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    for segment in trimmed.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
            return Err(BlobStoreError::Invalid(format!("invalid prefix segment: {segment}")));
        }
    }
    Ok(format!("{trimmed}/"))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use super::normalize_prefix;

    #[test]
    fn normalize_prefix_none_is_empty() {
        assert_eq!(normalize_prefix(None).unwrap(), "");
    }

    #[test]
    fn normalize_prefix_trims_and_appends_slash() {
        assert_eq!(normalize_prefix(Some("/citizen/uploads/")).unwrap(), "citizen/uploads/");
    }

    #[test]
    fn normalize_prefix_empty_or_root_is_empty() {
        assert_eq!(normalize_prefix(Some("///")).unwrap(), "");
        assert_eq!(normalize_prefix(Some("")).unwrap(), "");
    }

    #[test]
    fn normalize_prefix_rejects_invalid_segments() {
        assert!(normalize_prefix(Some("bad/../prefix")).is_err());
        assert!(normalize_prefix(Some("bad//prefix")).is_err());
        assert!(normalize_prefix(Some("bad\\prefix")).is_err());
    }
}
