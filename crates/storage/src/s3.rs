//! S3-backed object store.
//!
//! Works against AWS proper or any S3-compatible endpoint (set
//! `S3_ENDPOINT` for the latter). Objects are written with a public-read
//! ACL and addressed virtual-host style: `https://{bucket}.{host}/{key}`.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;

use crate::{ObjectStore, StorageError};

pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
    /// Precomputed `https://{bucket}.{host}` base for public URLs.
    public_base: String,
}

impl S3Store {
    /// Connect to the bucket. Credentials come from the standard AWS
    /// environment variables / profile chain.
    pub async fn connect(bucket: &str, region: &str, endpoint: Option<&str>) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
        if let Some(url) = endpoint {
            loader = loader.endpoint_url(url);
        }
        let sdk_config = loader.load().await;

        let public_base = match endpoint {
            Some(url) => {
                let host = url
                    .trim_start_matches("https://")
                    .trim_start_matches("http://")
                    .trim_end_matches('/');
                format!("https://{bucket}.{host}")
            }
            None => format!("https://{bucket}.s3.amazonaws.com"),
        };

        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            bucket: bucket.to_string(),
            public_base,
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .acl(ObjectCannedAcl::PublicRead)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;

        tracing::debug!(bucket = %self.bucket, key, "Object uploaded");

        Ok(format!("{}/{key}", self.public_base))
    }
}
