//! JSON documents in one S3 bucket, versioned by ETag.

use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;

const HTTP_PRECONDITION_FAILED: u16 = 412;

/// A decoded document and the ETag it was read at.
#[derive(Debug)]
pub struct Versioned<T> {
    pub value: T,
    pub etag: String,
}

/// How a write treats an existing object.
#[derive(Debug, Clone, Copy)]
pub enum WriteMode<'a> {
    Overwrite,
    /// Fail if the key exists.
    Create,
    /// Fail unless the object still has this ETag.
    Replace(&'a str),
}

#[derive(Clone)]
pub struct JsonBucket {
    client: Client,
    bucket: String,
}

impl JsonBucket {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.bucket
    }

    /// Read and decode `key`. A missing key is `Ok(None)`.
    pub async fn read<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<Versioned<T>>, StorageError> {
        let response = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let err = e.into_service_error();
                if err.is_no_such_key() {
                    return Ok(None);
                }
                return Err(StorageError::GetObject(format!("{key}: {err}")));
            }
        };

        let etag = response.e_tag().unwrap_or_default().to_string();
        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| StorageError::GetObject(format!("{key}: {e}")))?
            .into_bytes();
        let value = serde_json::from_slice(&bytes)?;
        Ok(Some(Versioned { value, etag }))
    }

    /// Encode `value` as pretty JSON and write it to `key`. Returns the new
    /// ETag. A write whose mode does not hold is
    /// [`StorageError::PreconditionFailed`].
    pub async fn write<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        mode: WriteMode<'_>,
    ) -> Result<String, StorageError> {
        let body = serde_json::to_vec_pretty(value)?;
        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("application/json")
            .body(ByteStream::from(body));
        let request = match mode {
            WriteMode::Overwrite => request,
            WriteMode::Create => request.if_none_match("*"),
            WriteMode::Replace(etag) => request.if_match(etag),
        };

        match request.send().await {
            Ok(response) => Ok(response.e_tag().unwrap_or_default().to_string()),
            Err(e) => {
                let status = e.raw_response().map(|r| r.status().as_u16());
                if status == Some(HTTP_PRECONDITION_FAILED) {
                    Err(StorageError::PreconditionFailed {
                        key: key.to_string(),
                    })
                } else {
                    Err(StorageError::PutObject(format!(
                        "{key}: {}",
                        e.into_service_error()
                    )))
                }
            }
        }
    }
}
