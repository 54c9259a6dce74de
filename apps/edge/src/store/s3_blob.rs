use async_trait::async_trait;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use futures_util::stream::{self, StreamExt};

use super::{BlobStore, ObjectBody, SiteObject, StoreError};

/// Published site files in a single S3 (or MinIO) bucket.
#[derive(Clone)]
pub struct S3BlobStore {
    client: S3Client,
    bucket: String,
}

impl S3BlobStore {
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn get(&self, key: &str) -> Result<Option<SiteObject>, StoreError> {
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) if is_missing(&e) => return Ok(None),
            Err(e) => return Err(StoreError::S3(DisplayErrorContext(&e).to_string())),
        };

        let content_length = output
            .content_length()
            .and_then(|len| u64::try_from(len).ok());
        let etag = output.e_tag().map(str::to_owned);

        Ok(Some(SiteObject {
            body: into_object_body(output.body),
            content_length,
            etag,
        }))
    }
}

fn is_missing(err: &SdkError<GetObjectError, HttpResponse>) -> bool {
    let code = err.as_service_error().and_then(|e| e.code());
    let status = err.raw_response().map(|raw| raw.status().as_u16());
    is_missing_object(code, status)
}

/// `NoSuchKey`, or a bare 404 (MinIO and some S3-compatible stores send no body,
/// which the SDK reports as `NotFound` or with no code at all). Any other code,
/// including `NoSuchBucket`, is a backend fault.
fn is_missing_object(code: Option<&str>, status: Option<u16>) -> bool {
    match code {
        Some(code) => code == "NoSuchKey" || (code == "NotFound" && status == Some(404)),
        None => status == Some(404),
    }
}

/// Adapts the SDK body into a chunked stream without reading it up front.
fn into_object_body(body: ByteStream) -> ObjectBody {
    stream::unfold(body, |mut body| async move {
        body.next().await.map(|chunk| {
            let chunk = chunk.map_err(|e| StoreError::Stream(e.to_string()));
            (chunk, body)
        })
    })
    .boxed()
}
