//! S3-compatible storage backend (MinIO, AWS S3, R2).
//!
//! Talks plain HTTP through `reqwest` and authenticates every call with the
//! SigV4 signer in [`super::sigv4`]. No cloud SDK is involved.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};
use reqwest::{Client, Method, Request, Response, StatusCode, Url};
use tracing::{debug, info};

use super::sigv4::{CanonicalHeaders, SignableRequest, Signer};
use super::{BlobStorage, StorageError};
use crate::blob::Blob;

/// Object storage on an S3-compatible endpoint.
///
/// Objects live at `{endpoint}/{bucket}/{id}`, or at `{endpoint}/{id}` when
/// the endpoint already names the bucket (virtual-hosted style).
#[derive(Debug, Clone)]
pub struct S3Storage {
    endpoint: String,
    bucket: String,
    signer: Signer,
    client: Client,
}

impl S3Storage {
    /// Per-call timeout for every request to the endpoint.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create the backend without touching the network.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Configuration` if the endpoint is not a valid
    /// URL or the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Url::parse(&endpoint).map_err(|e| {
            StorageError::configuration(format!("invalid S3 endpoint '{endpoint}': {e}"))
        })?;

        let client = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StorageError::configuration(e.to_string()))?;

        Ok(Self {
            endpoint,
            bucket: bucket.into(),
            signer: Signer::new(access_key, secret_key, region),
            client,
        })
    }

    /// Create the backend and make sure its bucket exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or bucket
    /// provisioning fails.
    pub async fn connect(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let storage = Self::new(endpoint, bucket, access_key, secret_key, region)?;
        storage.ensure_bucket().await?;
        Ok(storage)
    }

    /// Endpoint base URL without a trailing slash.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Whether the endpoint string already names the bucket.
    #[must_use]
    pub fn bucket_in_endpoint(&self) -> bool {
        self.endpoint.contains(&self.bucket)
    }

    /// Create the bucket unless the endpoint already embeds it.
    ///
    /// 200 (created) and 409 (already exists) both count as success, so
    /// this is safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns an error for any other status or a transport failure.
    pub async fn ensure_bucket(&self) -> Result<(), StorageError> {
        if self.bucket_in_endpoint() {
            debug!(endpoint = %self.endpoint, "Bucket embedded in endpoint, skipping creation");
            return Ok(());
        }

        let url = parse_url(&format!("{}/{}", self.endpoint, self.bucket))?;
        let response = self.send(Method::PUT, url, None).await?;

        match response.status() {
            StatusCode::OK => {
                info!(bucket = %self.bucket, "Bucket created");
                Ok(())
            }
            StatusCode::CONFLICT => {
                debug!(bucket = %self.bucket, "Bucket already exists");
                Ok(())
            }
            _ => Err(Self::status_error(response).await),
        }
    }

    /// URL of the object stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Configuration` if the URL cannot be parsed.
    pub fn object_url(&self, id: &str) -> Result<Url, StorageError> {
        let key = urlencoding::encode(id);
        let raw = if self.bucket_in_endpoint() {
            format!("{}/{key}", self.endpoint)
        } else {
            format!("{}/{}/{key}", self.endpoint, self.bucket)
        };
        parse_url(&raw)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        payload: Option<Vec<u8>>,
    ) -> Result<Response, StorageError> {
        debug!(method = %method, url = %url, "Sending signed request");

        let mut request = self.client.request(method, url).build()?;
        self.sign_request(
            &mut request,
            payload.as_deref().unwrap_or_default(),
            Utc::now(),
        )?;
        if let Some(payload) = payload {
            *request.body_mut() = Some(payload.into());
        }

        Ok(self.client.execute(request).await?)
    }

    /// Stamp and sign `request` in place.
    fn sign_request(
        &self,
        request: &mut Request,
        payload: &[u8],
        now: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let mut headers = CanonicalHeaders::new();
        for (name, value) in request.headers() {
            if let Ok(value) = value.to_str() {
                headers.append(name.as_str(), value);
            }
        }

        let url = request.url();
        let host = host_header(url);
        let signable = SignableRequest {
            method: request.method().as_str(),
            host: &host,
            path: url.path(),
            query: url.query().unwrap_or_default(),
            payload,
        };
        let authorization = self.signer.sign(&signable, &mut headers, now)?;

        let target = request.headers_mut();
        for (name, value) in headers.iter() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| StorageError::configuration(format!("invalid header name: {e}")))?;
            target.insert(name, header_value(&value)?);
        }
        target.insert(AUTHORIZATION, header_value(&authorization)?);

        Ok(())
    }

    async fn status_error(response: Response) -> StorageError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        StorageError::from_status(status, body)
    }
}

impl BlobStorage for S3Storage {
    async fn save(&self, blob: &Blob) -> Result<String, StorageError> {
        let url = self.object_url(&blob.id)?;
        let response = self.send(Method::PUT, url, Some(blob.data.clone())).await?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(blob.id.clone()),
            _ => Err(Self::status_error(response).await),
        }
    }

    async fn retrieve(&self, id: &str) -> Result<Blob, StorageError> {
        let url = self.object_url(id)?;
        let response = self.send(Method::GET, url, None).await?;

        match response.status() {
            StatusCode::OK => {
                let data = response.bytes().await?;
                Ok(Blob::new(id, data.to_vec()))
            }
            StatusCode::NOT_FOUND => Err(StorageError::not_found(id)),
            _ => Err(Self::status_error(response).await),
        }
    }
}

/// Host header value: host plus `:port` when the URL names a non-default port.
fn host_header(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

fn parse_url(raw: &str) -> Result<Url, StorageError> {
    Url::parse(raw)
        .map_err(|e| StorageError::configuration(format!("invalid object URL '{raw}': {e}")))
}

fn header_value(value: &str) -> Result<HeaderValue, StorageError> {
    HeaderValue::from_str(value)
        .map_err(|e| StorageError::configuration(format!("invalid header value: {e}")))
}
