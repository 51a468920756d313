//! Google Gemini API client.
//!
//! This client implements both pipeline seams against the Gemini REST API:
//! [`MediaStore`] through the Files API and [`CaptionModel`] through
//! `generateContent`.
//!
//! # Upload protocol
//!
//! The Files API uses a resumable upload handshake. A start request
//! registers the file metadata and returns an upload URL in the
//! `x-goog-upload-url` response header; a second request sends the bytes
//! and finalizes in one step. Videos small enough for a caption workflow
//! never need chunked offsets.
//!
//! # Example
//!
//! ```no_run
//! use reelsmith_models::GeminiClient;
//! use reelsmith_interface::{CaptionModel, MediaStore};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let handle = client.upload(Path::new("clip.mp4")).await?;
//! let text = client.generate("Describe this video.", &handle).await?;
//! client.delete(&handle).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::env;
use std::path::Path;
use tracing::{debug, instrument};

use reelsmith_core::{GeminiConfig, MediaHandle};
use reelsmith_error::{GeminiError, GeminiErrorKind, ReelsmithResult};
use reelsmith_interface::{CaptionModel, MediaStore, VideoCapabilities};

use super::GeminiResult;
use super::mime::video_mime_for_path;
use super::wire::{
    ApiError, Content, FileMetadata, GenerateContentRequest, GenerateContentResponse, Part,
    StartUploadRequest, UploadFileResponse,
};

/// Client for the Google Gemini REST API.
///
/// Holds a configured [`reqwest::Client`] and the API key read from the
/// `GEMINI_API_KEY` environment variable. Cloning is cheap; the underlying
/// connection pool is shared.
#[derive(Clone)]
pub struct GeminiClient {
    /// HTTP client with the configured request timeout.
    http: reqwest::Client,
    /// API key sent in the `x-goog-api-key` header.
    api_key: String,
    /// Base URL without a version segment.
    base_url: String,
    /// Model identifier for generation requests.
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with default configuration.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use reelsmith_models::GeminiClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::new()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> ReelsmithResult<Self> {
        Self::new_internal(&GeminiConfig::default()).map_err(Into::into)
    }

    /// Create a client from configuration.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable;
    /// everything else comes from the config.
    #[instrument(name = "gemini_client_with_config", skip(config), fields(model = %config.model))]
    pub fn with_config(config: &GeminiConfig) -> ReelsmithResult<Self> {
        Self::new_internal(config).map_err(Into::into)
    }

    /// Internal constructor that returns Gemini-specific errors.
    fn new_internal(config: &GeminiConfig) -> GeminiResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model_name: config.model.clone(),
        })
    }

    /// Surface non-2xx responses as HTTP errors with the API's message.
    async fn check_status(
        response: reqwest::Response,
        context: &str,
    ) -> GeminiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable response body>".to_string());
        let message = serde_json::from_str::<ApiError>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);

        Err(GeminiError::new(GeminiErrorKind::HttpError {
            status_code: status.as_u16(),
            message: format!("{}: {}", context, message),
        }))
    }

    /// Upload a local file through the resumable Files API.
    #[instrument(skip(self), fields(path = %path.display()))]
    async fn upload_internal(&self, path: &Path) -> GeminiResult<MediaHandle> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::FileRead(e.to_string())))?;

        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_string());
        let mime_type = video_mime_for_path(path).unwrap_or_else(|| "video/mp4".to_string());

        debug!(bytes = bytes.len(), mime_type, "Starting resumable upload");

        // Register the upload and obtain the session URL
        let start = self
            .http
            .post(format!("{}/upload/v1beta/files", self.base_url))
            .header("x-goog-api-key", &self.api_key)
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", bytes.len())
            .header("X-Goog-Upload-Header-Content-Type", &mime_type)
            .json(&StartUploadRequest {
                file: FileMetadata { display_name },
            })
            .send()
            .await
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                    "Upload start request failed: {}",
                    e
                )))
            })?;
        let start = Self::check_status(start, "upload start").await?;

        let upload_url = start
            .headers()
            .get("x-goog-upload-url")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                GeminiError::new(GeminiErrorKind::ApiRequest(
                    "Upload start response missing x-goog-upload-url header".to_string(),
                ))
            })?;

        // Send the bytes and finalize in a single step
        let finalize = self
            .http
            .post(&upload_url)
            .header("X-Goog-Upload-Offset", "0")
            .header("X-Goog-Upload-Command", "upload, finalize")
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                    "Upload finalize request failed: {}",
                    e
                )))
            })?;
        let finalize = Self::check_status(finalize, "upload finalize").await?;

        let body = finalize.text().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to read upload response: {}",
                e
            )))
        })?;
        let uploaded: UploadFileResponse = serde_json::from_str(&body).map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to parse upload response: {}",
                e
            )))
        })?;

        Ok(uploaded.file.into_handle())
    }

    /// Fetch the file resource for a previously uploaded file.
    #[instrument(skip(self))]
    async fn get_file_internal(&self, id: &str) -> GeminiResult<MediaHandle> {
        let response = self
            .http
            .get(format!("{}/v1beta/{}", self.base_url, id))
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                    "File status request failed: {}",
                    e
                )))
            })?;
        let response = Self::check_status(response, "get file").await?;

        let body = response.text().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to read file resource: {}",
                e
            )))
        })?;
        let info: super::wire::FileInfo = serde_json::from_str(&body).map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to parse file resource: {}",
                e
            )))
        })?;

        Ok(info.into_handle())
    }

    /// Delete a remote file.
    #[instrument(skip(self, handle), fields(id = %handle.id()))]
    async fn delete_file_internal(&self, handle: &MediaHandle) -> GeminiResult<()> {
        let response = self
            .http
            .delete(format!("{}/v1beta/{}", self.base_url, handle.id()))
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                    "File delete request failed: {}",
                    e
                )))
            })?;
        Self::check_status(response, "delete file").await?;

        Ok(())
    }

    /// Run a generation request referencing an uploaded file.
    #[instrument(skip(self, prompt, media), fields(id = %media.id(), prompt_len = prompt.len()))]
    async fn generate_internal(&self, prompt: &str, media: &MediaHandle) -> GeminiResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::text(prompt),
                    Part::file_data(media.mime_type().clone(), media.uri().clone()),
                ],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                    "Generation request failed: {}",
                    e
                )))
            })?;
        let response = Self::check_status(response, "generateContent").await?;

        let body = response.text().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to read generation response: {}",
                e
            )))
        })?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to parse generation response: {}",
                e
            )))
        })?;

        if let Some(feedback) = &parsed.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                return Err(GeminiError::new(GeminiErrorKind::Blocked(reason.clone())));
            }
        }

        parsed
            .text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))
    }
}

#[async_trait]
impl MediaStore for GeminiClient {
    async fn upload(&self, path: &Path) -> ReelsmithResult<MediaHandle> {
        self.upload_internal(path).await.map_err(Into::into)
    }

    async fn status(&self, id: &str) -> ReelsmithResult<MediaHandle> {
        self.get_file_internal(id).await.map_err(Into::into)
    }

    async fn delete(&self, handle: &MediaHandle) -> ReelsmithResult<()> {
        self.delete_file_internal(handle).await.map_err(Into::into)
    }
}

#[async_trait]
impl CaptionModel for GeminiClient {
    async fn generate(&self, prompt: &str, media: &MediaHandle) -> ReelsmithResult<String> {
        self.generate_internal(prompt, media).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl VideoCapabilities for GeminiClient {}
