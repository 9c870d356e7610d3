//! Client for the external extraction service.
//!
//! The service does the document understanding (OCR + field extraction).
//! It receives the document as multipart form data and answers with:
//!
//! ```json
//! { "raw_text": "...", "extracted_data": { "document_type": "invoice", ... } }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use docintel::{ExtractionClient, UploadedFile};
//!
//! let client = ExtractionClient::from_env()?;
//! let file = UploadedFile::from_path("invoice.pdf".as_ref()).await?;
//! let output = client.extract(file).await?;
//! println!("{}", output.raw_text);
//! ```

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::env;

use crate::error::{ExtractionError, ExtractionResult};
use crate::upload::UploadedFile;

/// What the extraction service returns for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// Text recognised in the document
    pub raw_text: String,
    /// Field name -> value; shape is up to the service
    #[serde(default)]
    pub extracted_data: Map<String, Value>,
}

/// HTTP client for the extraction service.
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    endpoint: String,
    http: reqwest::Client,
}

impl ExtractionClient {
    /// Create a client for an explicit endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Create a client from the `EXTRACTION_SERVICE_URL` environment variable.
    pub fn from_env() -> ExtractionResult<Self> {
        let _ = dotenvy::dotenv();

        let endpoint = env::var("EXTRACTION_SERVICE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or(ExtractionError::NotConfigured)?;

        Ok(Self::new(endpoint))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one document (multipart part `file`) and parse the reply.
    ///
    /// No retry: the widget reports failures and the user resubmits.
    pub async fn extract(&self, file: UploadedFile) -> ExtractionResult<ExtractionOutput> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| ExtractionError::Request(format!("Invalid content type: {}", e)))?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ExtractionError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ExtractionError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(ExtractionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        parse_output(&body)
    }
}

/// Parse a 2xx body from the extraction service.
pub fn parse_output(body: &str) -> ExtractionResult<ExtractionOutput> {
    serde_json::from_str(body).map_err(|e| ExtractionError::InvalidResponse(e.to_string()))
}
