// HTTP clients for the two external collaborators: the sales-reps data
// source (GET, JSON payload) and the AI answering endpoint (POST question,
// JSON answer).
//
// Both clients are plain request/response. Errors are returned to the
// caller; converting them into channel events is the app task's job.

use thiserror::Error;

use crate::directory::{DirectoryPayload, Representative};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, body or decode failure from reqwest.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The collaborator answered with a non-success status.
    #[error("API returned status {status}")]
    Status { status: reqwest::StatusCode },
}

// ---------------------------------------------------------------------------
// DirectoryClient
// ---------------------------------------------------------------------------

/// Client for the representatives data source.
pub struct DirectoryClient {
    http: reqwest::Client,
    url: String,
}

impl DirectoryClient {
    pub fn new(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }

    /// Fetch and decode the directory.
    ///
    /// Non-success statuses are errors. A missing `salesReps` field decodes
    /// as an empty list, and boundary normalization (value clamping) is
    /// applied before the data is handed back.
    pub async fn fetch(&self) -> Result<Vec<Representative>, ApiError> {
        let resp = self.http.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }
        let payload: DirectoryPayload = resp.json().await?;
        Ok(payload.into_normalized())
    }
}

// ---------------------------------------------------------------------------
// AssistantClient
// ---------------------------------------------------------------------------

/// Expected response shape from the AI endpoint.
#[derive(Debug, serde::Deserialize)]
struct AnswerPayload {
    answer: String,
}

/// Client for the AI answering endpoint.
pub struct AssistantClient {
    http: reqwest::Client,
    url: String,
}

impl AssistantClient {
    pub fn new(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }

    /// Submit a question and return the answer text.
    ///
    /// A non-success status or a payload without a string `answer` field is
    /// an error; the caller decides what failure means for the UI.
    pub async fn ask(&self, question: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({ "question": question });
        let resp = self.http.post(&self.url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }
        let payload: AnswerPayload = resp.json().await?;
        Ok(payload.answer)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
