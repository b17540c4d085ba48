//! HTTP client for the remote attendance service

use crate::backend::traits::AttendanceApi;
use crate::config::TuiConfig;
use crate::state::{AttendanceResponse, SubmissionRecord};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Default attendance endpoint
pub const DEFAULT_ENDPOINT: &str = "https://rgt-attendance-backend.onrender.com/attendance";

/// Shown when an error response carries no usable message
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while submitting this form";

/// Shown when a success response carries no usable message
const DEFAULT_SUCCESS_MESSAGE: &str = "Attendance recorded";

/// Why a submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The service answered with an error response; carries its message
    /// (or the generic fallback when the body had none)
    #[error("{0}")]
    Rejected(String),
    /// No response was received at all
    #[error("Could not reach the attendance service")]
    Unreachable(#[from] reqwest::Error),
}

/// Client for the attendance service
#[derive(Clone)]
pub struct AttendanceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AttendanceClient {
    /// Create a client pointed at the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Create a client from user configuration.
    ///
    /// The `ATTENDANCE_ENDPOINT` env var wins over the config file.
    pub fn from_config(config: &TuiConfig) -> Self {
        let endpoint = std::env::var("ATTENDANCE_ENDPOINT")
            .ok()
            .or_else(|| config.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    /// The endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AttendanceApi for AttendanceClient {
    async fn submit(&self, record: SubmissionRecord) -> Result<String, SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting attendance record");

        let response = self.client.post(&self.endpoint).json(&record).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let message = serde_json::from_str::<AttendanceResponse>(&body)
            .map(|r| r.message)
            .ok();

        if status.is_success() {
            let message = message.unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
            tracing::info!(%message, "attendance recorded");
            Ok(message)
        } else {
            let message = message.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
            tracing::warn!(%status, %message, "attendance submission rejected");
            Err(SubmitError::Rejected(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Major;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_record() -> SubmissionRecord {
        SubmissionRecord {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "0541234567".to_string(),
            major: Major::ComputerScience,
        }
    }

    #[tokio::test]
    async fn test_submit_posts_exact_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/attendance"))
            .and(body_json(serde_json::json!({
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "phoneNumber": "0541234567",
                "major": "Computer science",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Recorded"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = AttendanceClient::new(format!("{}/attendance", server.uri()));
        let message = client.submit(test_record()).await.expect("submit");
        assert_eq!(message, "Recorded");
    }

    #[tokio::test]
    async fn test_submit_surfaces_server_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/attendance"))
            .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "message": "Duplicate entry"
            })))
            .mount(&server)
            .await;

        let client = AttendanceClient::new(format!("{}/attendance", server.uri()));
        let err = client.submit(test_record()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Rejected(_)));
        assert_eq!(err.to_string(), "Duplicate entry");
    }

    #[tokio::test]
    async fn test_error_without_message_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/attendance"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(serde_json::json!({"status": "bad"})),
            )
            .mount(&server)
            .await;

        let client = AttendanceClient::new(format!("{}/attendance", server.uri()));
        let err = client.submit(test_record()).await.unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_error_with_empty_body_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/attendance"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = AttendanceClient::new(format!("{}/attendance", server.uri()));
        let err = client.submit(test_record()).await.unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_success_without_message_uses_default_confirmation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/attendance"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = AttendanceClient::new(format!("{}/attendance", server.uri()));
        let message = client.submit(test_record()).await.expect("submit");
        assert_eq!(message, DEFAULT_SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_distinguished_from_rejection() {
        // A pooled wiremock server keeps listening after drop, so reserve a
        // port with a plain listener and release it to get a dead endpoint.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let endpoint = format!("http://{}/attendance", listener.local_addr().expect("addr"));
        drop(listener);

        let client = AttendanceClient::new(endpoint);
        let err = client.submit(test_record()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Unreachable(_)));
        assert_eq!(err.to_string(), "Could not reach the attendance service");
    }
}
