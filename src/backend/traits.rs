//! Trait abstraction for the attendance service client to enable mocking in tests

use crate::backend::client::SubmitError;
use crate::state::SubmissionRecord;
use async_trait::async_trait;

/// Trait for attendance service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceApi: Send + Sync {
    /// Submit one attendance record.
    ///
    /// Returns the server's confirmation message on success.
    async fn submit(&self, record: SubmissionRecord) -> Result<String, SubmitError>;
}
