//! Client module for the remote attendance service

mod client;
mod traits;

pub use client::{AttendanceClient, SubmitError};
pub use traits::AttendanceApi;

#[cfg(test)]
pub use traits::MockAttendanceApi;
