//! Application state definitions

use crate::state::AttendanceForm;
use serde::{Deserialize, Serialize};

/// Study program offered by the attendance form.
///
/// The serde names are the wire values the attendance service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Major {
    #[serde(rename = "Computer science")]
    ComputerScience,
    #[serde(rename = "Business administration")]
    BusinessAdministration,
    #[serde(rename = "MIS")]
    Mis,
    #[serde(rename = "Computer engineering")]
    ComputerEngineering,
    #[serde(rename = "Mechanical engineering")]
    MechanicalEngineering,
    #[serde(rename = "Electrical engineering")]
    ElectricalEngineering,
    #[serde(rename = "Other")]
    Other,
}

impl Major {
    /// All majors, in the order the selector cycles through them
    pub const ALL: [Major; 7] = [
        Major::ComputerScience,
        Major::BusinessAdministration,
        Major::Mis,
        Major::ComputerEngineering,
        Major::MechanicalEngineering,
        Major::ElectricalEngineering,
        Major::Other,
    ];

    /// Wire value sent to the attendance service
    pub fn as_str(&self) -> &'static str {
        match self {
            Major::ComputerScience => "Computer science",
            Major::BusinessAdministration => "Business administration",
            Major::Mis => "MIS",
            Major::ComputerEngineering => "Computer engineering",
            Major::MechanicalEngineering => "Mechanical engineering",
            Major::ElectricalEngineering => "Electrical engineering",
            Major::Other => "Other",
        }
    }

    /// Display label for the selector
    pub fn label(&self) -> &'static str {
        match self {
            Major::ComputerScience => "Computer Science",
            Major::BusinessAdministration => "Business Administration",
            Major::Mis => "MIS",
            Major::ComputerEngineering => "Computer Engineering",
            Major::MechanicalEngineering => "Mechanical Engineering",
            Major::ElectricalEngineering => "Electrical Engineering",
            Major::Other => "Other",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The validated tuple sent to the attendance endpoint.
///
/// Built fresh per submit attempt and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub major: Major,
}

/// Response body of the attendance service (success and error alike)
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceResponse {
    pub message: String,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    /// The attendance form
    pub form: AttendanceForm,
    /// A submission request is outstanding; disables the submit control
    pub submitting: bool,
    /// Last error banner, if any
    pub error: Option<String>,
    /// Last success banner, if any
    pub success: Option<String>,
}
