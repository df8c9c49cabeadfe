use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::models::application::{Application, ApplicationStatus, FieldGating, RejectionDetails};
use crate::utils::time::format_applied_date;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateApplicationPayload {
    #[validate(length(min = 1, message = "company is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "position is required"))]
    pub position: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[validate(length(min = 1, message = "date applied is required"))]
    pub date_applied: String,
    #[serde(default)]
    pub rejection: RejectionDetails,
}

impl CreateApplicationPayload {
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        status: ApplicationStatus,
        date_applied: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            status,
            date_applied: date_applied.into(),
            rejection: RejectionDetails::default(),
        }
    }

    pub fn with_rejection(mut self, rejection: RejectionDetails) -> Self {
        self.rejection = rejection;
        self
    }

    /// Trimmed copy with rejection details reduced to what the status allows.
    pub fn normalized(&self) -> Self {
        Self {
            company: self.company.trim().to_string(),
            position: self.position.trim().to_string(),
            status: self.status,
            date_applied: self.date_applied.trim().to_string(),
            rejection: self.rejection.for_status(self.status),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusPayload {
    pub status: ApplicationStatus,
    #[serde(default)]
    pub rejection: RejectionDetails,
}

impl UpdateStatusPayload {
    pub fn new(status: ApplicationStatus) -> Self {
        Self {
            status,
            rejection: RejectionDetails::default(),
        }
    }

    pub fn rejected(
        stage: Option<&str>,
        received_coding_challenge: bool,
        received_interview: bool,
    ) -> Self {
        Self {
            status: ApplicationStatus::Rejected,
            rejection: RejectionDetails {
                stage: stage.map(str::to_string),
                received_coding_challenge,
                received_interview,
            },
        }
    }

    pub fn normalized(&self) -> Self {
        Self {
            status: self.status,
            rejection: self.rejection.for_status(self.status),
        }
    }
}

/// Columns a search may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchColumn {
    #[default]
    Company,
    Position,
    Status,
}

impl SearchColumn {
    pub fn column_name(&self) -> &'static str {
        match self {
            SearchColumn::Company => "company",
            SearchColumn::Position => "position",
            SearchColumn::Status => "status",
        }
    }
}

impl fmt::Display for SearchColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for SearchColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "company" => Ok(SearchColumn::Company),
            "position" => Ok(SearchColumn::Position),
            "status" => Ok(SearchColumn::Status),
            other => Err(format!("Unknown search column: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchQuery {
    pub column: SearchColumn,
    #[validate(length(min = 1, message = "please enter a search term"))]
    pub term: String,
}

impl SearchQuery {
    pub fn new(column: SearchColumn, term: impl Into<String>) -> Self {
        Self {
            column,
            term: term.into(),
        }
    }

    pub fn normalized(&self) -> Self {
        Self {
            column: self.column,
            term: self.term.trim().to_string(),
        }
    }
}

/// Editable form state for one application. Rejection details follow the
/// status: they are only writable while it is `Rejected` and are reset when
/// it moves away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub company: String,
    pub position: String,
    pub date_applied: String,
    status: ApplicationStatus,
    rejection: RejectionDetails,
}

impl ApplicationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn rejection(&self) -> &RejectionDetails {
        &self.rejection
    }

    pub fn gating(&self) -> FieldGating {
        self.status.gating()
    }

    pub fn set_status(&mut self, status: ApplicationStatus) -> FieldGating {
        self.status = status;
        let gating = status.gating();
        if !gating.rejection_details_enabled() {
            self.rejection.clear();
        }
        gating
    }

    pub fn set_date_applied(&mut self, date: NaiveDate) {
        self.date_applied = format_applied_date(date);
    }

    /// Returns false when the status keeps the field inert.
    pub fn set_rejection_stage(&mut self, stage: impl Into<String>) -> bool {
        if !self.gating().rejection_details_enabled() {
            return false;
        }
        self.rejection.stage = Some(stage.into());
        true
    }

    pub fn set_received_coding_challenge(&mut self, value: bool) -> bool {
        if !self.gating().rejection_details_enabled() {
            return false;
        }
        self.rejection.set_received_coding_challenge(value);
        true
    }

    pub fn set_received_interview(&mut self, value: bool) -> bool {
        if !self.gating().rejection_details_enabled() {
            return false;
        }
        self.rejection.set_received_interview(value);
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_create_payload(&self) -> CreateApplicationPayload {
        CreateApplicationPayload {
            company: self.company.clone(),
            position: self.position.clone(),
            status: self.status,
            date_applied: self.date_applied.clone(),
            rejection: self.rejection.clone(),
        }
    }

    pub fn to_status_payload(&self) -> UpdateStatusPayload {
        UpdateStatusPayload {
            status: self.status,
            rejection: self.rejection.clone(),
        }
    }
}

impl From<&Application> for ApplicationDraft {
    fn from(app: &Application) -> Self {
        Self {
            company: app.company.clone(),
            position: app.position.clone(),
            date_applied: app.date_applied.clone(),
            status: app.status,
            rejection: app.rejection_details(),
        }
    }
}
