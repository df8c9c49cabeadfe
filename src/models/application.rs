use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Primary lifecycle stage of an application. Persisted as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
pub enum ApplicationStatus {
    #[default]
    #[sqlx(rename = "No Answer")]
    #[serde(rename = "No Answer")]
    NoAnswer,
    Interviewing,
    Offered,
    Accepted,
    Rejected,
    #[sqlx(rename = "Offer Rejected")]
    #[serde(rename = "Offer Rejected")]
    OfferRejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::NoAnswer,
        ApplicationStatus::Interviewing,
        ApplicationStatus::Offered,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
        ApplicationStatus::OfferRejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::NoAnswer => "No Answer",
            ApplicationStatus::Interviewing => "Interviewing",
            ApplicationStatus::Offered => "Offered",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::OfferRejected => "Offer Rejected",
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ApplicationStatus::Rejected)
    }

    /// Which rejection-detail inputs are live for this status.
    pub fn gating(&self) -> FieldGating {
        if self.is_rejected() {
            FieldGating::RejectionDetailsEditable
        } else {
            FieldGating::RejectionDetailsInert
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| {
                status.label().eq_ignore_ascii_case(wanted)
                    || format!("{:?}", status).eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("Unknown application status: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGating {
    RejectionDetailsEditable,
    RejectionDetailsInert,
}

impl FieldGating {
    pub fn rejection_details_enabled(&self) -> bool {
        matches!(self, FieldGating::RejectionDetailsEditable)
    }
}

/// Details recorded when an application ends in rejection. The two flags are
/// mutually exclusive: setting one clears the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionDetails {
    pub stage: Option<String>,
    pub received_coding_challenge: bool,
    pub received_interview: bool,
}

impl RejectionDetails {
    pub fn set_received_coding_challenge(&mut self, value: bool) {
        self.received_coding_challenge = value;
        if value {
            self.received_interview = false;
        }
    }

    pub fn set_received_interview(&mut self, value: bool) {
        self.received_interview = value;
        if value {
            self.received_coding_challenge = false;
        }
    }

    pub fn clear(&mut self) {
        *self = RejectionDetails::default();
    }

    /// Trims the stage, drops it when blank and resolves both flags being set
    /// in favour of the interview.
    pub fn normalized(&self) -> RejectionDetails {
        let stage = self
            .stage
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let received_interview = self.received_interview;
        RejectionDetails {
            stage,
            received_coding_challenge: self.received_coding_challenge && !received_interview,
            received_interview,
        }
    }

    /// The details as they should be persisted for a record with `status`.
    pub fn for_status(&self, status: ApplicationStatus) -> RejectionDetails {
        match status.gating() {
            FieldGating::RejectionDetailsEditable => self.normalized(),
            FieldGating::RejectionDetailsInert => RejectionDetails::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub status: ApplicationStatus,
    pub date_applied: String,
    pub rejection_stage: Option<String>,
    pub received_coding_challenge: bool,
    pub received_interview: bool,
}

impl Application {
    /// Rejection details that are meaningful for the current status.
    pub fn rejection_details(&self) -> RejectionDetails {
        RejectionDetails {
            stage: self.rejection_stage.clone(),
            received_coding_challenge: self.received_coding_challenge,
            received_interview: self.received_interview,
        }
        .for_status(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_labels_and_variant_names() {
        let parse = |s: &str| s.parse::<ApplicationStatus>();
        assert_eq!(parse("No Answer").unwrap(), ApplicationStatus::NoAnswer);
        assert_eq!(parse("offerrejected").unwrap(), ApplicationStatus::OfferRejected);
        assert_eq!(parse(" rejected ").unwrap(), ApplicationStatus::Rejected);
        assert!(parse("Ghosted").is_err());
    }

    #[test]
    fn only_rejected_enables_rejection_details() {
        for status in ApplicationStatus::ALL {
            assert_eq!(
                status.gating().rejection_details_enabled(),
                status == ApplicationStatus::Rejected
            );
        }
    }

    #[test]
    fn flags_are_mutually_exclusive() {
        let mut details = RejectionDetails::default();
        details.set_received_coding_challenge(true);
        details.set_received_interview(true);
        assert!(details.received_interview);
        assert!(!details.received_coding_challenge);

        details.set_received_coding_challenge(true);
        details.set_received_coding_challenge(true);
        assert!(details.received_coding_challenge);
        assert!(!details.received_interview);

        details.set_received_coding_challenge(false);
        assert!(!details.received_coding_challenge);
        assert!(!details.received_interview);
    }

    #[test]
    fn inert_details_are_cleared_for_active_statuses() {
        let details = RejectionDetails {
            stage: Some("Onsite".into()),
            received_coding_challenge: false,
            received_interview: true,
        };
        assert_eq!(
            details.for_status(ApplicationStatus::Offered),
            RejectionDetails::default()
        );
        assert_eq!(details.for_status(ApplicationStatus::Rejected), details);
    }

    #[test]
    fn normalizing_prefers_interview_and_drops_blank_stage() {
        let details = RejectionDetails {
            stage: Some("   ".into()),
            received_coding_challenge: true,
            received_interview: true,
        };
        let normalized = details.normalized();
        assert_eq!(normalized.stage, None);
        assert!(normalized.received_interview);
        assert!(!normalized.received_coding_challenge);
    }
}
