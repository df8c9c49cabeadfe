use crate::models::application::{Application, ApplicationStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display categories of the outcome chart, in legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCategory {
    NoAnswer,
    Interviewing,
    Offered,
    Accepted,
    OfferRejected,
    RejectedWithoutInterview,
    RejectedAfterCodingChallenge,
    RejectedAfterInterview,
}

impl OutcomeCategory {
    pub const ALL: [OutcomeCategory; 8] = [
        OutcomeCategory::NoAnswer,
        OutcomeCategory::Interviewing,
        OutcomeCategory::Offered,
        OutcomeCategory::Accepted,
        OutcomeCategory::OfferRejected,
        OutcomeCategory::RejectedWithoutInterview,
        OutcomeCategory::RejectedAfterCodingChallenge,
        OutcomeCategory::RejectedAfterInterview,
    ];

    /// Rejections are split by how far the process got; an interview outranks
    /// a coding challenge.
    pub fn classify(
        status: ApplicationStatus,
        received_interview: bool,
        received_coding_challenge: bool,
    ) -> Self {
        match status {
            ApplicationStatus::NoAnswer => OutcomeCategory::NoAnswer,
            ApplicationStatus::Interviewing => OutcomeCategory::Interviewing,
            ApplicationStatus::Offered => OutcomeCategory::Offered,
            ApplicationStatus::Accepted => OutcomeCategory::Accepted,
            ApplicationStatus::OfferRejected => OutcomeCategory::OfferRejected,
            ApplicationStatus::Rejected if received_interview => {
                OutcomeCategory::RejectedAfterInterview
            }
            ApplicationStatus::Rejected if received_coding_challenge => {
                OutcomeCategory::RejectedAfterCodingChallenge
            }
            ApplicationStatus::Rejected => OutcomeCategory::RejectedWithoutInterview,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutcomeCategory::NoAnswer => "No Answer",
            OutcomeCategory::Interviewing => "Interviewing",
            OutcomeCategory::Offered => "Offered",
            OutcomeCategory::Accepted => "Accepted",
            OutcomeCategory::OfferRejected => "Offer Rejected",
            OutcomeCategory::RejectedWithoutInterview => "Rejected without Interview",
            OutcomeCategory::RejectedAfterCodingChallenge => "Rejected after Coding Challenge",
            OutcomeCategory::RejectedAfterInterview => "Rejected after Interview",
        }
    }

    /// Named colour used for this category's chart wedge.
    pub fn color(&self) -> &'static str {
        match self {
            OutcomeCategory::NoAnswer => "lightgrey",
            OutcomeCategory::Interviewing => "gold",
            OutcomeCategory::Offered => "lightgreen",
            OutcomeCategory::Accepted => "blue",
            OutcomeCategory::OfferRejected => "lightblue",
            OutcomeCategory::RejectedWithoutInterview => "salmon",
            OutcomeCategory::RejectedAfterCodingChallenge => "orangered",
            OutcomeCategory::RejectedAfterInterview => "red",
        }
    }
}

impl fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&Application> for OutcomeCategory {
    fn from(app: &Application) -> Self {
        OutcomeCategory::classify(app.status, app.received_interview, app.received_coding_challenge)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub category: OutcomeCategory,
    pub label: String,
    pub count: u64,
    pub percentage: f64,
    pub color: String,
}

impl ChartSlice {
    /// Percentage formatted the way the chart annotates wedges.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Counts per outcome category. Every category is always present; zero
/// counts are only dropped when the report is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeReport {
    counts: [u64; 8],
}

impl OutcomeReport {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (ApplicationStatus, bool, bool)>,
    {
        let mut report = OutcomeReport::default();
        for (status, received_interview, received_coding_challenge) in rows {
            report.record(OutcomeCategory::classify(
                status,
                received_interview,
                received_coding_challenge,
            ));
        }
        report
    }

    pub fn from_applications<'a, I>(applications: I) -> Self
    where
        I: IntoIterator<Item = &'a Application>,
    {
        let mut report = OutcomeReport::default();
        for app in applications {
            report.record(OutcomeCategory::from(app));
        }
        report
    }

    pub fn record(&mut self, category: OutcomeCategory) {
        self.counts[category.index()] += 1;
    }

    pub fn count(&self, category: OutcomeCategory) -> u64 {
        self.counts[category.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// All eight categories with their counts, zeros included.
    pub fn counts(&self) -> Vec<(OutcomeCategory, u64)> {
        OutcomeCategory::ALL
            .into_iter()
            .map(|c| (c, self.count(c)))
            .collect()
    }

    /// Non-zero categories in legend order.
    pub fn entries(&self) -> Vec<(OutcomeCategory, u64)> {
        self.counts()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    pub fn slices(&self) -> Vec<ChartSlice> {
        let total = self.total();
        self.entries()
            .into_iter()
            .map(|(category, count)| ChartSlice {
                category,
                label: category.label().to_string(),
                count,
                percentage: count as f64 * 100.0 / total as f64,
                color: category.color().to_string(),
            })
            .collect()
    }
}
