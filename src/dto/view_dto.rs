use serde::{Deserialize, Serialize};

use crate::dto::application_dto::SearchQuery;
use crate::models::application::Application;
use crate::models::report::{ChartSlice, OutcomeReport};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerView {
    pub applications: Vec<Application>,
    pub report: OutcomeReport,
    pub selected: Option<Application>,
    pub search: Option<SearchQuery>,
}

impl TrackerView {
    pub fn chart(&self) -> Vec<ChartSlice> {
        self.report.slices()
    }
}
