use crate::dto::application_dto::{CreateApplicationPayload, SearchQuery, UpdateStatusPayload};
use crate::dto::view_dto::TrackerView;
use crate::error::Result;
use crate::models::application::Application;
use crate::services::{application_service::ApplicationService, report_service::ReportService};

/// Runs one user action against the store and hands back the refreshed
/// listing together with a freshly computed outcome report.
#[derive(Clone)]
pub struct TrackerService {
    applications: ApplicationService,
    reports: ReportService,
}

impl TrackerService {
    pub fn new(applications: ApplicationService, reports: ReportService) -> Self {
        Self {
            applications,
            reports,
        }
    }

    pub async fn load(&self) -> Result<TrackerView> {
        self.refresh(None).await
    }

    pub async fn add(&self, payload: CreateApplicationPayload) -> Result<TrackerView> {
        let created = self.applications.create(payload).await?;
        self.refresh(Some(created)).await
    }

    pub async fn update_status(
        &self,
        id: i64,
        payload: UpdateStatusPayload,
    ) -> Result<TrackerView> {
        let updated = self.applications.update_status(id, payload).await?;
        self.refresh(Some(updated)).await
    }

    pub async fn delete(&self, id: i64) -> Result<TrackerView> {
        self.applications.delete(id).await?;
        self.refresh(None).await
    }

    /// The report always covers every record; only the listing is filtered.
    pub async fn search(&self, query: SearchQuery) -> Result<TrackerView> {
        let matches = self.applications.search(query.clone()).await?;
        let report = self.reports.outcome_report().await?;
        Ok(TrackerView {
            applications: matches,
            report,
            selected: None,
            search: Some(query.normalized()),
        })
    }

    pub async fn select(&self, id: i64) -> Result<Application> {
        self.applications.get(id).await
    }

    async fn refresh(&self, selected: Option<Application>) -> Result<TrackerView> {
        let applications = self.applications.list_all().await?;
        let report = self.reports.outcome_report().await?;
        Ok(TrackerView {
            applications,
            report,
            selected,
            search: None,
        })
    }
}
