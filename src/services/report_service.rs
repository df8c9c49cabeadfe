use crate::error::Result;
use crate::models::application::ApplicationStatus;
use crate::models::report::OutcomeReport;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ReportService {
    pool: SqlitePool,
}

impl ReportService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn outcome_report(&self) -> Result<OutcomeReport> {
        let rows = sqlx::query_as::<_, (ApplicationStatus, bool, bool)>(
            r#"
            SELECT status,
                   COALESCE(received_interview, 0),
                   COALESCE(received_coding_challenge, 0)
            FROM applications
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let report = OutcomeReport::from_rows(rows);
        tracing::debug!(total = report.total(), "Recomputed outcome report");
        Ok(report)
    }
}
