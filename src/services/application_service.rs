use crate::config::Config;
use crate::dto::application_dto::{CreateApplicationPayload, SearchQuery, UpdateStatusPayload};
use crate::error::{Error, Result};
use crate::models::application::Application;
use crate::utils::validation::{check_date_applied, validate};
use sqlx::SqlitePool;

const APPLICATION_COLUMNS: &str = "id, company, position, status, date_applied, rejection_stage, \
     COALESCE(received_coding_challenge, 0) AS received_coding_challenge, \
     COALESCE(received_interview, 0) AS received_interview";

#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOptions {
    pub search_case_sensitive: bool,
    pub strict_date_format: bool,
}

impl From<&Config> for StoreOptions {
    fn from(config: &Config) -> Self {
        Self {
            search_case_sensitive: config.search_case_sensitive,
            strict_date_format: config.strict_date_format,
        }
    }
}

#[derive(Clone)]
pub struct ApplicationService {
    pool: SqlitePool,
    options: StoreOptions,
}

impl ApplicationService {
    pub fn new(pool: SqlitePool, options: StoreOptions) -> Self {
        Self { pool, options }
    }

    pub async fn create(&self, payload: CreateApplicationPayload) -> Result<Application> {
        let payload = payload.normalized();
        validate(&payload)?;
        check_date_applied(&payload.date_applied, self.options.strict_date_format)?;

        let query = format!(
            r#"
            INSERT INTO applications (
                company, position, status, date_applied,
                rejection_stage, received_coding_challenge, received_interview
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            APPLICATION_COLUMNS
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(&payload.company)
            .bind(&payload.position)
            .bind(payload.status)
            .bind(&payload.date_applied)
            .bind(&payload.rejection.stage)
            .bind(payload.rejection.received_coding_challenge)
            .bind(payload.rejection.received_interview)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(
            id = application.id,
            status = %application.status,
            "Created application for {} ({})",
            application.company,
            application.position
        );
        Ok(application)
    }

    pub async fn get(&self, id: i64) -> Result<Application> {
        let query = format!("SELECT {} FROM applications WHERE id = ?", APPLICATION_COLUMNS);
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_all(&self) -> Result<Vec<Application>> {
        let query = format!("SELECT {} FROM applications ORDER BY id", APPLICATION_COLUMNS);
        let items = sqlx::query_as::<_, Application>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    /// Unanchored substring match. `LIKE` only folds ASCII case.
    pub async fn search(&self, query: SearchQuery) -> Result<Vec<Application>> {
        let query = query.normalized();
        validate(&query)?;

        let column = query.column.column_name();
        let (filter, argument) = if self.options.search_case_sensitive {
            (format!("instr({}, ?) > 0", column), query.term.clone())
        } else {
            (
                format!("{} LIKE ? ESCAPE '\\'", column),
                format!("%{}%", escape_like(&query.term)),
            )
        };

        let statement = format!(
            "SELECT {} FROM applications WHERE {} ORDER BY id",
            APPLICATION_COLUMNS, filter
        );
        let items = sqlx::query_as::<_, Application>(&statement)
            .bind(argument)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            column,
            term = %query.term,
            matches = items.len(),
            "Searched applications"
        );
        Ok(items)
    }

    pub async fn update_status(
        &self,
        id: i64,
        payload: UpdateStatusPayload,
    ) -> Result<Application> {
        let payload = payload.normalized();

        let query = format!(
            r#"
            UPDATE applications
            SET status = ?, rejection_stage = ?,
                received_coding_challenge = ?, received_interview = ?
            WHERE id = ?
            RETURNING {}
            "#,
            APPLICATION_COLUMNS
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(payload.status)
            .bind(&payload.rejection.stage)
            .bind(payload.rejection.received_coding_challenge)
            .bind(payload.rejection.received_interview)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(id, status = %application.status, "Updated application status");
        Ok(application)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let res = sqlx::query("DELETE FROM applications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::info!(id, "Deleted application");
        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}

fn not_found(id: i64) -> Error {
    Error::NotFound(format!("Application {} does not exist", id))
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
