use crate::error::{Error, Result};
use sqlx::SqlitePool;

pub const APPLICATIONS_TABLE: &str = "applications";

/// Columns that may be missing from stores created before rejection details
/// were tracked, with the definition used to add them.
pub const ADDITIVE_COLUMNS: &[(&str, &str)] = &[
    ("rejection_stage", "TEXT"),
    ("received_coding_challenge", "INTEGER DEFAULT 0"),
    ("received_interview", "INTEGER DEFAULT 0"),
];

const CREATE_APPLICATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS applications (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        company TEXT NOT NULL,
        position TEXT NOT NULL,
        status TEXT NOT NULL,
        date_applied TEXT NOT NULL,
        rejection_stage TEXT,
        received_coding_challenge INTEGER DEFAULT 0,
        received_interview INTEGER DEFAULT 0
    )
"#;

/// Brings the persisted schema up to date. Only additive changes are made:
/// the table is created when absent and missing columns are appended with
/// their defaults, so existing rows are kept. Returns the added column names.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<Vec<String>> {
    sqlx::query(CREATE_APPLICATIONS)
        .execute(pool)
        .await
        .map_err(|e| Error::Migration(format!("creating {}: {}", APPLICATIONS_TABLE, e)))?;

    let existing = existing_columns(pool).await?;
    let mut added = Vec::new();

    for (name, definition) in ADDITIVE_COLUMNS {
        if existing.iter().any(|c| c == name) {
            continue;
        }
        let statement = format!(
            "ALTER TABLE {} ADD COLUMN {} {}",
            APPLICATIONS_TABLE, name, definition
        );
        sqlx::query(&statement)
            .execute(pool)
            .await
            .map_err(|e| Error::Migration(format!("adding column {}: {}", name, e)))?;
        tracing::info!(column = %name, "Added missing column to {}", APPLICATIONS_TABLE);
        added.push(name.to_string());
    }

    Ok(added)
}

pub async fn existing_columns(pool: &SqlitePool) -> Result<Vec<String>> {
    let columns = sqlx::query_scalar::<_, String>(
        "SELECT name FROM pragma_table_info('applications') ORDER BY cid",
    )
    .fetch_all(pool)
    .await?;
    Ok(columns)
}
