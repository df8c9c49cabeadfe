pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

impl Error {
    /// Short heading for the dialog that reports this error to the user.
    pub fn title(&self) -> &'static str {
        match self {
            Error::Validation(_) | Error::InvalidField(_) => "Input Error",
            Error::NotFound(_) => "Not Found",
            Error::Database(_) | Error::Migration(_) => "Database Error",
            Error::Config(_) => "Configuration Error",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::InvalidField(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    pub fn is_store(&self) -> bool {
        matches!(self, Error::Database(_) | Error::Migration(_))
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}
