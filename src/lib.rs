pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::database::{pool::create_pool, schema::ensure_schema};
use crate::error::Result;
use crate::services::{
    application_service::{ApplicationService, StoreOptions},
    report_service::ReportService,
    tracker_service::TrackerService,
};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub application_service: ApplicationService,
    pub report_service: ReportService,
    pub tracker_service: TrackerService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        let application_service = ApplicationService::new(pool.clone(), StoreOptions::from(config));
        let report_service = ReportService::new(pool.clone());
        let tracker_service =
            TrackerService::new(application_service.clone(), report_service.clone());

        Self {
            pool,
            application_service,
            report_service,
            tracker_service,
        }
    }

    pub async fn open(config: &Config) -> Result<Self> {
        let pool = create_pool(&config.database_url).await?;
        ensure_schema(&pool).await?;
        Ok(Self::new(pool, config))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
