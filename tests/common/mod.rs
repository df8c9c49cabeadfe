#![allow(dead_code)]

use application_tracker::{
    config::Config,
    dto::application_dto::CreateApplicationPayload,
    models::application::{Application, ApplicationStatus},
    AppState,
};

pub const MEMORY_URL: &str = "sqlite::memory:";

pub async fn setup_state(config: Config) -> AppState {
    let config = Config {
        database_url: MEMORY_URL.to_string(),
        ..config
    };
    AppState::open(&config).await.expect("open store")
}

pub async fn seed(
    state: &AppState,
    company: &str,
    position: &str,
    status: ApplicationStatus,
) -> Application {
    state
        .application_service
        .create(CreateApplicationPayload::new(company, position, status, "01.01.2024"))
        .await
        .expect("seed application")
}
