pub mod application;
pub mod report;
