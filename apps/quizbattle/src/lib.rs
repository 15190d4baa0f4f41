#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod telemetry;


// Re-exports for public API
pub use adapters::memory::{InMemoryQuestionRepo, InMemoryRosterRepo};
pub use adapters::questions_json::JsonQuestionStore;
pub use adapters::roster_json::JsonRosterStore;
pub use bootstrap::{
    open_controller, open_controller_with, save_questions, store_questions, FileMatchController,
};
pub use config::logging::{LogFormat, LoggingConfig};
pub use config::storage::StorageConfig;
pub use error::AppError;
pub use errors::ErrorCode;
pub use services::match_flow::MatchController;
pub use services::reset::{ResetRequest, ResetToken};
pub use services::roster::RosterService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
