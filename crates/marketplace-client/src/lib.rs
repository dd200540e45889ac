//! Client, fixtures and response contracts for the marketplace item API.

pub mod client;
pub mod config;
pub mod contract;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod payload;
pub mod telemetry;

pub use client::{ApiResponse, ApiVersion, MarketplaceClient};
pub use config::ClientConfig;
pub use contract::{ContractViolation, ExpectedStatus};
pub use error::{ClientError, ConfigError};
pub use fixtures::{ItemFixture, TestDataGenerator};
pub use model::{Item, NewItem, Statistics};

// Re-export logging macros for consistent usage across the crate
pub use log::{debug, error, info, trace, warn};
