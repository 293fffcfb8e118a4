//! propdash-core: configuration shared by the propdash server and CLI

pub mod config;
pub mod error;

pub use config::{DatabaseSection, PropdashConfig, ServerSection, UiSection};
pub use error::ConfigError;
