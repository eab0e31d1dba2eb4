//! Mailing-label address formatting exposed as an agent tool.
//!
//! The crate provides:
//! - A pure formatter (`format_address`, `AddressInput`).
//! - A simple tool interface (`Tool` and `ToolRegistry`) a host runtime can bind.
//! - The `format_address` tool (`address_toolkit`).
//! - Configuration and `tracing` setup for hosts that embed the toolkit.

mod address;
mod config;
mod error;
mod telemetry;
mod tool;
pub mod tools;

pub use address::{format_address, AddressInput, NO_ADDRESS_PROVIDED};
pub use config::{AppConfig, LogFormat, LoggingConfig, LOG_FILTER_ENV, LOG_FORMAT_ENV};
pub use error::{Result, ToolkitError};
pub use telemetry::init_tracing;
pub use tool::{Tool, ToolDescription, ToolRegistry};
pub use tools::{address_toolkit, FormatAddressTool};
