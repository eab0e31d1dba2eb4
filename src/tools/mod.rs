//! Tools module - toolkits a host runtime can register.
//!
//! - Address: mailing-label formatting (`format_address`)

pub mod address;

pub use address::{address_toolkit, FormatAddressTool};
