//! Address toolkit.
//!
//! Exposes [`format_address`](crate::address::format_address) as the
//! `format_address` tool. Arguments are five optional strings; the result is
//! the formatted label as a JSON string.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::address::AddressInput;
use crate::error::{Result, ToolkitError};
use crate::tool::{Tool, ToolRegistry};

/// Create an Address toolkit
pub fn address_toolkit() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(FormatAddressTool);
    registry
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormatAddressTool;

impl FormatAddressTool {
    pub const NAME: &'static str = "format_address";
}

#[async_trait]
impl Tool for FormatAddressTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Format address components into a single mailing-format string. \
         Expects {\"street\"?: string, \"city\"?: string, \"state\"?: string, \
         \"zip_code\"?: string, \"country\"?: string}."
    }

    fn parameters(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "street": { "type": "string", "description": "Street address line" },
                "city": { "type": "string", "description": "City name" },
                "state": { "type": "string", "description": "State or province" },
                "zip_code": { "type": "string", "description": "ZIP or postal code" },
                "country": { "type": "string", "description": "Country name" }
            },
            "required": []
        }))
    }

    async fn call(&self, input: Value) -> Result<Value> {
        let address = decode_input(input)?;
        tracing::debug!(
            street = supplied(&address.street),
            city = supplied(&address.city),
            state = supplied(&address.state),
            zip_code = supplied(&address.postal_code),
            country = supplied(&address.country),
            "formatting address"
        );
        Ok(Value::String(address.format()))
    }
}

fn decode_input(input: Value) -> Result<AddressInput> {
    match input {
        Value::Null => Ok(AddressInput::default()),
        Value::Object(_) => serde_json::from_value(input).map_err(|err| {
            ToolkitError::Protocol(format!("invalid arguments for format_address: {err}"))
        }),
        other => Err(ToolkitError::Protocol(format!(
            "format_address expects an object of string fields, got {}",
            kind_of(&other)
        ))),
    }
}

fn supplied(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
