//! Mailing-label formatting for loosely structured postal addresses.
//!
//! Every field is optional opaque text. Nothing is validated; fields are
//! trimmed and arranged into at most three lines:
//!
//! ```text
//! <street>
//! <city>, <state>, <zip_code>
//! <country>
//! ```

use serde::{Deserialize, Serialize};

/// Returned when no field carries any text.
pub const NO_ADDRESS_PROVIDED: &str = "No address provided.";

const LOCALITY_SEPARATOR: &str = ", ";

/// Address components as supplied by a caller.
///
/// `None` and `Some("")` are equivalent.
///
/// Deserializes the postal code from `zip_code`, `postal_code` or
/// `postalCode`. When several are sent, the first non-empty one in that
/// order wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AddressWire")]
pub struct AddressInput {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "zip_code")]
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Deserialize)]
struct AddressWire {
    #[serde(default)]
    street: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    zip_code: Option<String>,
    #[serde(default)]
    postal_code: Option<String>,
    #[serde(default, rename = "postalCode")]
    postal_code_camel: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

impl From<AddressWire> for AddressInput {
    fn from(wire: AddressWire) -> Self {
        let candidates = [wire.zip_code, wire.postal_code, wire.postal_code_camel];
        let postal_code = match candidates
            .iter()
            .position(|code| present(code.as_deref()).is_some())
        {
            Some(index) => candidates[index].clone(),
            None => candidates.into_iter().flatten().next(),
        };

        Self {
            street: wire.street,
            city: wire.city,
            state: wire.state,
            postal_code,
            country: wire.country,
        }
    }
}

impl AddressInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// True when every field is absent or the empty string.
    pub fn is_empty(&self) -> bool {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .all(|field| present(field.as_deref()).is_none())
    }

    /// Label lines in output order, omitting any line with no contributing field.
    pub fn lines(&self) -> Vec<String> {
        label_lines(
            self.street.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.postal_code.as_deref(),
            self.country.as_deref(),
        )
    }

    pub fn format(&self) -> String {
        format_address(
            self.street.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.postal_code.as_deref(),
            self.country.as_deref(),
        )
    }
}

/// Format the given components into a newline-separated mailing label.
///
/// Returns [`NO_ADDRESS_PROVIDED`] when every component is absent or empty.
pub fn format_address(
    street: Option<&str>,
    city: Option<&str>,
    state: Option<&str>,
    postal_code: Option<&str>,
    country: Option<&str>,
) -> String {
    let lines = label_lines(street, city, state, postal_code, country);
    if lines.is_empty() {
        return NO_ADDRESS_PROVIDED.to_string();
    }
    lines.join("\n")
}

fn label_lines(
    street: Option<&str>,
    city: Option<&str>,
    state: Option<&str>,
    postal_code: Option<&str>,
    country: Option<&str>,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);

    if let Some(street) = present(street) {
        lines.push(street.to_string());
    }

    let locality: Vec<&str> = [city, state, postal_code]
        .into_iter()
        .filter_map(present)
        .collect();
    if !locality.is_empty() {
        lines.push(locality.join(LOCALITY_SEPARATOR));
    }

    if let Some(country) = present(country) {
        lines.push(country.to_string());
    }

    lines
}

// Presence is decided on the raw value; only a present value is trimmed.
fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty()).map(str::trim)
}
