//! Helper functions exposed to templates

use super::renderer::HelperTable;

/// Helpers for building DNS names from organization and channel names
pub const DOMAIN_HELPERS: HelperTable = &[("to_lower", to_lower), ("to_upper", to_upper)];

/// Helpers for the settings file template
pub const SETTINGS_HELPERS: HelperTable = &[("yaml_quote", yaml_quote)];

pub fn to_lower(value: &str) -> String {
    value.to_lowercase()
}

pub fn to_upper(value: &str) -> String {
    value.to_uppercase()
}

/// Single-quoted YAML scalar
pub fn yaml_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
