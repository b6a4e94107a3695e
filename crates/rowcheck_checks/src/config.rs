//! Options applied by check bundles and view helpers.

use rowcheck_schema::BLANK_FIELD_MESSAGE;

/// Options applied by check bundles and view helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    /// Whether view helpers substitute defaults for nullish values.
    pub ignore_defaults: bool,

    /// Per-field message reported for missing or blank required fields.
    pub blank_message: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            ignore_defaults: false,
            blank_message: BLANK_FIELD_MESSAGE.to_string(),
        }
    }
}

impl CheckConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set whether view helpers use defaults.
    #[must_use]
    pub fn with_ignore_defaults(mut self, ignore_defaults: bool) -> Self {
        self.ignore_defaults = ignore_defaults;
        self
    }

    /// Builder method to set the blank-field message.
    #[must_use]
    pub fn with_blank_message(mut self, message: impl Into<String>) -> Self {
        self.blank_message = message.into();
        self
    }
}
