//! Printer configuration.

/// Printer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowConfig {
    /// Separator between the items of a block.
    pub block_separator: String,
    /// Print booleans as `True`/`False` rather than `true`/`false`.
    pub capitalize_bools: bool,
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self {
            block_separator: "; ".to_string(),
            capitalize_bools: true,
        }
    }
}

impl ShowConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block separator.
    pub fn block_separator(mut self, separator: impl Into<String>) -> Self {
        self.block_separator = separator.into();
        self
    }

    /// Set boolean capitalization.
    pub fn capitalize_bools(mut self, capitalize: bool) -> Self {
        self.capitalize_bools = capitalize;
        self
    }

    /// Text for a boolean literal.
    pub fn bool_str(&self, b: bool) -> &'static str {
        match (b, self.capitalize_bools) {
            (true, true) => "True",
            (false, true) => "False",
            (true, false) => "true",
            (false, false) => "false",
        }
    }
}
