//! Extraction options shared by the library and the CLI

/// Tag a JSDoc comment must start with to be recorded
pub const DEFAULT_MARKER: &str = ":docmd";

/// Options controlling a single extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Opt-in tag for documentation comments
    pub marker: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl ExtractOptions {
    /// Options using a custom marker tag
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}
