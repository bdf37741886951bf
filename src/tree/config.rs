//! Configuration for the structure walker

/// Configuration for structure walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Keep rows classified as documentation (default: keep).
    pub include_documentation: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            include_documentation: true,
        }
    }
}
