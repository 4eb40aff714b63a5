//! Search configuration.

/// Configuration parameters for schedule search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of matching records to return.
    pub max_results: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given result cap.
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: 3 }
    }
}
