use serde::{Deserialize, Serialize};

/// Options for turning an ancestry expansion into chart elements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Keep only the first N expansion entries; `None` keeps all of them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Run the chain simplifier over the materialized elements
    #[serde(default)]
    pub simplify: bool,
}

impl ChartOptions {
    /// Create the default options: full expansion, no simplification
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: keep only the first `limit` entries
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builder: toggle the chain simplifier
    #[must_use]
    pub const fn simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    /// Validate options
    ///
    /// Consumers may truncate down to a single entry, but not to zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.limit == Some(0) {
            return Err("limit must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_valid() {
        let options = ChartOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.limit, None);
        assert!(!options.simplify);
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(ChartOptions::new().limit(0).validate().is_err());
        assert!(ChartOptions::new().limit(1).validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = ChartOptions::new().limit(12).simplify(true);
        assert_eq!(options.limit, Some(12));
        assert!(options.simplify);
    }
}
