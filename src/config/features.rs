//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Include rejection details in 400 responses (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,

    /// Enable request tracing
    #[serde(default = "default_true")]
    pub enable_tracing: bool,

    /// Serve the combined pipeline endpoint
    #[serde(default = "default_true")]
    pub expose_pipeline_endpoint: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            verbose_errors: false,
            enable_tracing: default_true(),
            expose_pipeline_endpoint: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(!flags.verbose_errors);
        assert!(flags.enable_tracing);
        assert!(flags.expose_pipeline_endpoint);
    }

    #[test]
    fn test_missing_flags_use_serde_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert!(!flags.verbose_errors);
        assert!(flags.enable_tracing);
        assert!(flags.expose_pipeline_endpoint);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "verbose_errors": true,
            "enable_tracing": false,
            "expose_pipeline_endpoint": false
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(flags.verbose_errors);
        assert!(!flags.enable_tracing);
        assert!(!flags.expose_pipeline_endpoint);
    }
}
