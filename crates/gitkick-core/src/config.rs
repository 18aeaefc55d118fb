use gitkick_git::FALLBACK_BRANCH_PREFIX;

pub const DEFAULT_COMPARE_BRANCH: &str = "develop";
pub const DEFAULT_REMOTE: &str = "origin";

/// Settings shared by every workflow.
///
/// gitkick reads no config file; the CLI starts from [`Default`] and applies
/// flag overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    /// Prefix of safety branches created before a squash.
    pub fallback_prefix: String,
    /// Remote used by push and force-push.
    pub remote: String,
    /// Branch a squash compares against when none is given.
    pub compare_branch: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            fallback_prefix: FALLBACK_BRANCH_PREFIX.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            compare_branch: DEFAULT_COMPARE_BRANCH.to_string(),
        }
    }
}

impl WorkflowConfig {
    pub fn with_remote(mut self, remote: Option<String>) -> Self {
        if let Some(remote) = remote {
            self.remote = remote;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WorkflowConfig::default();
        assert_eq!(config.fallback_prefix, "kk-fallback");
        assert_eq!(config.remote, "origin");
        assert_eq!(config.compare_branch, "develop");
    }

    #[test]
    fn test_with_remote_override() {
        let config = WorkflowConfig::default().with_remote(Some("upstream".to_string()));
        assert_eq!(config.remote, "upstream");

        let config = WorkflowConfig::default().with_remote(None);
        assert_eq!(config.remote, "origin");
    }
}
