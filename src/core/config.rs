use std::env;

use crate::errors::HookError;

/// Queue that receives completion notices when no destination is configured.
pub const DEFAULT_QUEUE_URL: &str =
    "https://sqs.us-west-2.amazonaws.com/022637123599/train_model_job_test";

pub const QUEUE_URL_VAR: &str = "HOOK_QUEUE_URL";
pub const AWS_REGION_VAR: &str = "HOOK_AWS_REGION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    pub queue_url: String,
    pub aws_region: Option<String>,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            queue_url: DEFAULT_QUEUE_URL.to_string(),
            aws_region: None,
        }
    }
}

impl HookConfig {
    /// # Errors
    ///
    /// Returns an error if `HOOK_AWS_REGION` is set but blank.
    pub fn from_env() -> Result<Self, HookError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the region key is present but blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HookError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let queue_url = lookup(QUEUE_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_QUEUE_URL.to_string());

        let aws_region = match lookup(AWS_REGION_VAR) {
            Some(region) if region.trim().is_empty() => {
                return Err(HookError::ConfigError(format!(
                    "{AWS_REGION_VAR} is set but empty"
                )));
            }
            Some(region) => Some(region.trim().to_string()),
            None => None,
        };

        Ok(Self {
            queue_url,
            aws_region,
        })
    }

    #[must_use]
    pub fn with_queue_url(mut self, queue_url: impl Into<String>) -> Self {
        self.queue_url = queue_url.into();
        self
    }
}
