use crate::{ConfigError, ConfigErrorResult, DEFAULT_USER_HEADER};

use serde::Deserialize;

/// How the host adapter learns who is logged in.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Request header carrying the authenticated user's numeric id
    pub user_header: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user_header: String::from(DEFAULT_USER_HEADER),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let header = self.user_header.trim();
        if header.is_empty() {
            return Err(ConfigError::auth("auth.user_header cannot be empty"));
        }

        if !header
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(ConfigError::auth(format!(
                "auth.user_header is not a valid header name: {}",
                self.user_header
            )));
        }

        Ok(())
    }
}
