use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGIN_EMAIL, DEFAULT_LOGIN_PASSWORD,
    DEFAULT_LOGIN_TOKEN,
};

use serde::Deserialize;

/// Credentials accepted by the login stub and the token it hands out
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub email: String,
    pub password: String,
    pub token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            email: String::from(DEFAULT_LOGIN_EMAIL),
            password: String::from(DEFAULT_LOGIN_PASSWORD),
            token: String::from(DEFAULT_LOGIN_TOKEN),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ConfigError::auth(
                "auth.email and auth.password must not be empty",
            ));
        }

        if self.token.is_empty() {
            return Err(ConfigError::auth("auth.token must not be empty"));
        }

        Ok(())
    }

    /// Exact match on both email and password
    pub fn accepts(&self, email: Option<&str>, password: Option<&str>) -> bool {
        email == Some(self.email.as_str()) && password == Some(self.password.as_str())
    }
}
