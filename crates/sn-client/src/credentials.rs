//! Basic-auth credentials for an instance.
//!
//! The password is redacted in Debug output.

use crate::error::{Error, ErrorKind, Result};

/// Instance name plus username/password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    instance: String,
    username: String,
    password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("instance", &self.instance)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Create new credentials with the given values.
    pub fn new(
        instance: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            instance: instance.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Required environment variables:
    /// - `SN_INSTANCE` or `SERVICENOW_INSTANCE`
    /// - `SN_USERNAME` or `SERVICENOW_USERNAME`
    /// - `SN_PASSWORD` or `SERVICENOW_PASSWORD`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |short: &str, long: &str| {
            lookup(short)
                .or_else(|| lookup(long))
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::new(ErrorKind::EnvVar(short.to_string())))
        };

        Ok(Self::new(
            var("SN_INSTANCE", "SERVICENOW_INSTANCE")?,
            var("SN_USERNAME", "SERVICENOW_USERNAME")?,
            var("SN_PASSWORD", "SERVICENOW_PASSWORD")?,
        ))
    }

    /// Get the instance name (the `{instance}` in `{instance}.service-now.com`).
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Get the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the password.
    pub fn password(&self) -> &str {
        &self.password
    }
}
