//! Server configuration from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use records::endpoints::DEFAULT_BASE_URL;
use records::session::{Role, Session};

/// Startup configuration. `PORT`, `SCHOOL_API_URL`, and `DASHBOARD_ROLE`
/// are all optional with local-development defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub school_api_url: String,
    pub role: Role,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("PORT").ok(),
            std::env::var("SCHOOL_API_URL").ok(),
            std::env::var("DASHBOARD_ROLE").ok(),
        )
    }

    /// Pure assembly from optional variable values. Unparseable ports and
    /// unknown roles fall back to the defaults with a warning.
    #[must_use]
    pub fn from_vars(
        port: Option<String>,
        school_api_url: Option<String>,
        role: Option<String>,
    ) -> Self {
        let port = match port.as_deref().map(str::parse::<u16>) {
            Some(Ok(p)) => p,
            Some(Err(_)) => {
                tracing::warn!("invalid PORT, using 3000");
                3000
            }
            None => 3000,
        };
        let school_api_url = school_api_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let role = match role.as_deref().map(Role::parse) {
            Some(Some(role)) => role,
            Some(None) => {
                tracing::warn!("unrecognized DASHBOARD_ROLE, defaulting to admin");
                Role::Admin
            }
            None => Role::Admin,
        };
        Self { port, school_api_url, role }
    }

    /// The session payload handed to the client at startup.
    #[must_use]
    pub fn session(&self) -> Session {
        Session { role: self.role, api_base: self.school_api_url.clone() }
    }
}
