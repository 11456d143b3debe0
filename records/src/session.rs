//! Dashboard session: who is looking, and what they may touch.
//!
//! DESIGN
//! ======
//! The role used to gate edit/delete chrome is an explicit value handed to
//! the client at startup (`GET /api/session`), not a module-level constant,
//! so one build serves any role the host configures.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Teacher,
    Student,
    Parent,
}

impl Role {
    /// Parse a configured role string, `None` for anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "teacher" => Some(Self::Teacher),
            "student" => Some(Self::Student),
            "parent" => Some(Self::Parent),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Parent => "parent",
        }
    }
}

/// Startup configuration the server hands the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    /// Base address of the school REST backend.
    pub api_base: String,
}

impl Session {
    /// Whether row edit/delete controls and create buttons should render.
    #[must_use]
    pub fn can_manage(&self) -> bool {
        self.role == Role::Admin
    }
}

impl Default for Session {
    fn default() -> Self {
        Self { role: Role::Admin, api_base: crate::endpoints::DEFAULT_BASE_URL.to_owned() }
    }
}
