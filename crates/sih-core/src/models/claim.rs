use serde::{Deserialize, Serialize};

/// A profile claim an authorization request may ask the authority for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Claim {
    FullName,
    Email,
}

impl Claim {
    pub fn as_str(&self) -> &str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
        }
    }
}
