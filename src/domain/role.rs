use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{SessionId, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Staff,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "staff" => Ok(Role::Staff),
            "admin" | "administrator" => Ok(Role::Admin),
            _ => Err(ValidationError::new(format!("Invalid role: {s}"))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Role::Staff => "staff",
                Role::Admin => "admin",
            }
        )
    }
}

/// Who is performing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub session_id: SessionId,
    pub role: Role,
}

impl Actor {
    pub fn new(session_id: SessionId, role: Role) -> Self {
        Self { session_id, role }
    }

    pub fn staff(session_id: SessionId) -> Self {
        Self::new(session_id, Role::Staff)
    }

    pub fn admin(session_id: SessionId) -> Self {
        Self::new(session_id, Role::Admin)
    }
}
