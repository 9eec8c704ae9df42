//! Strongly-typed identifiers for domain entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(CreatureId);

/// Rejected user identity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUserId {
    #[error("user id cannot be empty")]
    Empty,
    #[error("user id cannot exceed {max} bytes (got {len})")]
    TooLong { len: usize, max: usize },
}

/// Identity issued by the external auth provider.
///
/// Opaque to this service: only emptiness and length are checked, matching
/// the `VARCHAR(255)` owner column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub const MAX_LEN: usize = 255;

    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidUserId> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(InvalidUserId::Empty);
        }
        if value.len() > Self::MAX_LEN {
            return Err(InvalidUserId::TooLong {
                len: value.len(),
                max: Self::MAX_LEN,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = InvalidUserId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> String {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_rejects_blank() {
        assert_eq!(UserId::parse(""), Err(InvalidUserId::Empty));
        assert_eq!(UserId::parse("   "), Err(InvalidUserId::Empty));
    }

    #[test]
    fn test_user_id_length_limit() {
        assert!(UserId::parse("a".repeat(UserId::MAX_LEN)).is_ok());
        assert!(matches!(
            UserId::parse("a".repeat(UserId::MAX_LEN + 1)),
            Err(InvalidUserId::TooLong { len: 256, .. })
        ));
    }

    #[test]
    fn test_user_id_deserialize_validates() {
        let id: UserId = serde_json::from_str("\"user_2abc\"").unwrap();
        assert_eq!(id.as_str(), "user_2abc");
        assert!(serde_json::from_str::<UserId>("\"\"").is_err());
    }
}
