use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// 親エンティティ（事業者プロフィール・車両）のサーバー側識別子。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: String) -> Result<Self, String> {
        let trimmed = value.trim();
        Self::validate(trimmed)?;
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        Self::new(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Entity ID cannot be empty".to_string());
        }
        if value.contains('/') {
            return Err("Entity ID cannot contain '/'".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl TryFrom<String> for EntityId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for EntityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let id = EntityId::parse("  veh_42 ").unwrap();
        assert_eq!(id.as_str(), "veh_42");
    }

    #[test]
    fn rejects_empty_and_path_like_ids() {
        assert!(EntityId::parse("   ").is_err());
        assert!(EntityId::parse("a/b").is_err());
    }

    #[test]
    fn deserialization_goes_through_validation() {
        assert!(serde_json::from_str::<EntityId>("\"\"").is_err());
        let id: EntityId = serde_json::from_str("\"biz-1\"").unwrap();
        assert_eq!(id.to_string(), "biz-1");
    }
}
