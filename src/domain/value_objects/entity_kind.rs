use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::EntityId;

/// タブを持つ親エンティティの種類
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Business,
    Vehicle,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Business => "business",
            EntityKind::Vehicle => "vehicle",
        }
    }

    /// REST API 上のパスセグメント
    pub fn api_segment(&self) -> &'static str {
        match self {
            EntityKind::Business => "business",
            EntityKind::Vehicle => "fleet",
        }
    }

    /// レコードが見つからない場合の遷移先
    pub fn list_path(&self) -> &'static str {
        match self {
            EntityKind::Business => "/business",
            EntityKind::Vehicle => "/fleet",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "business" => Ok(EntityKind::Business),
            "vehicle" | "fleet" => Ok(EntityKind::Vehicle),
            _ => Err("invalid entity kind"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: EntityId,
}

impl EntityRef {
    pub fn new(kind: EntityKind, id: EntityId) -> Self {
        Self { kind, id }
    }

    pub fn business(id: EntityId) -> Self {
        Self::new(EntityKind::Business, id)
    }

    pub fn vehicle(id: EntityId) -> Self {
        Self::new(EntityKind::Vehicle, id)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
