use serde::{Deserialize, Serialize};

/// ステータスバッジの色区分
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    Green,
    Yellow,
    Orange,
    Red,
    Blue,
    #[default]
    Gray,
}

const STATUS_COLORS: &[(&str, BadgeColor)] = &[
    ("active", BadgeColor::Green),
    ("current", BadgeColor::Green),
    ("verified", BadgeColor::Green),
    ("open", BadgeColor::Green),
    ("connected", BadgeColor::Green),
    ("pending", BadgeColor::Yellow),
    ("in progress", BadgeColor::Yellow),
    ("renewal due", BadgeColor::Yellow),
    ("scheduled", BadgeColor::Yellow),
    ("inactive", BadgeColor::Orange),
    ("late", BadgeColor::Orange),
    ("expired", BadgeColor::Red),
    ("delinquent", BadgeColor::Red),
    ("suspended", BadgeColor::Red),
    ("revoked", BadgeColor::Red),
    ("overdue", BadgeColor::Red),
    ("paid off", BadgeColor::Blue),
    ("closed", BadgeColor::Blue),
    ("completed", BadgeColor::Blue),
];

impl BadgeColor {
    /// 大文字小文字を区別せずに色を引く。未知のステータスは `Gray`
    pub fn for_status(status: Option<&str>) -> Self {
        let Some(status) = status else {
            return BadgeColor::default();
        };
        let normalized = status.trim().to_lowercase();
        STATUS_COLORS
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, color)| *color)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Green => "green",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Orange => "orange",
            BadgeColor::Red => "red",
            BadgeColor::Blue => "blue",
            BadgeColor::Gray => "gray",
        }
    }
}
