use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Registration,
    Insurance,
    Inspection,
    Title,
    Other,
}

impl DocumentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategory::Registration => "registration",
            DocumentCategory::Insurance => "insurance",
            DocumentCategory::Inspection => "inspection",
            DocumentCategory::Title => "title",
            DocumentCategory::Other => "other",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentCategory {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registration" => Ok(DocumentCategory::Registration),
            "insurance" => Ok(DocumentCategory::Insurance),
            "inspection" => Ok(DocumentCategory::Inspection),
            "title" => Ok(DocumentCategory::Title),
            "other" => Ok(DocumentCategory::Other),
            _ => Err("invalid document category"),
        }
    }
}
