use serde::{Deserialize, Serialize};

use super::collection_item::{CollectionItem, default_status, title_or};
use super::record::{TabPayload, TabRecord};
use super::serde_helpers::null_as_default;
use crate::domain::value_objects::{ItemId, TabType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialMediaInfo {
    pub website: Option<String>,
    pub google_business_profile: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub accounts: Vec<SocialAccount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialAccount {
    pub id: ItemId,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub followers: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CollectionItem for SocialAccount {
    fn with_id(id: ItemId) -> Self {
        Self {
            id,
            platform: None,
            handle: None,
            url: None,
            followers: None,
            status: default_status(),
        }
    }

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn title(&self) -> String {
        match (self.platform.as_deref(), self.handle.as_deref()) {
            (Some(platform), Some(handle)) if !handle.trim().is_empty() => {
                format!("{platform} @{}", handle.trim_start_matches('@'))
            }
            _ => title_or(&self.platform, "New account"),
        }
    }
}

impl TabRecord for SocialMediaInfo {
    const TAB: TabType = TabType::SocialMedia;

    fn into_payload(self) -> TabPayload {
        TabPayload::SocialMedia(self)
    }
}
