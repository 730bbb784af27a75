use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::collection_item::{CollectionItem, title_or};
use super::record::{TabPayload, TabRecord};
use super::serde_helpers::{null_as_default, optional_date};
use crate::domain::value_objects::{ItemId, TabType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaintenanceInfo {
    pub preferred_shop: Option<String>,
    #[serde(deserialize_with = "optional_date")]
    pub last_service_date: Option<NaiveDate>,
    pub next_service_mileage: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub service_records: Vec<ServiceRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: ItemId,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub mileage: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub shop: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CollectionItem for ServiceRecord {
    fn with_id(id: ItemId) -> Self {
        Self {
            id,
            service_type: None,
            date: None,
            mileage: None,
            cost: None,
            shop: None,
            notes: None,
            status: Some("Scheduled".to_string()),
        }
    }

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn title(&self) -> String {
        title_or(&self.service_type, "New service")
    }
}

impl TabRecord for MaintenanceInfo {
    const TAB: TabType = TabType::Maintenance;

    fn into_payload(self) -> TabPayload {
        TabPayload::Maintenance(self)
    }
}
