use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::collection_item::{CollectionItem, default_status, title_or};
use super::record::{TabPayload, TabRecord};
use super::serde_helpers::{null_as_default, optional_date};
use crate::domain::value_objects::{ItemId, TabType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditInfo {
    pub paydex_score: Option<String>,
    pub experian_score: Option<String>,
    pub equifax_score: Option<String>,
    pub personal_credit_score: Option<String>,
    pub monitoring_service: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tradelines: Vec<Tradeline>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tradeline {
    pub id: ItemId,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub credit_limit: Option<String>,
    #[serde(default)]
    pub balance: Option<String>,
    #[serde(default)]
    pub reports_to: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub opened_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CollectionItem for Tradeline {
    fn with_id(id: ItemId) -> Self {
        Self {
            id,
            vendor: None,
            account_type: None,
            credit_limit: None,
            balance: None,
            reports_to: None,
            opened_date: None,
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
        title_or(&self.vendor, "New tradeline")
    }
}

impl TabRecord for CreditInfo {
    const TAB: TabType = TabType::Credit;

    fn into_payload(self) -> TabPayload {
        TabPayload::Credit(self)
    }
}
