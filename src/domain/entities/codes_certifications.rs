use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::collection_item::{CollectionItem, default_status, title_or};
use super::record::{TabPayload, TabRecord};
use super::serde_helpers::{null_as_default, optional_date};
use crate::domain::value_objects::{ItemId, TabType};

/// 業種コードと認証・資格情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodesCertificationsInfo {
    pub naics_code: Option<String>,
    pub sic_code: Option<String>,
    pub duns_number: Option<String>,
    pub cage_code: Option<String>,
    pub usdot_number: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: ItemId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub issuing_authority: Option<String>,
    #[serde(default)]
    pub certificate_number: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "optional_date")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CollectionItem for Certification {
    fn with_id(id: ItemId) -> Self {
        Self {
            id,
            name: None,
            issuing_authority: None,
            certificate_number: None,
            issue_date: None,
            expiration_date: None,
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
        title_or(&self.name, "New certification")
    }
}

impl TabRecord for CodesCertificationsInfo {
    const TAB: TabType = TabType::CodesCertifications;

    fn into_payload(self) -> TabPayload {
        TabPayload::CodesCertifications(self)
    }
}
