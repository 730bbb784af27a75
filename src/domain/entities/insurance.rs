use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{TabPayload, TabRecord};
use super::serde_helpers::{null_as_default, optional_date};
use crate::domain::value_objects::TabType;

/// 車両保険。補償ごとの金額はネストしたオブジェクトで持つ（例: `pip.premium`）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsuranceInfo {
    pub provider: Option<String>,
    pub policy_number: Option<String>,
    pub agent_name: Option<String>,
    pub agent_phone: Option<String>,
    #[serde(deserialize_with = "optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "optional_date")]
    pub end_date: Option<NaiveDate>,
    pub rideshare_endorsement: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub liability: Coverage,
    #[serde(deserialize_with = "null_as_default")]
    pub collision: Coverage,
    #[serde(deserialize_with = "null_as_default")]
    pub comprehensive: Coverage,
    #[serde(deserialize_with = "null_as_default")]
    pub pip: Coverage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Coverage {
    pub premium: Option<String>,
    pub deductible: Option<String>,
    pub limit: Option<String>,
}

impl TabRecord for InsuranceInfo {
    const TAB: TabType = TabType::Insurance;

    fn into_payload(self) -> TabPayload {
        TabPayload::Insurance(self)
    }
}
