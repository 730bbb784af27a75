use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{TabPayload, TabRecord};
use super::serde_helpers::optional_date;
use crate::domain::value_objects::TabType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaxInfo {
    pub ein: Option<String>,
    pub tax_classification: Option<String>,
    pub state_tax_id: Option<String>,
    pub filing_frequency: Option<String>,
    pub accountant_name: Option<String>,
    pub accountant_email: Option<String>,
    pub sales_tax_registered: Option<bool>,
    #[serde(deserialize_with = "optional_date")]
    pub last_filed_date: Option<NaiveDate>,
}

impl TabRecord for TaxInfo {
    const TAB: TabType = TabType::Tax;

    fn into_payload(self) -> TabPayload {
        TabPayload::Tax(self)
    }
}
