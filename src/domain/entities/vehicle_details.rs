use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{TabPayload, TabRecord};
use super::serde_helpers::optional_date;
use crate::domain::value_objects::TabType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleDetails {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub vin: Option<String>,
    pub license_plate: Option<String>,
    pub color: Option<String>,
    pub registration_state: Option<String>,
    #[serde(deserialize_with = "optional_date")]
    pub registration_expiration: Option<NaiveDate>,
    pub odometer: Option<String>,
    pub ownership_status: Option<String>,
    pub is_primary: Option<bool>,
}

impl TabRecord for VehicleDetails {
    const TAB: TabType = TabType::VehicleDetails;

    fn into_payload(self) -> TabPayload {
        TabPayload::VehicleDetails(self)
    }
}
