use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::collection_item::{CollectionItem, default_status, title_or};
use super::record::{TabPayload, TabRecord};
use super::serde_helpers::{null_as_default, optional_date};
use crate::domain::value_objects::{ItemId, TabType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BankingFinanceInfo {
    pub bank_name: Option<String>,
    pub account_type: Option<String>,
    pub routing_number: Option<String>,
    pub account_number_last4: Option<String>,
    pub business_credit_card: Option<String>,
    pub has_merchant_account: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub loans: Vec<Loan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: ItemId,
    #[serde(default)]
    pub lender: Option<String>,
    #[serde(default)]
    pub loan_type: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub interest_rate: Option<String>,
    #[serde(default)]
    pub monthly_payment: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CollectionItem for Loan {
    fn with_id(id: ItemId) -> Self {
        Self {
            id,
            lender: None,
            loan_type: None,
            amount: None,
            interest_rate: None,
            monthly_payment: None,
            start_date: None,
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
        title_or(&self.lender, "New loan")
    }
}

impl TabRecord for BankingFinanceInfo {
    const TAB: TabType = TabType::BankingFinance;

    fn into_payload(self) -> TabPayload {
        TabPayload::BankingFinance(self)
    }
}
