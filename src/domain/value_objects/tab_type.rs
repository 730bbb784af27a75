use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::EntityKind;

/// 親エンティティ内で個別に編集・保存されるセクション
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TabType {
    BankingFinance,
    CodesCertifications,
    Credit,
    Tax,
    SocialMedia,
    VehicleDetails,
    Insurance,
    Maintenance,
    Documents,
}

impl TabType {
    pub const ALL: [TabType; 9] = [
        TabType::BankingFinance,
        TabType::CodesCertifications,
        TabType::Credit,
        TabType::Tax,
        TabType::SocialMedia,
        TabType::VehicleDetails,
        TabType::Insurance,
        TabType::Maintenance,
        TabType::Documents,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabType::BankingFinance => "banking-finance",
            TabType::CodesCertifications => "codes-certifications",
            TabType::Credit => "credit",
            TabType::Tax => "tax",
            TabType::SocialMedia => "social-media",
            TabType::VehicleDetails => "vehicle-details",
            TabType::Insurance => "insurance",
            TabType::Maintenance => "maintenance",
            TabType::Documents => "documents",
        }
    }

    pub fn entity_kind(&self) -> EntityKind {
        match self {
            TabType::BankingFinance
            | TabType::CodesCertifications
            | TabType::Credit
            | TabType::Tax
            | TabType::SocialMedia => EntityKind::Business,
            TabType::VehicleDetails
            | TabType::Insurance
            | TabType::Maintenance
            | TabType::Documents => EntityKind::Vehicle,
        }
    }

    /// 親ドキュメント内でこのタブのレコードを保持するキー
    pub fn record_key(&self) -> &'static str {
        match self {
            TabType::BankingFinance => "bankingFinanceInfo",
            TabType::CodesCertifications => "codesCertificationsInfo",
            TabType::Credit => "creditInfo",
            TabType::Tax => "taxInfo",
            TabType::SocialMedia => "socialMediaInfo",
            TabType::VehicleDetails => "vehicleDetails",
            TabType::Insurance => "insuranceInfo",
            TabType::Maintenance => "maintenanceInfo",
            TabType::Documents => "documents",
        }
    }
}

impl fmt::Display for TabType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabType::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str() == s)
            .ok_or("invalid tab type")
    }
}
