use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt;

use super::{
    BankingFinanceInfo, CodesCertificationsInfo, CreditInfo, InsuranceInfo, MaintenanceInfo,
    SocialMediaInfo, TaxInfo, VehicleDetails, VehicleDocuments,
};
use crate::domain::value_objects::TabType;
use crate::shared::error::AppError;

/// タブ単位で編集・保存されるレコード
pub trait TabRecord:
    Clone + Default + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const TAB: TabType;

    fn into_payload(self) -> TabPayload;

    /// 親ドキュメントからこのタブのレコードを取り出す。キーが無ければ既定値
    fn from_parent(parent: &Value) -> Result<Self, AppError> {
        match parent.get(Self::TAB.record_key()) {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|err| {
                AppError::DeserializationError(format!("Invalid {} record: {err}", Self::TAB))
            }),
        }
    }
}

/// 更新 API に送るボディ。`{ "tabType": ..., "data": {...} }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tabType", content = "data", rename_all = "kebab-case")]
pub enum TabPayload {
    BankingFinance(BankingFinanceInfo),
    CodesCertifications(CodesCertificationsInfo),
    Credit(CreditInfo),
    Tax(TaxInfo),
    SocialMedia(SocialMediaInfo),
    VehicleDetails(VehicleDetails),
    Insurance(InsuranceInfo),
    Maintenance(MaintenanceInfo),
    Documents(VehicleDocuments),
}

impl TabPayload {
    pub fn tab_type(&self) -> TabType {
        match self {
            TabPayload::BankingFinance(_) => TabType::BankingFinance,
            TabPayload::CodesCertifications(_) => TabType::CodesCertifications,
            TabPayload::Credit(_) => TabType::Credit,
            TabPayload::Tax(_) => TabType::Tax,
            TabPayload::SocialMedia(_) => TabType::SocialMedia,
            TabPayload::VehicleDetails(_) => TabType::VehicleDetails,
            TabPayload::Insurance(_) => TabType::Insurance,
            TabPayload::Maintenance(_) => TabType::Maintenance,
            TabPayload::Documents(_) => TabType::Documents,
        }
    }

    /// 型なし JSON をタブ種別に応じた型付きペイロードへ変換する
    pub fn decode(tab: TabType, data: Value) -> Result<Self, AppError> {
        let decoded = match tab {
            TabType::BankingFinance => serde_json::from_value(data).map(TabPayload::BankingFinance),
            TabType::CodesCertifications => {
                serde_json::from_value(data).map(TabPayload::CodesCertifications)
            }
            TabType::Credit => serde_json::from_value(data).map(TabPayload::Credit),
            TabType::Tax => serde_json::from_value(data).map(TabPayload::Tax),
            TabType::SocialMedia => serde_json::from_value(data).map(TabPayload::SocialMedia),
            TabType::VehicleDetails => serde_json::from_value(data).map(TabPayload::VehicleDetails),
            TabType::Insurance => serde_json::from_value(data).map(TabPayload::Insurance),
            TabType::Maintenance => serde_json::from_value(data).map(TabPayload::Maintenance),
            TabType::Documents => serde_json::from_value(data).map(TabPayload::Documents),
        };
        decoded
            .map_err(|err| AppError::DeserializationError(format!("Invalid {tab} payload: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Coverage, Loan};
    use crate::domain::value_objects::ItemId;
    use serde_json::json;

    #[test]
    fn payload_wire_shape_is_tab_type_and_data() {
        let info = TaxInfo {
            ein: Some("12-3456789".to_string()),
            ..TaxInfo::default()
        };
        let value = serde_json::to_value(info.into_payload()).unwrap();
        assert_eq!(value["tabType"], "tax");
        assert_eq!(value["data"]["ein"], "12-3456789");
        assert!(value["data"].get("lastFiledDate").is_some());
    }

    #[test]
    fn decode_uses_the_declared_tab() {
        let payload = TabPayload::decode(
            TabType::Insurance,
            json!({ "provider": "Acme Mutual", "pip": { "premium": "42.00" } }),
        )
        .unwrap();
        assert_eq!(payload.tab_type(), TabType::Insurance);
        let TabPayload::Insurance(info) = payload else {
            panic!("expected insurance payload");
        };
        assert_eq!(
            info.pip,
            Coverage {
                premium: Some("42.00".to_string()),
                ..Coverage::default()
            }
        );
    }

    #[test]
    fn decode_rejects_wrong_shapes() {
        let err = TabPayload::decode(TabType::BankingFinance, json!({ "loans": "none" }))
            .unwrap_err();
        assert_eq!(err.code(), "DESERIALIZATION_ERROR");
    }

    #[test]
    fn from_parent_defaults_missing_sections() {
        let parent = json!({ "id": "biz-1", "creditInfo": null });
        assert_eq!(CreditInfo::from_parent(&parent).unwrap(), CreditInfo::default());
        assert_eq!(
            BankingFinanceInfo::from_parent(&parent).unwrap(),
            BankingFinanceInfo::default()
        );
    }

    #[test]
    fn from_parent_treats_null_groups_as_empty() {
        let parent = json!({
            "bankingFinanceInfo": { "bankName": "X", "loans": null },
            "insuranceInfo": { "provider": "Acme Mutual", "pip": null, "collision": null },
            "documents": { "registration": null, "title": [] }
        });

        let banking = BankingFinanceInfo::from_parent(&parent).unwrap();
        assert_eq!(banking.bank_name.as_deref(), Some("X"));
        assert!(banking.loans.is_empty());

        let insurance = InsuranceInfo::from_parent(&parent).unwrap();
        assert_eq!(insurance.provider.as_deref(), Some("Acme Mutual"));
        assert_eq!(insurance.pip, Coverage::default());
        assert_eq!(insurance.collision, Coverage::default());

        let documents = VehicleDocuments::from_parent(&parent).unwrap();
        assert_eq!(documents, VehicleDocuments::default());
    }

    #[test]
    fn from_parent_reads_nested_collections() {
        let parent = json!({
            "bankingFinanceInfo": {
                "bankName": "First Local",
                "loans": [
                    { "id": "1712345678901", "lender": "SBA", "startDate": "" }
                ]
            }
        });
        let info = BankingFinanceInfo::from_parent(&parent).unwrap();
        assert_eq!(info.bank_name.as_deref(), Some("First Local"));
        assert_eq!(
            info.loans,
            vec![Loan {
                id: ItemId::new("1712345678901".to_string()).unwrap(),
                lender: Some("SBA".to_string()),
                loan_type: None,
                amount: None,
                interest_rate: None,
                monthly_payment: None,
                start_date: None,
                status: None,
            }]
        );
    }
}
