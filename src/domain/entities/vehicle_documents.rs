use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{TabPayload, TabRecord};
use super::serde_helpers::null_as_default;
use crate::domain::value_objects::{DocumentCategory, TabType};

/// オブジェクトストレージ上のファイルへの参照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    pub key: String,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
}

/// 車両に紐づく書類。カテゴリごとに登録順で保持する
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleDocuments {
    #[serde(deserialize_with = "null_as_default")]
    pub registration: Vec<DocumentRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub insurance: Vec<DocumentRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub inspection: Vec<DocumentRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: Vec<DocumentRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub other: Vec<DocumentRef>,
}

impl VehicleDocuments {
    pub fn category(&self, category: DocumentCategory) -> &[DocumentRef] {
        match category {
            DocumentCategory::Registration => &self.registration,
            DocumentCategory::Insurance => &self.insurance,
            DocumentCategory::Inspection => &self.inspection,
            DocumentCategory::Title => &self.title,
            DocumentCategory::Other => &self.other,
        }
    }

    pub fn category_mut(&mut self, category: DocumentCategory) -> &mut Vec<DocumentRef> {
        match category {
            DocumentCategory::Registration => &mut self.registration,
            DocumentCategory::Insurance => &mut self.insurance,
            DocumentCategory::Inspection => &mut self.inspection,
            DocumentCategory::Title => &mut self.title,
            DocumentCategory::Other => &mut self.other,
        }
    }

    pub fn all_keys(&self) -> Vec<String> {
        [
            &self.registration,
            &self.insurance,
            &self.inspection,
            &self.title,
            &self.other,
        ]
        .into_iter()
        .flatten()
        .map(|doc| doc.key.clone())
        .collect()
    }
}

impl TabRecord for VehicleDocuments {
    const TAB: TabType = TabType::Documents;

    fn into_payload(self) -> TabPayload {
        TabPayload::Documents(self)
    }
}
