use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DocumentCategory;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlBody<'a> {
    pub file_name: &'a str,
    pub file_type: &'a str,
    pub document_category: DocumentCategory,
    pub vehicle_id: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
    pub file_key: String,
    pub file_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDocumentViewBody<'a> {
    pub document_id: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDocumentViewResponse {
    pub url: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDocumentViewBody<'a> {
    pub vehicle_id: &'a str,
    pub document_keys: &'a [String],
}

#[derive(Debug, Deserialize)]
pub struct VehicleDocumentViewResponse {
    #[serde(default)]
    pub urls: Vec<KeyedUrl>,
}

#[derive(Debug, Deserialize)]
pub struct KeyedUrl {
    pub key: String,
    pub url: String,
}
