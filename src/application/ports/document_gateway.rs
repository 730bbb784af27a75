use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::domain::entities::DocumentRef;
use crate::domain::value_objects::{DocumentCategory, EntityId};
use crate::shared::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadUrlRequest {
    pub file_name: String,
    pub file_type: String,
    pub category: DocumentCategory,
    pub vehicle_id: EntityId,
}

/// 署名付きアップロード先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub upload_url: String,
    pub file_key: String,
    pub file_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    pub key: String,
    pub url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// 署名付き URL の発行とオブジェクトストレージへの直接転送
#[async_trait]
pub trait DocumentGateway: Send + Sync {
    async fn request_upload_url(&self, request: &UploadUrlRequest)
    -> Result<UploadTarget, AppError>;

    async fn put_object(&self, upload_url: &str, bytes: Bytes, mime: &str)
    -> Result<(), AppError>;

    async fn view_business_document(&self, document_id: &str) -> Result<SignedUrl, AppError>;

    async fn view_vehicle_documents(
        &self,
        vehicle_id: &EntityId,
        document_keys: &[String],
    ) -> Result<Vec<SignedUrl>, AppError>;
}

/// アップロード済みファイルを親レコードに登録して保存する
#[async_trait]
pub trait DocumentRegistrar: Send + Sync {
    async fn register(&self, category: DocumentCategory, document: DocumentRef)
    -> Result<(), AppError>;
}
