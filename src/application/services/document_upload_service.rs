use bytes::Bytes;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::application::ports::{DocumentGateway, DocumentRegistrar, UploadUrlRequest};
use crate::domain::entities::{DocumentRef, UploadEntry, UploadId, UploadStatus};
use crate::domain::value_objects::{DocumentCategory, EntityId};
use crate::shared::error::AppError;

/// ファイルピッカーで選ばれた 1 ファイル
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum UploadFailure {
    #[error("file is empty")]
    Empty,
    #[error("file size {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
    #[error("file type is missing")]
    MissingType,
    #[error("could not obtain an upload URL: {0}")]
    UploadUrl(AppError),
    #[error("transfer to storage failed: {0}")]
    Transfer(AppError),
    #[error("could not register the document: {0}")]
    Register(AppError),
}

/// カテゴリごとのファイル単位アップロード状態
#[derive(Default)]
pub struct UploadTracker {
    entries: RwLock<HashMap<DocumentCategory, Vec<UploadEntry>>>,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    async fn begin(&self, category: DocumentCategory, file_name: &str) -> UploadId {
        let upload_id = UploadId::generate();
        let entry = UploadEntry {
            upload_id: upload_id.clone(),
            category,
            file_name: file_name.to_string(),
            status: UploadStatus::Pending,
            file_key: None,
        };
        let mut entries = self.entries.write().await;
        entries.entry(category).or_default().push(entry);
        upload_id
    }

    async fn update<F>(&self, category: DocumentCategory, upload_id: &UploadId, apply: F)
    where
        F: FnOnce(&mut UploadEntry),
    {
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries
            .get_mut(&category)
            .and_then(|list| list.iter_mut().find(|e| &e.upload_id == upload_id))
        {
            apply(entry);
        }
    }

    pub async fn status(&self, upload_id: &UploadId) -> Option<UploadStatus> {
        let entries = self.entries.read().await;
        entries
            .values()
            .flatten()
            .find(|entry| &entry.upload_id == upload_id)
            .map(|entry| entry.status.clone())
    }

    pub async fn snapshot(&self, category: DocumentCategory) -> Vec<UploadEntry> {
        let entries = self.entries.read().await;
        entries.get(&category).cloned().unwrap_or_default()
    }

    /// 完了・失敗したエントリを表示から外す
    pub async fn clear_finished(&self, category: DocumentCategory) -> usize {
        let mut entries = self.entries.write().await;
        let Some(list) = entries.get_mut(&category) else {
            return 0;
        };
        let before = list.len();
        list.retain(|entry| !entry.status.is_terminal());
        before - list.len()
    }
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub entries: Vec<UploadEntry>,
}

impl BatchReport {
    pub fn completed(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.status == UploadStatus::Completed)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.status, UploadStatus::Error(_)))
            .count()
    }
}

/// 署名付き URL を経由した直接アップロード。
///
/// 1 ファイルの失敗は他のファイルに影響しない。バッチ単位のロールバックはしない。
pub struct DocumentUploadService {
    gateway: Arc<dyn DocumentGateway>,
    tracker: Arc<UploadTracker>,
    max_concurrent: Option<usize>,
    max_file_bytes: u64,
}

impl DocumentUploadService {
    pub fn new(
        gateway: Arc<dyn DocumentGateway>,
        tracker: Arc<UploadTracker>,
        max_concurrent: Option<usize>,
        max_file_bytes: u64,
    ) -> Self {
        Self {
            gateway,
            tracker,
            max_concurrent,
            max_file_bytes,
        }
    }

    pub fn tracker(&self) -> Arc<UploadTracker> {
        Arc::clone(&self.tracker)
    }

    pub async fn upload_batch(
        &self,
        vehicle_id: &EntityId,
        category: DocumentCategory,
        files: Vec<UploadFile>,
        registrar: &dyn DocumentRegistrar,
    ) -> BatchReport {
        // 前回バッチの結果は新しいバッチの開始時に片付ける
        let cleared = self.tracker.clear_finished(category).await;
        if cleared > 0 {
            debug!(%category, cleared, "cleared finished uploads");
        }

        let mut jobs = Vec::with_capacity(files.len());
        for file in files {
            let upload_id = self.tracker.begin(category, &file.file_name).await;
            jobs.push((upload_id, file));
        }
        let ids: Vec<UploadId> = jobs.iter().map(|(id, _)| id.clone()).collect();

        let limit = self.max_concurrent.unwrap_or(jobs.len()).max(1);
        info!(%vehicle_id, %category, files = jobs.len(), limit, "starting document upload batch");

        stream::iter(jobs)
            .map(|(upload_id, file)| {
                self.upload_one(vehicle_id, category, upload_id, file, registrar)
            })
            .buffer_unordered(limit)
            .collect::<Vec<()>>()
            .await;

        let snapshot = self.tracker.snapshot(category).await;
        let entries = ids
            .iter()
            .filter_map(|id| snapshot.iter().find(|entry| &entry.upload_id == id).cloned())
            .collect();
        BatchReport { entries }
    }

    async fn upload_one(
        &self,
        vehicle_id: &EntityId,
        category: DocumentCategory,
        upload_id: UploadId,
        file: UploadFile,
        registrar: &dyn DocumentRegistrar,
    ) {
        self.tracker
            .update(category, &upload_id, |entry| entry.status = UploadStatus::Uploading)
            .await;

        let file_name = file.file_name.clone();
        match self.transfer(vehicle_id, category, file, registrar).await {
            Ok(file_key) => {
                info!(
                    %vehicle_id,
                    %category,
                    file = %file_name,
                    key = %file_key,
                    "document uploaded"
                );
                self.tracker
                    .update(category, &upload_id, |entry| {
                        entry.status = UploadStatus::Completed;
                        entry.file_key = Some(file_key);
                    })
                    .await;
            }
            Err(failure) => {
                warn!(
                    %vehicle_id,
                    %category,
                    file = %file_name,
                    error = %failure,
                    "document upload failed"
                );
                self.tracker
                    .update(category, &upload_id, |entry| {
                        entry.status = UploadStatus::Error(failure.to_string());
                    })
                    .await;
            }
        }
    }

    async fn transfer(
        &self,
        vehicle_id: &EntityId,
        category: DocumentCategory,
        file: UploadFile,
        registrar: &dyn DocumentRegistrar,
    ) -> Result<String, UploadFailure> {
        self.check_file(&file)?;

        let request = UploadUrlRequest {
            file_name: file.file_name.clone(),
            file_type: file.mime_type.clone(),
            category,
            vehicle_id: vehicle_id.clone(),
        };
        let target = self
            .gateway
            .request_upload_url(&request)
            .await
            .map_err(UploadFailure::UploadUrl)?;

        self.gateway
            .put_object(&target.upload_url, file.bytes, &file.mime_type)
            .await
            .map_err(UploadFailure::Transfer)?;

        let document = DocumentRef {
            key: target.file_key.clone(),
            name: file.file_name,
            uploaded_at: Utc::now(),
        };
        registrar
            .register(category, document)
            .await
            .map_err(UploadFailure::Register)?;

        Ok(target.file_key)
    }

    fn check_file(&self, file: &UploadFile) -> Result<(), UploadFailure> {
        if file.bytes.is_empty() {
            return Err(UploadFailure::Empty);
        }
        let size = file.bytes.len() as u64;
        if size > self.max_file_bytes {
            return Err(UploadFailure::TooLarge {
                size,
                limit: self.max_file_bytes,
            });
        }
        if file.mime_type.trim().is_empty() {
            return Err(UploadFailure::MissingType);
        }
        Ok(())
    }
}
