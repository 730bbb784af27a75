#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use gigdesk::application::ports::{
    DocumentGateway, RecordSource, SignedUrl, TabGateway, UploadTarget, UploadUrlRequest,
};
use gigdesk::domain::entities::TabPayload;
use gigdesk::domain::value_objects::{EntityId, EntityRef};
use gigdesk::AppError;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// タブ更新を親ドキュメントに書き戻すだけのバックエンド
#[derive(Default)]
pub struct InMemoryBackend {
    records: Mutex<HashMap<EntityRef, Value>>,
    fail_saves: AtomicBool,
    pub saves: AtomicUsize,
    pub fetches: AtomicUsize,
}

impl InMemoryBackend {
    pub fn with_record(entity: EntityRef, document: Value) -> Self {
        let backend = Self::default();
        backend
            .records
            .lock()
            .expect("records lock")
            .insert(entity, document);
        backend
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub fn document(&self, entity: &EntityRef) -> Option<Value> {
        self.records.lock().expect("records lock").get(entity).cloned()
    }
}

#[async_trait]
impl TabGateway for InMemoryBackend {
    async fn update_tab(
        &self,
        entity: &EntityRef,
        payload: &TabPayload,
    ) -> Result<Value, AppError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(AppError::Network("Server error (500)".to_string()));
        }
        let body = serde_json::to_value(payload)?;
        let mut records = self.records.lock().expect("records lock");
        let document = records.entry(entity.clone()).or_insert_with(|| json!({}));
        document[payload.tab_type().record_key()] = body["data"].clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "success": true }))
    }
}

#[async_trait]
impl RecordSource for InMemoryBackend {
    async fn fetch_record(&self, entity: &EntityRef) -> Result<Value, AppError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.document(entity)
            .ok_or_else(|| AppError::NotFound(entity.to_string()))
    }
}

/// 指定したファイル名の転送だけ失敗させるストレージ
pub struct FlakyStorage {
    failing_file: String,
    pub transfers: AtomicUsize,
}

impl FlakyStorage {
    pub fn failing_on(file_name: &str) -> Self {
        Self {
            failing_file: file_name.to_string(),
            transfers: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl DocumentGateway for FlakyStorage {
    async fn request_upload_url(
        &self,
        request: &UploadUrlRequest,
    ) -> Result<UploadTarget, AppError> {
        let key = format!("vehicles/{}/{}", request.vehicle_id, request.file_name);
        Ok(UploadTarget {
            upload_url: format!("https://storage.test/put/{key}"),
            file_url: format!("https://storage.test/{key}"),
            file_key: key,
        })
    }

    async fn put_object(
        &self,
        upload_url: &str,
        _bytes: Bytes,
        _mime: &str,
    ) -> Result<(), AppError> {
        self.transfers.fetch_add(1, Ordering::SeqCst);
        if upload_url.ends_with(&self.failing_file) {
            Err(AppError::Upload("Storage error (403)".to_string()))
        } else {
            Ok(())
        }
    }

    async fn view_business_document(&self, document_id: &str) -> Result<SignedUrl, AppError> {
        Ok(SignedUrl {
            key: document_id.to_string(),
            url: format!("https://storage.test/{document_id}?sig=1"),
            expires_at: None,
        })
    }

    async fn view_vehicle_documents(
        &self,
        _vehicle_id: &EntityId,
        document_keys: &[String],
    ) -> Result<Vec<SignedUrl>, AppError> {
        Ok(document_keys
            .iter()
            .map(|key| SignedUrl {
                key: key.clone(),
                url: format!("https://storage.test/{key}?sig=1"),
                expires_at: None,
            })
            .collect())
    }
}
