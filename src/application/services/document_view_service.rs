use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::application::ports::{DocumentGateway, SignedUrl};
use crate::domain::value_objects::EntityId;
use crate::shared::error::AppError;
use crate::shared::validation::ValidationFailureKind;

/// 閲覧用の署名付き URL を取得する。取得中のドキュメントを記録しておき、画面側のスピナーに使う
pub struct DocumentViewService {
    gateway: Arc<dyn DocumentGateway>,
    loading: RwLock<HashSet<String>>,
}

impl DocumentViewService {
    pub fn new(gateway: Arc<dyn DocumentGateway>) -> Self {
        Self {
            gateway,
            loading: RwLock::new(HashSet::new()),
        }
    }

    pub async fn is_loading(&self, key: &str) -> bool {
        self.loading.read().await.contains(key)
    }

    pub async fn view_business_document(&self, document_id: &str) -> Result<SignedUrl, AppError> {
        let document_id = document_id.trim();
        if document_id.is_empty() {
            return Err(AppError::validation(
                ValidationFailureKind::EmptyContent,
                "Document id is required",
            ));
        }

        let keys = [document_id.to_string()];
        self.mark(&keys).await;
        let result = self.gateway.view_business_document(document_id).await;
        self.unmark(&keys).await;

        match &result {
            Ok(_) => info!(document = document_id, "business document URL issued"),
            Err(err) => {
                warn!(document = document_id, error = %err, "failed to view business document")
            }
        }
        result
    }

    /// 複数キーをまとめて取得する。空なら問い合わせない
    pub async fn view_vehicle_documents(
        &self,
        vehicle_id: &EntityId,
        keys: &[String],
    ) -> Result<Vec<SignedUrl>, AppError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        self.mark(keys).await;
        let result = self.gateway.view_vehicle_documents(vehicle_id, keys).await;
        self.unmark(keys).await;

        match &result {
            Ok(urls) => info!(%vehicle_id, count = urls.len(), "vehicle document URLs issued"),
            Err(err) => warn!(%vehicle_id, error = %err, "failed to view vehicle documents"),
        }
        result
    }

    async fn mark(&self, keys: &[String]) {
        let mut loading = self.loading.write().await;
        loading.extend(keys.iter().cloned());
    }

    async fn unmark(&self, keys: &[String]) {
        let mut loading = self.loading.write().await;
        for key in keys {
            loading.remove(key);
        }
    }
}
