use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Mutex;
use tracing::info;

use crate::application::ports::{AlertNotifier, DocumentGateway, RecordSource, TabGateway};
use crate::application::services::{
    BatchReport, DocumentUploadService, DocumentViewService, EditorDeps, EditorDocumentRegistrar,
    RecordEditor, RecordStore, UploadFile, UploadTracker,
};
use crate::domain::entities::{TabRecord, VehicleDocuments};
use crate::domain::value_objects::{DocumentCategory, EntityId, EntityRef};
use crate::infrastructure::http::{ApiClient, RestDocumentGateway, RestRecordSource, RestTabGateway};
use crate::infrastructure::notify::ChannelAlertNotifier;
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use crate::shared::validation::ValidationFailureKind;

/// 外部とやり取りする実装の組
pub struct Ports {
    pub tabs: Arc<dyn TabGateway>,
    pub records: Arc<dyn RecordSource>,
    pub documents: Arc<dyn DocumentGateway>,
    pub notifier: Arc<dyn AlertNotifier>,
}

/// アプリケーション全体の状態を管理する構造体
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub record_store: Arc<RecordStore>,
    pub upload_service: Arc<DocumentUploadService>,
    pub view_service: Arc<DocumentViewService>,
    editor_deps: EditorDeps,
    alert_rx: Arc<Mutex<Option<UnboundedReceiver<String>>>>,
}

impl AppState {
    /// REST 実装で組み立てる
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate().map_err(anyhow::Error::msg)?;

        let client = Arc::new(ApiClient::new(&config.api)?);
        info!(base_url = client.base_url(), "dashboard API client ready");

        let (notifier, alert_rx) = ChannelAlertNotifier::new();
        let ports = Ports {
            tabs: Arc::new(RestTabGateway::new(Arc::clone(&client))),
            records: Arc::new(RestRecordSource::new(Arc::clone(&client))),
            documents: Arc::new(RestDocumentGateway::new(client)),
            notifier: Arc::new(notifier),
        };

        let state = Self::with_ports(config, ports);
        Ok(Self {
            alert_rx: Arc::new(Mutex::new(Some(alert_rx))),
            ..state
        })
    }

    /// 任意の実装を差し込んで組み立てる
    pub fn with_ports(config: AppConfig, ports: Ports) -> Self {
        let record_store = Arc::new(RecordStore::new(
            ports.records,
            Duration::from_secs(config.records.cache_ttl_secs),
        ));
        let upload_service = Arc::new(DocumentUploadService::new(
            Arc::clone(&ports.documents),
            Arc::new(UploadTracker::new()),
            config.uploads.max_concurrent,
            config.uploads.max_file_bytes,
        ));
        let view_service = Arc::new(DocumentViewService::new(ports.documents));
        let editor_deps = EditorDeps {
            gateway: ports.tabs,
            invalidator: record_store.clone(),
            notifier: ports.notifier,
        };

        Self {
            config: Arc::new(config),
            record_store,
            upload_service,
            view_service,
            editor_deps,
            alert_rx: Arc::new(Mutex::new(None)),
        }
    }

    /// 通知の受信側を取り出す。2 回目以降は `None`
    pub async fn take_alert_receiver(&self) -> Option<UnboundedReceiver<String>> {
        self.alert_rx.lock().await.take()
    }

    /// 最新のレコードを読み込んでタブのエディタを作る
    pub async fn open_editor<T: TabRecord>(
        &self,
        entity: EntityRef,
    ) -> Result<RecordEditor<T>, AppError> {
        if T::TAB.entity_kind() != entity.kind {
            return Err(AppError::validation(
                ValidationFailureKind::TabMismatch,
                format!("Tab '{}' does not belong to {}", T::TAB, entity.kind),
            ));
        }
        let record = self.record_store.load_tab::<T>(&entity).await?;
        RecordEditor::new(entity, record, self.editor_deps.clone())
    }

    pub async fn document_registrar(
        &self,
        vehicle_id: EntityId,
    ) -> Result<EditorDocumentRegistrar, AppError> {
        let editor = self
            .open_editor::<VehicleDocuments>(EntityRef::vehicle(vehicle_id))
            .await?;
        Ok(EditorDocumentRegistrar::new(editor))
    }

    /// 車両書類を 1 カテゴリ分まとめてアップロードする
    pub async fn upload_documents(
        &self,
        vehicle_id: &EntityId,
        category: DocumentCategory,
        files: Vec<UploadFile>,
    ) -> Result<BatchReport, AppError> {
        let registrar = self.document_registrar(vehicle_id.clone()).await?;
        Ok(self
            .upload_service
            .upload_batch(vehicle_id, category, files, &registrar)
            .await)
    }
}
