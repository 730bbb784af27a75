use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use super::record_editor::RecordEditor;
use crate::application::ports::DocumentRegistrar;
use crate::domain::entities::{DocumentRef, VehicleDocuments};
use crate::domain::value_objects::DocumentCategory;
use crate::shared::error::AppError;

/// アップロード完了時に車両の `documents` タブへ参照を追記する。
///
/// 並行して完了したファイル同士が追記を上書きし合わないよう、エディタをロックして 1 件ずつ保存する。
pub struct EditorDocumentRegistrar {
    editor: Mutex<RecordEditor<VehicleDocuments>>,
}

impl EditorDocumentRegistrar {
    pub fn new(editor: RecordEditor<VehicleDocuments>) -> Self {
        Self {
            editor: Mutex::new(editor),
        }
    }

    /// 保存済みの書類一覧
    pub async fn documents(&self) -> VehicleDocuments {
        self.editor.lock().await.record().clone()
    }
}

#[async_trait]
impl DocumentRegistrar for EditorDocumentRegistrar {
    async fn register(
        &self,
        category: DocumentCategory,
        document: DocumentRef,
    ) -> Result<(), AppError> {
        let mut editor = self.editor.lock().await;
        editor.enter_edit();
        editor.update(|draft| draft.category_mut(category).push(document))?;

        match editor.try_save().await {
            Ok(_) => Ok(()),
            Err(err) => {
                // 失敗したファイルの参照を後続の保存に持ち越さない
                editor.cancel();
                warn!(%category, error = %err, "document reference was not persisted");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{AlertNotifier, RecordInvalidator, TabGateway};
    use crate::application::services::record_editor::EditorDeps;
    use crate::domain::entities::TabPayload;
    use crate::domain::value_objects::{EntityId, EntityRef};
    use chrono::Utc;
    use mockall::mock;
    use serde_json::{json, Value};
    use std::sync::Arc;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl TabGateway for Gateway {
            async fn update_tab(
                &self,
                entity: &EntityRef,
                payload: &TabPayload,
            ) -> Result<Value, AppError>;
        }
    }

    mock! {
        pub Invalidator {}

        #[async_trait]
        impl RecordInvalidator for Invalidator {
            async fn invalidate(&self, entity: &EntityRef) -> Result<(), AppError>;
        }
    }

    mock! {
        pub Notifier {}

        #[async_trait]
        impl AlertNotifier for Notifier {
            async fn alert(&self, message: &str) -> Result<(), AppError>;
        }
    }

    fn doc(key: &str) -> DocumentRef {
        DocumentRef {
            key: key.to_string(),
            name: format!("{key}.pdf"),
            uploaded_at: Utc::now(),
        }
    }

    fn registrar(gateway: MockGateway) -> EditorDocumentRegistrar {
        let mut invalidator = MockInvalidator::new();
        invalidator.expect_invalidate().returning(|_| Ok(()));
        let mut notifier = MockNotifier::new();
        notifier.expect_alert().times(0);
        let deps = EditorDeps {
            gateway: Arc::new(gateway),
            invalidator: Arc::new(invalidator),
            notifier: Arc::new(notifier),
        };
        let entity = EntityRef::vehicle(EntityId::parse("veh-1").unwrap());
        EditorDocumentRegistrar::new(
            RecordEditor::new(entity, VehicleDocuments::default(), deps).unwrap(),
        )
    }

    #[tokio::test]
    async fn concurrent_registrations_all_survive() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_update_tab()
            .times(3)
            .returning(|_, _| Ok(json!({ "success": true })));
        let registrar = registrar(gateway);

        let (a, b, c) = tokio::join!(
            registrar.register(DocumentCategory::Registration, doc("a")),
            registrar.register(DocumentCategory::Registration, doc("b")),
            registrar.register(DocumentCategory::Title, doc("c")),
        );
        assert!(a.is_ok() && b.is_ok() && c.is_ok());

        let documents = registrar.documents().await;
        assert_eq!(documents.registration.len(), 2);
        assert_eq!(documents.title.len(), 1);
    }

    #[tokio::test]
    async fn failed_registration_is_not_carried_into_next_save() {
        let mut gateway = MockGateway::new();
        let mut seq = mockall::Sequence::new();
        gateway
            .expect_update_tab()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(AppError::Network("Server error (500)".to_string())));
        gateway
            .expect_update_tab()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|_, payload| match payload {
                TabPayload::Documents(documents) => documents.all_keys() == vec!["ok".to_string()],
                _ => false,
            })
            .returning(|_, _| Ok(json!({ "success": true })));
        let registrar = registrar(gateway);

        assert!(registrar
            .register(DocumentCategory::Insurance, doc("lost"))
            .await
            .is_err());
        registrar
            .register(DocumentCategory::Insurance, doc("ok"))
            .await
            .unwrap();

        assert_eq!(registrar.documents().await.all_keys(), vec!["ok".to_string()]);
    }
}
