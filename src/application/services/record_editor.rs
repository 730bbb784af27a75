use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::collection_editor::CollectionEditor;
use crate::application::ports::{AlertNotifier, RecordInvalidator, TabGateway};
use crate::domain::entities::{CollectionItem, TabRecord};
use crate::domain::value_objects::{EntityRef, TabType};
use crate::shared::error::AppError;
use crate::shared::json_fields;
use crate::shared::validation::ValidationFailureKind;

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save changes. Please try again.";

/// エディタが共有する外部依存
#[derive(Clone)]
pub struct EditorDeps {
    pub gateway: Arc<dyn TabGateway>,
    pub invalidator: Arc<dyn RecordInvalidator>,
    pub notifier: Arc<dyn AlertNotifier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// 編集モード外で呼ばれたため何もしていない
    NotEditing,
}

/// 1 タブ分のレコードを編集する。
///
/// 編集中でなければ `draft == record` が常に成り立つ。`record` が置き換わるのは保存成功時のみ。
pub struct RecordEditor<T: TabRecord> {
    entity: EntityRef,
    record: T,
    draft: T,
    is_editing: bool,
    deps: EditorDeps,
}

impl<T: TabRecord> RecordEditor<T> {
    pub fn new(entity: EntityRef, record: T, deps: EditorDeps) -> Result<Self, AppError> {
        if T::TAB.entity_kind() != entity.kind {
            return Err(AppError::validation(
                ValidationFailureKind::TabMismatch,
                format!("Tab '{}' does not belong to {}", T::TAB, entity.kind),
            ));
        }
        Ok(Self {
            entity,
            draft: record.clone(),
            record,
            is_editing: false,
            deps,
        })
    }

    /// 親ドキュメントから該当タブのレコードを取り出して作成する
    pub fn from_parent(
        entity: EntityRef,
        parent: &Value,
        deps: EditorDeps,
    ) -> Result<Self, AppError> {
        let record = T::from_parent(parent)?;
        Self::new(entity, record, deps)
    }

    pub fn entity(&self) -> &EntityRef {
        &self.entity
    }

    pub fn tab(&self) -> TabType {
        T::TAB
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn record(&self) -> &T {
        &self.record
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.record
    }

    pub fn enter_edit(&mut self) {
        self.is_editing = true;
    }

    pub fn cancel(&mut self) {
        self.draft = self.record.clone();
        self.is_editing = false;
    }

    /// 型付きのフィールド更新。クロージャで触らなかったフィールドはそのまま
    pub fn update<F>(&mut self, apply: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut T),
    {
        self.ensure_editing()?;
        apply(&mut self.draft);
        Ok(())
    }

    /// `pip.premium` のようなパス指定でネストしたグループ内の 1 フィールドを置き換える
    pub fn set_path(&mut self, path: &str, value: Value) -> Result<(), AppError> {
        self.ensure_editing()?;
        let mut document = serde_json::to_value(&self.draft)?;
        json_fields::set_field(&mut document, path, value)?;
        let next: T = serde_json::from_value(document).map_err(|err| {
            AppError::validation(
                ValidationFailureKind::TypeMismatch,
                format!("Cannot set '{path}': {err}"),
            )
        })?;
        self.draft = next;
        Ok(())
    }

    /// ドラフト内の配列フィールドを操作する
    pub fn collection<I, F>(&mut self, select: F) -> Result<CollectionEditor<'_, I>, AppError>
    where
        I: CollectionItem,
        F: FnOnce(&mut T) -> &mut Vec<I>,
    {
        self.ensure_editing()?;
        Ok(CollectionEditor::new(select(&mut self.draft)))
    }

    /// 保存して、失敗時はユーザーに通知する。編集モードは維持される
    pub async fn save(&mut self) -> Result<SaveOutcome, AppError> {
        let result = self.try_save().await;
        if result.is_err() {
            if let Err(err) = self.deps.notifier.alert(SAVE_FAILED_MESSAGE).await {
                warn!(entity = %self.entity, error = %err, "failed to deliver save alert");
            }
        }
        result
    }

    /// 通知なしの保存
    pub async fn try_save(&mut self) -> Result<SaveOutcome, AppError> {
        if !self.is_editing {
            return Ok(SaveOutcome::NotEditing);
        }

        let payload = self.draft.clone().into_payload();
        match self.deps.gateway.update_tab(&self.entity, &payload).await {
            Ok(response) => {
                debug!(entity = %self.entity, tab = %T::TAB, %response, "tab update response");
                self.record = self.draft.clone();
                self.is_editing = false;
                info!(entity = %self.entity, tab = %T::TAB, "tab saved");

                // 保存自体は成功しているので再取得の失敗は呼び出し元に返さない
                if let Err(err) = self.deps.invalidator.invalidate(&self.entity).await {
                    warn!(
                        entity = %self.entity,
                        error = %err,
                        "failed to refresh record after save"
                    );
                }
                Ok(SaveOutcome::Saved)
            }
            Err(err) => {
                error!(entity = %self.entity, tab = %T::TAB, error = %err, "failed to save tab");
                Err(err)
            }
        }
    }

    fn ensure_editing(&self) -> Result<(), AppError> {
        if self.is_editing {
            Ok(())
        } else {
            Err(AppError::InvalidInput(format!(
                "{} tab is not in edit mode",
                T::TAB
            )))
        }
    }
}
