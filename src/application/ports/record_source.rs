use async_trait::async_trait;
use serde_json::Value;

use crate::domain::value_objects::EntityRef;
use crate::shared::error::AppError;

/// 親エンティティのドキュメント全体を取得する
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_record(&self, entity: &EntityRef) -> Result<Value, AppError>;
}

/// 保存成功後に該当エンティティだけを再取得させる
#[async_trait]
pub trait RecordInvalidator: Send + Sync {
    async fn invalidate(&self, entity: &EntityRef) -> Result<(), AppError>;
}
