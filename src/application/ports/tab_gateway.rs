use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::TabPayload;
use crate::domain::value_objects::EntityRef;
use crate::shared::error::AppError;

/// タブ単位の更新を受け付ける永続化先
#[async_trait]
pub trait TabGateway: Send + Sync {
    /// 成功時はサーバーのレスポンスボディを返す（ログ用途のみ）
    async fn update_tab(&self, entity: &EntityRef, payload: &TabPayload)
    -> Result<Value, AppError>;
}
