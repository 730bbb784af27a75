use async_trait::async_trait;

use crate::shared::error::AppError;

/// ユーザーに見せるブロッキングな通知
#[async_trait]
pub trait AlertNotifier: Send + Sync {
    async fn alert(&self, message: &str) -> Result<(), AppError>;
}
