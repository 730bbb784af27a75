use crate::domain::value_objects::EntityKind;
use crate::shared::error::AppError;

/// 読み込み失敗時の画面遷移
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// レコードが存在しないので一覧に戻す
    RedirectToList(&'static str),
    /// その場でエラーメッセージを出す
    ShowError(String),
}

impl Navigation {
    pub fn for_load_error(kind: EntityKind, error: &AppError) -> Self {
        if error.is_not_found() {
            Navigation::RedirectToList(kind.list_path())
        } else {
            Navigation::ShowError(error.user_message())
        }
    }
}
