use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

use crate::domain::value_objects::ItemId;

/// タブレコード内の配列要素
pub trait CollectionItem:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// 既定値で埋めた新規要素
    fn with_id(id: ItemId) -> Self;

    fn id(&self) -> &ItemId;

    fn status(&self) -> Option<&str> {
        None
    }

    /// カード表示用の見出し
    fn title(&self) -> String;
}

pub(crate) const DEFAULT_ITEM_STATUS: &str = "Active";

pub(crate) fn default_status() -> Option<String> {
    Some(DEFAULT_ITEM_STATUS.to_string())
}

pub(crate) fn title_or(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}
