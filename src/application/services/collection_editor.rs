use serde_json::Value;

use crate::domain::entities::CollectionItem;
use crate::domain::value_objects::ItemId;
use crate::shared::error::AppError;
use crate::shared::json_fields;
use crate::shared::validation::ValidationFailureKind;

/// ドラフト内の配列を追加・削除・フィールド更新する。順序は追加順のまま
pub struct CollectionEditor<'a, I: CollectionItem> {
    items: &'a mut Vec<I>,
}

impl<'a, I: CollectionItem> CollectionEditor<'a, I> {
    pub(crate) fn new(items: &'a mut Vec<I>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[I] {
        self.items.as_slice()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_item(&mut self) -> ItemId {
        let id = ItemId::generate();
        self.items.push(I::with_id(id.clone()));
        id
    }

    /// 一致した要素を取り除いた配列に置き換える。削除したかどうかを返す
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// ワイヤ上のフィールド名（camelCase）で 1 要素の 1 フィールドを置き換える。
    /// 該当する要素が無ければ `false`
    pub fn update_item(
        &mut self,
        id: &ItemId,
        field: &str,
        value: Value,
    ) -> Result<bool, AppError> {
        if field == "id" {
            return Err(AppError::validation(
                ValidationFailureKind::Generic,
                "Item id cannot be changed",
            ));
        }
        let Some(position) = self.items.iter().position(|item| item.id() == id) else {
            return Ok(false);
        };

        let mut document = serde_json::to_value(&self.items[position])?;
        json_fields::set_field(&mut document, field, value)?;
        let updated: I = serde_json::from_value(document).map_err(|err| {
            AppError::validation(
                ValidationFailureKind::TypeMismatch,
                format!("Cannot set '{field}': {err}"),
            )
        })?;
        self.items[position] = updated;
        Ok(true)
    }

    /// 型付きで 1 要素を更新する
    pub fn update_item_with<F>(&mut self, id: &ItemId, apply: F) -> bool
    where
        F: FnOnce(&mut I),
    {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                apply(item);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Loan, SocialAccount, Tradeline};
    use chrono::NaiveDate;
    use serde_json::json;

    fn loans(count: usize) -> Vec<Loan> {
        (0..count)
            .map(|i| Loan {
                lender: Some(format!("Lender {i}")),
                ..Loan::with_id(ItemId::new(format!("loan-{i}")).unwrap())
            })
            .collect()
    }

    #[test]
    fn add_then_remove_keeps_length() {
        let mut items = loans(2);
        let mut editor = CollectionEditor::new(&mut items);

        let id = editor.add_item();
        assert_eq!(editor.len(), 3);
        assert!(editor.remove_item(&id));

        assert_eq!(editor.len(), 2);
    }

    #[test]
    fn new_items_get_defaults_and_unique_ids() {
        let mut items: Vec<Tradeline> = Vec::new();
        let mut editor = CollectionEditor::new(&mut items);

        let first = editor.add_item();
        let second = editor.add_item();

        assert_ne!(first, second);
        assert_eq!(editor.items()[0].status.as_deref(), Some("Active"));
        assert_eq!(editor.items()[1].id(), &second);
    }

    #[test]
    fn update_item_touches_only_the_target() {
        let mut items = loans(3);
        let before = items.clone();
        let mut editor = CollectionEditor::new(&mut items);

        let target = ItemId::new("loan-1".to_string()).unwrap();
        assert!(editor.update_item(&target, "amount", json!("15000")).unwrap());

        assert_eq!(items[0], before[0]);
        assert_eq!(items[2], before[2]);
        assert_eq!(items[1].amount.as_deref(), Some("15000"));
        assert_eq!(
            Loan {
                amount: None,
                ..items[1].clone()
            },
            before[1]
        );
    }

    #[test]
    fn update_item_parses_dates() {
        let mut items = loans(1);
        let mut editor = CollectionEditor::new(&mut items);
        let target = ItemId::new("loan-0".to_string()).unwrap();

        editor
            .update_item(&target, "startDate", json!("2024-06-01"))
            .unwrap();

        assert_eq!(items[0].start_date, NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn update_item_rejects_unknown_fields_and_id_changes() {
        let mut items = loans(1);
        let before = items.clone();
        let mut editor = CollectionEditor::new(&mut items);
        let target = ItemId::new("loan-0".to_string()).unwrap();

        assert!(editor.update_item(&target, "lendr", json!("x")).is_err());
        assert!(editor.update_item(&target, "id", json!("other")).is_err());
        assert!(editor.update_item(&target, "startDate", json!("someday")).is_err());
        assert_eq!(items, before);
    }

    #[test]
    fn missing_ids_are_reported_not_errors() {
        let mut items = loans(1);
        let mut editor = CollectionEditor::new(&mut items);
        let ghost = ItemId::new("ghost".to_string()).unwrap();

        assert!(!editor.remove_item(&ghost));
        assert!(!editor.update_item(&ghost, "amount", json!("1")).unwrap());
        assert!(!editor.update_item_with(&ghost, |loan| loan.amount = None));
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn update_item_with_edits_in_place() {
        let mut items: Vec<SocialAccount> = Vec::new();
        let mut editor = CollectionEditor::new(&mut items);
        let id = editor.add_item();

        assert!(editor.update_item_with(&id, |account| {
            account.platform = Some("Instagram".to_string());
            account.handle = Some("@fastfleet".to_string());
        }));

        assert_eq!(items[0].title(), "Instagram @fastfleet");
    }
}
