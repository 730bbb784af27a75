use serde::Serialize;

use crate::domain::entities::CollectionItem;
use crate::domain::value_objects::{BadgeColor, ItemId};

const MISSING_STATUS_LABEL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: String,
    pub color: BadgeColor,
}

impl StatusBadge {
    pub fn for_status(status: Option<&str>) -> Self {
        let label = status
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(MISSING_STATUS_LABEL)
            .to_string();
        Self {
            label,
            color: BadgeColor::for_status(status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCard {
    pub id: ItemId,
    pub title: String,
    pub badge: StatusBadge,
}

/// コレクションの表示モデル。空なら案内文だけを出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CollectionView {
    Empty { placeholder: String },
    Cards { cards: Vec<ItemCard> },
}

impl CollectionView {
    pub fn render<I: CollectionItem>(items: &[I], placeholder: &str) -> Self {
        if items.is_empty() {
            return CollectionView::Empty {
                placeholder: placeholder.to_string(),
            };
        }
        let cards = items
            .iter()
            .map(|item| ItemCard {
                id: item.id().clone(),
                title: item.title(),
                badge: StatusBadge::for_status(item.status()),
            })
            .collect();
        CollectionView::Cards { cards }
    }

    pub fn len(&self) -> usize {
        match self {
            CollectionView::Empty { .. } => 0,
            CollectionView::Cards { cards } => cards.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Certification, ServiceRecord};

    #[test]
    fn empty_collection_shows_placeholder() {
        let view = CollectionView::render::<Certification>(&[], "No certifications added yet.");
        assert_eq!(
            view,
            CollectionView::Empty {
                placeholder: "No certifications added yet.".to_string()
            }
        );
        assert!(view.is_empty());
    }

    #[test]
    fn one_card_per_item_with_badge() {
        let mut expired = Certification::with_id(ItemId::new("c-1".to_string()).unwrap());
        expired.name = Some("DBE".to_string());
        expired.status = Some("  EXPIRED ".to_string());
        let mut unlabeled = Certification::with_id(ItemId::new("c-2".to_string()).unwrap());
        unlabeled.status = None;

        let CollectionView::Cards { cards } = CollectionView::render(&[expired, unlabeled], "-")
        else {
            panic!("expected cards");
        };

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "DBE");
        assert_eq!(cards[0].badge.label, "EXPIRED");
        assert_eq!(cards[0].badge.color, BadgeColor::Red);
        assert_eq!(cards[1].title, "New certification");
        assert_eq!(cards[1].badge.label, "Unknown");
        assert_eq!(cards[1].badge.color, BadgeColor::Gray);
    }

    #[test]
    fn new_service_entries_render_as_scheduled() {
        let record = ServiceRecord::with_id(ItemId::generate());
        let view = CollectionView::render(&[record], "No service history.");
        let CollectionView::Cards { cards } = view else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].badge.color, BadgeColor::Yellow);
    }
}
