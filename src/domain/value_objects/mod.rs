pub mod badge_color;
pub mod document_category;
pub mod entity_id;
pub mod entity_kind;
pub mod item_id;
pub mod tab_type;

pub use badge_color::BadgeColor;
pub use document_category::DocumentCategory;
pub use entity_id::EntityId;
pub use entity_kind::{EntityKind, EntityRef};
pub use item_id::ItemId;
pub use tab_type::TabType;
