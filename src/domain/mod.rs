pub mod entities;
pub mod value_objects;

pub use entities::{CollectionItem, TabPayload, TabRecord};
pub use value_objects::{
    BadgeColor, DocumentCategory, EntityId, EntityKind, EntityRef, ItemId, TabType,
};
