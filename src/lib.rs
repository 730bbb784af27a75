pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

pub use application::services::{
    CollectionEditor, DocumentUploadService, DocumentViewService, RecordEditor, RecordStore,
    SaveOutcome,
};
pub use domain::entities::{TabPayload, TabRecord};
pub use domain::value_objects::{EntityId, EntityKind, EntityRef, TabType};
pub use shared::{AppConfig, AppError, Result};
pub use state::{AppState, Ports};

/// ログ設定の初期化。2 回目以降の呼び出しは何もしない
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gigdesk=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
