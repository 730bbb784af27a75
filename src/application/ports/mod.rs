pub mod alert_notifier;
pub mod document_gateway;
pub mod record_source;
pub mod tab_gateway;

pub use alert_notifier::AlertNotifier;
pub use document_gateway::{
    DocumentGateway, DocumentRegistrar, SignedUrl, UploadTarget, UploadUrlRequest,
};
pub use record_source::{RecordInvalidator, RecordSource};
pub use tab_gateway::TabGateway;
