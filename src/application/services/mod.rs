pub mod collection_editor;
pub mod document_registrar;
pub mod document_upload_service;
pub mod document_view_service;
pub mod record_editor;
pub mod record_store;

pub use collection_editor::CollectionEditor;
pub use document_registrar::EditorDocumentRegistrar;
pub use document_upload_service::{
    BatchReport, DocumentUploadService, UploadFailure, UploadFile, UploadTracker,
};
pub use document_view_service::DocumentViewService;
pub use record_editor::{EditorDeps, RecordEditor, SaveOutcome, SAVE_FAILED_MESSAGE};
pub use record_store::{RecordChanged, RecordStore};
