pub mod api_client;
pub mod dto;
pub mod rest_document_gateway;
pub mod rest_tab_gateway;

pub use api_client::ApiClient;
pub use rest_document_gateway::RestDocumentGateway;
pub use rest_tab_gateway::{RestRecordSource, RestTabGateway};
