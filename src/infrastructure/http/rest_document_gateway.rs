use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use std::sync::Arc;

use super::api_client::{request_empty, request_json, ApiClient};
use super::dto::{
    BusinessDocumentViewBody, BusinessDocumentViewResponse, UploadUrlBody, UploadUrlResponse,
    VehicleDocumentViewBody, VehicleDocumentViewResponse,
};
use crate::application::ports::{DocumentGateway, SignedUrl, UploadTarget, UploadUrlRequest};
use crate::domain::value_objects::EntityId;
use crate::shared::error::AppError;

const UPLOAD_URL_PATH: &str = "/api/fleet/documents/upload";
const VEHICLE_VIEW_PATH: &str = "/api/fleet/documents/view";
const BUSINESS_VIEW_PATH: &str = "/api/business/documents/view";

pub struct RestDocumentGateway {
    client: Arc<ApiClient>,
}

impl RestDocumentGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentGateway for RestDocumentGateway {
    async fn request_upload_url(
        &self,
        request: &UploadUrlRequest,
    ) -> Result<UploadTarget, AppError> {
        let body = UploadUrlBody {
            file_name: &request.file_name,
            file_type: &request.file_type,
            document_category: request.category,
            vehicle_id: request.vehicle_id.as_str(),
        };
        let builder = self.client.request(Method::POST, UPLOAD_URL_PATH).json(&body);
        let response: UploadUrlResponse = request_json(builder, "upload URL request").await?;
        Ok(UploadTarget {
            upload_url: response.upload_url,
            file_key: response.file_key,
            file_url: response.file_url,
        })
    }

    async fn put_object(&self, upload_url: &str, bytes: Bytes, mime: &str) -> Result<(), AppError> {
        let builder = self
            .client
            .request_absolute(Method::PUT, upload_url)
            .header(CONTENT_TYPE, mime)
            .body(bytes);
        request_empty(builder, "storage upload")
            .await
            .map_err(|err| match err {
                AppError::Network(message) => AppError::Upload(message),
                other => other,
            })
    }

    async fn view_business_document(&self, document_id: &str) -> Result<SignedUrl, AppError> {
        let body = BusinessDocumentViewBody { document_id };
        let builder = self.client.request(Method::POST, BUSINESS_VIEW_PATH).json(&body);
        let response: BusinessDocumentViewResponse =
            request_json(builder, &format!("business document {document_id}")).await?;
        Ok(SignedUrl {
            key: document_id.to_string(),
            url: response.url,
            expires_at: response.expires_at,
        })
    }

    async fn view_vehicle_documents(
        &self,
        vehicle_id: &EntityId,
        document_keys: &[String],
    ) -> Result<Vec<SignedUrl>, AppError> {
        let body = VehicleDocumentViewBody {
            vehicle_id: vehicle_id.as_str(),
            document_keys,
        };
        let builder = self.client.request(Method::POST, VEHICLE_VIEW_PATH).json(&body);
        let response: VehicleDocumentViewResponse =
            request_json(builder, &format!("vehicle {vehicle_id} documents")).await?;
        Ok(response
            .urls
            .into_iter()
            .map(|entry| SignedUrl {
                key: entry.key,
                url: entry.url,
                expires_at: None,
            })
            .collect())
    }
}
