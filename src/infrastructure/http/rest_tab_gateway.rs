use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use super::api_client::{request_json, ApiClient};
use crate::application::ports::{RecordSource, TabGateway};
use crate::domain::entities::TabPayload;
use crate::domain::value_objects::EntityRef;
use crate::shared::error::AppError;

fn entity_segments(entity: &EntityRef) -> [&str; 3] {
    ["api", entity.kind.api_segment(), entity.id.as_str()]
}

/// `PUT /api/{business|fleet}/{id}/tabs`
pub struct RestTabGateway {
    client: Arc<ApiClient>,
}

impl RestTabGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TabGateway for RestTabGateway {
    async fn update_tab(
        &self,
        entity: &EntityRef,
        payload: &TabPayload,
    ) -> Result<Value, AppError> {
        let [api, segment, id] = entity_segments(entity);
        debug!(%entity, tab = %payload.tab_type(), "sending tab update");
        let builder = self
            .client
            .request_segments(Method::PUT, &[api, segment, id, "tabs"])?
            .json(payload);
        request_json(builder, &format!("{} {} tab update", entity, payload.tab_type())).await
    }
}

/// `GET /api/{business|fleet}/{id}`
pub struct RestRecordSource {
    client: Arc<ApiClient>,
}

impl RestRecordSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordSource for RestRecordSource {
    async fn fetch_record(&self, entity: &EntityRef) -> Result<Value, AppError> {
        let builder = self
            .client
            .request_segments(Method::GET, &entity_segments(entity))?;
        let document: Value = request_json(builder, &entity.to_string()).await?;
        if document.is_object() {
            Ok(document)
        } else {
            Err(AppError::DeserializationError(format!(
                "{entity} response is not an object"
            )))
        }
    }
}
