use reqwest::header::HeaderMap;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::shared::config::ApiConfig;
use crate::shared::error::AppError;
use crate::shared::validation::ValidationFailureKind;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// ダッシュボード API への共通クライアント
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let base_url = normalize_base_url(&config.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| AppError::ConfigurationError(format!("HTTP client: {err}")))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API ベース URL からの相対パスでリクエストを組み立てる
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, build_url(&self.base_url, path))
    }

    /// パスセグメントを 1 つずつエスケープして組み立てる。ID など外部由来の値はこちらを使う
    pub(crate) fn request_segments(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, AppError> {
        let url = segments_url(&self.base_url, segments)?;
        Ok(self.client.request(method, url))
    }

    /// 署名付き URL など API 外の絶対 URL 向け
    pub(crate) fn request_absolute(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    let url = Url::parse(&trimmed).map_err(|err| {
        AppError::validation(
            ValidationFailureKind::Generic,
            format!("Invalid URL: {err}"),
        )
    })?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed),
        _ => Err(AppError::validation(
            ValidationFailureKind::Generic,
            "URL scheme must be http or https",
        )),
    }
}

pub(crate) fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

pub(crate) fn segments_url(base_url: &str, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = Url::parse(base_url)
        .map_err(|err| AppError::ConfigurationError(format!("Invalid base URL: {err}")))?;
    url.path_segments_mut()
        .map_err(|_| AppError::ConfigurationError("Base URL cannot carry a path".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// 2xx 以外をエラーに変換して JSON ボディを読む。空のボディは `null` として扱う
pub(crate) async fn request_json<T: DeserializeOwned>(
    builder: RequestBuilder,
    context: &str,
) -> Result<T, AppError> {
    let body = send(builder, context).await?;
    let body = if body.trim().is_empty() { "null" } else { body.as_str() };
    serde_json::from_str(body).map_err(|err| AppError::DeserializationError(err.to_string()))
}

/// ボディを使わないリクエスト
pub(crate) async fn request_empty(builder: RequestBuilder, context: &str) -> Result<(), AppError> {
    send(builder, context).await.map(|_| ())
}

async fn send(builder: RequestBuilder, context: &str) -> Result<String, AppError> {
    let response = builder
        .send()
        .await
        .map_err(|err| AppError::Network(err.to_string()))?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .text()
        .await
        .map_err(|err| AppError::Network(err.to_string()))?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(status_error(status, &headers, &body, context))
    }
}

fn status_error(status: StatusCode, headers: &HeaderMap, body: &str, context: &str) -> AppError {
    match status {
        StatusCode::NOT_FOUND => AppError::NotFound(context.to_string()),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = headers
                .get("Retry-After")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            AppError::rate_limited(format!("{context} rate limited"), retry_after)
        }
        _ => AppError::Network(format!("{context} failed ({status}): {body}")),
    }
}
