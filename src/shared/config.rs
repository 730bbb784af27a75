use serde::{Deserialize, Serialize};

pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600; // 10 minutes
pub const MAX_CACHE_TTL_SECS: u64 = 60 * 60 * 24; // 1 day

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub uploads: UploadConfig,
    pub records: RecordConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// 同一バッチ内の同時アップロード数。`None` は無制限
    #[serde(default)]
    pub max_concurrent: Option<usize>,
    pub max_file_bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordConfig {
    pub cache_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:3000".to_string(),
                request_timeout_secs: 30,
            },
            uploads: UploadConfig {
                max_concurrent: None,
                max_file_bytes: 25 * 1024 * 1024, // 25MB
            },
            records: RecordConfig {
                cache_ttl_secs: 300, // 5 minutes
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を組み立てる
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("GIGDESK_API_BASE_URL") {
            let trimmed = v.trim().trim_end_matches('/');
            if !trimmed.is_empty() {
                cfg.api.base_url = trimmed.to_string();
            }
        }
        if let Some(value) = lookup("GIGDESK_API_TIMEOUT_SECS").and_then(|v| parse_u64(&v)) {
            cfg.api.request_timeout_secs = value.max(1);
        }

        // 0 は無制限扱い
        if let Some(value) = lookup("GIGDESK_UPLOAD_MAX_CONCURRENT").and_then(|v| parse_usize(&v))
        {
            cfg.uploads.max_concurrent = if value == 0 { None } else { Some(value) };
        }
        if let Some(value) = lookup("GIGDESK_UPLOAD_MAX_FILE_BYTES").and_then(|v| parse_u64(&v)) {
            cfg.uploads.max_file_bytes = value;
        }

        if let Some(value) = lookup("GIGDESK_RECORD_CACHE_TTL_SECS").and_then(|v| parse_u64(&v)) {
            cfg.records.cache_ttl_secs = value;
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        let base = self.api.base_url.to_ascii_lowercase();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err("API base_url scheme must be http or https".to_string());
        }
        if self.api.request_timeout_secs == 0 {
            return Err("API request_timeout_secs must be greater than 0".to_string());
        }
        if self.api.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(format!(
                "API request_timeout_secs must be at most {MAX_REQUEST_TIMEOUT_SECS}"
            ));
        }
        if self.uploads.max_file_bytes == 0 {
            return Err("Upload max_file_bytes must be greater than 0".to_string());
        }
        if let Some(0) = self.uploads.max_concurrent {
            return Err("Upload max_concurrent must be greater than 0".to_string());
        }
        if self.records.cache_ttl_secs == 0 {
            return Err("Record cache_ttl_secs must be greater than 0".to_string());
        }
        if self.records.cache_ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(format!(
                "Record cache_ttl_secs must be at most {MAX_CACHE_TTL_SECS}"
            ));
        }
        Ok(())
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_usize(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.uploads.max_concurrent, None);
    }

    #[test]
    fn env_overrides_are_applied() {
        let cfg = config_from(&[
            ("GIGDESK_API_BASE_URL", "https://dash.example.com/"),
            ("GIGDESK_API_TIMEOUT_SECS", "10"),
            ("GIGDESK_UPLOAD_MAX_CONCURRENT", "4"),
            ("GIGDESK_UPLOAD_MAX_FILE_BYTES", "1024"),
            ("GIGDESK_RECORD_CACHE_TTL_SECS", "60"),
        ]);
        assert_eq!(cfg.api.base_url, "https://dash.example.com");
        assert_eq!(cfg.api.request_timeout_secs, 10);
        assert_eq!(cfg.uploads.max_concurrent, Some(4));
        assert_eq!(cfg.uploads.max_file_bytes, 1024);
        assert_eq!(cfg.records.cache_ttl_secs, 60);
    }

    #[test]
    fn zero_concurrency_means_unlimited() {
        let cfg = config_from(&[("GIGDESK_UPLOAD_MAX_CONCURRENT", "0")]);
        assert_eq!(cfg.uploads.max_concurrent, None);
    }

    #[test]
    fn unparsable_values_keep_defaults() {
        let cfg = config_from(&[("GIGDESK_API_TIMEOUT_SECS", "soon")]);
        assert_eq!(cfg.api.request_timeout_secs, 30);
    }

    #[test]
    fn validate_bounds_ttl_and_timeout() {
        let huge = u64::MAX.to_string();
        let cfg = config_from(&[("GIGDESK_RECORD_CACHE_TTL_SECS", huge.as_str())]);
        assert_eq!(cfg.records.cache_ttl_secs, u64::MAX);
        assert!(cfg.validate().is_err());

        let cfg = config_from(&[("GIGDESK_API_TIMEOUT_SECS", huge.as_str())]);
        assert!(cfg.validate().is_err());

        let day = MAX_CACHE_TTL_SECS.to_string();
        let cfg = config_from(&[("GIGDESK_RECORD_CACHE_TTL_SECS", day.as_str())]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let cfg = config_from(&[("GIGDESK_API_BASE_URL", "ftp://files.example.com")]);
        assert!(cfg.validate().is_err());
    }
}
