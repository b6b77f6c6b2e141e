//! ワークフロー設定
//!
//! 既定値は既存のアップロードエンドポイント（Django側）の契約に合わせている。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 10 MiB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub const DEFAULT_ALLOWED_MIME_TYPES: &[&str] =
    &["image/png", "image/jpeg", "image/jpg", "image/webp"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// 背景除去エンドポイント（POST）
    pub endpoint: String,
    /// multipartのフィールド名
    pub field_name: String,
    pub csrf_header: String,
    pub csrf_cookie: String,
    pub max_file_size: u64,
    pub allowed_mime_types: Vec<String>,
    /// 1ティックあたりの進捗（%）
    pub progress_step: u8,
    pub progress_interval_ms: u32,
    pub notification_ttl_ms: u32,
    /// リモート失敗時にデモ表示へフォールバックするか
    pub fallback_on_error: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            endpoint: "/bg-remove/upload/".into(),
            field_name: "image".into(),
            csrf_header: "X-CSRFToken".into(),
            csrf_cookie: "csrftoken".into(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_mime_types: DEFAULT_ALLOWED_MIME_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            progress_step: 10,
            progress_interval_ms: 300,
            notification_ttl_ms: 5000,
            fallback_on_error: true,
        }
    }
}

impl WorkflowConfig {
    /// JSONから読み込み（未指定の項目は既定値）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: WorkflowConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::Config("endpoint is empty".into()));
        }
        if self.field_name.trim().is_empty() {
            return Err(Error::Config("field_name is empty".into()));
        }
        if !(1..=100).contains(&self.progress_step) {
            return Err(Error::Config(format!(
                "progress_step must be 1..=100, got {}",
                self.progress_step
            )));
        }
        if self.max_file_size == 0 {
            return Err(Error::Config("max_file_size must be positive".into()));
        }
        if self.allowed_mime_types.is_empty() {
            return Err(Error::Config("allowed_mime_types is empty".into()));
        }
        Ok(())
    }

    /// 進捗が100%に達するまでのティック数
    pub fn ticks_to_complete(&self) -> u32 {
        let step = self.progress_step.max(1) as u32;
        100u32.div_ceil(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_upload_contract() {
        let config = WorkflowConfig::default();
        assert_eq!(config.endpoint, "/bg-remove/upload/");
        assert_eq!(config.field_name, "image");
        assert_eq!(config.csrf_header, "X-CSRFToken");
        assert_eq!(config.max_file_size, 10 * 1024 * 1024);
        assert_eq!(config.ticks_to_complete(), 10);
        assert!(config.fallback_on_error);
    }

    #[test]
    fn test_from_json_partial() {
        let config = WorkflowConfig::from_json(r#"{"endpoint": "/api/remove/", "progress_step": 25}"#)
            .expect("パース失敗");
        assert_eq!(config.endpoint, "/api/remove/");
        assert_eq!(config.ticks_to_complete(), 4);
        assert_eq!(config.progress_interval_ms, 300);
    }

    #[test]
    fn test_from_json_invalid_step() {
        let result = WorkflowConfig::from_json(r#"{"progress_step": 0}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_json_empty_endpoint() {
        let result = WorkflowConfig::from_json(r#"{"endpoint": "  "}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_json_broken() {
        let result = WorkflowConfig::from_json("{");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_ticks_round_up() {
        let config = WorkflowConfig {
            progress_step: 30,
            ..Default::default()
        };
        assert_eq!(config.ticks_to_complete(), 4);
    }
}
