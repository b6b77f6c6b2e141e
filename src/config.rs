use crate::error::{BgRemoveError, Result};
use bg_remove_common::WorkflowConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ネイティブ実行系の設定
///
/// ワークフロー設定（ブラウザ版と共通）に接続先などを加えたもの。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub workflow: WorkflowConfig,
    /// エンドポイントの前に付けるオリジン（例: http://localhost:8000）
    pub base_url: String,
    pub timeout_seconds: u64,
    /// X-CSRFToken に送る値（Cookieにも同じ値を付ける）
    pub csrf_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workflow: WorkflowConfig::default(),
            base_url: "http://localhost:8000".into(),
            timeout_seconds: 30,
            csrf_token: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BgRemoveError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// ファイルが無ければ既定値
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BgRemoveError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("bg-remove-pro").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        self.workflow.validate()?;
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(BgRemoveError::Config(format!(
                "base_url must start with http:// or https://: {}",
                self.base_url
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(BgRemoveError::Config("timeout_seconds must be positive".into()));
        }
        Ok(())
    }

    /// アップロード先の完全なURL
    pub fn upload_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.workflow.endpoint.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_joins_slashes() {
        let config = Config {
            base_url: "http://example.com/".into(),
            ..Default::default()
        };
        assert_eq!(config.upload_url(), "http://example.com/bg-remove/upload/");
    }

    #[test]
    fn test_flattened_workflow_fields() {
        let config: Config =
            serde_json::from_str(r#"{"base_url": "https://bg.example", "progress_interval_ms": 50}"#)
                .expect("パース失敗");
        assert_eq!(config.workflow.progress_interval_ms, 50);
        assert_eq!(config.workflow.endpoint, "/bg-remove/upload/");
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = Config {
            base_url: "localhost:8000".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(BgRemoveError::Config(_))));
    }
}
