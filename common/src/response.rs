//! アップロードエンドポイントのレスポンス
//!
//! `{ "success": true, "processed_url": "...", "original_url": "...", "message": "..." }`
//! または `{ "success": false, "error": "..." }`

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessResponse {
    pub success: bool,
    pub processed_url: Option<String>,
    pub original_url: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// 背景除去に成功した画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedImage {
    pub processed_url: String,
    pub original_url: Option<String>,
    pub message: Option<String>,
}

impl ProcessResponse {
    /// 成功/失敗に振り分ける
    pub fn into_outcome(self) -> Result<ProcessedImage> {
        if !self.success {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| "Processing failed".to_string());
            return Err(Error::Server(message));
        }

        match self.processed_url {
            Some(url) if !url.trim().is_empty() => Ok(ProcessedImage {
                processed_url: url,
                original_url: self.original_url,
                message: self.message,
            }),
            _ => Err(Error::MalformedResponse("processed_url is missing".into())),
        }
    }
}

/// レスポンス本文をパース
pub fn parse_process_response(body: &str) -> Result<ProcessResponse> {
    let response: ProcessResponse = serde_json::from_str(body.trim())?;
    Ok(response)
}
