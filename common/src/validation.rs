//! アップロード前のファイル検証

use crate::config::WorkflowConfig;
use crate::error::{Error, Result};
use crate::format::format_file_size;
use crate::types::FileCandidate;

/// MIMEタイプとサイズを検証
pub fn validate_file(candidate: &FileCandidate, config: &WorkflowConfig) -> Result<()> {
    let allowed = config
        .allowed_mime_types
        .iter()
        .any(|t| t.eq_ignore_ascii_case(candidate.mime_type.trim()));
    if !allowed {
        return Err(Error::InvalidFileType(candidate.mime_type.clone()));
    }

    if candidate.size > config.max_file_size {
        return Err(Error::FileTooLarge {
            size: candidate.size,
            max: config.max_file_size,
        });
    }

    Ok(())
}

/// 検証失敗時の通知メッセージ
pub fn invalid_file_message(config: &WorkflowConfig) -> String {
    format!(
        "Please upload a valid image file (PNG, JPG, WEBP, max {})",
        format_file_size(config.max_file_size).replace(' ', "")
    )
}
