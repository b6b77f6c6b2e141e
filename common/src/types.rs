//! セッションの型定義
//!
//! - FileCandidate: 選択・ドロップされたファイル（未検証）
//! - SelectedFile: 検証済みファイル
//! - Session: 1回のアップロード〜結果表示までの状態
//! - ResultView / FileInfoView: 表示内容（Sessionから導出）

use crate::format::{download_file_name, fallback_download_name, format_file_size};
use crate::progress::Progress;
use serde::{Deserialize, Serialize};

/// 選択されたファイルのメタデータ（未検証）
///
/// ファイル本体は各実行系（WASM / ネイティブ）が保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// 検証済みファイル
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl SelectedFile {
    /// 検証を通過した候補からのみ作る
    pub(crate) fn from_validated(candidate: FileCandidate) -> Self {
        Self {
            name: candidate.name,
            size: candidate.size,
            mime_type: candidate.mime_type,
        }
    }
}

/// ワークフローの状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    FileSelected,
    Processing,
    Result,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::FileSelected => "file-selected",
            Phase::Processing => "processing",
            Phase::Result => "result",
        }
    }
}

/// 結果の種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultMode {
    /// サーバーで背景除去に成功
    Processed {
        processed_url: String,
        original_url: Option<String>,
    },
    /// リモート失敗時のデモ表示（元画像を代用）
    Fallback { error: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// 古いコールバック（プレビュー読込・タイマー・通信）を捨てるための世代番号
    pub generation: u64,
    pub phase: Phase,
    pub selected_file: Option<SelectedFile>,
    pub original_preview_url: Option<String>,
    pub progress: Progress,
    pub result: Option<ResultMode>,
}

impl Session {
    /// 処理済み画像のURL（成功時のみ）
    pub fn result_url(&self) -> Option<&str> {
        match &self.result {
            Some(ResultMode::Processed { processed_url, .. }) => Some(processed_url),
            _ => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.result, Some(ResultMode::Fallback { .. }))
    }

    /// 選択ファイル情報の表示内容。選択中（FileSelected / Processing）のみ
    ///
    /// 削除ボタンは削除を受け付けるフェーズでだけ出す。
    pub fn file_info(&self) -> Option<FileInfoView> {
        if !matches!(self.phase, Phase::FileSelected | Phase::Processing) {
            return None;
        }
        let file = self.selected_file.as_ref()?;
        Some(FileInfoView {
            name: file.name.clone(),
            size_text: format_file_size(file.size),
            removable: self.phase == Phase::FileSelected,
        })
    }

    /// 結果表示を導出
    pub fn result_view(&self) -> Option<ResultView> {
        if self.phase != Phase::Result {
            return None;
        }
        let file = self.selected_file.as_ref()?;

        match self.result.as_ref()? {
            ResultMode::Processed { processed_url, .. } => Some(ResultView {
                image_url: Some(processed_url.clone()),
                opacity: 1.0,
                demo_badge: false,
                download_href: Some(processed_url.clone()),
                download_name: download_file_name(&file.name),
            }),
            ResultMode::Fallback { .. } => Some(ResultView {
                image_url: self.original_preview_url.clone(),
                opacity: FALLBACK_OPACITY,
                demo_badge: true,
                download_href: self.original_preview_url.clone(),
                download_name: fallback_download_name(&file.name),
            }),
        }
    }
}

const FALLBACK_OPACITY: f32 = 0.3;

/// 結果パネルの表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub image_url: Option<String>,
    pub opacity: f32,
    /// "demo mode" バッジ
    pub demo_badge: bool,
    pub download_href: Option<String>,
    pub download_name: String,
}

/// ファイル情報行の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfoView {
    pub name: String,
    pub size_text: String,
    pub removable: bool,
}
