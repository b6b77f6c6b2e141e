//! BG Remove Pro Common Library
//!
//! ブラウザ(WASM)とネイティブ実行系で共有されるアップロードワークフロー。
//! DOMやHTTPクライアントに依存しないため、ブラウザなしでテストできる。

pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod notification;
pub mod progress;
pub mod response;
pub mod types;
pub mod validation;

pub use config::WorkflowConfig;
pub use controller::{Effect, Event, EventKind, WorkflowController};
pub use error::{Error, Result};
pub use format::{download_file_name, fallback_download_name, file_basename, format_file_size};
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use progress::Progress;
pub use response::{parse_process_response, ProcessResponse, ProcessedImage};
pub use types::{FileCandidate, FileInfoView, Phase, ResultMode, ResultView, SelectedFile, Session};
pub use validation::validate_file;
