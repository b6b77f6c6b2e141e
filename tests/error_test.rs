//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use bg_remove_pro::{BgRemoveError, LocalFile};
use std::path::Path;
use tempfile::tempdir;

/// 存在しない画像
#[test]
fn test_local_file_not_found() {
    let result = LocalFile::from_path(Path::new("/nonexistent/path/12345.png"));
    assert!(matches!(result, Err(BgRemoveError::FileNotFound(_))));
}

/// ディレクトリは画像として読めない
#[test]
fn test_local_file_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = LocalFile::from_path(dir.path());
    assert!(matches!(result, Err(BgRemoveError::FileNotFound(_))));
}

/// BgRemoveErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        BgRemoveError::Config("テスト設定エラー".to_string()),
        BgRemoveError::FileNotFound("test.png".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BgRemoveError = io_err.into();

    assert!(matches!(err, BgRemoveError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: BgRemoveError = json_err.into();

    assert!(matches!(err, BgRemoveError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = bg_remove_common::Error::Server("Processing failed".to_string());
    let err: BgRemoveError = common_err.into();

    assert!(matches!(err, BgRemoveError::Common(_)));
    assert_eq!(format!("{}", err), "Processing failed");
}
