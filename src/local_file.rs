use crate::error::{BgRemoveError, Result};
use base64::Engine;
use bg_remove_common::FileCandidate;
use std::path::Path;

/// ディスク上の画像（ブラウザのFileに相当）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub meta: FileCandidate,
    pub bytes: Vec<u8>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            meta: FileCandidate::new(name, bytes.len() as u64, mime_type),
            bytes,
        }
    }

    /// MIMEタイプは拡張子から判定する
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BgRemoveError::FileNotFound(path.display().to_string()));
        }
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime_type = mime_from_extension(path);
        Ok(Self::new(name, mime_type, bytes))
    }

    /// data URL（FileReader.readAsDataURL 相当）
    pub fn data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.meta.mime_type, encoded)
    }
}

fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_from_extension(Path::new("a.PNG")), "image/png");
        assert_eq!(mime_from_extension(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_from_extension(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_from_extension(Path::new("a")), "application/octet-stream");
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("logo.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let file = LocalFile::from_path(&path).expect("読込失敗");
        assert_eq!(file.meta.name, "logo.png");
        assert_eq!(file.meta.size, 4);
        assert_eq!(file.meta.mime_type, "image/png");
    }

    #[test]
    fn test_from_path_missing() {
        let result = LocalFile::from_path(Path::new("/nonexistent/logo.png"));
        assert!(matches!(result, Err(BgRemoveError::FileNotFound(_))));
    }

    #[test]
    fn test_data_url() {
        let file = LocalFile::new("a.png", "image/png", b"abc".to_vec());
        assert_eq!(file.data_url(), "data:image/png;base64,YWJj");
    }
}
