//! 表示用の文字列整形

const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// バイト数を人が読める形式に変換（1024基準、小数2桁まで、末尾の0は省略）
///
/// # Examples
/// ```
/// use bg_remove_common::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// 最初の `.` より前の部分
pub fn file_basename(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// 処理済み画像のダウンロードファイル名
pub fn download_file_name(file_name: &str) -> String {
    format!("bg-removed-{}.png", file_basename(file_name))
}

/// フォールバック（デモ表示）時のダウンロードファイル名
pub fn fallback_download_name(file_name: &str) -> String {
    format!("original-{}", file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_format_file_size_two_decimals() {
        // 1234567 / 1024^2 = 1.177...
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn test_format_file_size_caps_at_gb() {
        assert_eq!(format_file_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_file_basename() {
        assert_eq!(file_basename("cat.png"), "cat");
        assert_eq!(file_basename("holiday.photo.jpeg"), "holiday");
        assert_eq!(file_basename("noext"), "noext");
    }

    #[test]
    fn test_download_file_names() {
        assert_eq!(download_file_name("portrait.jpg"), "bg-removed-portrait.png");
        assert_eq!(fallback_download_name("portrait.jpg"), "original-portrait.jpg");
    }
}
