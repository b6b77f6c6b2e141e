//! CSRFトークン（Djangoの `csrftoken` Cookie）

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// document.cookie から読み出す
pub fn csrf_token(cookie_name: &str) -> Option<String> {
    let cookies = web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    find_cookie(&cookies, cookie_name)
}

/// `a=1; b=2` 形式の文字列から値を探す
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cookie() {
        let cookies = "sessionid=abc; csrftoken=Tk9x2; theme=dark";
        assert_eq!(find_cookie(cookies, "csrftoken").as_deref(), Some("Tk9x2"));
        assert_eq!(find_cookie(cookies, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_find_cookie_missing() {
        assert_eq!(find_cookie("sessionid=abc", "csrftoken"), None);
        assert_eq!(find_cookie("", "csrftoken"), None);
    }

    #[test]
    fn test_find_cookie_exact_name() {
        // 前方一致では拾わない
        let cookies = "xcsrftoken=bad; csrftoken=good";
        assert_eq!(find_cookie(cookies, "csrftoken").as_deref(), Some("good"));
    }

    #[test]
    fn test_find_cookie_value_with_equals() {
        assert_eq!(find_cookie("token=a=b", "token").as_deref(), Some("a=b"));
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn wasm_csrf_token_reads_document_cookie() {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .expect("HtmlDocumentがない");
        document
            .set_cookie("csrftoken=Tk9x2; path=/")
            .expect("Cookie設定失敗");

        assert_eq!(csrf_token("csrftoken").as_deref(), Some("Tk9x2"));
        assert_eq!(csrf_token("missingtoken"), None);
    }
}
