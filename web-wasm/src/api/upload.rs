//! 背景除去エンドポイントへのアップロード（fetch API）

use bg_remove_common::{parse_process_response, Error, ProcessedImage, Result, WorkflowConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestCredentials, RequestInit, RequestMode, Response};

use crate::api::csrf::csrf_token;

/// JsValueのエラーを通信エラーに変換
fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Network(message)
}

/// POSTリクエストを組み立てる
///
/// エンドポイントは別オリジンでもよい（mode: cors）。Cookieは同一オリジンのみ。
fn build_request(config: &WorkflowConfig, form: &FormData, csrf_token: &str) -> Result<Request> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::SameOrigin);
    opts.set_body(form);

    let request = Request::new_with_str_and_init(&config.endpoint, &opts).map_err(js_error)?;
    request
        .headers()
        .set(&config.csrf_header, csrf_token)
        .map_err(js_error)?;
    Ok(request)
}

/// 画像をmultipartで送信し、処理結果を返す
///
/// HTTPステータスは見ずに本文のJSONで成否を判定する
/// （エンドポイントは失敗時も200で `success: false` を返す）。
pub async fn submit_image(config: &WorkflowConfig, file: &File, file_name: &str) -> Result<ProcessedImage> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(&config.field_name, file, file_name)
        .map_err(js_error)?;

    let token = csrf_token(&config.csrf_cookie).unwrap_or_default();
    let request = build_request(config, &form, &token)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text.as_string().unwrap_or_default();

    log::debug!("upload response {}: {} bytes", resp.status(), body.len());
    parse_process_response(&body)?.into_outcome()
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn wasm_build_request_allows_cross_origin_endpoint() {
        let config = WorkflowConfig {
            endpoint: "https://bg.example.com/api/remove/".to_string(),
            ..Default::default()
        };
        let form = FormData::new().expect("FormData作成失敗");

        let request = build_request(&config, &form, "Tk9x2").expect("リクエスト作成失敗");
        assert_eq!(request.method(), "POST");
        assert_eq!(request.mode(), RequestMode::Cors);
        assert_eq!(request.url(), "https://bg.example.com/api/remove/");
        let header = request.headers().get("X-CSRFToken").expect("ヘッダー取得失敗");
        assert_eq!(header.as_deref(), Some("Tk9x2"));
    }
}
