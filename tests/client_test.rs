//! HTTPクライアントテスト
//!
//! wiremock でアップロードエンドポイントを模擬

use bg_remove_common::{Error, Phase, SelectedFile, WorkflowConfig, WorkflowController};
use bg_remove_pro::{Config, HttpClient, LocalFile, ProcessingClient, WorkflowRunner};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config {
        base_url: server.uri(),
        csrf_token: Some("tok123".to_string()),
        ..Default::default()
    }
}

/// 検証済みファイルはコントローラ経由でしか作れない
fn selected(file: &LocalFile) -> SelectedFile {
    let mut controller = WorkflowController::default();
    controller.select_file(file.meta.clone());
    controller
        .session()
        .selected_file
        .clone()
        .expect("選択されていない")
}

fn jpeg() -> LocalFile {
    LocalFile::new("portrait.jpg", "image/jpeg", b"fake-jpeg-bytes".to_vec())
}

/// multipart + CSRFヘッダーでPOSTし、成功レスポンスを解釈
#[tokio::test]
async fn test_submit_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bg-remove/upload/"))
        .and(header("X-CSRFToken", "tok123"))
        .and(body_string_contains("name=\"image\""))
        .and(body_string_contains("filename=\"portrait.jpg\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "original_url": "/media/portrait.jpg",
            "processed_url": "/media/portrait_no_bg.png",
            "message": "Background removed successfully!"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).expect("クライアント作成失敗");
    let file = jpeg();
    let meta = selected(&file);

    let image = client.submit(&meta, &file.bytes).await.expect("送信失敗");
    assert_eq!(image.processed_url, "/media/portrait_no_bg.png");
    assert_eq!(image.original_url.as_deref(), Some("/media/portrait.jpg"));
}

/// success: false はサーバーエラー
#[tokio::test]
async fn test_submit_server_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bg-remove/upload/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "Invalid file. Please upload PNG, JPG, or WEBP image under 10MB."
        })))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).expect("クライアント作成失敗");
    let meta = selected(&jpeg());

    let result = client.submit(&meta, &jpeg().bytes).await;
    match result {
        Err(Error::Server(message)) => assert!(message.starts_with("Invalid file")),
        other => panic!("unexpected: {:?}", other),
    }
}

/// HTMLのエラーページはJSONエラー
#[tokio::test]
async fn test_submit_html_error_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Server Error (500)</h1>"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).expect("クライアント作成失敗");
    let meta = selected(&jpeg());

    let result = client.submit(&meta, &jpeg().bytes).await;
    assert!(matches!(result, Err(Error::Json(_))));
}

/// 接続できない場合は通信エラー
#[tokio::test]
async fn test_submit_connection_refused() {
    let config = Config {
        // 予約済みポート0には接続できない
        base_url: "http://127.0.0.1:0".to_string(),
        timeout_seconds: 2,
        ..Default::default()
    };
    let client = HttpClient::new(&config).expect("クライアント作成失敗");
    let meta = selected(&jpeg());

    let result = client.submit(&meta, &jpeg().bytes).await;
    assert!(matches!(result, Err(Error::Network(_))));
}

/// 実HTTP経由で選択〜結果表示まで
#[tokio::test]
async fn test_runner_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bg-remove/upload/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "original_url": "/media/portrait.jpg",
            "processed_url": "/media/portrait_no_bg.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = HttpClient::new(&config).expect("クライアント作成失敗");
    let workflow = WorkflowConfig {
        progress_interval_ms: 1,
        ..config.workflow.clone()
    };
    let mut runner = WorkflowRunner::new(workflow, client);

    let session = runner.select_file(jpeg()).await;
    assert_eq!(session.phase, Phase::Result);
    let view = session.result_view().expect("結果表示がない");
    assert_eq!(view.download_href.as_deref(), Some("/media/portrait_no_bg.png"));
    assert_eq!(view.download_name, "bg-removed-portrait.png");
}
