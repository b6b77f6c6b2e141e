//! 背景除去エンドポイントのHTTPクライアント

use async_trait::async_trait;
use bg_remove_common::{parse_process_response, Error, ProcessedImage, SelectedFile};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;

/// 画像を送って処理結果を受け取る
///
/// 失敗はすべて `bg_remove_common::Error` で返し、ワークフロー側で
/// フォールバック表示に回す。
#[async_trait]
pub trait ProcessingClient: Send + Sync {
    async fn submit(
        &self,
        file: &SelectedFile,
        bytes: &[u8],
    ) -> bg_remove_common::Result<ProcessedImage>;
}

pub struct HttpClient {
    http: reqwest::Client,
    upload_url: String,
    field_name: String,
    csrf_header: String,
    csrf_cookie: String,
    csrf_token: Option<String>,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            upload_url: config.upload_url(),
            field_name: config.workflow.field_name.clone(),
            csrf_header: config.workflow.csrf_header.clone(),
            csrf_cookie: config.workflow.csrf_cookie.clone(),
            csrf_token: config.csrf_token.clone(),
        })
    }
}

fn network_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Network("Request timeout. Please try again.".into())
    } else {
        Error::Network(e.to_string())
    }
}

#[async_trait]
impl ProcessingClient for HttpClient {
    async fn submit(
        &self,
        file: &SelectedFile,
        bytes: &[u8],
    ) -> bg_remove_common::Result<ProcessedImage> {
        let part = Part::bytes(bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .map_err(network_error)?;
        let form = Form::new().part(self.field_name.clone(), part);

        let mut request = self.http.post(&self.upload_url).multipart(form);
        let token = self.csrf_token.clone().unwrap_or_default();
        if !token.is_empty() {
            request = request.header(
                reqwest::header::COOKIE,
                format!("{}={}", self.csrf_cookie, token),
            );
        }
        request = request.header(self.csrf_header.as_str(), token);

        let response = request.send().await.map_err(network_error)?;
        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        debug!(%status, bytes = body.len(), "upload response");

        parse_process_response(&body)?.into_outcome()
    }
}
