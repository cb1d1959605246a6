//! HTTP 传输 - 基础设施层
//!
//! 持有唯一的 `reqwest::Client`，只暴露"上传一张图片并取回 JSON"的能力

use crate::config::Config;
use crate::error::{AppError, AppResult, ClassifyError};
use reqwest::multipart::{Form, Part};
use serde_json::Value as JsonValue;
use tracing::debug;

/// multipart 中图片字段名
pub const IMAGE_FIELD: &str = "image";
/// 图片 MIME 类型
pub const IMAGE_MIME: &str = "image/jpeg";

/// HTTP 传输
///
/// 职责：
/// - 持有连接池（Client 内部使用 Arc，可安全共享）
/// - 发送 multipart 请求
/// - 不认识 ImageRecord / 批次
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// 创建新的 HTTP 传输
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("无法创建 HTTP 客户端: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.predict_endpoint.clone(),
        })
    }

    /// 上传图片
    ///
    /// # 参数
    /// - `bytes`: 图片内容
    /// - `filename`: multipart 中的文件名
    ///
    /// # 返回
    /// 返回服务响应的 JSON；非 2xx 状态或非 JSON 响应视为错误
    pub async fn post_image(&self, bytes: Vec<u8>, filename: String) -> Result<JsonValue, ClassifyError> {
        debug!("上传图片 {}，大小: {} 字节", filename, bytes.len());

        let part = Part::bytes(bytes).file_name(filename).mime_str(IMAGE_MIME)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status { status });
        }

        let body = response.text().await?;
        debug!("识别服务响应: {}", body);

        serde_json::from_str(&body).map_err(|e| ClassifyError::MalformedResponse(e.to_string()))
    }
}
