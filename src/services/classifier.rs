//! 识别服务 - 业务能力层
//!
//! 只负责"识别一张图片"能力，不关心批次和顺序

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppResult, ClassifyError};
use crate::infrastructure::{image_files, HttpTransport};
use crate::utils::logging::truncate_text;

/// 单张图片识别能力
#[async_trait]
pub trait Classifier: Send + Sync {
    /// 识别一张图片
    ///
    /// # 参数
    /// - `reference`: 本地图片引用
    /// - `filename`: 上传时使用的文件名
    ///
    /// # 返回
    /// 返回识别出的植物品种
    async fn classify(&self, reference: &str, filename: &str) -> Result<String, ClassifyError>;
}

/// 远程识别服务
///
/// 读取本地图片，通过 multipart 上传到识别服务
pub struct RemoteClassifier {
    transport: HttpTransport,
}

impl RemoteClassifier {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, reference: &str, filename: &str) -> Result<String, ClassifyError> {
        let bytes = image_files::read_bytes(Path::new(reference))
            .await
            .map_err(|source| ClassifyError::ReadImage {
                reference: reference.to_string(),
                source,
            })?;

        let body = self.transport.post_image(bytes, filename.to_string()).await?;
        let prediction = extract_prediction(&body)?;

        debug!("{} 识别结果: {}", filename, prediction);
        Ok(prediction)
    }
}

/// 从响应中提取 `prediction` 字段
///
/// 字段缺失、不是字符串或只有空白都视为无法解析；有效结果原样返回
pub fn extract_prediction(body: &JsonValue) -> Result<String, ClassifyError> {
    match body.get("prediction").and_then(JsonValue::as_str) {
        Some(prediction) if !prediction.trim().is_empty() => Ok(prediction.to_string()),
        _ => Err(ClassifyError::MalformedResponse(format!(
            "缺少有效的 prediction 字段: {}",
            truncate_text(&body.to_string(), 120)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_prediction() {
        assert_eq!(
            extract_prediction(&json!({"prediction": "Rose"})).unwrap(),
            "Rose"
        );
        assert_eq!(
            extract_prediction(&json!({"prediction": " Tulip \n", "confidence": 0.93})).unwrap(),
            " Tulip \n"
        );
        assert_eq!(
            extract_prediction(&json!({"prediction": "  Rosa canina\n"})).unwrap(),
            "  Rosa canina\n"
        );
    }

    #[test]
    fn test_extract_prediction_malformed() {
        for body in [
            json!({}),
            json!({"prediction": null}),
            json!({"prediction": 42}),
            json!({"prediction": "   "}),
            json!(["Rose"]),
        ] {
            assert!(
                matches!(extract_prediction(&body), Err(ClassifyError::MalformedResponse(_))),
                "应当视为无法解析: {}",
                body
            );
        }
    }

    #[tokio::test]
    async fn test_missing_image_is_read_error() {
        let classifier = RemoteClassifier::new(&Config::default()).unwrap();

        let result = classifier
            .classify("/nonexistent/plant.jpg", "plant0.jpg")
            .await;

        assert!(matches!(result, Err(ClassifyError::ReadImage { .. })));
    }
}
