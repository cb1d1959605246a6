use crate::error::{AppError, AppResult};
use std::time::Duration;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 识别服务地址（接收 multipart 图片）
    pub predict_endpoint: String,
    /// 单次选择的最大图片数量
    pub max_selection: usize,
    /// 单个请求超时（秒），0 表示不设置
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 识别结果输出文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            predict_endpoint: "http://127.0.0.1:5000/predict".to_string(),
            max_selection: 5,
            request_timeout_secs: 0,
            verbose_logging: false,
            output_log_file: "predictions.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            predict_endpoint: std::env::var("PREDICT_ENDPOINT").unwrap_or(default.predict_endpoint),
            max_selection: std::env::var("MAX_SELECTION").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_selection),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 传输层超时
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// 校验配置
    pub fn validate(&self) -> AppResult<()> {
        if !(self.predict_endpoint.starts_with("http://") || self.predict_endpoint.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "识别服务地址必须以 http:// 或 https:// 开头: {}",
                self.predict_endpoint
            )));
        }
        if self.max_selection == 0 {
            return Err(AppError::Config("单次选择数量必须大于 0".to_string()));
        }
        Ok(())
    }
}
