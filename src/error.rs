//! 错误类型
//!
//! 分为两层：
//! - `AppError`：批次级错误（空批次、无权限、配置错误等），需要告知用户
//! - `ClassifyError`：单张图片的识别错误，只在本图片内部消化，转换为错误标签

use std::io;
use std::path::Path;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 没有可提交的图片
    #[error("没有可提交的图片，请先选择或拍摄图片")]
    EmptyBatch,

    /// 无法访问图片（相册 / 相机权限被拒绝）
    #[error("无权访问图片 {path}: {source}")]
    PermissionDenied {
        path: String,
        #[source]
        source: io::Error,
    },

    /// 图片不存在或不是普通文件
    #[error("图片不存在: {path}")]
    ImageNotFound { path: String },

    /// 单次选择的图片数量超出上限
    #[error("单次最多选择 {limit} 张图片，实际选择了 {requested} 张")]
    SelectionLimitExceeded { limit: usize, requested: usize },

    /// 批次清单文件无法解析
    #[error("清单文件解析失败 ({path}): {message}")]
    Manifest { path: String, message: String },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 其他意外错误
    #[error("意外错误: {0}")]
    Unexpected(String),
}

impl AppError {
    /// 将读取本地文件时的 IO 错误归类
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::PermissionDenied => AppError::PermissionDenied { path, source: err },
            io::ErrorKind::NotFound => AppError::ImageNotFound { path },
            _ => AppError::Unexpected(format!("{}: {}", path, err)),
        }
    }

    /// 是否是批次前置条件错误（空批次 / 权限 / 选择数量）
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            AppError::EmptyBatch
                | AppError::PermissionDenied { .. }
                | AppError::ImageNotFound { .. }
                | AppError::SelectionLimitExceeded { .. }
        )
    }
}

/// 单张图片识别错误
///
/// 这些错误不会向上传播，由批量提交流程转换为错误标签
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// 读取本地图片失败
    #[error("读取图片失败 ({reference}): {source}")]
    ReadImage {
        reference: String,
        #[source]
        source: io::Error,
    },

    /// 网络请求失败
    #[error("识别请求失败: {0}")]
    Request(#[from] reqwest::Error),

    /// 服务返回非 2xx 状态
    #[error("识别服务返回错误状态: {status}")]
    Status { status: reqwest::StatusCode },

    /// 服务返回的数据不是预期格式
    #[error("识别结果无法解析: {0}")]
    MalformedResponse(String),
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
