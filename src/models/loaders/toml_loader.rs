use crate::error::{AppError, AppResult};
use crate::models::image_record::ImageRecord;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 批次清单文件
///
/// ```toml
/// [[images]]
/// reference = "photos/rose.jpg"
///
/// [[images]]
/// reference = "photos/oak.jpg"
/// label = "Oak"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchManifest {
    #[serde(default)]
    pub images: Vec<ImageRecord>,
}

/// 从 TOML 字符串解析清单
pub fn parse_manifest(content: &str, path: &Path) -> AppResult<BatchManifest> {
    toml::from_str(content).map_err(|e| AppError::Manifest {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// 从 TOML 文件加载图片记录列表
pub async fn load_manifest(manifest_path: &Path) -> AppResult<Vec<ImageRecord>> {
    let content = fs::read_to_string(manifest_path)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => AppError::from_io(manifest_path, e),
            _ => AppError::Manifest {
                path: manifest_path.display().to_string(),
                message: e.to_string(),
            },
        })?;

    let manifest = parse_manifest(&content, manifest_path)?;

    tracing::info!(
        "正在加载清单: {}，共 {} 张图片",
        manifest_path.display(),
        manifest.images.len()
    );

    Ok(manifest.images)
}
