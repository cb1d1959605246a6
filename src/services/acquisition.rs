//! 图片获取服务 - 业务能力层
//!
//! 相当于相册多选 / 相机拍摄：把本地文件变成新的未识别记录

use std::path::Path;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::image_files;
use crate::models::{load_manifest, ImageRecord};

/// 图片获取服务
///
/// 职责：
/// - 检查图片是否可访问（权限 / 是否存在）
/// - 限制单次选择数量
/// - 只产出新记录，不修改当前集合
pub struct ImageAcquisition {
    max_selection: usize,
}

impl ImageAcquisition {
    pub fn new(config: &Config) -> Self {
        Self::with_limit(config.max_selection)
    }

    pub fn with_limit(max_selection: usize) -> Self {
        Self { max_selection }
    }

    pub fn max_selection(&self) -> usize {
        self.max_selection
    }

    /// 多选图片
    ///
    /// 任意一张图片无法访问时整次选择失败，不产出任何记录
    pub async fn select<P: AsRef<Path>>(&self, paths: &[P]) -> AppResult<Vec<ImageRecord>> {
        if paths.len() > self.max_selection {
            return Err(AppError::SelectionLimitExceeded {
                limit: self.max_selection,
                requested: paths.len(),
            });
        }

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            records.push(self.acquire(path.as_ref()).await?);
        }

        info!("✓ 选择了 {} 张图片", records.len());
        Ok(records)
    }

    /// 拍摄单张图片
    pub async fn capture(&self, path: &Path) -> AppResult<ImageRecord> {
        let record = self.acquire(path).await?;
        info!("✓ 拍摄图片: {}", record.reference());
        Ok(record)
    }

    /// 加载批次清单，清单中可以包含已有标签的记录
    pub async fn load_manifest(&self, path: &Path) -> AppResult<Vec<ImageRecord>> {
        load_manifest(path).await
    }

    async fn acquire(&self, path: &Path) -> AppResult<ImageRecord> {
        image_files::check_readable(path).await?;
        debug!("图片可读: {}", path.display());
        Ok(ImageRecord::new(path.to_string_lossy().into_owned()))
    }
}
