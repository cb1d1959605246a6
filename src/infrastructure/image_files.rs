//! 本地图片文件 - 基础设施层
//!
//! 只暴露"检查可读"和"读取字节"两种能力，不认识 ImageRecord

use crate::error::{AppError, AppResult};
use std::path::Path;
use tokio::fs;

/// 检查图片是否存在且可读
pub async fn check_readable(path: &Path) -> AppResult<()> {
    let metadata = fs::metadata(path)
        .await
        .map_err(|e| AppError::from_io(path, e))?;

    if !metadata.is_file() {
        return Err(AppError::ImageNotFound {
            path: path.display().to_string(),
        });
    }

    // 打开一次确认读权限
    fs::File::open(path)
        .await
        .map_err(|e| AppError::from_io(path, e))?;

    Ok(())
}

/// 读取图片全部字节
pub async fn read_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    fs::read(path).await
}
