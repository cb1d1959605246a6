//! 日志工具模块
//!
//! 提供日志初始化、格式化和结果输出的辅助函数

use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::ImageRecord;
use crate::workflow::SubmitStats;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`，否则根据 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化结果文件
///
/// # 参数
/// - `log_file_path`: 结果文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n植物识别结果 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 将识别结果追加到结果文件
pub fn append_results(log_file_path: &str, records: &[ImageRecord]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    for (index, record) in records.iter().enumerate() {
        writeln!(
            file,
            "#{} {} => {}",
            index + 1,
            record.reference(),
            record.label().unwrap_or("-")
        )?;
    }

    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🌿 程序启动 - 植物品种识别");
    info!("🔗 识别服务: {}", config.predict_endpoint);
    info!("📷 单次最多选择: {} 张", config.max_selection);
    info!("{}", "=".repeat(60));
}

/// 记录批次开始信息
///
/// # 参数
/// - `total`: 图片总数
/// - `pending`: 待识别数量
pub fn log_batch_start(total: usize, pending: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始识别: 共 {} 张图片，待识别 {} 张", total, pending);
    info!("{}", "=".repeat(60));
}

/// 逐张输出识别结果
pub fn log_records(records: &[ImageRecord]) {
    for (index, record) in records.iter().enumerate() {
        let icon = if record.is_error() { "❌" } else { "🌱" };
        info!(
            "[图片 {}] {} {} => {}",
            index + 1,
            icon,
            truncate_text(record.reference(), 60),
            record.label().unwrap_or("-")
        );
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 本次提交统计
/// - `log_file_path`: 结果文件路径
pub fn print_final_stats(stats: &SubmitStats, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 识别完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.succeeded, stats.requested);
    info!("❌ 失败: {}", stats.failed);
    info!("⏭️ 已有标签跳过: {}", stats.skipped);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("rose.jpg", 20), "rose.jpg");
        assert_eq!(truncate_text("玫瑰花照片", 2), "玫瑰...");
    }

    #[test]
    fn test_log_file_contains_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("predictions.txt");
        let path = path.to_str().unwrap();

        init_log_file(path).unwrap();
        append_results(
            path,
            &[
                ImageRecord::labeled("rose.jpg", "Rose"),
                ImageRecord::new("pending.jpg"),
            ],
        )
        .unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("植物识别结果"));
        assert!(content.contains("#1 rose.jpg => Rose"));
        assert!(content.contains("#2 pending.jpg => -"));
    }
}
