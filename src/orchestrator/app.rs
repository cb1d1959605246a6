//! 应用编排 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：校验配置、创建识别服务
//! 2. **收集图片**：清单 + 命令行图片，按单次选择上限分组获取
//! 3. **删除图片**：按位置删除，其余图片顺序不变
//! 4. **批量识别**：委托 `BatchSubmitter`，结果写回当前集合
//! 5. **结果输出**：日志 + 结果文件（提交成功后才重写）

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::ActiveSet;
use crate::services::{ImageAcquisition, RemoteClassifier};
use crate::utils::logging;
use crate::workflow::{BatchSubmitter, SubmitStats};

/// 一次运行要做的事
#[derive(Debug, Clone, Default)]
pub struct RunPlan {
    /// 批次清单文件
    pub manifest: Option<PathBuf>,
    /// 追加的图片（相册多选）
    pub images: Vec<PathBuf>,
    /// 逐张追加的图片（相机拍摄）
    pub captures: Vec<PathBuf>,
    /// 提交前按顺序删除的位置（从 0 开始）
    pub removals: Vec<usize>,
}

/// 应用主结构
pub struct App {
    config: Config,
    active_set: ActiveSet,
    acquisition: ImageAcquisition,
    submitter: BatchSubmitter<RemoteClassifier>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        logging::log_startup(&config);

        let classifier = RemoteClassifier::new(&config)?;

        Ok(Self {
            acquisition: ImageAcquisition::new(&config),
            submitter: BatchSubmitter::new(classifier),
            active_set: ActiveSet::new(),
            config,
        })
    }

    pub fn active_set(&self) -> &ActiveSet {
        &self.active_set
    }

    /// 运行应用主逻辑
    pub async fn run(&mut self, plan: RunPlan) -> Result<SubmitStats> {
        self.collect(&plan).await?;
        self.apply_removals(&plan.removals);

        let stats = self.submit().await?;

        logging::log_records(self.active_set.records());

        // 批次失败时保留上一次的结果文件
        logging::init_log_file(&self.config.output_log_file)
            .with_context(|| format!("无法创建结果文件: {}", self.config.output_log_file))?;
        logging::append_results(&self.config.output_log_file, self.active_set.records())?;
        logging::print_final_stats(&stats, &self.config.output_log_file);

        Ok(stats)
    }

    /// 收集图片到当前集合
    async fn collect(&mut self, plan: &RunPlan) -> Result<()> {
        if let Some(manifest) = &plan.manifest {
            info!("\n📁 正在加载清单...");
            let records = self.acquisition.load_manifest(manifest).await?;
            self.active_set.extend(records);
        }

        for selection in plan.images.chunks(self.acquisition.max_selection()) {
            let records = self.acquisition.select(selection).await?;
            self.active_set.extend(records);
        }

        for path in &plan.captures {
            let record = self.acquisition.capture(path).await?;
            self.active_set.append(record);
        }

        info!(
            "✓ 当前共 {} 张图片，待识别 {} 张",
            self.active_set.len(),
            self.active_set.pending()
        );
        Ok(())
    }

    fn apply_removals(&mut self, removals: &[usize]) {
        for &position in removals {
            match self.active_set.remove(position) {
                Some(record) => info!("🗑️ 已删除第 {} 张图片: {}", position, record.reference()),
                None => warn!(
                    "⚠️ 删除位置 {} 超出范围（当前 {} 张），已忽略",
                    position,
                    self.active_set.len()
                ),
            }
        }
    }

    /// 提交当前集合，并用结果替换
    async fn submit(&mut self) -> Result<SubmitStats> {
        logging::log_batch_start(self.active_set.len(), self.active_set.pending());

        let records = self.active_set.records().to_vec();
        let (records, stats) = self.submitter.submit_with_stats(records).await?;

        self.active_set.replace(records);
        Ok(stats)
    }
}
