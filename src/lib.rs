//! # Plant Species Identifier
//!
//! 选择或拍摄植物照片，批量提交到远程识别服务，并把品种标签写回每张图片
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP Client、本地文件），只暴露能力
//!
//! ### ② 业务能力层（Services）
//! - `ImageAcquisition` - 相册多选 / 相机拍摄 / 批次清单
//! - `Classifier` - 单张图片识别能力，`RemoteClassifier` 为 multipart 实现
//!
//! ### ③ 流程层（Workflow）
//! - `BatchSubmitter` - 并发提交、全部结束后按原位置合并结果
//!
//! ### ④ 编排层（Orchestration）
//! - `App` - 持有当前图片集合，串联获取 → 删除 → 识别 → 输出

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ClassifyError};
pub use models::{ActiveSet, ImageRecord, ERROR_SENTINEL};
pub use orchestrator::{App, RunPlan};
pub use services::{Classifier, ImageAcquisition, RemoteClassifier};
pub use workflow::{BatchSubmitter, SubmitStats};
