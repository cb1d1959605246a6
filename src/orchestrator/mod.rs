//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (持有 ActiveSet，处理一次运行)
//!     ↓
//! workflow::BatchSubmitter (处理 Vec<ImageRecord>)
//!     ↓
//! services (能力层：acquisition / classifier)
//!     ↓
//! infrastructure (基础设施：HttpTransport / image_files)
//! ```

pub mod app;

pub use app::{App, RunPlan};
