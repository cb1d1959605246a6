use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plant-id", version, about = "批量识别植物照片")]
pub struct CliArgs {
    /// 要识别的图片，按单次选择上限分组获取
    pub images: Vec<PathBuf>,

    /// 批次清单（TOML），可以包含已有标签的图片
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// 逐张追加的图片，可重复
    #[arg(short, long)]
    pub capture: Vec<PathBuf>,

    /// 提交前删除的位置（从 0 开始），可重复，按顺序执行
    #[arg(short, long)]
    pub remove: Vec<usize>,

    /// 识别服务地址，覆盖 PREDICT_ENDPOINT
    #[arg(long)]
    pub endpoint: Option<String>,

    /// 单个请求超时（秒），覆盖 REQUEST_TIMEOUT_SECS
    #[arg(long)]
    pub timeout: Option<u64>,

    /// 结果文件，覆盖 OUTPUT_LOG_FILE
    #[arg(short, long)]
    pub output: Option<String>,

    /// 显示详细日志
    #[arg(short, long)]
    pub verbose: bool,
}
