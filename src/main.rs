mod cli;

use anyhow::Result;
use clap::Parser;
use plant_species_identifier::utils::logging;
use plant_species_identifier::{App, AppError};
use tracing::{error, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    // 加载配置
    let config = args.config();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let mut app = App::initialize(config).await?;
    if let Err(e) = app.run(args.plan()).await {
        match e.downcast_ref::<AppError>() {
            Some(app_err) if app_err.is_precondition() => warn!("⚠️ {}", app_err),
            _ => error!("❌ 识别过程中发生错误: {:#}", e),
        }
        return Err(e);
    }

    Ok(())
}
