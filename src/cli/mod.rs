mod args;

pub use args::CliArgs;

use plant_species_identifier::{Config, RunPlan};

impl CliArgs {
    /// 命令行参数覆盖环境变量配置
    pub fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(endpoint) = &self.endpoint {
            config.predict_endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        if let Some(output) = &self.output {
            config.output_log_file = output.clone();
        }
        config.verbose_logging |= self.verbose;
        config
    }

    pub fn plan(&self) -> RunPlan {
        RunPlan {
            manifest: self.manifest.clone(),
            images: self.images.clone(),
            captures: self.capture.clone(),
            removals: self.remove.clone(),
        }
    }
}
