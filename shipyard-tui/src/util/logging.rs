//! 日志初始化
//!
//! UI 占用整个终端，所以日志只写入配置的日志文件；未配置时不启用日志。
//! `log` 宏（core 与本 crate）经由 tracing-subscriber 的 log 桥接输出。

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::AppConfig;

/// 覆盖日志过滤器的环境变量
pub const LOG_ENV: &str = "SHIPYARD_LOG";

/// 初始化日志，返回是否已启用
pub fn init_logging(config: &AppConfig) -> Result<bool> {
    let Some(ref path) = config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), &config.log_level)?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(true)
}

/// 环境变量优先，其次为配置中的级别
fn build_filter(env_override: Option<&str>, configured: &str) -> Result<EnvFilter> {
    let directives = env_override
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(configured);
    EnvFilter::try_new(directives).with_context(|| format!("Invalid log filter '{directives}'"))
}
