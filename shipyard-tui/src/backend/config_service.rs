//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shipyard_core::MessageStyle;

use crate::view::theme::Theme;

/// 覆盖配置文件路径的环境变量
pub const CONFIG_ENV: &str = "SHIPYARD_CONFIG";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub theme: Theme,
    /// 宽度字段校验消息的措辞
    pub message_style: MessageStyle,
    /// 日志过滤指令（`EnvFilter` 语法）
    pub log_level: String,
    /// 日志文件；为空时不记录日志
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            message_style: MessageStyle::default(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务（JSON 文件）
#[derive(Debug, Clone)]
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 按 `$SHIPYARD_CONFIG` → 系统配置目录 的顺序定位配置文件
    pub fn locate() -> Option<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        default_path(env_path, dirs::config_dir()).map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Malformed config file {}", self.path.display()))
    }
}

fn default_path(env_path: Option<PathBuf>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    env_path
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| config_dir.map(|dir| dir.join("shipyard").join("config.json")))
}
