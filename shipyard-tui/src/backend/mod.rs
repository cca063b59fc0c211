//!
//! src/backend/mod.rs
//! Backend 层：前端自身的配置
//!
//! 船舶记录只保存在内存中（由 shipyard-core 的 FormController 持有），
//! 因此 Backend 层只剩配置服务：
//!     mod config_service;     // 配置文件读取（JSON）
//!
//! 配置文件位置：
//!     $SHIPYARD_CONFIG，或 <config_dir>/shipyard/config.json
//!
//!     {
//!         "theme": "dark",
//!         "messageStyle": "corrected",
//!         "logLevel": "info",
//!         "logFile": "/tmp/shipyard.log"
//!     }
//!
//! 所有键均可省略；文件不存在时使用默认配置，格式错误则在进入原始模式前报错。
//!

mod config_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
