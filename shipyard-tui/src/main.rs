//! Shipyard TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置加载 (`backend/`)
//!
//! 表单的业务规则（状态机、校验、记录存储）全部位于 `shipyard-core`，
//! 本 crate 只负责把按键翻译成消息、把状态渲染到终端。
//!
//!
//! main.rs 的执行顺序：
//!
//!     load_config()           // 读取配置文件（此时终端尚未进入原始模式，错误可直接打印）
//!     init_logging()          // 仅在配置了日志文件时启用，绝不写入终端
//!     init_terminal()         // 原始模式 + 备用屏幕
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{AppConfig, ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置
    let service = LocalConfigService::locate();
    let config = match service {
        Some(ref service) => service.load()?,
        None => AppConfig::default(),
    };

    // 2. 初始化日志与主题
    if init_logging(&config)? {
        tracing::info!("Starting Shipyard TUI");
        if let Some(ref service) = service {
            tracing::debug!("Configuration path: {}", service.path().display());
        }
    }
    view::theme::set_theme(config.theme);

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::with_config(&config);

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Main loop exited with error: {e:#}");
    }
    result
}
