//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务逻辑无关的代码：
//!     mod terminal;       // 终端初始化和恢复（原始模式 + 备用屏幕）
//!     mod logging;        // 日志订阅器初始化（只写文件）
//!
//! 注意：restore_terminal 无论主循环成功与否都必须调用，
//!       否则终端会停留在原始模式。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
