//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     handle_event 只处理 Press 类型的按键事件，按以下顺序分发：
//!         - 有弹窗打开时，调用 handle_modal_keys 处理（其余按键一律不生效）
//!         - 全局快捷键（Ctrl+C / Alt+q 退出，Alt+h 帮助），就地处理
//!         - 表单处于 Idle，调用 handle_idle_keys（列表导航、Alt+a/e/d）
//!         - 表单处于 Editing，调用 handle_editing_keys（字段切换、输入、提交/取消）
//!
//!     Event 层不判断某个操作当前是否可用，
//!     可用性由 shipyard-core 的状态机在 Update 层裁决。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
