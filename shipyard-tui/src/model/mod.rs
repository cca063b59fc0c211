//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层只保存数据，所有状态变更都通过 Update 层触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 字段焦点（编辑时光标所在的输入框）
//!         pub mod state;      // 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub form: FormController,           // 记录存储 + 选中项 + 字段文本 + 状态机
//!             pub focus: FieldFocus,              // 编辑时的焦点字段
//!             pub modal: ModalState,              // 弹窗状态
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!         }
//!
//!     哪些操作可用完全由 `app.form.affordances()` 决定，
//!     Model 层不再单独维护按钮的启用/禁用状态。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal 枚举：
//!             - ConfirmDelete { prompt, focus }   // 删除确认（0 = 否，1 = 是）
//!             - Error { title, message }          // 校验失败等错误
//!             - Help                              // 快捷键帮助
//!
//!         ModalState 容器：
//!             - active: Option<Modal>    // None = 无弹窗, Some = 有弹窗
//!             - show_xxx() / close()
//!
//!     弹窗打开时，所有按键都只路由给弹窗。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FieldFocus;
pub use state::{Modal, ModalState};
