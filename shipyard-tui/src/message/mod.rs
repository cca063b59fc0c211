//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! Event 层把按键翻译成 Message，Update 层根据 Message 更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod form;           // 表单与列表的子消息
//!         mod modal;          // 弹窗子消息
//!
//!     AppMessage 的子消息与主消息分离：
//!         AppMessage::Form(FormMessage)       // 交给 update/form.rs
//!         AppMessage::Modal(ModalMessage)     // 交给 update/modal.rs
//!

mod app;
mod form;
mod modal;

pub use app::AppMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
