//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!     ┌──────────────────────────────────────────────────────┐
//!     │ 标题栏                                    [IDLE]     │
//!     ├───────────────────┬──────────────────────────────────┤
//!     │                   │ 字段面板（名称 / 编号 / 长 / 宽）  │
//!     │ 船舶列表           │                                  │
//!     │ "<code>, <name>"  ├──────────────────────────────────┤
//!     │                   │ 操作栏（不可用的操作置灰）         │
//!     ├───────────────────┴──────────────────────────────────┤
//!     │ 状态栏：快捷键提示 │ 状态消息                          │
//!     └──────────────────────────────────────────────────────┘
//!
//! 弹窗最后绘制，位于最上层。
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
