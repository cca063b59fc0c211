//! 应用主状态结构

use shipyard_core::FormController;

use super::{FieldFocus, ModalState};
use crate::backend::AppConfig;

/// 应用主状态
#[derive(Debug, Default)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 船舶表单控制器
    pub form: FormController,

    /// 编辑时的焦点字段
    pub focus: FieldFocus,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 按配置创建应用实例
    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            form: FormController::new().with_message_style(config.message_style),
            ..Self::default()
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
