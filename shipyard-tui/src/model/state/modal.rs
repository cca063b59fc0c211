//! 弹窗/对话框状态

use shipyard_core::DeletePrompt;

/// 校验失败弹窗的标题
pub const SAVE_ERROR_TITLE: &str = "Error(s) saving ship";

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 确认删除（focus: 0 = 否，1 = 是）
    ConfirmDelete { prompt: DeletePrompt, focus: usize },

    /// 错误提示（message 可含多行）
    Error { title: String, message: String },

    /// 帮助
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示删除确认弹窗，默认焦点在“否”
    pub fn show_confirm_delete(&mut self, prompt: DeletePrompt) {
        self.show(Modal::ConfirmDelete { prompt, focus: 0 });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }
}
