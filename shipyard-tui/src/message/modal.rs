//! 弹窗消息类型

use shipyard_core::Confirmation;

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗（确认删除弹窗中视为“否”）
    Close,

    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,

    /// 确认（按当前焦点）
    Confirm,

    /// 直接回答确认删除弹窗（y / n）
    Answer(Confirmation),
}
