//! 弹窗更新逻辑

use log::info;
use shipyard_core::{Confirmation, Effect, FormAction};

use super::report_error;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, msg),
        Modal::Error { .. } | Modal::Help => handle_simple_modal(app, msg),
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete { ref mut focus, .. }) = app.modal.active else {
        return;
    };

    let answer = match msg {
        ModalMessage::ToggleDeleteFocus => {
            *focus = usize::from(*focus == 0);
            return;
        }
        ModalMessage::Confirm if *focus == 1 => Confirmation::Confirmed,
        ModalMessage::Confirm | ModalMessage::Close => Confirmation::Declined,
        ModalMessage::Answer(answer) => answer,
    };

    app.modal.close();
    match app.form.apply(FormAction::Delete(answer)) {
        Ok(outcome) => match outcome.effect {
            Effect::Deleted { record, .. } => {
                info!("Ship {} deleted from the registry", record.code);
                app.set_status(format!("Deleted ship {record}"));
            }
            _ => app.set_status("Deletion cancelled"),
        },
        Err(err) => report_error(app, err),
    }
}

/// 处理帮助 / 错误弹窗：任何关闭或确认都只是关闭
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}
