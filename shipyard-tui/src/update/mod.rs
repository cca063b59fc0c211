//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;               // 表单 / 列表子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!     表单相关的消息全部转换为 shipyard_core::FormAction，
//!     交给 `app.form.apply()`；状态机拒绝的操作不会改变任何状态，
//!     Update 层只负责把错误展示给用户：
//!         - 校验失败          → 打开错误弹窗，逐行列出全部消息，焦点移到第一个出错字段
//!         - 其他可预期错误     → 显示在状态栏（warn 日志）
//!         - 非预期错误        → 打开错误弹窗（error 日志）
//!
//!
//! Update 完成后，控制权返回主循环（app.rs），下一轮由 View 层重新渲染。
//!

mod form;
mod modal;

use log::{error, warn};
use shipyard_core::CoreError;

use crate::message::AppMessage;
use crate::model::App;
use crate::model::state::SAVE_ERROR_TITLE;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

/// 把 core 返回的错误展示给用户
fn report_error(app: &mut App, err: CoreError) {
    match err {
        CoreError::Validation(errors) => {
            warn!("Ship not saved: {}", errors.messages().join(" "));
            if let Some(field) = errors.first_field() {
                app.focus = crate::model::FieldFocus::on(field);
            }
            app.modal.show_error(SAVE_ERROR_TITLE, &errors.to_string());
            app.clear_status();
        }
        err if err.is_expected() => {
            warn!("{err}");
            app.set_status(err.to_string());
        }
        err => {
            error!("{err}");
            app.modal.show_error("Error", &err.to_string());
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::FormMessage;

    #[test]
    fn test_quit_sets_flag() {
        let mut app = App::default();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_show_help_opens_modal() {
        let mut app = App::default();
        update(&mut app, AppMessage::ShowHelp);
        assert_eq!(app.modal.active, Some(crate::model::Modal::Help));
    }

    #[test]
    fn test_not_allowed_goes_to_status_bar() {
        let mut app = App::default();
        update(&mut app, AppMessage::Form(FormMessage::Edit));
        assert!(!app.modal.is_open());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Action 'edit' is not available while idle")
        );
    }

    #[test]
    fn test_unexpected_error_opens_modal() {
        let mut app = App::default();
        report_error(&mut app, CoreError::IndexOutOfRange { index: 3, len: 1 });
        assert!(matches!(
            app.modal.active,
            Some(crate::model::Modal::Error { ref title, .. }) if title == "Error"
        ));
    }
}
