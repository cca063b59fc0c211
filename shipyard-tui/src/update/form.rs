//! 表单与列表更新逻辑

use log::debug;
use shipyard_core::{Effect, EditMode, FormAction, Outcome};

use super::report_error;
use crate::message::FormMessage;
use crate::model::{App, FieldFocus};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::Add => {
            if apply(app, FormAction::Add).is_some() {
                app.focus = FieldFocus::default();
                app.set_status("Adding a new ship");
            }
        }

        FormMessage::Edit => {
            if apply(app, FormAction::Edit).is_some() {
                app.focus = FieldFocus::default();
                app.set_status("Editing ship");
            }
        }

        FormMessage::Delete => match app.form.delete_prompt() {
            Ok(prompt) => {
                debug!("Asking to confirm deletion of {}", prompt.code);
                app.modal.show_confirm_delete(prompt);
            }
            Err(err) => report_error(app, err),
        },

        FormMessage::Submit => {
            if let Some(outcome) = apply(app, FormAction::Submit) {
                if let Effect::Committed { index, mode } = outcome.effect {
                    let verb = match mode {
                        EditMode::Adding => "Added",
                        EditMode::Updating { .. } => "Updated",
                    };
                    if let Some(record) = app.form.store().get(index) {
                        let status = format!("{verb} ship {record}");
                        app.set_status(status);
                    }
                }
            }
        }

        FormMessage::Cancel => {
            if apply(app, FormAction::Cancel).is_some() {
                app.set_status("Changes discarded");
            }
        }

        FormMessage::SelectPrevious
        | FormMessage::SelectNext
        | FormMessage::SelectFirst
        | FormMessage::SelectLast
        | FormMessage::SelectNone => {
            let len = app.form.store().count();
            if let Some(target) = selection_target(&msg, app.form.selection(), len) {
                if target != app.form.selection() && apply(app, FormAction::Select(target)).is_some()
                {
                    app.clear_status();
                }
            }
        }

        FormMessage::NextField => {
            if app.form.current_state().is_editing() {
                app.focus = app.focus.next();
            }
        }

        FormMessage::PrevField => {
            if app.form.current_state().is_editing() {
                app.focus = app.focus.prev();
            }
        }

        FormMessage::Input(ch) => {
            let field = app.focus.field();
            if let Some(outcome) = apply(app, FormAction::Input(field, ch)) {
                match outcome.effect {
                    Effect::FieldEdited {
                        accepted: false, ..
                    } => app.set_status(format!("{} only accepts digits", field.label())),
                    _ => app.clear_status(),
                }
            }
        }

        FormMessage::Backspace => {
            let field = app.focus.field();
            apply(app, FormAction::Backspace(field));
        }
    }
}

/// 执行 core 操作；失败时展示错误并返回 `None`
fn apply(app: &mut App, action: FormAction) -> Option<Outcome> {
    match app.form.apply(action) {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            report_error(app, err);
            None
        }
    }
}

/// 计算列表导航后的选中项
///
/// 外层 `None` 表示无需改变（例如列表为空）。
fn selection_target(
    msg: &FormMessage,
    current: Option<usize>,
    len: usize,
) -> Option<Option<usize>> {
    if matches!(msg, FormMessage::SelectNone) {
        return Some(None);
    }
    let last = len.checked_sub(1)?;

    let index = match msg {
        FormMessage::SelectPrevious => current.map_or(last, |i| i.saturating_sub(1)),
        FormMessage::SelectNext => current.map_or(0, |i| (i + 1).min(last)),
        FormMessage::SelectFirst => 0,
        FormMessage::SelectLast => last,
        _ => return None,
    };
    Some(Some(index))
}
