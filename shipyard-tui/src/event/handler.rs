//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shipyard_core::Confirmation;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变等事件：下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if app.form.current_state().is_editing() {
        handle_editing_keys(key)
    } else {
        handle_idle_keys(key)
    }
}

/// 处理空闲状态（浏览列表）的按键
fn handle_idle_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Form(FormMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Form(FormMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Form(FormMessage::Delete);
    }

    let msg = match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => FormMessage::SelectPrevious,
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => FormMessage::SelectNext,
        KeyCode::Home => FormMessage::SelectFirst,
        KeyCode::End => FormMessage::SelectLast,
        // Esc: 取消选中
        KeyCode::Esc => FormMessage::SelectNone,
        KeyCode::Char('?') => return AppMessage::ShowHelp,
        _ => return AppMessage::Noop,
    };
    AppMessage::Form(msg)
}

/// 处理编辑状态的按键
fn handle_editing_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_SUBMIT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::ACTION_CANCEL.matches(&key) {
        return AppMessage::Form(FormMessage::Cancel);
    }

    let msg = match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => FormMessage::NextField,
        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => FormMessage::PrevField,
        KeyCode::Enter => FormMessage::Submit,
        KeyCode::Esc => FormMessage::Cancel,
        KeyCode::Backspace => FormMessage::Backspace,
        // 字符输入（数字过滤由 core 完成）
        KeyCode::Char(ch) if is_plain_char(key.modifiers) => FormMessage::Input(ch),
        _ => return AppMessage::Noop,
    };
    AppMessage::Form(msg)
}

/// 不带 Ctrl / Alt 的字符（允许 Shift 输入大写）
fn is_plain_char(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Help | Modal::Error { .. } => match key.code {
            // 帮助和错误弹窗只响应关闭按键
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => ModalMessage::ToggleDeleteFocus,
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Char('y' | 'Y') => ModalMessage::Answer(Confirmation::Confirmed),
        KeyCode::Char('n' | 'N') => ModalMessage::Answer(Confirmation::Declined),
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use shipyard_core::{DeletePrompt, FormAction, ShipRecord};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn editing_app() -> App {
        let mut app = App::default();
        app.form.apply(FormAction::Add).unwrap();
        app
    }

    // ==================== global ====================

    #[test]
    fn test_release_events_ignored() {
        let app = App::default();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::ALT,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handle_event(release, &app), AppMessage::Noop);
    }

    #[test]
    fn test_quit_and_help() {
        let app = App::default();
        assert_eq!(
            handle_event(press_with(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        );
        assert_eq!(
            handle_event(press_with(KeyCode::Char('q'), KeyModifiers::ALT), &app),
            AppMessage::Quit
        );
        assert_eq!(
            handle_event(press_with(KeyCode::Char('h'), KeyModifiers::ALT), &app),
            AppMessage::ShowHelp
        );
        assert_eq!(handle_event(press(KeyCode::Char('?')), &app), AppMessage::ShowHelp);
    }

    #[test]
    fn test_resize_is_noop() {
        assert_eq!(handle_event(Event::Resize(80, 24), &App::default()), AppMessage::Noop);
    }

    // ==================== idle ====================

    #[test]
    fn test_idle_actions_and_navigation() {
        let app = App::default();
        let cases = [
            (press_with(KeyCode::Char('a'), KeyModifiers::ALT), FormMessage::Add),
            (press_with(KeyCode::Char('e'), KeyModifiers::ALT), FormMessage::Edit),
            (press_with(KeyCode::Char('d'), KeyModifiers::ALT), FormMessage::Delete),
            (press(KeyCode::Up), FormMessage::SelectPrevious),
            (press(KeyCode::Char('j')), FormMessage::SelectNext),
            (press(KeyCode::Home), FormMessage::SelectFirst),
            (press(KeyCode::End), FormMessage::SelectLast),
            (press(KeyCode::Esc), FormMessage::SelectNone),
        ];
        for (event, expected) in cases {
            assert_eq!(handle_event(event, &app), AppMessage::Form(expected));
        }
    }

    #[test]
    fn test_idle_ignores_typing() {
        let app = App::default();
        assert_eq!(handle_event(press(KeyCode::Char('x')), &app), AppMessage::Noop);
        assert_eq!(handle_event(press(KeyCode::Enter), &app), AppMessage::Noop);
    }

    // ==================== editing ====================

    #[test]
    fn test_editing_keys() {
        let app = editing_app();
        let cases = [
            (press(KeyCode::Tab), FormMessage::NextField),
            (press(KeyCode::BackTab), FormMessage::PrevField),
            (press(KeyCode::Enter), FormMessage::Submit),
            (press_with(KeyCode::Char('s'), KeyModifiers::ALT), FormMessage::Submit),
            (press(KeyCode::Esc), FormMessage::Cancel),
            (press_with(KeyCode::Char('c'), KeyModifiers::ALT), FormMessage::Cancel),
            (press(KeyCode::Backspace), FormMessage::Backspace),
            // 字母 j/k 在编辑状态下是普通输入
            (press(KeyCode::Char('j')), FormMessage::Input('j')),
            (press_with(KeyCode::Char('E'), KeyModifiers::SHIFT), FormMessage::Input('E')),
        ];
        for (event, expected) in cases {
            assert_eq!(handle_event(event, &app), AppMessage::Form(expected));
        }
    }

    #[test]
    fn test_editing_ignores_idle_actions() {
        let app = editing_app();
        assert_eq!(
            handle_event(press_with(KeyCode::Char('a'), KeyModifiers::ALT), &app),
            AppMessage::Noop
        );
        assert_eq!(
            handle_event(press_with(KeyCode::Char('x'), KeyModifiers::CONTROL), &app),
            AppMessage::Noop
        );
    }

    // ==================== modal ====================

    #[test]
    fn test_modal_captures_all_keys() {
        let mut app = App::default();
        let record = ShipRecord::new("Enterprise", "ABCD-1234-E5", 300, 80);
        app.modal.show_confirm_delete(DeletePrompt::new(0, &record));

        assert_eq!(
            handle_event(press_with(KeyCode::Char('q'), KeyModifiers::ALT), &app),
            AppMessage::Noop
        );
        assert_eq!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('y')), &app),
            AppMessage::Modal(ModalMessage::Answer(Confirmation::Confirmed))
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('n')), &app),
            AppMessage::Modal(ModalMessage::Answer(Confirmation::Declined))
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        );
        assert_eq!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
    }

    #[test]
    fn test_error_modal_closes_on_enter() {
        let mut app = editing_app();
        app.modal.show_error("Error(s) saving ship", "Please enter a ship name.");
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
        assert_eq!(handle_event(press(KeyCode::Char('x')), &app), AppMessage::Noop);
    }
}
