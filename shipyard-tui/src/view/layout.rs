//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use shipyard_core::{EditMode, FormState};

use crate::model::App;

use super::components;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    // 左右分栏：船舶列表 | 字段面板 + 操作栏
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_layout[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(columns[1]);

    components::ship_list::render(app, frame, columns[0]);
    components::ship_form::render(app, frame, right[0]);
    components::action_bar::render(app, frame, right[1]);

    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let badge = match app.form.current_state() {
        FormState::Idle => " IDLE ",
        FormState::Editing(EditMode::Adding) => " ADDING ",
        FormState::Editing(EditMode::Updating { .. }) => " EDITING ",
    };

    let title = Line::from(vec![
        Span::raw(concat!(" Shipyard v", env!("CARGO_PKG_VERSION"), "  ")),
        Span::styled(
            badge,
            Style::default()
                .bg(c.selected_fg)
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}
