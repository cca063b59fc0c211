//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use shipyard_core::DeletePrompt;

use crate::model::{App, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete { prompt, focus } => render_confirm_delete(frame, prompt, *focus),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗边框
fn modal_block(title: &str, border: ratatui::style::Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, prompt: &DeletePrompt, focus: usize) {
    let c = colors();
    let area = centered_rect(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(DeletePrompt::TITLE, c.error);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let no_style = if focus == 0 {
        Style::default().fg(c.selected_fg).bg(c.selected_bg)
    } else {
        Style::default().fg(c.fg)
    };
    let yes_style = if focus == 1 {
        Style::default().fg(c.selected_fg).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(prompt.message(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::from(vec![
            Span::styled(" No ", no_style),
            Span::raw("      "),
            Span::styled(" Yes ", yes_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染错误弹窗，每条消息一行
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let message_lines: Vec<&str> = message.lines().collect();
    let height = u16::try_from(message_lines.len()).unwrap_or(u16::MAX).saturating_add(6);
    let area = centered_rect(50, height, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(title, c.error);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    lines.extend(
        message_lines
            .into_iter()
            .map(|line| Line::styled(line.to_string(), Style::default().fg(c.fg))),
    );
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Esc or Enter to close",
        Style::default().fg(c.muted),
    ));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(52, 20, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block("Help", c.border_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heading = Style::default()
        .fg(c.border_focused)
        .add_modifier(Modifier::BOLD);
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(c.warning)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::styled("Browsing", heading),
        entry("↑↓ / jk", "Move selection"),
        entry("Home / End", "First / last ship"),
        entry("Esc", "Clear selection"),
        entry("Alt+a", "Add ship"),
        entry("Alt+e", "Edit selected ship"),
        entry("Alt+d", "Delete selected ship"),
        Line::from(""),
        Line::styled("Editing", heading),
        entry("Tab / ↑↓", "Next / previous field"),
        entry("Enter, Alt+s", "Submit"),
        entry("Esc, Alt+c", "Cancel"),
        Line::from(""),
        entry("Alt+h / ?", "Help"),
        entry("Alt+q", "Quit"),
        Line::from(""),
        Line::styled("Press Esc to close the help", Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(80, 20, area), Rect::new(0, 0, 40, 10));
    }
}
