//! 船舶列表视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染船舶列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let idle = app.form.current_state().is_idle();
    let block = Block::default()
        .title(format!(" Ships ({}) ", app.form.store().count()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(idle));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.form.store().is_empty() {
        render_empty(frame, inner);
    } else {
        render_list(app, frame, inner);
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled("  No ships registered", Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled("  Alt+a: Add ship", Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染列表，每行显示为 "<code>, <name>"
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let selection = app.form.selection();
    let width = usize::from(area.width);

    let items: Vec<ListItem> = app
        .form
        .store()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let is_selected = selection == Some(i);
            let text = pad_to_width(&format!("  {record}"), width);
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(selection);

    frame.render_stateful_widget(list, area, &mut state);
}

/// 右侧补空格到整行宽度，使选中高亮铺满整行
fn pad_to_width(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_string();
    }
    format!("{text}{}", " ".repeat(width - used))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 5), "ab   ");
        assert_eq!(pad_to_width("abcdef", 3), "abcdef");
        // 全角字符占两列
        assert_eq!(pad_to_width("船", 4), "船  ");
    }
}
