//! 操作栏：按状态机给出的可用性渲染按钮，不可用的操作置灰

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shipyard_core::Affordances;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染操作栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    for (i, (key, label, enabled)) in buttons(&app.form.affordances()).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.extend(button(key, label, enabled));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// (快捷键, 名称, 是否可用)
fn buttons(a: &Affordances) -> [(&'static str, &'static str, bool); 5] {
    [
        ("Alt+a", "Add", a.add),
        ("Alt+e", "Edit", a.edit),
        ("Alt+d", "Delete", a.delete),
        ("Enter", "Submit", a.submit),
        ("Esc", "Cancel", a.cancel),
    ]
}

fn button(key: &'static str, label: &'static str, enabled: bool) -> [Span<'static>; 2] {
    let c = colors();
    if enabled {
        [
            Span::styled(
                format!("[{label}]"),
                Style::default().fg(c.success).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {key}"), Style::default().fg(c.muted)),
        ]
    } else {
        [
            Span::styled(
                format!("[{label}]"),
                Style::default().fg(c.disabled).add_modifier(Modifier::DIM),
            ),
            Span::styled(format!(" {key}"), Style::default().fg(c.disabled)),
        ]
    }
}
