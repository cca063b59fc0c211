//! 字段面板

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shipyard_core::{EditMode, Field, FormState};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染四个输入字段
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.form.current_state();
    let enabled = app.form.affordances().fields_enabled;

    let title = match state {
        FormState::Idle => " Ship Details ",
        FormState::Editing(EditMode::Adding) => " New Ship ",
        FormState::Editing(EditMode::Updating { .. }) => " Edit Ship ",
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(enabled));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let c = colors();
    let mut lines = Vec::with_capacity(Field::ALL.len() * 2);
    for field in Field::ALL {
        let focused = enabled && app.focus.is(field);
        let value = app.form.fields().get(field);

        let label_style = if focused {
            Style::default()
                .fg(c.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        };
        let marker = if focused { "▸ " } else { "  " };

        let value_span = if !enabled {
            Span::styled(format!("    {value}"), Style::default().fg(c.disabled))
        } else if focused {
            Span::styled(format!("    {value}▎"), Style::default().fg(c.fg))
        } else if value.is_empty() && field.is_numeric() {
            Span::styled("    digits only", Style::default().fg(c.disabled))
        } else {
            Span::styled(format!("    {value}"), Style::default().fg(c.fg))
        };

        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(field.label(), label_style),
        ]));
        lines.push(Line::from(value_span));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
