//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::{SettingItem, Theme};
use crate::model::App;
use crate::view::theme::colors;

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 20;
/// 值区域的宽度（包含 ◀ ▶ 符号）
const VALUE_WIDTH: usize = 20;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let settings = &app.settings;

    let mut lines = vec![Line::from("")];

    for (index, item) in SettingItem::all().iter().enumerate() {
        let (label, value) = match item {
            SettingItem::Theme => (
                texts.settings.theme.label,
                match settings.theme {
                    Theme::Dark => texts.settings.theme.dark,
                    Theme::Light => texts.settings.theme.light,
                },
            ),
            SettingItem::Language => (
                texts.settings.language.label,
                settings.language.display_name(),
            ),
        };
        lines.push(render_setting_row(
            label,
            value,
            settings.selected_index == index,
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(""));

    // 操作提示
    let key_style = Style::default().fg(Color::Yellow);
    let desc_style = Style::default().fg(c.muted);
    lines.push(Line::from(vec![
        Span::styled(format!("  {}", texts.hints.keys.arrows_ud), key_style),
        Span::styled(format!(" {} | ", texts.hints.actions.select), desc_style),
        Span::styled(texts.hints.keys.arrows_lr, key_style),
        Span::styled(
            format!(" {} | ", texts.hints.actions.switch_option),
            desc_style,
        ),
        Span::styled(texts.hints.keys.tab, key_style),
        Span::styled(format!(" {}", texts.hints.actions.switch_panel), desc_style),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染单行设置项
fn render_setting_row<'a>(label: &'a str, value: &'a str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value_style = if is_selected {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // 使用 unicode-width 计算显示宽度
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());

    // 值居中显示在 ◀ ▶ 之间
    let value_width = value.width();
    let available_space = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available_space.saturating_sub(value_width) / 2;
    let right_padding = available_space
        .saturating_sub(value_width)
        .saturating_sub(left_padding);

    // 未选中时用空格占位，保持对齐
    let (left_arrow, right_arrow) = if is_selected {
        ("◀ ", " ▶")
    } else {
        ("  ", "  ")
    };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("  {label}"), label_style),
        Span::raw(format!("{:label_padding$}", "")),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(left_arrow, Style::default().fg(Color::Yellow)),
        Span::raw(format!("{:left_padding$}", "")),
        Span::styled(value, value_style),
        Span::raw(format!("{:right_padding$}", "")),
        Span::styled(right_arrow, Style::default().fg(Color::Yellow)),
    ])
}
