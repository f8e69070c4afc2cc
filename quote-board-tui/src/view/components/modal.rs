//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::Modal;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDelete {
            preview, focus, ..
        } => render_confirm_delete(frame, preview, *focus),
        Modal::RandomQuote { text } => render_random_quote(frame, text),
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗内边距后的区域
fn inner_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 清除背景并绘制弹窗边框
fn render_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg));

    frame.render_widget(block, area);
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, preview: &str, focus: usize) {
    let texts = t();
    let c = colors();

    let area = centered_rect(56, 10, frame.area());
    render_frame(frame, area, texts.modal.confirm_delete.title, c.error);

    let cancel_style = if focus == 0 {
        Style::default().fg(c.selected_fg).bg(c.selected_bg)
    } else {
        Style::default().fg(c.fg)
    };

    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.modal.confirm_delete.message),
            Style::default().fg(c.fg),
        ),
        Line::styled(format!("  {preview}"), Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.delete), confirm_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_rect(area));
}

/// 渲染随机名言弹窗
fn render_random_quote(frame: &mut Frame, text: &str) {
    let texts = t();
    let c = colors();

    let area = centered_rect(60, 10, frame.area());
    render_frame(frame, area, texts.modal.random_quote.title, c.highlight);

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  ❝ {text} ❞"),
            Style::default().fg(c.fg).add_modifier(Modifier::ITALIC),
        ),
        Line::from(""),
        close_line(),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_rect(area));
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let texts = t();
    let c = colors();

    let area = centered_rect(56, 10, frame.area());
    render_frame(frame, area, title, c.error);

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  ✗ {}", texts.common.error),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ),
        Line::styled(format!("  {message}"), Style::default().fg(c.fg)),
        Line::from(""),
        close_line(),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_rect(area));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let actions = &texts.hints.actions;

    let area = centered_rect(56, 24, frame.area());
    render_frame(frame, area, texts.modal.help.title, c.highlight);

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<9}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(texts.modal.help.global),
        entry("Tab", actions.switch_panel),
        entry("↑↓/jk", actions.select),
        entry("Alt+r", actions.refresh),
        entry("Alt+t", actions.retry),
        entry("?/Alt+h", actions.help),
        entry("Alt+q", actions.quit),
        Line::from(""),
        section(texts.modal.help.quotes),
        entry("Enter", actions.edit),
        entry("Alt+a", actions.add),
        entry("Alt+e", actions.edit),
        entry("Alt+d", actions.delete),
        entry("Alt+o", actions.random),
        Line::from(""),
        section(texts.modal.help.editing),
        entry("Enter", actions.submit),
        entry("Tab", actions.next_field),
        entry("Esc", actions.cancel),
        Line::from(""),
        Line::styled(texts.modal.close_hint, Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner_rect(area));
}

/// 关闭按钮与提示
fn close_line() -> Line<'static> {
    let texts = t();
    let c = colors();

    Line::from(vec![
        Span::raw("    "),
        Span::styled(
            format!(" {} ", texts.common.close),
            Style::default().fg(c.selected_fg).bg(c.selected_bg),
        ),
        Span::raw("  "),
        Span::styled(texts.modal.close_hint, Style::default().fg(c.muted)),
    ])
}
