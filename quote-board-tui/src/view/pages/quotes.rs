//! 名言列表页面视图
//!
//! 每条名言一行；正在编辑的行在下方展开两个输入框，
//! 有失败操作的行再追加一行错误。列表末尾固定是新建行。

use quote_board_client::{Quote, QuoteError};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::t;
use crate::model::state::{EditField, InputTarget, OpFailure, PendingOp, QuotesState};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 输入框标签宽度（基于显示宽度）
const LABEL_WIDTH: usize = 8;

/// 渲染名言列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let quotes = &app.quotes;
    let width = usize::from(area.width);

    let mut lines = Vec::new();

    // 加载失败横幅（已有列表时保留旧数据）
    if let Some(error) = quotes.load_error() {
        lines.push(Line::styled(
            truncate(
                &format!(
                    " ⚠ {}: {error}{}",
                    texts.quotes.load_failed,
                    retry_suffix(error)
                ),
                width,
            ),
            Style::default().fg(c.error),
        ));
        lines.push(Line::from(""));
    }

    if !quotes.loaded {
        if quotes.is_pending(&PendingOp::Load) {
            lines.push(Line::styled(
                format!(" {}", texts.quotes.loading),
                Style::default().fg(c.muted),
            ));
        }
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    if quotes.collection.is_empty() {
        lines.push(Line::styled(
            format!(" {}", texts.quotes.empty),
            Style::default().fg(c.muted),
        ));
        lines.push(Line::from(""));
    }

    let mut selected_line = 0;
    for (index, quote) in quotes.collection.iter().enumerate() {
        if index == quotes.selected {
            selected_line = lines.len();
        }
        push_quote_row(&mut lines, quotes, quote, index == quotes.selected, width);
    }

    if quotes.is_create_row_selected() {
        selected_line = lines.len();
    }
    push_create_row(&mut lines, quotes, width);

    // 让选中行保持在可见区域内
    let height = usize::from(area.height).max(1);
    let scroll = (selected_line + 4).saturating_sub(height);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

/// 名言行：摘要、编辑框、错误
fn push_quote_row(
    lines: &mut Vec<Line<'static>>,
    quotes: &QuotesState,
    quote: &Quote,
    is_selected: bool,
    width: usize,
) {
    let texts = t();
    let c = colors();

    let prefix = if is_selected { "▶ " } else { "  " };
    let marker = quotes.is_row_busy(&quote.id).then(|| {
        if quotes.is_pending(&PendingOp::Delete(quote.id.clone())) {
            texts.quotes.deleting
        } else {
            texts.quotes.saving
        }
    });
    // 有未提交草稿的行
    let dirty = quotes.editor(&quote.id).is_some_and(|e| e.is_dirty());
    let id = format!("#{:<4}{}", quote.id.as_str(), if dirty { "*" } else { " " });

    let marker_width = marker.map_or(0, |m| m.width() + 1);
    let summary = format!("❝{}❞ - {}", quote.quote, quote.person);
    let available = width.saturating_sub(prefix.width() + id.width() + marker_width);

    let row_style = if is_selected {
        Styles::selected()
    } else {
        Style::default().fg(colors().fg)
    };

    let mut spans = vec![
        Span::styled(prefix, row_style),
        Span::styled(id, row_style.fg(c.muted)),
        Span::styled(truncate(&summary, available), row_style),
    ];
    if let Some(marker) = marker {
        spans.push(Span::styled(
            format!(" {marker}"),
            Style::default().fg(c.warning).add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::from(spans));

    if let Some(editor) = quotes.editor(&quote.id) {
        let active = (quotes.input == Some(InputTarget::Row(quote.id.clone())))
            .then_some(editor.field);
        push_inputs(lines, &editor.quote, &editor.person, active, width);
    }

    if let Some(failure) = quotes.row_failure(&quote.id) {
        push_failure(lines, failure, width);
    }
}

/// 新建行：标签、两个输入框、错误
fn push_create_row(lines: &mut Vec<Line<'static>>, quotes: &QuotesState, width: usize) {
    let texts = t();
    let c = colors();
    let is_selected = quotes.is_create_row_selected();

    let label_style = if is_selected {
        Styles::selected()
    } else {
        Style::default().fg(c.success)
    };

    let mut spans = vec![
        Span::styled(if is_selected { "▶ " } else { "  " }, label_style),
        Span::styled(format!("+ {}", texts.quotes.new_row), label_style),
    ];
    if quotes.is_pending(&PendingOp::Create) {
        spans.push(Span::styled(
            format!(" {}", texts.quotes.creating),
            Style::default().fg(c.warning).add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::from(spans));

    let row = &quotes.create_row;
    if is_selected || !row.is_empty() {
        let active = (quotes.input == Some(InputTarget::Create)).then_some(row.field);
        push_inputs(lines, &row.quote, &row.person, active, width);
    }

    if let Some(failure) = quotes.create_failure() {
        push_failure(lines, failure, width);
    }
}

/// 两个输入框，`active` 为正在输入的字段
fn push_inputs(
    lines: &mut Vec<Line<'static>>,
    quote: &str,
    person: &str,
    active: Option<EditField>,
    width: usize,
) {
    let texts = t();
    for (field, label, value) in [
        (EditField::Quote, texts.quotes.quote_label, quote),
        (EditField::Person, texts.quotes.person_label, person),
    ] {
        lines.push(render_input(label, value, active == Some(field), width));
    }
}

/// 渲染单个输入框
fn render_input(label: &str, value: &str, is_active: bool, width: usize) -> Line<'static> {
    let c = colors();

    let padding = LABEL_WIDTH.saturating_sub(label.width());
    let label = format!("      {label}{:padding$}: ", "");
    let available = width.saturating_sub(label.width() + 1);

    let (value, style) = if is_active {
        // 光标在末尾，过长时显示尾部
        (
            format!("{}▎", tail(value, available.saturating_sub(1))),
            Style::default().fg(c.highlight),
        )
    } else {
        (truncate(value, available), Style::default().fg(c.fg))
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(c.muted)),
        Span::styled(value, style),
    ])
}

/// 失败操作的错误行
fn push_failure(lines: &mut Vec<Line<'static>>, failure: &OpFailure, width: usize) {
    lines.push(Line::styled(
        truncate(
            &format!("      ✗ {}{}", failure.error, retry_suffix(&failure.error)),
            width,
        ),
        Style::default().fg(colors().error),
    ));
}

/// 可重试的错误附带按键提示
fn retry_suffix(error: &QuoteError) -> String {
    if error.is_retryable() {
        format!(" ({})", t().quotes.retry_hint)
    } else {
        String::new()
    }
}

/// 按显示宽度截断，超出时以 `…` 结尾
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// 保留末尾不超过 `max_width` 显示宽度的部分
fn tail(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (index, ch) in text.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > max_width {
            return &text[index + ch.len_utf8()..];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 6), "hello…");
        // 中文字符宽度为 2
        assert_eq!(truncate("生于忧患死于安乐", 7), "生于忧…");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail("hello", 10), "hello");
        assert_eq!(tail("hello world", 5), "world");
        assert_eq!(tail("生于忧患", 4), "忧患");
    }
}
