//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;
    let mut hints = Vec::new();

    // 行内输入时只显示输入相关的按键
    if app.quotes.is_editing() {
        hints.push((keys.enter, actions.submit));
        hints.push((keys.tab, actions.next_field));
        hints.push((keys.esc, actions.cancel));
        return hints;
    }

    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.open));
        }
        FocusPanel::Content => match app.current_page {
            Page::Quotes => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.enter, actions.edit));
                hints.push(("Alt+a", actions.add));
                hints.push(("Alt+d", actions.delete));
                hints.push(("Alt+r", actions.refresh));
                hints.push(("Alt+t", actions.retry));
                hints.push(("Alt+o", actions.random));
            }
            Page::Settings => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.arrows_lr, actions.switch_option));
            }
        },
    }

    hints.push((keys.tab, actions.switch_panel));
    hints.push(("?", actions.help));
    hints.push(("Alt+q", actions.quit));

    hints
}
