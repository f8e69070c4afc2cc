//! 内容面板更新逻辑
//!
//! 处理内容面板中的各种操作消息

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => match app.current_page {
            Page::Quotes => app.quotes.select_previous(),
            Page::Settings => app.settings.select_previous(),
        },
        ContentMessage::SelectNext => match app.current_page {
            Page::Quotes => app.quotes.select_next(),
            Page::Settings => app.settings.select_next(),
        },
        ContentMessage::SelectFirst => {
            if app.current_page == Page::Quotes {
                app.quotes.select_first();
            }
        }
        ContentMessage::SelectLast => {
            if app.current_page == Page::Quotes {
                app.quotes.select_last();
            }
        }
        ContentMessage::Confirm => handle_confirm(app),

        // ========== 增删改 ==========
        ContentMessage::Add => {
            if app.current_page == Page::Quotes {
                app.quotes.begin_create();
            }
        }
        ContentMessage::Edit => {
            if app.current_page == Page::Quotes {
                app.quotes.begin_edit();
            }
        }
        ContentMessage::Delete => handle_delete(app),

        ContentMessage::Random => {
            if !app.quotes.request_random() {
                app.set_status(t().status.already_pending);
            }
        }

        // ========== 设置页面专用 ==========
        ContentMessage::TogglePrev => {
            if app.current_page == Page::Settings {
                app.settings.toggle_prev();
                super::apply_appearance(&app.settings);
            }
        }
        ContentMessage::ToggleNext => {
            if app.current_page == Page::Settings {
                app.settings.toggle_next();
                super::apply_appearance(&app.settings);
            }
        }
    }
}

fn handle_confirm(app: &mut App) {
    match app.current_page {
        // 名言行：开始编辑；新建行：开始输入
        Page::Quotes => app.quotes.begin_edit(),
        Page::Settings => {
            app.settings.toggle_next();
            super::apply_appearance(&app.settings);
        }
    }
}

fn handle_delete(app: &mut App) {
    if app.current_page != Page::Quotes {
        return;
    }

    if let Some(quote) = app.quotes.selected_quote() {
        let id = quote.id.clone();
        let preview = format!("\"{}\" - {}", quote.quote, quote.person);
        app.modal.show_confirm_delete(id, preview);
    }
}
