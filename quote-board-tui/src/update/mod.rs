//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! ```text
//! src/update/mod.rs
//!     mod navigation;     // 导航子消息处理
//!     mod content;        // 内容面板子消息处理
//!     mod editor;         // 行内编辑子消息处理
//!     mod modal;          // 弹窗子消息处理
//!     mod backend;        // 后台请求结果处理
//! ```
//!
//! 需要访问服务端的操作不会在这里执行：Update 层只调用
//! `app.quotes.request_*()` 把 `BackendCommand` 排进队列，
//! 由主循环交给 Backend 层。请求结果以 `AppMessage::Backend` 回到这里。
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。

mod backend;
mod content;
mod editor;
mod modal;
mod navigation;

use crate::i18n::{self, t};
use crate::message::AppMessage;
use crate::model::{App, SettingsState};
use crate::view::theme;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 有弹窗或正在输入时，不切换焦点
            if !app.modal.is_open() && !app.quotes.is_editing() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Editor(editor_msg) => {
            editor::update(app, editor_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(event) => {
            backend::update(app, event);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗；其次取消输入
            if app.modal.is_open() {
                app.modal.close();
            } else if app.quotes.is_editing() {
                app.quotes.cancel_input();
            } else {
                app.clear_status();
            }
        }

        AppMessage::Refresh => {
            if app.quotes.request_load() {
                app.set_status(t().status.refreshing);
            } else {
                app.set_status(t().status.already_pending);
            }
        }

        AppMessage::Retry => {
            if app.quotes.retry_target().is_none() {
                app.set_status(t().status.nothing_to_retry);
            } else if app.quotes.retry() {
                app.set_status(t().status.retrying);
            } else {
                app.set_status(t().status.already_pending);
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

/// 应用界面语言与主题
pub fn apply_appearance(settings: &SettingsState) {
    i18n::set_language(settings.language);
    theme::set_theme(settings.theme);
}

#[cfg(test)]
mod tests {
    use quote_board_client::{Quote, QuoteDraft, QuoteError, QuoteId};

    use super::*;
    use crate::message::{
        BackendCommand, BackendEvent, ContentMessage, EditorMessage, ModalMessage,
    };
    use crate::model::state::Modal;
    use crate::model::FocusPanel;

    fn network_error() -> QuoteError {
        QuoteError::NetworkError {
            detail: "connection refused".into(),
        }
    }

    /// 已加载两条名言的应用
    fn loaded_app() -> App {
        let mut app = App::default();
        assert_eq!(app.take_commands(), vec![BackendCommand::LoadQuotes]);
        update(
            &mut app,
            AppMessage::Backend(BackendEvent::Loaded(Ok(vec![
                Quote::new("1", "Stay hungry.", "Steve Jobs"),
                Quote::new("2", "Simplicity is prerequisite for reliability.", "Dijkstra"),
            ]))),
        );
        app
    }

    #[test]
    fn startup_queues_initial_load() {
        let mut app = App::default();
        assert_eq!(app.take_commands(), vec![BackendCommand::LoadQuotes]);
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = loaded_app();

        update(&mut app, AppMessage::Content(ContentMessage::Delete));
        assert!(matches!(
            app.modal.active,
            Some(Modal::ConfirmDelete { ref id, focus: 0, .. }) if id.as_str() == "1"
        ));

        // 焦点默认在“取消”，直接确认不会发请求
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert!(!app.modal.is_open());
        assert!(app.take_commands().is_empty());

        update(&mut app, AppMessage::Content(ContentMessage::Delete));
        update(&mut app, AppMessage::Modal(ModalMessage::ToggleDeleteFocus));
        update(&mut app, AppMessage::Modal(ModalMessage::Confirm));
        assert_eq!(
            app.take_commands(),
            vec![BackendCommand::DeleteQuote(QuoteId::from("1"))]
        );

        update(
            &mut app,
            AppMessage::Backend(BackendEvent::Deleted {
                id: QuoteId::from("1"),
                result: Ok(()),
            }),
        );
        assert_eq!(app.quotes.collection.len(), 1);
        assert!(!app.quotes.collection.contains(&QuoteId::from("1")));
    }

    #[test]
    fn delete_on_create_row_does_nothing() {
        let mut app = loaded_app();
        app.quotes.select_last();

        update(&mut app, AppMessage::Content(ContentMessage::Delete));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn inline_edit_submits_update() {
        let mut app = loaded_app();

        update(&mut app, AppMessage::Content(ContentMessage::Edit));
        assert!(app.quotes.is_editing());
        update(&mut app, AppMessage::Editor(EditorMessage::Input('!')));
        update(&mut app, AppMessage::Editor(EditorMessage::Submit));

        assert!(!app.quotes.is_editing());
        assert_eq!(
            app.take_commands(),
            vec![BackendCommand::UpdateQuote(Quote::new(
                "1",
                "Stay hungry.!",
                "Steve Jobs"
            ))]
        );
    }

    #[test]
    fn update_failure_can_be_retried_from_the_row() {
        let mut app = loaded_app();
        let submitted = Quote::new("1", "Stay foolish.", "Steve Jobs");
        app.quotes.request_update(submitted.clone());
        app.take_commands();

        update(
            &mut app,
            AppMessage::Backend(BackendEvent::Updated {
                submitted: submitted.clone(),
                result: Err(network_error()),
            }),
        );
        assert!(app.quotes.row_failure(&QuoteId::from("1")).is_some());
        // 本地记录保持不变
        assert_eq!(
            app.quotes.collection.get(&QuoteId::from("1")).map(|q| q.quote.as_str()),
            Some("Stay hungry.")
        );

        update(&mut app, AppMessage::Retry);
        assert_eq!(
            app.take_commands(),
            vec![BackendCommand::UpdateQuote(submitted)]
        );
    }

    #[test]
    fn load_failure_is_retried_when_nothing_else_failed() {
        let mut app = App::default();
        app.take_commands();

        update(
            &mut app,
            AppMessage::Backend(BackendEvent::Loaded(Err(network_error()))),
        );
        assert!(app.quotes.load_error().is_some());
        assert!(app.status_message.is_some());

        update(&mut app, AppMessage::Retry);
        assert_eq!(app.take_commands(), vec![BackendCommand::LoadQuotes]);
    }

    #[test]
    fn retry_without_failures_sends_nothing() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Retry);
        assert!(app.take_commands().is_empty());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn refresh_is_not_duplicated_while_in_flight() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Refresh);
        update(&mut app, AppMessage::Refresh);
        assert_eq!(app.take_commands(), vec![BackendCommand::LoadQuotes]);
    }

    #[test]
    fn created_quote_is_appended_and_inputs_cleared() {
        let mut app = loaded_app();

        update(&mut app, AppMessage::Content(ContentMessage::Add));
        for ch in "Less is more.".chars() {
            update(&mut app, AppMessage::Editor(EditorMessage::Input(ch)));
        }
        update(&mut app, AppMessage::Editor(EditorMessage::NextField));
        for ch in "Mies".chars() {
            update(&mut app, AppMessage::Editor(EditorMessage::Input(ch)));
        }
        update(&mut app, AppMessage::Editor(EditorMessage::Submit));

        let draft = QuoteDraft::new("Less is more.", "Mies");
        assert_eq!(
            app.take_commands(),
            vec![BackendCommand::CreateQuote(draft.clone())]
        );

        update(
            &mut app,
            AppMessage::Backend(BackendEvent::Created {
                draft: draft.clone(),
                result: Ok(draft.with_id(QuoteId::from("3"))),
            }),
        );
        assert_eq!(app.quotes.collection.len(), 3);
        assert!(app.quotes.create_row.is_empty());
    }

    #[test]
    fn update_for_deleted_quote_is_dropped() {
        let mut app = loaded_app();
        update(
            &mut app,
            AppMessage::Backend(BackendEvent::Deleted {
                id: QuoteId::from("2"),
                result: Ok(()),
            }),
        );

        update(
            &mut app,
            AppMessage::Backend(BackendEvent::Updated {
                submitted: Quote::new("2", "changed", "someone"),
                result: Ok(Quote::new("2", "changed", "someone")),
            }),
        );
        assert_eq!(app.quotes.collection.len(), 1);
        assert!(!app.quotes.collection.contains(&QuoteId::from("2")));
    }

    #[test]
    fn random_quote_opens_modal() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Content(ContentMessage::Random));
        assert_eq!(app.take_commands(), vec![BackendCommand::RandomQuote]);

        update(
            &mut app,
            AppMessage::Backend(BackendEvent::Random(Ok("Stay hungry.".into()))),
        );
        assert_eq!(
            app.modal.active,
            Some(Modal::RandomQuote {
                text: "Stay hungry.".into()
            })
        );
    }

    #[test]
    fn random_failure_shows_error_modal() {
        let mut app = loaded_app();
        app.quotes.request_random();
        app.take_commands();

        update(
            &mut app,
            AppMessage::Backend(BackendEvent::Random(Err(network_error()))),
        );
        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));
    }

    #[test]
    fn focus_is_locked_while_editing() {
        let mut app = loaded_app();
        update(&mut app, AppMessage::Content(ContentMessage::Edit));
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Content);

        update(&mut app, AppMessage::GoBack);
        assert!(!app.quotes.is_editing());
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Navigation);
    }
}
