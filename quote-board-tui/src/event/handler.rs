//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{
    AppMessage, ContentMessage, EditorMessage, ModalMessage, NavigationMessage,
};
use crate::model::state::Modal;
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变时下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 行内输入时，按键都属于输入框
    if app.quotes.is_editing() {
        return handle_editor_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::RETRY.matches(&key) {
        return AppMessage::Retry;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.current_page {
        Page::Quotes => handle_quotes_keys(key),
        Page::Settings => handle_settings_keys(key),
    }
}

/// 处理名言列表页面的按键
fn handle_quotes_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::ACTION_RANDOM.matches(&key) {
        return AppMessage::Content(ContentMessage::Random);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Enter: 编辑选中行（新建行则开始输入）
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个设置项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一个设置项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // ←: 切换到上一个值
        KeyCode::Left => AppMessage::Content(ContentMessage::TogglePrev),
        // → 或 Enter: 切换到下一个值
        KeyCode::Right | KeyCode::Enter => AppMessage::Content(ContentMessage::ToggleNext),
        _ => AppMessage::Noop,
    }
}

/// 处理行内输入的按键
fn handle_editor_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Editor(EditorMessage::Cancel),
        KeyCode::Enter => AppMessage::Editor(EditorMessage::Submit),
        KeyCode::Tab | KeyCode::BackTab => AppMessage::Editor(EditorMessage::NextField),
        KeyCode::Backspace => AppMessage::Editor(EditorMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Editor(EditorMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    match &app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete_keys(key),
        Some(_) => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        }

        // Enter: 确认
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use quote_board_client::{Quote, QuoteId};

    use super::*;
    use crate::model::FocusPanel;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn key(code: KeyCode) -> Event {
        press(code, KeyModifiers::NONE)
    }

    fn alt(c: char) -> Event {
        press(KeyCode::Char(c), KeyModifiers::ALT)
    }

    fn app_with_quote() -> App {
        let mut app = App::default();
        app.quotes
            .on_loaded(vec![Quote::new("1", "Stay hungry.", "Steve Jobs")]);
        app
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::default();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }

    #[test]
    fn global_shortcuts() {
        let app = App::default();
        assert!(matches!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
        assert!(matches!(handle_event(alt('q'), &app), AppMessage::Quit));
        assert!(matches!(handle_event(alt('r'), &app), AppMessage::Refresh));
        assert!(matches!(handle_event(alt('t'), &app), AppMessage::Retry));
        assert!(matches!(handle_event(alt('h'), &app), AppMessage::ShowHelp));
        assert!(matches!(
            handle_event(key(KeyCode::Char('?')), &app),
            AppMessage::ShowHelp
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Tab), &app),
            AppMessage::ToggleFocus
        ));
    }

    #[test]
    fn quote_list_actions() {
        let app = app_with_quote();
        assert!(matches!(
            handle_event(alt('a'), &app),
            AppMessage::Content(ContentMessage::Add)
        ));
        assert!(matches!(
            handle_event(alt('d'), &app),
            AppMessage::Content(ContentMessage::Delete)
        ));
        assert!(matches!(
            handle_event(alt('o'), &app),
            AppMessage::Content(ContentMessage::Random)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char('j')), &app),
            AppMessage::Content(ContentMessage::SelectNext)
        ));
    }

    #[test]
    fn navigation_panel_keys() {
        let mut app = App::default();
        app.focus = FocusPanel::Navigation;
        assert!(matches!(
            handle_event(key(KeyCode::Down), &app),
            AppMessage::Navigation(NavigationMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Navigation(NavigationMessage::Confirm)
        ));
    }

    #[test]
    fn editing_captures_typed_characters() {
        let mut app = app_with_quote();
        app.quotes.begin_edit();

        // 编辑时 j、q、? 都是普通字符
        for c in ['j', 'q', '?', 'Q'] {
            let modifiers = if c.is_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            };
            assert!(matches!(
                handle_event(press(KeyCode::Char(c), modifiers), &app),
                AppMessage::Editor(EditorMessage::Input(typed)) if typed == c
            ));
        }
        assert!(matches!(
            handle_event(key(KeyCode::Tab), &app),
            AppMessage::Editor(EditorMessage::NextField)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Editor(EditorMessage::Submit)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Editor(EditorMessage::Cancel)
        ));
        // Ctrl+C 仍然可以退出
        assert!(matches!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn modal_keys_take_priority() {
        let mut app = app_with_quote();
        app.modal
            .show_confirm_delete(QuoteId::from("1"), "\"Stay hungry.\" - Steve Jobs");

        assert!(matches!(
            handle_event(key(KeyCode::Right), &app),
            AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        ));
        assert!(matches!(
            handle_event(alt('q'), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn settings_page_toggles_values() {
        let mut app = App::default();
        app.current_page = Page::Settings;
        assert!(matches!(
            handle_event(key(KeyCode::Left), &app),
            AppMessage::Content(ContentMessage::TogglePrev)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Right), &app),
            AppMessage::Content(ContentMessage::ToggleNext)
        ));
    }
}
