//! 应用主状态结构

use super::{FocusPanel, ModalState, NavigationState, Page, QuotesState, SettingsState};
use crate::message::BackendCommand;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 名言列表（列表容器）
    pub quotes: QuotesState,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例，并排入首次加载请求
    pub fn new(settings: SettingsState) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::default(),
            navigation: NavigationState::new(),
            current_page: Page::default(),
            status_message: None,
            quotes: QuotesState::new(),
            settings,
            modal: ModalState::new(),
        };

        app.quotes.request_load();
        app
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 取出 Update 层排入的后台请求
    pub fn take_commands(&mut self) -> Vec<BackendCommand> {
        self.quotes.take_commands()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SettingsState::default())
    }
}
