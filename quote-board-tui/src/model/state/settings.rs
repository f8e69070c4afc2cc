//! 设置页面状态

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 获取下一个主题（只有两个选项，上一个与下一个相同）
    #[must_use]
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Language,
}

impl SettingItem {
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::Language]
    }
}

/// 设置页面状态
#[derive(Debug, Default)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    pub theme: Theme,
    pub language: Language,
    /// 有未保存的修改
    dirty: bool,
}

impl SettingsState {
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            theme,
            language,
            ..Self::default()
        }
    }

    pub fn select_previous(&mut self) {
        let count = SettingItem::all().len();
        self.selected_index = (self.selected_index + count - 1) % count;
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % SettingItem::all().len();
    }

    pub fn current_item(&self) -> Option<SettingItem> {
        SettingItem::all().get(self.selected_index).copied()
    }

    /// 切换当前设置项到下一个值
    pub fn toggle_next(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.next(),
            Some(SettingItem::Language) => self.language = self.language.next(),
            None => return,
        }
        self.dirty = true;
    }

    /// 切换当前设置项到上一个值
    pub fn toggle_prev(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.next(),
            Some(SettingItem::Language) => self.language = self.language.prev(),
            None => return,
        }
        self.dirty = true;
    }

    /// 取走“有修改”标记，由主循环决定是否写回配置文件
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_around() {
        let mut settings = SettingsState::default();
        settings.select_previous();
        assert_eq!(settings.current_item(), Some(SettingItem::Language));
        settings.select_next();
        assert_eq!(settings.current_item(), Some(SettingItem::Theme));
    }

    #[test]
    fn toggling_marks_settings_dirty_once() {
        let mut settings = SettingsState::new(Theme::Dark, Language::EnUs);
        assert!(!settings.take_dirty());

        settings.toggle_next();
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.take_dirty());
        assert!(!settings.take_dirty());

        settings.select_next();
        settings.toggle_prev();
        assert_eq!(settings.language, Language::ZhCn);
    }
}
