//! 页面状态定义

use super::NavItemId;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 名言列表（主页面）
    #[default]
    Quotes,
    /// 设置
    Settings,
}

impl From<NavItemId> for Page {
    fn from(id: NavItemId) -> Self {
        match id {
            NavItemId::Quotes => Page::Quotes,
            NavItemId::Settings => Page::Settings,
        }
    }
}
