//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航面板
    Navigation,
    /// 右侧内容面板（启动时直接落在名言列表上）
    #[default]
    Content,
}

impl FocusPanel {
    /// 切换到另一个面板
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        matches!(self, Self::Navigation)
    }

    pub fn is_content(self) -> bool {
        matches!(self, Self::Content)
    }
}
