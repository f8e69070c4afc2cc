//! 导航相关消息

/// 导航消息
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    SelectPrevious,
    SelectNext,
    /// 确认选择（进入选中的页面）
    Confirm,
    SelectFirst,
    SelectLast,
}
