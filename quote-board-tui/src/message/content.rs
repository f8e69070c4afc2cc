//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、增删改等

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 确认选择（名言行：开始编辑；新建行：开始输入）
    Confirm,

    // ========== 增删改 ==========
    /// 跳到新建行并开始输入
    Add,
    /// 编辑当前选中行
    Edit,
    /// 删除当前选中行（先弹出确认框）
    Delete,

    /// 随机名言
    Random,

    // ========== 设置页面专用 ==========
    TogglePrev,
    ToggleNext,
}
