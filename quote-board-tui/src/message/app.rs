//! 应用主消息枚举

use super::{BackendEvent, ContentMessage, EditorMessage, ModalMessage, NavigationMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 行内编辑相关消息
    Editor(EditorMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台请求完成
    Backend(BackendEvent),

    /// 返回 / 取消
    GoBack,

    /// 重新加载列表
    Refresh,

    /// 重试当前行（或列表）上失败的操作
    Retry,

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
