//! 行内编辑消息
//!
//! 只在名言行或新建行处于输入状态时产生

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMessage {
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 切换到另一个输入框
    NextField,
    /// 提交（名言行：更新；新建行：创建）
    Submit,
    /// 取消（名言行：丢弃草稿；新建行：退出输入，保留内容）
    Cancel,
}
