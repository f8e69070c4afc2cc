//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//!
//! ```text
//! src/event/mod.rs
//!     mod handler;        // 事件处理器
//!     mod keymap;         // 快捷键映射
//! ```
//!
//! - `poll_event`：事件轮询，由 app.rs 调用，最长阻塞 timeout
//! - `handle_event`：事件分发，返回一个 `AppMessage`
//!
//! 键盘事件的分发顺序：
//!
//! 1. 有弹窗打开时，交给弹窗处理
//! 2. Ctrl+C 强制退出
//! 3. 正在行内输入时，字符、退格、Tab、Enter、Esc 都属于输入框
//! 4. 全局快捷键（帮助、刷新、重试、返回、切换面板、退出）
//! 5. 按焦点交给导航面板或内容面板
//!
//! 背景请求的结果不经过这里：主循环从 Backend 的 channel 取出
//! `BackendEvent`，直接包装成 `AppMessage::Backend`。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
