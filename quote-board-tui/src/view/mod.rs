//! View 层：界面渲染
//!
//! 只读取 Model，不修改状态。每一轮主循环都会整体重绘。
//!
//! ```text
//! ┌──────────────────────── 标题栏 ────────────────────────┐
//! ├─ 导航 (20%) ─┬──────────── 页面内容 (80%) ─────────────┤
//! │              │                                          │
//! ├──────────────┴──────────── 状态栏 ──────────────────────┤
//! └─────────────────── 弹窗（最上层）───────────────────────┘
//! ```

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
