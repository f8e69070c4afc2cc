//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 所有的用户操作、后台请求结果都通过 Message 来表达，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage：主消息
//!         mod navigation;     // 导航栏子消息
//!         mod content;        // 内容面板子消息
//!         mod editor;         // 行内编辑子消息
//!         mod modal;          // 弹窗子消息
//!         mod backend;        // 后台请求（命令 + 结果）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 后台消息的流向
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层不直接发请求，只把 BackendCommand 排进 QuotesState 的队列：
//!
//!         update(app, msg)
//!             ↓ app.quotes.request_delete(id)
//!         QuotesState.outbox.push(BackendCommand::DeleteQuote(id))
//!
//!     主循环（app.rs）每一轮取出队列，交给 backend::QuoteBackend 执行：
//!
//!         for cmd in app.take_commands() { backend.dispatch(cmd) }
//!
//!     后台任务完成后把 BackendEvent 送回 channel，主循环再包装成
//!     AppMessage::Backend(event) 交回 Update 层。
//!
//!     这样 Update 层始终是同步的纯函数，测试时不需要终端也不需要网络。
//!

mod app;
mod backend;
mod content;
mod editor;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::{BackendCommand, BackendEvent};
pub use content::ContentMessage;
pub use editor::EditorMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
