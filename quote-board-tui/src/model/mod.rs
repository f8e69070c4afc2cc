//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的“唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Navigation / Content）
//!         mod navigation;     // 导航栏状态
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、列表容器（QuotesState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/quotes.rs 中定义：
//!
//!         QuotesState {
//!             collection: QuoteCollection,    // 权威列表（来自服务器）
//!             selected: usize,                // 选中行，len() 表示新建行
//!             create_row: CreateRowState,     // 新建行的两个输入框
//!             editors: HashMap<QuoteId, QuoteEditor>,
//!             pending: HashSet<PendingOp>,    // 进行中的请求
//!             load_error / create_failure / row_failures,
//!             outbox: Vec<BackendCommand>,    // 待发出的请求
//!         }
//!
//!     列表只在服务器响应后修改：
//!         - on_loaded      整体替换
//!         - on_created     追加（使用服务器分配的 id）
//!         - on_updated     覆盖对应记录（记录已删除时丢弃）
//!         - on_deleted     按 id 移除
//!
//!     失败时列表不变，错误记录在对应的作用域（列表 / 行 / 新建行），
//!     Alt+t 按选中位置重试。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、行编辑器（QuoteEditor）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/editor.rs 中定义：
//!
//!         编辑器持有草稿以及草稿派生自的上游记录（base）。
//!         每次列表变化后 QuotesState 都会对账：
//!             - id 已消失            → 丢弃编辑器
//!             - 上游记录与 base 不同  → 草稿被权威值覆盖
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ConfirmDelete / RandomQuote / Help / Error
//!     active: Option<Modal>，None 表示无弹窗。
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItemId, NavigationState};
pub use page::Page;
pub use state::{ModalState, QuotesState, SettingsState};
