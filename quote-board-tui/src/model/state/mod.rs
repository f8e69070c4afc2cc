//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod editor;
mod modal;
mod quotes;
mod settings;

pub use editor::EditField;
pub use modal::{Modal, ModalState};
pub use quotes::{InputTarget, OpFailure, PendingOp, QuotesState};
pub use settings::{SettingItem, SettingsState, Theme};
