//! 各页面视图

pub mod quotes;
pub mod settings;
