//! 弹窗/对话框状态

use quote_board_client::QuoteId;

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 确认删除
    ConfirmDelete {
        /// 要删除的名言 ID
        id: QuoteId,
        /// 展示给用户的摘要
        preview: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 随机名言
    RandomQuote { text: String },
    /// 帮助
    Help,
    /// 错误
    Error { title: String, message: String },
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示确认删除弹窗，默认焦点在“取消”
    pub fn show_confirm_delete(&mut self, id: QuoteId, preview: impl Into<String>) {
        self.active = Some(Modal::ConfirmDelete {
            id,
            preview: preview.into(),
            focus: 0,
        });
    }

    pub fn show_random_quote(&mut self, text: impl Into<String>) {
        self.active = Some(Modal::RandomQuote { text: text.into() });
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.active = Some(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
