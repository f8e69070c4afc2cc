//! 后台请求消息
//!
//! `BackendCommand` 由 Update 层排入队列，主循环交给 Backend 执行；
//! `BackendEvent` 是 Backend 任务完成后经 channel 送回的结果，
//! 主循环把它包装成 `AppMessage::Backend` 交给 Update 层。

use quote_board_client::{Quote, QuoteDraft, QuoteError, QuoteId};

/// 待执行的后台请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// GET /quotes
    LoadQuotes,
    /// POST /quotes
    CreateQuote(QuoteDraft),
    /// POST /quotes/:id
    UpdateQuote(Quote),
    /// DELETE /quotes/:id
    DeleteQuote(QuoteId),
    /// GET /quotes/random
    RandomQuote,
}

/// 后台请求的结果
///
/// 每个变体都带上提交时的参数，失败时用于记录错误与重试。
#[derive(Debug, Clone)]
pub enum BackendEvent {
    Loaded(Result<Vec<Quote>, QuoteError>),
    Created {
        draft: QuoteDraft,
        result: Result<Quote, QuoteError>,
    },
    Updated {
        submitted: Quote,
        result: Result<Quote, QuoteError>,
    },
    Deleted {
        id: QuoteId,
        result: Result<(), QuoteError>,
    },
    Random(Result<String, QuoteError>),
}
