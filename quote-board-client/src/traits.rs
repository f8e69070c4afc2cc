//! Transport abstraction

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Quote, QuoteDraft, QuoteId};

/// One async method per REST endpoint of the quote service.
///
/// Implementations only move data; validation and the choice of what to apply
/// locally live in [`QuoteService`](crate::QuoteService).
#[async_trait]
pub trait QuoteApi: Send + Sync {
    /// `GET /quotes`
    async fn list_quotes(&self) -> Result<Vec<Quote>>;

    /// `POST /quotes`, returning the server-assigned id
    async fn create_quote(&self, draft: &QuoteDraft) -> Result<QuoteId>;

    /// `POST /quotes/:id`
    ///
    /// Returns `Some` only when the server echoed a stored record back.
    async fn update_quote(&self, quote: &Quote) -> Result<Option<Quote>>;

    /// `DELETE /quotes/:id`
    async fn delete_quote(&self, id: &QuoteId) -> Result<()>;

    /// `GET /quotes/random`, returning only the quote text
    async fn random_quote(&self) -> Result<String>;
}
