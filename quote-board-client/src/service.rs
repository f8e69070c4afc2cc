//! Quote operations as seen by a UI container

use std::sync::Arc;

use crate::error::{QuoteError, Result};
use crate::traits::QuoteApi;
use crate::types::{Quote, QuoteDraft, QuoteId};

/// Stateless quote service.
///
/// Each method performs one request and returns what the caller should apply
/// to its [`QuoteCollection`](crate::QuoteCollection). On error nothing is
/// returned, so the caller's state stays untouched.
#[derive(Clone)]
pub struct QuoteService {
    api: Arc<dyn QuoteApi>,
}

impl QuoteService {
    pub fn new(api: Arc<dyn QuoteApi>) -> Self {
        Self { api }
    }

    /// Fetch the full collection.
    pub async fn list(&self) -> Result<Vec<Quote>> {
        let quotes = self.api.list_quotes().await?;
        log::info!("Loaded {} quotes", quotes.len());
        Ok(quotes)
    }

    /// Create a quote and return the record to append.
    ///
    /// The record carries the literal submitted text and the server's id.
    pub async fn create(&self, draft: QuoteDraft) -> Result<Quote> {
        validate_fields(&draft.quote, &draft.person)?;
        let id = self.api.create_quote(&draft).await?;
        log::info!("Created quote {id}");
        Ok(draft.with_id(id))
    }

    /// Update a quote and return the record to apply.
    ///
    /// A server echo for the same id is preferred; otherwise the submitted
    /// values are returned.
    pub async fn update(&self, quote: Quote) -> Result<Quote> {
        validate_fields(&quote.quote, &quote.person)?;
        let echo = self.api.update_quote(&quote).await?;
        log::info!(
            "Updated quote {} ({})",
            quote.id,
            if echo.is_some() { "server echo" } else { "submitted values" }
        );
        Ok(echo.unwrap_or(quote))
    }

    /// Delete a quote and return its id for local removal.
    pub async fn delete(&self, id: QuoteId) -> Result<QuoteId> {
        self.api.delete_quote(&id).await?;
        log::info!("Deleted quote {id}");
        Ok(id)
    }

    /// Fetch the text of a random quote.
    pub async fn random(&self) -> Result<String> {
        self.api.random_quote().await
    }
}

/// The server rejects blank creations and treats blank update fields as
/// "unchanged", so both are refused before sending.
fn validate_fields(quote: &str, person: &str) -> Result<()> {
    if quote.trim().is_empty() {
        return Err(QuoteError::invalid_parameter("quote", "must not be empty"));
    }
    if person.trim().is_empty() {
        return Err(QuoteError::invalid_parameter("person", "must not be empty"));
    }
    Ok(())
}
