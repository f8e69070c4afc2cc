//! Test helpers: an in-memory [`QuoteApi`].

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{QuoteError, Result};
use crate::traits::QuoteApi;
use crate::types::{Quote, QuoteDraft, QuoteId};

/// In-memory stand-in for the quote server.
pub struct MockQuoteApi {
    quotes: Mutex<Vec<Quote>>,
    next_id: Mutex<u64>,
    /// If Some, the next call fails with this error and is then cleared
    fail_next: Mutex<Option<QuoteError>>,
    /// Whether updates echo the stored record back
    echo_updates: bool,
    /// Names of the endpoints called, in order
    calls: Mutex<Vec<&'static str>>,
}

impl MockQuoteApi {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self {
            quotes: Mutex::new(quotes),
            next_id: Mutex::new(100),
            fail_next: Mutex::new(None),
            echo_updates: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn echoing_updates(mut self) -> Self {
        self.echo_updates = true;
        self
    }

    pub async fn fail_next(&self, err: QuoteError) {
        *self.fail_next.lock().await = Some(err);
    }

    pub async fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().await.clone()
    }

    pub async fn stored(&self) -> Vec<Quote> {
        self.quotes.lock().await.clone()
    }

    async fn enter(&self, name: &'static str) -> Result<()> {
        self.calls.lock().await.push(name);
        match self.fail_next.lock().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl QuoteApi for MockQuoteApi {
    async fn list_quotes(&self) -> Result<Vec<Quote>> {
        self.enter("list").await?;
        Ok(self.quotes.lock().await.clone())
    }

    async fn create_quote(&self, draft: &QuoteDraft) -> Result<QuoteId> {
        self.enter("create").await?;
        let mut next = self.next_id.lock().await;
        let id = QuoteId::from(next.to_string());
        *next += 1;
        self.quotes
            .lock()
            .await
            .push(draft.clone().with_id(id.clone()));
        Ok(id)
    }

    async fn update_quote(&self, quote: &Quote) -> Result<Option<Quote>> {
        self.enter("update").await?;
        let mut quotes = self.quotes.lock().await;
        let Some(stored) = quotes.iter_mut().find(|q| q.id == quote.id) else {
            return Err(QuoteError::HttpStatus {
                status: 500,
                raw_message: Some("no such quote".to_string()),
            });
        };
        // Server-side normalisation, visible only through the echo
        stored.quote = quote.quote.trim().to_string();
        stored.person = quote.person.trim().to_string();
        Ok(self.echo_updates.then(|| stored.clone()))
    }

    async fn delete_quote(&self, id: &QuoteId) -> Result<()> {
        self.enter("delete").await?;
        self.quotes.lock().await.retain(|q| &q.id != id);
        Ok(())
    }

    async fn random_quote(&self) -> Result<String> {
        self.enter("random").await?;
        self.quotes
            .lock()
            .await
            .first()
            .map(|q| q.quote.clone())
            .ok_or(QuoteError::HttpStatus {
                status: 500,
                raw_message: Some("sql: no rows in result set".to_string()),
            })
    }
}
