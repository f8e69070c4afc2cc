//! # quote-board-client
//!
//! Client library for the Quote Board REST service.
//!
//! ## Endpoints
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | `GET` | `/quotes` | - | `{ "quotes": [...] }` |
//! | `POST` | `/quotes` | `{ quote, person }` | raw text id |
//! | `POST` | `/quotes/:id` | `{ id, quote, person }` | ignored (or a JSON echo) |
//! | `DELETE` | `/quotes/:id` | - | ignored |
//! | `GET` | `/quotes/random` | - | raw quote text |
//!
//! ## Layers
//!
//! - [`QuoteApi`]: one async method per endpoint. [`HttpQuoteApi`] is the
//!   reqwest implementation.
//! - [`QuoteService`]: validates input and turns each call into the record
//!   the caller should apply locally.
//! - [`QuoteCollection`]: the canonical ordered list held by a UI container.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use quote_board_client::{ClientConfig, HttpQuoteApi, QuoteCollection, QuoteDraft, QuoteService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpQuoteApi::new(&ClientConfig::new("http://localhost:8080")?)?;
//!     let service = QuoteService::new(Arc::new(api));
//!
//!     let mut quotes = QuoteCollection::new();
//!     quotes.replace_all(service.list().await?);
//!
//!     let created = service
//!         .create(QuoteDraft::new("Stay hungry.", "Steve Jobs"))
//!         .await?;
//!     quotes.append(created);
//!
//!     for quote in quotes.iter() {
//!         println!("{}: {} ({})", quote.id, quote.quote, quote.person);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod collection;
mod config;
mod error;
mod http_client;
mod service;
mod traits;
mod types;

pub mod utils;

#[cfg(test)]
mod test_utils;

pub use client::HttpQuoteApi;
pub use collection::QuoteCollection;
pub use config::ClientConfig;
pub use error::{QuoteError, Result};
pub use service::QuoteService;
pub use traits::QuoteApi;
pub use types::{Quote, QuoteDraft, QuoteId, QuoteList};
