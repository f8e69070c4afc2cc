//! reqwest implementation of [`QuoteApi`]

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::config::ClientConfig;
use crate::error::{QuoteError, Result};
use crate::http_client::HttpUtils;
use crate::traits::QuoteApi;
use crate::types::{Quote, QuoteDraft, QuoteId, QuoteList};

/// Accept header sent with every request.
const ACCEPT_ANY: &str = "application/json, text/plain, */*";

/// Quote service client over HTTP.
pub struct HttpQuoteApi {
    client: Client,
    config: ClientConfig,
}

impl HttpQuoteApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_ANY));

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| QuoteError::InvalidConfig {
                detail: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn quote_path(id: &QuoteId) -> String {
        format!("quotes/{}", urlencoding::encode(id.as_str()))
    }
}

#[async_trait]
impl QuoteApi for HttpQuoteApi {
    async fn list_quotes(&self) -> Result<Vec<Quote>> {
        let url = self.config.endpoint("quotes")?;
        let request = self.client.get(url.clone());
        let body = HttpUtils::execute_request_with_retry(
            request,
            "GET",
            url.as_str(),
            self.config.max_retries,
        )
        .await?;

        let list: QuoteList = HttpUtils::parse_json(&body)?;
        Ok(list.quotes)
    }

    async fn create_quote(&self, draft: &QuoteDraft) -> Result<QuoteId> {
        let url = self.config.endpoint("quotes")?;
        let request = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(draft);
        let body = HttpUtils::execute_request(request, "POST", url.as_str()).await?;

        QuoteId::from_response_text(&body)
            .ok_or_else(|| QuoteError::parse("creation response did not contain an id"))
    }

    async fn update_quote(&self, quote: &Quote) -> Result<Option<Quote>> {
        let url = self.config.endpoint(&Self::quote_path(&quote.id))?;
        let request = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(quote);
        let body = HttpUtils::execute_request(request, "POST", url.as_str()).await?;

        Ok(parse_update_echo(&body, &quote.id))
    }

    async fn delete_quote(&self, id: &QuoteId) -> Result<()> {
        let url = self.config.endpoint(&Self::quote_path(id))?;
        let request = self.client.delete(url.clone());
        HttpUtils::execute_request(request, "DELETE", url.as_str()).await?;
        Ok(())
    }

    async fn random_quote(&self) -> Result<String> {
        let url = self.config.endpoint("quotes/random")?;
        let request = self.client.get(url.clone());
        let body = HttpUtils::execute_request_with_retry(
            request,
            "GET",
            url.as_str(),
            self.config.max_retries,
        )
        .await?;

        Ok(body.trim().to_string())
    }
}

/// Interpret an update response body.
///
/// The body is only trusted when it is a JSON record for the same id; an
/// empty body or anything else means "no echo".
fn parse_update_echo(body: &str, id: &QuoteId) -> Option<Quote> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Quote>(body) {
        Ok(echo) if &echo.id == id => Some(echo),
        Ok(echo) => {
            log::warn!("Update echo for {id} carried id {}, ignoring it", echo.id);
            None
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_body_is_no_echo() {
        assert_eq!(parse_update_echo("", &QuoteId::from("1")), None);
    }

    #[test]
    fn matching_echo_is_used() {
        let echo = parse_update_echo(
            r#"{"id":1,"quote":"stored","person":"server"}"#,
            &QuoteId::from("1"),
        );
        assert_eq!(echo, Some(Quote::new("1", "stored", "server")));
    }

    #[test]
    fn echo_for_another_id_is_ignored() {
        let echo = parse_update_echo(
            r#"{"id":2,"quote":"stored","person":"server"}"#,
            &QuoteId::from("1"),
        );
        assert_eq!(echo, None);
    }

    #[test]
    fn non_json_body_is_ignored() {
        assert_eq!(parse_update_echo("OK", &QuoteId::from("1")), None);
    }

    #[test]
    fn ids_are_percent_encoded_in_paths() {
        assert_eq!(
            HttpQuoteApi::quote_path(&QuoteId::from("a b/c")),
            "quotes/a%20b%2Fc"
        );
    }
}
