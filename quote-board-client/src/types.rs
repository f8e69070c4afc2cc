//! Wire and domain types

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned quote identifier.
///
/// Opaque to the client. The server encodes ids as JSON numbers in list
/// responses and as raw text in creation responses; both forms decode to the
/// same value. Ids in canonical decimal form are written back as JSON numbers
/// so the server can decode them into its integer column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuoteId(String);

impl QuoteId {
    /// Parse an id from a raw text response body.
    ///
    /// Returns `None` when the body is blank after trimming.
    pub fn from_response_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for QuoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Serialize for QuoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Only canonical decimal text round-trips through i64; "007" stays a string.
        match self.0.parse::<i64>() {
            Ok(n) if n.to_string() == self.0 => serializer.serialize_i64(n),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for QuoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// A single quotation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub quote: String,
    pub person: String,
}

impl Quote {
    pub fn new(id: impl Into<QuoteId>, quote: impl Into<String>, person: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            quote: quote.into(),
            person: person.into(),
        }
    }

    /// Whether `other` carries the same text fields (ids are not compared).
    pub fn same_content(&self, other: &Quote) -> bool {
        self.quote == other.quote && self.person == other.person
    }
}

/// Text fields of a quote that has no id yet (creation request body).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDraft {
    pub quote: String,
    pub person: String,
}

impl QuoteDraft {
    pub fn new(quote: impl Into<String>, person: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            person: person.into(),
        }
    }

    /// Attach a server-assigned id.
    #[must_use]
    pub fn with_id(self, id: QuoteId) -> Quote {
        Quote {
            id,
            quote: self.quote,
            person: self.person,
        }
    }
}

/// `GET /quotes` response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteList {
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn list_accepts_numeric_and_text_ids() {
        let body = r#"{"quotes":[{"id":7,"quote":"a","person":"b"},{"id":"x9","quote":"c","person":"d"}]}"#;
        let list: QuoteList = serde_json::from_str(body).unwrap();
        assert_eq!(list.quotes.len(), 2);
        assert_eq!(list.quotes[0].id.as_str(), "7");
        assert_eq!(list.quotes[1].id.as_str(), "x9");
    }

    #[test]
    fn numeric_and_text_forms_are_the_same_id() {
        let from_list: Quote =
            serde_json::from_str(r#"{"id":42,"quote":"a","person":"b"}"#).unwrap();
        let from_create = QuoteId::from_response_text("42\n");
        assert_eq!(Some(from_list.id), from_create);
    }

    #[test]
    fn missing_quotes_field_is_empty_list() {
        let list: QuoteList = serde_json::from_str("{}").unwrap();
        assert!(list.quotes.is_empty());
    }

    #[test]
    fn blank_response_text_is_not_an_id() {
        assert_eq!(QuoteId::from_response_text("  \n"), None);
    }

    #[test]
    fn numeric_id_serializes_as_number() {
        let body = serde_json::to_string(&Quote::new("3", "q", "p")).unwrap();
        assert_eq!(body, r#"{"id":3,"quote":"q","person":"p"}"#);
    }

    #[test]
    fn opaque_id_serializes_as_string() {
        let body = serde_json::to_string(&Quote::new("a-1", "q", "p")).unwrap();
        assert_eq!(body, r#"{"id":"a-1","quote":"q","person":"p"}"#);
    }

    #[test]
    fn non_canonical_numeric_id_keeps_its_text() {
        for id in ["007", "+5", "-0"] {
            let body = serde_json::to_string(&QuoteId::from(id)).unwrap();
            assert_eq!(body, format!("\"{id}\""));
        }
        assert_eq!(serde_json::to_string(&QuoteId::from("-12")).unwrap(), "-12");
    }
}
