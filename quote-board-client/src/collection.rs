//! Canonical in-memory quote list

use std::collections::HashSet;

use crate::types::{Quote, QuoteId};

/// Ordered list of quotes with unique ids.
///
/// This is the single source of truth a UI container renders from. Records
/// only enter it from server responses, so the client never invents an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteCollection {
    quotes: Vec<Quote>,
}

impl QuoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a server listing.
    ///
    /// Later duplicates of an id are dropped; the first occurrence wins.
    pub fn replace_all(&mut self, quotes: Vec<Quote>) {
        let mut seen = HashSet::with_capacity(quotes.len());
        let mut unique = Vec::with_capacity(quotes.len());

        for quote in quotes {
            if seen.insert(quote.id.clone()) {
                unique.push(quote);
            } else {
                log::warn!("Server listing contains duplicate id {}, dropping it", quote.id);
            }
        }

        self.quotes = unique;
    }

    /// Append a newly created record.
    ///
    /// If the id is already present the existing record is overwritten in
    /// place instead.
    pub fn append(&mut self, quote: Quote) {
        if let Some(existing) = self.quotes.iter_mut().find(|q| q.id == quote.id) {
            log::warn!("Created id {} already present locally, replacing it", quote.id);
            *existing = quote;
        } else {
            self.quotes.push(quote);
        }
    }

    /// Remove the record with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &QuoteId) -> bool {
        let before = self.quotes.len();
        self.quotes.retain(|q| &q.id != id);
        self.quotes.len() != before
    }

    /// Overwrite the fields of the record with the same id.
    ///
    /// Returns `false` (and changes nothing) when the id is not present, so a
    /// late update cannot resurrect a deleted record.
    pub fn apply_update(&mut self, quote: &Quote) -> bool {
        match self.quotes.iter_mut().find(|q| q.id == quote.id) {
            Some(existing) => {
                existing.quote.clone_from(&quote.quote);
                existing.person.clone_from(&quote.person);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &QuoteId) -> Option<&Quote> {
        self.quotes.iter().find(|q| &q.id == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    pub fn position(&self, id: &QuoteId) -> Option<usize> {
        self.quotes.iter().position(|q| &q.id == id)
    }

    pub fn contains(&self, id: &QuoteId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuoteCollection {
        let mut c = QuoteCollection::new();
        c.replace_all(vec![
            Quote::new("1", "one", "Ann"),
            Quote::new("2", "two", "Bob"),
            Quote::new("3", "three", "Cy"),
        ]);
        c
    }

    #[test]
    fn replace_all_is_wholesale() {
        let mut c = sample();
        c.replace_all(vec![Quote::new("9", "nine", "Zed")]);
        assert_eq!(c.as_slice(), &[Quote::new("9", "nine", "Zed")]);
    }

    #[test]
    fn replace_all_drops_duplicate_ids() {
        let mut c = QuoteCollection::new();
        c.replace_all(vec![
            Quote::new("1", "first", "a"),
            Quote::new("1", "second", "b"),
        ]);
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(&QuoteId::from("1")).map(|q| q.quote.as_str()), Some("first"));
    }

    #[test]
    fn append_adds_exactly_one_record_at_the_end() {
        let mut c = sample();
        let before = c.clone();
        c.append(Quote::new("42", "a", "b"));

        assert_eq!(c.len(), before.len() + 1);
        assert_eq!(&c.as_slice()[..before.len()], before.as_slice());
        assert_eq!(c.as_slice().last(), Some(&Quote::new("42", "a", "b")));
    }

    #[test]
    fn append_with_known_id_replaces_in_place() {
        let mut c = sample();
        c.append(Quote::new("2", "again", "Bob"));
        assert_eq!(c.len(), 3);
        assert_eq!(c.position(&QuoteId::from("2")), Some(1));
        assert_eq!(c.get_index(1).map(|q| q.quote.as_str()), Some("again"));
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut c = sample();
        assert!(c.remove(&QuoteId::from("2")));
        let ids: Vec<_> = c.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn removing_twice_is_a_no_op() {
        let mut c = sample();
        c.remove(&QuoteId::from("2"));
        let after_first = c.clone();
        assert!(!c.remove(&QuoteId::from("2")));
        assert_eq!(c, after_first);
    }

    #[test]
    fn apply_update_touches_only_the_target() {
        let mut c = sample();
        assert!(c.apply_update(&Quote::new("2", "x", "y")));
        assert_eq!(
            c.as_slice(),
            &[
                Quote::new("1", "one", "Ann"),
                Quote::new("2", "x", "y"),
                Quote::new("3", "three", "Cy"),
            ]
        );
    }

    #[test]
    fn apply_update_on_missing_id_does_not_resurrect() {
        let mut c = sample();
        c.remove(&QuoteId::from("2"));
        assert!(!c.apply_update(&Quote::new("2", "x", "y")));
        assert!(!c.contains(&QuoteId::from("2")));
        assert_eq!(c.len(), 2);
    }
}
