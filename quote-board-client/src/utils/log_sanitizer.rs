//! Log sanitization utilities
//!
//! Keeps response bodies and user-entered quote text from flooding the
//! debug log with multi-kilobyte or multi-line entries.

/// Maximum number of bytes of a body included in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// MSRV-compatible replacement for `str::floor_char_boundary`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a body for logging and fold it onto one line.
///
/// Bodies within the limit are returned with line breaks escaped; longer
/// ones are cut at a char boundary and suffixed with the total length.
pub fn truncate_for_log(s: &str) -> String {
    let head = if s.len() <= TRUNCATE_LIMIT {
        s
    } else {
        &s[..floor_char_boundary(s, TRUNCATE_LIMIT)]
    };
    let head = head.replace('\r', "\\r").replace('\n', "\\n");

    if s.len() <= TRUNCATE_LIMIT {
        head
    } else {
        format!("{head}... [truncated, total {} bytes]", s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        assert_eq!(truncate_for_log("42"), "42");
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.ends_with(&format!("[truncated, total {} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        // '“' is 3 bytes; 256 is not a multiple of 3
        let s = "“".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total 600 bytes]"));
    }

    #[test]
    fn line_breaks_are_escaped() {
        assert_eq!(truncate_for_log("to be\nor not"), "to be\\nor not");
    }
}
