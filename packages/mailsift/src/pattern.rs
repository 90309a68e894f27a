//! Pattern-matching extraction pass.

use regex::Regex;

use crate::types::{Document, EmailAddress};

/// The general email grammar used by both the scanner and address
/// validation: non-empty local part, dotted domain, alphabetic TLD.
pub const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Scan every cell of the document for email addresses.
///
/// Returns matches in row-major document order, duplicates included;
/// the caller's result set collapses them.
pub fn scan_document(document: &Document) -> Vec<EmailAddress> {
    let pattern = Regex::new(EMAIL_PATTERN).unwrap();

    let mut found = Vec::new();
    for cell in document.cells() {
        for m in pattern.find_iter(cell) {
            if let Ok(address) = EmailAddress::parse(m.as_str()) {
                found.push(address);
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Document;

    fn doc(cells: Vec<Vec<&str>>) -> Document {
        Document::new(
            cells
                .into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        )
    }

    #[test]
    fn test_finds_address_inside_prose() {
        let found = scan_document(&doc(vec![vec!["contact: ada@example.com or call"]]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].as_str(), "ada@example.com");
    }

    #[test]
    fn test_multiple_addresses_in_one_cell() {
        let found = scan_document(&doc(vec![vec!["a@b.com, c@d.org"]]));
        let strings: Vec<&str> = found.iter().map(EmailAddress::as_str).collect();
        assert_eq!(strings, vec!["a@b.com", "c@d.org"]);
    }

    #[test]
    fn test_document_order() {
        let found = scan_document(&doc(vec![
            vec!["z@z.com", "no email here"],
            vec!["a@a.com"],
        ]));
        let strings: Vec<&str> = found.iter().map(EmailAddress::as_str).collect();
        assert_eq!(strings, vec!["z@z.com", "a@a.com"]);
    }

    #[test]
    fn test_ignores_non_email_text() {
        assert!(scan_document(&doc(vec![vec!["plain", "42", "@twitter"]])).is_empty());
    }

    #[test]
    fn test_no_match_without_domain_dot() {
        assert!(scan_document(&doc(vec![vec!["root@localhost"]])).is_empty());
    }
}
