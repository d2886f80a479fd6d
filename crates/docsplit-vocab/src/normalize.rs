/// Canonicalizes text for comparison.
///
/// Whitespace runs collapse to a single space, the ends are trimmed and the
/// result is upper-cased. Applied identically to page text and vocabulary
/// strings so comparisons are symmetric.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_uppercases() {
        assert_eq!(
            normalize("  Commercial \t\n  invoice "),
            "COMMERCIAL INVOICE"
        );
    }

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\r\n "), "");
    }

    #[test]
    fn is_idempotent() {
        let once = normalize(" bill  of\u{a0}lading ");
        assert_eq!(normalize(&once), once);
        assert_eq!(once, "BILL OF LADING");
    }
}
