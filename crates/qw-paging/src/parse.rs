#![forbid(unsafe_code)]

//! Route-boundary coercion of page numbers.
//!
//! Listing routes carry the page number as a path segment
//! (`/quotes/page/{n}`), so it arrives as an untrusted string. Coercion
//! happens here, at the boundary, keeping the planner itself purely
//! numeric.

/// Parse a raw route segment into a usable 1-based page number.
///
/// Anything that is not a positive integer (garbage, empty, zero,
/// negative) becomes page 1. Values above `total_pages`, including ones
/// too large for `u64`, clamp to the last page. When `total_pages` is 0
/// the result is 1, matching the "page 1 of an empty listing" rendering
/// state.
pub fn parse_page_number(raw: &str, total_pages: u64) -> u64 {
    let parsed = match raw.trim().parse::<u64>() {
        Ok(n) => n.max(1),
        Err(e) if *e.kind() == std::num::IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 1,
    };
    parsed.min(total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_passes_through() {
        assert_eq!(parse_page_number("3", 10), 3);
        assert_eq!(parse_page_number("1", 10), 1);
        assert_eq!(parse_page_number("10", 10), 10);
    }

    #[test]
    fn garbage_becomes_first_page() {
        assert_eq!(parse_page_number("abc", 10), 1);
        assert_eq!(parse_page_number("3abc", 10), 1);
        assert_eq!(parse_page_number("", 10), 1);
        assert_eq!(parse_page_number("  ", 10), 1);
    }

    #[test]
    fn zero_and_negative_become_first_page() {
        assert_eq!(parse_page_number("0", 10), 1);
        assert_eq!(parse_page_number("-4", 10), 1);
    }

    #[test]
    fn above_total_clamps_to_last_page() {
        assert_eq!(parse_page_number("99", 10), 10);
    }

    #[test]
    fn empty_listing_yields_page_one() {
        assert_eq!(parse_page_number("7", 0), 1);
        assert_eq!(parse_page_number("nope", 0), 1);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(parse_page_number(" 4 ", 10), 4);
    }

    #[test]
    fn huge_numbers_clamp_instead_of_overflowing() {
        assert_eq!(parse_page_number("99999999999999999999999999", 10), 10);
        assert_eq!(parse_page_number(&u64::MAX.to_string(), 10), 10);
    }
}
