//! Pagination Logic
//!
//! Pure helpers behind the pager controls: page cursor arithmetic, the
//! button-disable rules, the stale-response guard, and the settlement rules
//! for a finished fetch.

use crate::api::{ApiError, PAGE_SIZE};
use crate::models::CharacterRecord;

/// The lowest page the API defines
pub const FIRST_PAGE: u32 = 1;

/// Current page position
///
/// `next`/`prev` compute the target of a navigation click; `prev` saturates at
/// the first page so a programmatic call can never produce a page-0 request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor(pub u32);

impl PageCursor {
    pub fn next(self) -> u32 {
        self.0 + 1
    }

    pub fn prev(self) -> u32 {
        self.0.max(FIRST_PAGE + 1) - 1
    }
}

/// Previous is meaningful on every page but the first
pub fn has_prev(page: u32) -> bool {
    page > FIRST_PAGE
}

/// A short page implies there is nothing after it
///
/// Heuristic: misjudges a last page that happens to be exactly full, but the
/// envelope carries no total count to do better with.
pub fn has_next(count: usize) -> bool {
    count >= PAGE_SIZE
}

/// Whether a settling fetch may update the view
///
/// Each dispatch tags its target page; a response is applied only if its tag
/// still matches the latest dispatch, so overlapping fetches can't let an old
/// page overwrite a newer one.
pub fn is_latest(response_page: u32, requested_page: u32) -> bool {
    response_page == requested_page
}

/// What a finished fetch does to the view
///
/// Derived from the fetch result and the dispatch tags, so the rules stay
/// testable outside the component.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// A newer dispatch superseded this one; leave the view alone
    Stale,
    /// Replace the character list wholesale and show the target page
    Apply {
        page: u32,
        characters: Vec<CharacterRecord>,
    },
    /// Keep the current list, surface the failure
    Fail { message: String },
}

impl Settlement {
    /// The loading placeholder stays up only while a newer dispatch is
    /// still in flight
    pub fn still_loading(&self) -> bool {
        matches!(self, Settlement::Stale)
    }
}

/// Decide how a settled fetch updates the view
pub fn settle(
    result: Result<Vec<CharacterRecord>, ApiError>,
    target: u32,
    requested: u32,
) -> Settlement {
    if !is_latest(target, requested) {
        return Settlement::Stale;
    }
    match result {
        Ok(characters) => Settlement::Apply {
            page: target,
            characters,
        },
        Err(e) => Settlement::Fail {
            message: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(id: u64) -> CharacterRecord {
        CharacterRecord {
            id,
            name: format!("Character {}", id),
            images: Vec::new(),
            debut: None,
            personal: None,
        }
    }

    #[test]
    fn test_cursor_next_and_prev() {
        assert_eq!(PageCursor(1).next(), 2);
        assert_eq!(PageCursor(2).prev(), 1);
        assert_eq!(PageCursor(5).next(), 6);
        assert_eq!(PageCursor(5).prev(), 4);
    }

    #[test]
    fn test_cursor_prev_saturates_at_first_page() {
        assert_eq!(PageCursor(1).prev(), 1);
    }

    #[test]
    fn test_prev_disabled_only_on_first_page() {
        assert!(!has_prev(1));
        assert!(has_prev(2));
        assert!(has_prev(96));
    }

    #[test]
    fn test_next_follows_full_page_heuristic() {
        // A full page of 15 means there may be more
        assert!(has_next(15));
        // Anything short means this was the last page
        assert!(!has_next(14));
        assert!(!has_next(7));
        assert!(!has_next(0));
    }

    #[test]
    fn test_initial_mount_scenarios() {
        // 15 characters on page 1: Next enabled, Previous disabled
        assert!(has_next(15));
        assert!(!has_prev(1));
        // 7 characters on page 1: both disabled
        assert!(!has_next(7));
        assert!(!has_prev(1));
    }

    #[test]
    fn test_stale_responses_are_discarded() {
        // User clicked through to page 3 while page 2 was still in flight
        assert!(!is_latest(2, 3));
        assert!(is_latest(3, 3));
    }

    #[test]
    fn test_successful_settlement_replaces_list_wholesale() {
        let fresh = vec![make_record(3), make_record(4)];
        let settlement = settle(Ok(fresh.clone()), 2, 2);
        // Loading clears, the new list stands alone (no merge with the old one)
        assert!(!settlement.still_loading());
        assert_eq!(
            settlement,
            Settlement::Apply {
                page: 2,
                characters: fresh,
            }
        );
    }

    #[test]
    fn test_failed_settlement_surfaces_message_and_clears_loading() {
        let settlement = settle(Err(ApiError::Status(503)), 2, 2);
        assert!(!settlement.still_loading());
        assert_eq!(
            settlement,
            Settlement::Fail {
                message: "server returned status 503".to_string(),
            }
        );
    }

    #[test]
    fn test_superseded_settlement_leaves_view_alone() {
        // Response for page 2 lands after page 3 was already dispatched
        let settlement = settle(Ok(vec![make_record(1)]), 2, 3);
        assert_eq!(settlement, Settlement::Stale);
        assert!(settlement.still_loading());
    }
}
