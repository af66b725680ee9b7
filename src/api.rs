//! Character API Client
//!
//! One wrapper per remote operation, returning `Result` so failures reach the
//! caller as values instead of escaping the event handler.

use gloo_net::http::Request;
use thiserror::Error;

use crate::models::{CharacterPage, CharacterRecord};

/// Base URL of the character API
pub const API_BASE: &str = "https://narutodb.xyz/api";

/// Records requested per page; also drives the has-more heuristic
pub const PAGE_SIZE: usize = 15;

/// Failure classes of a page fetch
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Caller asked for a page the API does not define
    #[error("invalid page number {0}: pages start at 1")]
    InvalidPage(u32),
    /// Transport-level failure (network down, CORS, aborted)
    #[error("request failed: {0}")]
    Request(String),
    /// Server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),
    /// Body was not the expected JSON envelope
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Build the page request URL
///
/// Kept separate from the fetch so the query contract is testable.
pub fn page_url(base: &str, page: u32) -> String {
    format!(
        "{}/character?page={}&limit={}",
        base.trim_end_matches('/'),
        page,
        PAGE_SIZE
    )
}

/// Reject page numbers below the first page at the fetch boundary,
/// not only via disabled buttons.
pub fn validate_page(page: u32) -> Result<(), ApiError> {
    if page < 1 {
        return Err(ApiError::InvalidPage(page));
    }
    Ok(())
}

/// Fetch one page of characters
///
/// Issues exactly one `GET /character?page=<page>&limit=15` and returns the
/// envelope's character list.
pub async fn fetch_characters(page: u32) -> Result<Vec<CharacterRecord>, ApiError> {
    validate_page(page)?;

    let url = page_url(API_BASE, page);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let envelope: CharacterPage = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(envelope.characters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_query_parameters() {
        assert_eq!(
            page_url("https://narutodb.xyz/api", 1),
            "https://narutodb.xyz/api/character?page=1&limit=15"
        );
        assert_eq!(
            page_url("https://narutodb.xyz/api", 42),
            "https://narutodb.xyz/api/character?page=42&limit=15"
        );
    }

    #[test]
    fn test_page_url_trims_trailing_slash() {
        assert_eq!(
            page_url("https://narutodb.xyz/api/", 2),
            "https://narutodb.xyz/api/character?page=2&limit=15"
        );
    }

    #[test]
    fn test_validate_page_rejects_zero() {
        assert_eq!(validate_page(0), Err(ApiError::InvalidPage(0)));
    }

    #[test]
    fn test_validate_page_accepts_first_and_beyond() {
        assert_eq!(validate_page(1), Ok(()));
        assert_eq!(validate_page(95), Ok(()));
    }
}
