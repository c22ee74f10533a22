/******************************************************************************
   Author: Face Log Team
   Date: 18/10/26
******************************************************************************/
use serde::{Deserialize, Serialize};

/// A page of results
///
/// `next` and `previous` are absolute URLs and can be passed straight back to
/// the request helper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Total number of items across every page
    pub count: u64,
    /// URL of the next page
    pub next: Option<String>,
    /// URL of the previous page
    pub previous: Option<String>,
    /// Items of this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Returns true if the page has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the number of items on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true when a following page exists
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns an iterator over the items of this page
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.results.iter()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

/// List endpoint body
///
/// Paginated endpoints answer `{count, next, previous, results}`; unpaginated
/// ones answer a bare array. Both shapes are accepted.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    /// Paginated envelope
    Paged(Page<T>),
    /// Bare array
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    /// Normalizes either shape into a single page
    pub fn into_page(self) -> Page<T> {
        match self {
            Listing::Paged(page) => page,
            Listing::Plain(results) => Page {
                count: results.len() as u64,
                next: None,
                previous: None,
                results,
            },
        }
    }

    /// Drops pagination metadata and keeps the items
    pub fn into_vec(self) -> Vec<T> {
        self.into_page().results
    }
}

/// Body of `POST attendance/sessions/{id}/toggle-activation/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToggleActivationResponse {
    /// Outcome marker, `success` on success
    pub status: String,
    /// Whether face recognition is now active for the session
    pub is_active: bool,
}
