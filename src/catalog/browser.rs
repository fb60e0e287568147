//! Catalog browser: the category and item lists the planner displays.
//!
//! DESIGN
//! ======
//! Fetches are never cancelled. Switching category while a fetch is in
//! flight leaves that fetch running, so each request is tagged at issue time
//! with a generation number from its [`RequestSlot`]. A response is applied
//! only if its generation is still the latest issued for that slot and, for
//! items, its category is still the selected one. Everything else is stale
//! and dropped silently.

use std::time::Duration;

use layout::placement::FurnitureTemplate;
use tracing::{debug, warn};

use super::types::{CatalogError, CatalogSource};

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Monotonic request counter for one kind of fetch.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSlot {
    latest: u64,
}

impl RequestSlot {
    /// Issue the next generation number.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `generation` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }
}

/// Ticket for an outstanding category-list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoriesRequest {
    pub generation: u64,
}

/// Ticket for an outstanding item fetch, keyed by the category it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsRequest {
    pub generation: u64,
    pub category: String,
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the displayed list.
    Applied,
    /// The fetch failed; the displayed list is now empty.
    Failed,
    /// A newer request superseded this one; nothing changed.
    Stale,
}

/// Displayed catalog state.
#[derive(Debug, Default)]
pub struct CatalogBrowser {
    categories: Vec<String>,
    categories_slot: RequestSlot,
    selected: Option<String>,
    items: Vec<FurnitureTemplate>,
    items_slot: RequestSlot,
}

impl CatalogBrowser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a category-list fetch.
    pub fn request_categories(&mut self) -> CategoriesRequest {
        CategoriesRequest { generation: self.categories_slot.issue() }
    }

    /// Apply the result of a category-list fetch.
    pub fn apply_categories(
        &mut self,
        request: CategoriesRequest,
        result: Result<Vec<String>, CatalogError>,
    ) -> FetchOutcome {
        if !self.categories_slot.is_current(request.generation) {
            return FetchOutcome::Stale;
        }
        match result {
            Ok(categories) => {
                debug!(count = categories.len(), "catalog categories applied");
                self.categories = categories;
                FetchOutcome::Applied
            }
            Err(e) => {
                warn!(error = %e, "catalog category fetch failed");
                self.categories.clear();
                FetchOutcome::Failed
            }
        }
    }

    /// Select `category` and start fetching its items. The displayed items
    /// are cleared until the matching response arrives.
    pub fn select_category(&mut self, category: impl Into<String>) -> ItemsRequest {
        let category = category.into();
        self.selected = Some(category.clone());
        self.items.clear();
        ItemsRequest { generation: self.items_slot.issue(), category }
    }

    /// Apply the result of an item fetch.
    pub fn apply_items(
        &mut self,
        request: &ItemsRequest,
        result: Result<Vec<FurnitureTemplate>, CatalogError>,
    ) -> FetchOutcome {
        if !self.items_slot.is_current(request.generation) || self.selected.as_deref() != Some(&request.category) {
            return FetchOutcome::Stale;
        }
        match result {
            Ok(items) => {
                debug!(category = %request.category, count = items.len(), "catalog items applied");
                self.items = items;
                FetchOutcome::Applied
            }
            Err(e) => {
                warn!(category = %request.category, error = %e, "catalog item fetch failed");
                self.items.clear();
                FetchOutcome::Failed
            }
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn items(&self) -> &[FurnitureTemplate] {
        &self.items
    }

    /// Look up a displayed template by name.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&FurnitureTemplate> {
        self.items.iter().find(|t| t.name == name)
    }
}

/// Run a category-list fetch, bounded by `limit`.
pub async fn fetch_categories<S: CatalogSource + ?Sized>(
    source: &S,
    request: CategoriesRequest,
    limit: Duration,
) -> (CategoriesRequest, Result<Vec<String>, CatalogError>) {
    let result = match tokio::time::timeout(limit, source.list_categories()).await {
        Ok(result) => result,
        Err(_) => Err(timed_out(limit)),
    };
    (request, result)
}

/// Run an item fetch for the request's category, bounded by `limit`.
pub async fn fetch_items<S: CatalogSource + ?Sized>(
    source: &S,
    request: ItemsRequest,
    limit: Duration,
) -> (ItemsRequest, Result<Vec<FurnitureTemplate>, CatalogError>) {
    let result = match tokio::time::timeout(limit, source.list_items(&request.category)).await {
        Ok(result) => result,
        Err(_) => Err(timed_out(limit)),
    };
    (request, result)
}

fn timed_out(limit: Duration) -> CatalogError {
    CatalogError::unavailable(format!("timed out after {}ms", limit.as_millis()))
}
