//! Catalog types: wire shapes, the source trait, and errors.

use layout::placement::FurnitureTemplate;
use serde::Deserialize;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The catalog could not be reached, answered with an error status,
    /// returned an unparseable body, or did not answer in time.
    #[error("catalog unavailable: {reason}")]
    Unavailable { reason: String },

    /// The configured base URL cannot carry path segments.
    #[error("invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl CatalogError {
    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable { reason: reason.into() }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Body of `GET /categories`.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    pub(crate) categories: Vec<String>,
}

/// Body of `GET /items/{category}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemsResponse {
    pub(crate) items: Vec<FurnitureTemplate>,
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Anything that can answer catalog queries. Enables mocking in tests.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// All category names.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] on any retrieval failure.
    async fn list_categories(&self) -> Result<Vec<String>, CatalogError>;

    /// Templates in `category`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] on any retrieval failure.
    async fn list_items(&self, category: &str) -> Result<Vec<FurnitureTemplate>, CatalogError>;
}
