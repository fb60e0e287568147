//! Catalog: read-only access to the furniture catalog service.
//!
//! DESIGN
//! ======
//! [`CatalogSource`] is the seam: [`client::CatalogClient`] implements it
//! over HTTP, tests implement it in memory. [`browser::CatalogBrowser`] holds
//! what the planner page displays and decides which responses may update it.
//!
//! ERROR HANDLING
//! ==============
//! Every network, status, parse or timeout failure collapses into
//! [`CatalogError::Unavailable`]. The browser logs it and shows an empty list;
//! nothing retries. Responses for a category the user has since left are
//! discarded without logging.

pub mod browser;
pub mod client;
pub mod types;

pub use browser::{CatalogBrowser, CategoriesRequest, FetchOutcome, ItemsRequest, fetch_categories, fetch_items};
pub use client::CatalogClient;
pub use types::{CatalogError, CatalogSource};
