#![allow(clippy::float_cmp)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

// =============================================================================
// MOCK SOURCE
// =============================================================================

#[derive(Default)]
struct MockCatalog {
    delays_ms: HashMap<String, u64>,
    failing: Vec<String>,
    calls: AtomicUsize,
}

impl MockCatalog {
    fn delay(mut self, category: &str, ms: u64) -> Self {
        self.delays_ms.insert(category.to_owned(), ms);
        self
    }

    fn failing(mut self, category: &str) -> Self {
        self.failing.push(category.to_owned());
        self
    }
}

fn template(name: &str) -> FurnitureTemplate {
    FurnitureTemplate {
        name: name.to_owned(),
        width: 80.0,
        height: 40.0,
        depth: 30.0,
        description: String::new(),
    }
}

#[async_trait::async_trait]
impl CatalogSource for MockCatalog {
    async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ms) = self.delays_ms.get("*categories*") {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
        Ok(vec!["Bedroom".into(), "Living Room".into()])
    }

    async fn list_items(&self, category: &str) -> Result<Vec<FurnitureTemplate>, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ms) = self.delays_ms.get(category) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
        if self.failing.iter().any(|c| c == category) {
            return Err(CatalogError::unavailable("HTTP 503"));
        }
        Ok(vec![template(&format!("{category} Item"))])
    }
}

const LIMIT: Duration = Duration::from_secs(5);

fn names(browser: &CatalogBrowser) -> Vec<String> {
    browser.items().iter().map(|t| t.name.clone()).collect()
}

// =============================================================================
// REQUEST SLOT
// =============================================================================

#[test]
fn slot_only_latest_generation_is_current() {
    let mut slot = RequestSlot::default();
    let first = slot.issue();
    let second = slot.issue();
    assert!(!slot.is_current(first));
    assert!(slot.is_current(second));
}

// =============================================================================
// CATEGORIES
// =============================================================================

#[tokio::test]
async fn categories_fetch_applies_list() {
    let source = MockCatalog::default();
    let mut browser = CatalogBrowser::new();
    let req = browser.request_categories();
    let (req, result) = fetch_categories(&source, req, LIMIT).await;
    assert_eq!(browser.apply_categories(req, result), FetchOutcome::Applied);
    assert_eq!(browser.categories(), ["Bedroom".to_owned(), "Living Room".to_owned()]);
}

#[test]
fn categories_failure_shows_empty_list() {
    let mut browser = CatalogBrowser::new();
    let first = browser.request_categories();
    browser.apply_categories(first, Ok(vec!["Office".into()]));
    let second = browser.request_categories();
    let outcome = browser.apply_categories(second, Err(CatalogError::unavailable("down")));
    assert_eq!(outcome, FetchOutcome::Failed);
    assert!(browser.categories().is_empty());
}

#[test]
fn categories_superseded_response_is_stale() {
    let mut browser = CatalogBrowser::new();
    let old = browser.request_categories();
    let new = browser.request_categories();
    assert_eq!(browser.apply_categories(new, Ok(vec!["New".into()])), FetchOutcome::Applied);
    assert_eq!(browser.apply_categories(old, Ok(vec!["Old".into()])), FetchOutcome::Stale);
    assert_eq!(browser.categories(), ["New".to_owned()]);
}

// =============================================================================
// ITEMS
// =============================================================================

#[test]
fn select_category_clears_items_until_response() {
    let mut browser = CatalogBrowser::new();
    let req = browser.select_category("Bedroom");
    browser.apply_items(&req, Ok(vec![template("Bed")]));
    assert_eq!(names(&browser), ["Bed"]);

    let _next = browser.select_category("Office");
    assert!(browser.items().is_empty());
    assert_eq!(browser.selected_category(), Some("Office"));
}

#[test]
fn items_response_for_previous_category_is_stale() {
    let mut browser = CatalogBrowser::new();
    let a = browser.select_category("A");
    let b = browser.select_category("B");
    assert_eq!(browser.apply_items(&b, Ok(vec![template("B Item")])), FetchOutcome::Applied);
    assert_eq!(browser.apply_items(&a, Ok(vec![template("A Item")])), FetchOutcome::Stale);
    assert_eq!(names(&browser), ["B Item"]);
}

#[test]
fn reselecting_same_category_ignores_earlier_request() {
    let mut browser = CatalogBrowser::new();
    let first_a = browser.select_category("A");
    let _b = browser.select_category("B");
    let second_a = browser.select_category("A");

    // Same category, but superseded by a newer request for it.
    assert_eq!(browser.apply_items(&first_a, Ok(vec![template("old")])), FetchOutcome::Stale);
    assert!(browser.items().is_empty());

    assert_eq!(browser.apply_items(&second_a, Ok(vec![template("new")])), FetchOutcome::Applied);
    assert_eq!(names(&browser), ["new"]);
}

#[test]
fn items_failure_clears_list() {
    let mut browser = CatalogBrowser::new();
    let req = browser.select_category("Kitchen");
    let outcome = browser.apply_items(&req, Err(CatalogError::unavailable("HTTP 500")));
    assert_eq!(outcome, FetchOutcome::Failed);
    assert!(browser.items().is_empty());
    assert_eq!(browser.selected_category(), Some("Kitchen"));
}

#[test]
fn stale_failure_does_not_clear_current_items() {
    let mut browser = CatalogBrowser::new();
    let a = browser.select_category("A");
    let b = browser.select_category("B");
    browser.apply_items(&b, Ok(vec![template("B Item")]));
    assert_eq!(browser.apply_items(&a, Err(CatalogError::unavailable("late"))), FetchOutcome::Stale);
    assert_eq!(names(&browser), ["B Item"]);
}

#[test]
fn item_lookup_by_name() {
    let mut browser = CatalogBrowser::new();
    let req = browser.select_category("Bedroom");
    browser.apply_items(&req, Ok(vec![template("Bed"), template("Dresser")]));
    assert_eq!(browser.item("Dresser").map(|t| t.width), Some(80.0));
    assert!(browser.item("Sofa").is_none());
}

// =============================================================================
// CONCURRENT FETCHES
// =============================================================================

#[tokio::test]
async fn slow_first_category_loses_to_fast_second() {
    let source = MockCatalog::default().delay("A", 200).delay("B", 10);
    let mut browser = CatalogBrowser::new();

    let a = browser.select_category("A");
    let b = browser.select_category("B");

    let (fast, slow) = tokio::join!(fetch_items(&source, b, LIMIT), fetch_items(&source, a, LIMIT));

    // B arrives first and is applied; A arrives later and must not overwrite it.
    assert_eq!(browser.apply_items(&fast.0, fast.1), FetchOutcome::Applied);
    assert_eq!(browser.apply_items(&slow.0, slow.1), FetchOutcome::Stale);
    assert_eq!(names(&browser), ["B Item"]);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn responses_applied_in_arrival_order() {
    let source = Arc::new(MockCatalog::default().delay("A", 150).delay("B", 10));
    let browser = Arc::new(std::sync::Mutex::new(CatalogBrowser::new()));

    let a = browser.lock().unwrap().select_category("A");
    let b = browser.lock().unwrap().select_category("B");

    let spawn = |req: ItemsRequest| {
        let source = Arc::clone(&source);
        let browser = Arc::clone(&browser);
        tokio::spawn(async move {
            let (req, result) = fetch_items(source.as_ref(), req, LIMIT).await;
            browser.lock().unwrap().apply_items(&req, result)
        })
    };
    let slow = spawn(a);
    let fast = spawn(b);

    assert_eq!(fast.await.unwrap(), FetchOutcome::Applied);
    assert_eq!(slow.await.unwrap(), FetchOutcome::Stale);
    assert_eq!(names(&browser.lock().unwrap()), ["B Item"]);
}

#[tokio::test]
async fn failing_source_yields_failed_outcome() {
    let source = MockCatalog::default().failing("Garage");
    let mut browser = CatalogBrowser::new();
    let req = browser.select_category("Garage");
    let (req, result) = fetch_items(&source, req, LIMIT).await;
    assert!(matches!(result, Err(CatalogError::Unavailable { .. })));
    assert_eq!(browser.apply_items(&req, result), FetchOutcome::Failed);
    assert!(browser.items().is_empty());
}

#[tokio::test]
async fn fetch_exceeding_limit_is_unavailable() {
    let source = MockCatalog::default().delay("Attic", 500);
    let mut browser = CatalogBrowser::new();
    let req = browser.select_category("Attic");
    let (req, result) = fetch_items(&source, req, Duration::from_millis(20)).await;
    match &result {
        Err(CatalogError::Unavailable { reason }) => assert!(reason.contains("timed out"), "{reason}"),
        other => panic!("expected timeout, got {other:?}"),
    }
    assert_eq!(browser.apply_items(&req, result), FetchOutcome::Failed);
}

#[tokio::test]
async fn categories_fetch_exceeding_limit_is_unavailable() {
    let source = MockCatalog::default().delay("*categories*", 500);
    let mut browser = CatalogBrowser::new();
    let req = browser.request_categories();
    let (req, result) = fetch_categories(&source, req, Duration::from_millis(20)).await;
    assert!(matches!(result, Err(CatalogError::Unavailable { .. })));
    assert_eq!(browser.apply_categories(req, result), FetchOutcome::Failed);
}
