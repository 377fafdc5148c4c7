//! View Controller Tests
//!
//! Drives the controller against an in-process `CatalogApi` double that
//! runs the real resolvers over a real store, with a switch to simulate
//! the endpoint being unreachable:
//! - Success paths re-render the grid and confirm with a message
//! - Failure paths leave the data and forms as they were, plus an error
//! - The edit modal opens on lookup, survives a failed save, and closes
//!   on a successful one
//! - Deletes are a no-op without confirmation
//! - Messages expire on the tick after their delay elapses

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use shelfql::client::{CatalogApi, ClientError, ClientResult};
use shelfql::graphql::SortOrder;
use shelfql::resolver::{ResolverError, Resolvers};
use shelfql::store::{Product, ProductDraft, ProductPatch, ProductStore};
use shelfql::view::{
    AddForm, EditForm, MessageKind, SortSelection, ViewController, MESSAGE_TTL,
};

// =============================================================================
// In-Process API Double
// =============================================================================

/// Runs the real resolvers in place of the HTTP round trip. Flipping
/// the shared switch makes every call fail as a transport error.
struct InProcessApi {
    resolvers: Resolvers,
    down: Arc<AtomicBool>,
}

/// Test handle that simulates the endpoint going unreachable.
#[derive(Clone)]
struct NetSwitch {
    down: Arc<AtomicBool>,
}

impl NetSwitch {
    fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::Relaxed);
    }
}

impl InProcessApi {
    fn new() -> (Arc<ProductStore>, NetSwitch, Self) {
        let store = Arc::new(ProductStore::new());
        let down = Arc::new(AtomicBool::new(false));
        let api = Self {
            resolvers: Resolvers::new(store.clone()),
            down: down.clone(),
        };
        (store, NetSwitch { down }, api)
    }

    fn check_up(&self) -> ClientResult<()> {
        if self.down.load(Ordering::Relaxed) {
            Err(ClientError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

fn to_client(err: ResolverError) -> ClientError {
    ClientError::Server(err.message().to_string())
}

#[async_trait]
impl CatalogApi for InProcessApi {
    async fn products(&self) -> ClientResult<Vec<Product>> {
        self.check_up()?;
        self.resolvers.products().map_err(to_client)
    }

    async fn product(&self, id: &str) -> ClientResult<Option<Product>> {
        self.check_up()?;
        self.resolvers.product(id).map_err(to_client)
    }

    async fn sorted_products(
        &self,
        field: &str,
        order: SortOrder,
    ) -> ClientResult<Vec<Product>> {
        self.check_up()?;
        self.resolvers.sorted_products(field, order).map_err(to_client)
    }

    async fn add_product(&self, draft: &ProductDraft) -> ClientResult<Product> {
        self.check_up()?;
        self.resolvers.add_product(draft.clone()).map_err(to_client)
    }

    async fn update_product(&self, id: &str, patch: &ProductPatch) -> ClientResult<Product> {
        self.check_up()?;
        self.resolvers.update_product(id, patch).map_err(to_client)
    }

    async fn delete_product(&self, id: &str) -> ClientResult<bool> {
        self.check_up()?;
        self.resolvers.delete_product(id).map_err(to_client)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn draft(title: &str, price: f64) -> ProductDraft {
    ProductDraft {
        title: title.to_string(),
        category: "Office".to_string(),
        price,
        in_stock: true,
    }
}

fn add_form(title: &str, price: f64) -> AddForm {
    AddForm {
        title: title.to_string(),
        category: "Office".to_string(),
        price,
        in_stock: true,
    }
}

fn last_message(controller: &ViewController<InProcessApi>) -> (&str, MessageKind) {
    let message = controller.state().messages.last().unwrap();
    (message.text.as_str(), message.kind)
}

// =============================================================================
// Load Tests
// =============================================================================

/// Startup load renders the grid and clears the loading flag.
#[tokio::test]
async fn test_load_renders_grid() {
    let (store, _net, api) = InProcessApi::new();
    store.seed(vec![draft("Pen", 1.5), draft("Notebook", 4.0)]).unwrap();
    let mut controller = ViewController::new(api);

    controller.load(None).await;

    let state = controller.state();
    assert!(!state.loading);
    assert!(state.grid_html.contains("Pen"));
    assert!(state.grid_html.contains("Notebook"));
    assert!(state.grid_html.contains("$1.50"));
    assert!(state.messages.is_empty());
}

/// An empty catalog renders the empty-state placeholder.
#[tokio::test]
async fn test_load_empty_catalog_shows_placeholder() {
    let (_store, _net, api) = InProcessApi::new();
    let mut controller = ViewController::new(api);

    controller.load(None).await;

    assert!(controller.state().grid_html.contains("No products found"));
}

/// A sorted load renders in the requested order.
#[tokio::test]
async fn test_load_sorted_by_price_desc() {
    let (store, _net, api) = InProcessApi::new();
    store
        .seed(vec![draft("A", 10.0), draft("B", 5.0), draft("C", 20.0)])
        .unwrap();
    let mut controller = ViewController::new(api);

    let selection = SortSelection {
        field: "price".to_string(),
        order: SortOrder::Desc,
    };
    controller.load(Some(&selection)).await;

    let html = &controller.state().grid_html;
    let pos_c = html.find("$20.00").unwrap();
    let pos_a = html.find("$10.00").unwrap();
    let pos_b = html.find("$5.00").unwrap();
    assert!(pos_c < pos_a && pos_a < pos_b);
}

/// An unreachable endpoint reports the load error and still clears the
/// loading flag; the previous grid markup stays.
#[tokio::test]
async fn test_load_failure_reports_and_keeps_grid() {
    let (store, net, api) = InProcessApi::new();
    store.seed(vec![draft("Pen", 1.5)]).unwrap();
    let mut controller = ViewController::new(api);
    controller.load(None).await;
    let rendered = controller.state().grid_html.clone();

    net.set_down(true);
    controller.load(None).await;

    let state = controller.state();
    assert!(!state.loading);
    assert_eq!(state.grid_html, rendered);
    let (text, kind) = last_message(&controller);
    assert!(text.starts_with("Error loading products: "));
    assert_eq!(kind, MessageKind::Error);
}

/// A failed sorted load gets its own error prefix.
#[tokio::test]
async fn test_sorted_load_failure_prefix() {
    let (_store, net, api) = InProcessApi::new();
    let mut controller = ViewController::new(api);

    let selection = SortSelection {
        field: "title".to_string(),
        order: SortOrder::Asc,
    };
    net.set_down(true);
    controller.load(Some(&selection)).await;

    let (text, _) = last_message(&controller);
    assert!(text.starts_with("Error loading sorted products: "));
}

// =============================================================================
// Add Tests
// =============================================================================

/// A successful add confirms, reloads the grid, and clears the form.
#[tokio::test]
async fn test_add_product_success() {
    let (store, _net, api) = InProcessApi::new();
    let mut controller = ViewController::new(api);

    let clear_form = controller.add_product(&add_form("Pen", 1.5)).await;

    assert!(clear_form);
    assert_eq!(store.len().unwrap(), 1);
    let (text, kind) = last_message(&controller);
    assert_eq!(text, "Product added successfully!");
    assert_eq!(kind, MessageKind::Success);
    assert!(controller.state().grid_html.contains("Pen"));
}

/// A failed add reports, keeps the form populated, and adds nothing.
#[tokio::test]
async fn test_add_product_failure_keeps_form() {
    let (store, net, api) = InProcessApi::new();
    let mut controller = ViewController::new(api);
    net.set_down(true);

    let clear_form = controller.add_product(&add_form("Pen", 1.5)).await;

    assert!(!clear_form);
    assert_eq!(store.len().unwrap(), 0);
    let (text, kind) = last_message(&controller);
    assert!(text.starts_with("Error adding product: "));
    assert_eq!(kind, MessageKind::Error);
}

// =============================================================================
// Edit Modal Tests
// =============================================================================

/// Opening the editor loads the product into the modal.
#[tokio::test]
async fn test_open_edit_shows_modal() {
    let (store, _net, api) = InProcessApi::new();
    store.seed(vec![draft("Pen", 1.5)]).unwrap();
    let id = store.find_all().unwrap()[0].id.clone();
    let mut controller = ViewController::new(api);

    controller.open_edit(&id).await;

    assert!(controller.state().modal_visible());
    assert_eq!(controller.state().modal.as_ref().unwrap().title, "Pen");
}

/// Opening the editor for a vanished id leaves the modal hidden.
#[tokio::test]
async fn test_open_edit_missing_id_stays_hidden() {
    let (_store, _net, api) = InProcessApi::new();
    let mut controller = ViewController::new(api);

    controller.open_edit("missing").await;

    assert!(!controller.state().modal_visible());
    assert!(controller.state().messages.is_empty());
}

/// A failed detail lookup reports and leaves the modal hidden.
#[tokio::test]
async fn test_open_edit_failure_reports() {
    let (_store, net, api) = InProcessApi::new();
    let mut controller = ViewController::new(api);
    net.set_down(true);

    controller.open_edit("any").await;

    assert!(!controller.state().modal_visible());
    let (text, _) = last_message(&controller);
    assert!(text.starts_with("Error loading product details: "));
}

/// Closing the editor discards it without saving.
#[tokio::test]
async fn test_close_edit_discards() {
    let (store, _net, api) = InProcessApi::new();
    store.seed(vec![draft("Pen", 1.5)]).unwrap();
    let id = store.find_all().unwrap()[0].id.clone();
    let mut controller = ViewController::new(api);

    controller.open_edit(&id).await;
    controller.close_edit();

    assert!(!controller.state().modal_visible());
    assert_eq!(store.find_all().unwrap()[0].title, "Pen");
}

/// A successful save closes the modal, confirms, and re-renders.
#[tokio::test]
async fn test_submit_edit_success_closes_modal() {
    let (store, _net, api) = InProcessApi::new();
    store.seed(vec![draft("Pen", 1.5)]).unwrap();
    let id = store.find_all().unwrap()[0].id.clone();
    let mut controller = ViewController::new(api);
    controller.open_edit(&id).await;

    let form = EditForm {
        id: id.clone(),
        title: "Marker".to_string(),
        category: "Office".to_string(),
        price: 2.5,
        in_stock: false,
    };
    controller.submit_edit(&form).await;

    assert!(!controller.state().modal_visible());
    let (text, kind) = last_message(&controller);
    assert_eq!(text, "Product updated successfully!");
    assert_eq!(kind, MessageKind::Success);
    assert!(controller.state().grid_html.contains("Marker"));
    assert_eq!(store.find_all().unwrap()[0].price, 2.5);
}

/// A failed save reports and leaves the modal open for another attempt.
#[tokio::test]
async fn test_submit_edit_failure_keeps_modal_open() {
    let (store, net, api) = InProcessApi::new();
    store.seed(vec![draft("Pen", 1.5)]).unwrap();
    let id = store.find_all().unwrap()[0].id.clone();
    let mut controller = ViewController::new(api);
    controller.open_edit(&id).await;

    net.set_down(true);
    let form = EditForm {
        id,
        title: "Marker".to_string(),
        category: "Office".to_string(),
        price: 2.5,
        in_stock: true,
    };
    controller.submit_edit(&form).await;

    assert!(controller.state().modal_visible());
    let (text, _) = last_message(&controller);
    assert!(text.starts_with("Error updating product: "));
    assert_eq!(store.find_all().unwrap()[0].title, "Pen");
}

// =============================================================================
// Delete Tests
// =============================================================================

/// Without confirmation the delete never reaches the API.
#[tokio::test]
async fn test_delete_unconfirmed_is_noop() {
    let (store, _net, api) = InProcessApi::new();
    store.seed(vec![draft("Pen", 1.5)]).unwrap();
    let id = store.find_all().unwrap()[0].id.clone();
    let mut controller = ViewController::new(api);

    controller.delete_product(&id, false).await;

    assert_eq!(store.len().unwrap(), 1);
    assert!(controller.state().messages.is_empty());
}

/// A confirmed delete removes the product, confirms, and re-renders.
#[tokio::test]
async fn test_delete_confirmed_removes_product() {
    let (store, _net, api) = InProcessApi::new();
    store.seed(vec![draft("Pen", 1.5)]).unwrap();
    let id = store.find_all().unwrap()[0].id.clone();
    let mut controller = ViewController::new(api);

    controller.delete_product(&id, true).await;

    assert_eq!(store.len().unwrap(), 0);
    let (text, kind) = last_message(&controller);
    assert_eq!(text, "Product deleted successfully!");
    assert_eq!(kind, MessageKind::Success);
    assert!(controller.state().grid_html.contains("No products found"));
}

/// Deleting an already-vanished product surfaces the server's message.
#[tokio::test]
async fn test_delete_vanished_product_reports() {
    let (store, _net, api) = InProcessApi::new();
    store.seed(vec![draft("Pen", 1.5)]).unwrap();
    let mut controller = ViewController::new(api);

    controller.delete_product("missing", true).await;

    assert_eq!(store.len().unwrap(), 1);
    let (text, _) = last_message(&controller);
    assert_eq!(text, "Error deleting product: Product not found");
}

// =============================================================================
// Rendering And Message Tests
// =============================================================================

/// Markup-significant characters in product fields arrive escaped.
#[tokio::test]
async fn test_grid_escapes_markup_in_fields() {
    let (store, _net, api) = InProcessApi::new();
    store
        .seed(vec![draft("<script>alert('x')</script>", 1.0)])
        .unwrap();
    let mut controller = ViewController::new(api);

    controller.load(None).await;

    let html = &controller.state().grid_html;
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("&#039;x&#039;"));
}

/// Messages survive early ticks and expire once their delay elapses.
#[tokio::test]
async fn test_messages_expire_on_tick() {
    let (_store, _net, api) = InProcessApi::new();
    let mut controller = ViewController::new(api);
    controller.add_product(&add_form("Pen", 1.5)).await;
    assert_eq!(controller.state().messages.len(), 1);

    controller.tick(Instant::now());
    assert_eq!(controller.state().messages.len(), 1);

    controller.tick(Instant::now() + MESSAGE_TTL + Duration::from_millis(1));
    assert!(controller.state().messages.is_empty());
}
