//! The view controller
//!
//! One method per user action. Each action drives the client library
//! and settles the state the same way the page does: success re-renders
//! and confirms, failure leaves everything as it was plus an error
//! message. Mutations reload the unsorted list on success.

use std::time::Instant;

use crate::client::CatalogApi;
use crate::graphql::SortOrder;
use crate::store::{ProductDraft, ProductPatch};

use super::render::render_grid;
use super::state::ViewState;

/// The sort controls' current selection.
#[derive(Debug, Clone)]
pub struct SortSelection {
    pub field: String,
    pub order: SortOrder,
}

/// The add form's fields.
#[derive(Debug, Clone)]
pub struct AddForm {
    pub title: String,
    pub category: String,
    pub price: f64,
    pub in_stock: bool,
}

/// The edit form's fields. All four mutable fields are always sent,
/// changed or not.
#[derive(Debug, Clone)]
pub struct EditForm {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub in_stock: bool,
}

/// Drives a `CatalogApi` from user actions and owns the view state.
pub struct ViewController<A: CatalogApi> {
    api: A,
    state: ViewState,
}

impl<A: CatalogApi> ViewController<A> {
    /// Creates a controller with initial state.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ViewState::new(),
        }
    }

    /// Read access to the state, for rendering.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Load action: startup, manual refresh, or a sort-control change.
    ///
    /// Sets loading, fetches the list (sorted when a selection is
    /// given), renders on success, reports on failure, clears loading
    /// either way.
    pub async fn load(&mut self, sort: Option<&SortSelection>) {
        self.state.loading = true;

        let result = match sort {
            None => self.api.products().await,
            Some(selection) => {
                self.api
                    .sorted_products(&selection.field, selection.order)
                    .await
            }
        };

        match result {
            Ok(products) => {
                self.state.grid_html = render_grid(&products);
            }
            Err(e) => {
                let what = if sort.is_some() {
                    "sorted products"
                } else {
                    "products"
                };
                self.state
                    .push_error(format!("Error loading {}: {}", what, e));
            }
        }

        self.state.loading = false;
    }

    /// Add action. Returns whether the form should be cleared (only on
    /// success; a failed add leaves it populated).
    pub async fn add_product(&mut self, form: &AddForm) -> bool {
        let draft = ProductDraft {
            title: form.title.clone(),
            category: form.category.clone(),
            price: form.price,
            in_stock: form.in_stock,
        };

        match self.api.add_product(&draft).await {
            Ok(_) => {
                self.state.push_success("Product added successfully!");
                self.load(None).await;
                true
            }
            Err(e) => {
                self.state.push_error(format!("Error adding product: {}", e));
                false
            }
        }
    }

    /// Open-edit action: look the product up and show the modal with
    /// its fields. A null lookup or a failure leaves the modal hidden.
    pub async fn open_edit(&mut self, id: &str) {
        match self.api.product(id).await {
            Ok(Some(product)) => {
                self.state.modal = Some(product);
            }
            Ok(None) => {}
            Err(e) => {
                self.state
                    .push_error(format!("Error loading product details: {}", e));
            }
        }
    }

    /// Close-edit action: hide the modal without saving.
    pub fn close_edit(&mut self) {
        self.state.modal = None;
    }

    /// Submit-edit action. All four fields are sent; on success the
    /// modal closes and the list reloads, on failure it stays open.
    pub async fn submit_edit(&mut self, form: &EditForm) {
        let patch = ProductPatch {
            title: Some(form.title.clone()),
            category: Some(form.category.clone()),
            price: Some(form.price),
            in_stock: Some(form.in_stock),
        };

        match self.api.update_product(&form.id, &patch).await {
            Ok(_) => {
                self.state.push_success("Product updated successfully!");
                self.state.modal = None;
                self.load(None).await;
            }
            Err(e) => {
                self.state
                    .push_error(format!("Error updating product: {}", e));
            }
        }
    }

    /// Delete action. Does nothing without confirmation.
    pub async fn delete_product(&mut self, id: &str, confirmed: bool) {
        if !confirmed {
            return;
        }

        match self.api.delete_product(id).await {
            Ok(_) => {
                self.state.push_success("Product deleted successfully!");
                self.load(None).await;
            }
            Err(e) => {
                self.state
                    .push_error(format!("Error deleting product: {}", e));
            }
        }
    }

    /// Timer tick: expire messages that have outlived their delay.
    pub fn tick(&mut self, now: Instant) {
        self.state.expire_messages(now);
    }
}
