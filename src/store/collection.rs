//! The product collection
//!
//! All operations take the single document lock, do their work, and
//! release it. Store-native order is insertion order; identifiers are
//! UUID v4 strings assigned at insert.

use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use super::document::{Product, ProductDraft, ProductPatch};
use super::errors::{StoreError, StoreResult};
use super::sorter::{ProductSorter, SortDirection, SortField};

/// In-memory product collection.
pub struct ProductStore {
    documents: Mutex<Vec<Product>>,
}

impl ProductStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Vec<Product>>> {
        self.documents.lock().map_err(|_| StoreError::lock_poisoned())
    }

    /// Returns all products in store-native order.
    pub fn find_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.lock()?.clone())
    }

    /// Returns the product with the given id, if present.
    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        Ok(self.lock()?.iter().find(|p| p.id == id).cloned())
    }

    /// Returns all products ordered by the given field and direction.
    pub fn find_all_sorted(
        &self,
        field: SortField,
        direction: SortDirection,
    ) -> StoreResult<Vec<Product>> {
        let mut products = self.lock()?.clone();
        ProductSorter::sort(&mut products, field, direction);
        Ok(products)
    }

    /// Inserts a new product and returns it with its fresh id.
    pub fn insert(&self, draft: ProductDraft) -> StoreResult<Product> {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            category: draft.category,
            price: draft.price,
            in_stock: draft.in_stock,
        };
        self.lock()?.push(product.clone());
        Ok(product)
    }

    /// Applies a partial update to the product with the given id.
    ///
    /// Only the supplied fields change. Returns the updated product, or
    /// `None` if the id does not resolve to a document.
    pub fn update_by_id(&self, id: &str, patch: &ProductPatch) -> StoreResult<Option<Product>> {
        let mut documents = self.lock()?;
        let Some(product) = documents.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if !patch.is_empty() {
            patch.apply(product);
        }
        Ok(Some(product.clone()))
    }

    /// Removes the product with the given id. Returns whether a
    /// document was removed.
    pub fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let mut documents = self.lock()?;
        let before = documents.len();
        documents.retain(|p| p.id != id);
        Ok(documents.len() < before)
    }

    /// Returns the number of documents.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Inserts a batch of drafts, preserving their order.
    pub fn seed(&self, drafts: Vec<ProductDraft>) -> StoreResult<usize> {
        let count = drafts.len();
        for draft in drafts {
            self.insert(draft)?;
        }
        Ok(count)
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
