//! The six contract resolvers
//!
//! Each resolver is one function against the store. Point lookups treat
//! absence as a valid null result; update and delete treat it as an
//! error. The sort field is checked against the allowed set before the
//! store is touched.

use std::sync::Arc;

use crate::graphql::SortOrder;
use crate::store::{
    Product, ProductDraft, ProductPatch, ProductStore, SortDirection, SortField,
};

use super::errors::{ResolverError, ResolverResult};

/// The resolver set over one product store.
pub struct Resolvers {
    store: Arc<ProductStore>,
}

impl Resolvers {
    /// Creates resolvers over the given store.
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self { store }
    }

    /// `products`: all products in store-native order.
    pub fn products(&self) -> ResolverResult<Vec<Product>> {
        Ok(self.store.find_all()?)
    }

    /// `product(id)`: the product, or null. Absence is not an error for
    /// point lookups.
    pub fn product(&self, id: &str) -> ResolverResult<Option<Product>> {
        Ok(self.store.find_by_id(id)?)
    }

    /// `sortedProducts(field, order)`: all products ordered by `field`.
    ///
    /// # Errors
    ///
    /// `SHELF_INVALID_ARGUMENT` ("Invalid sort field") when the field
    /// is outside {title, category, price, inStock}; the store is not
    /// consulted in that case.
    pub fn sorted_products(&self, field: &str, order: SortOrder) -> ResolverResult<Vec<Product>> {
        let field = SortField::parse(field).ok_or_else(ResolverError::invalid_sort_field)?;
        let direction = match order {
            SortOrder::Asc => SortDirection::Asc,
            SortOrder::Desc => SortDirection::Desc,
        };
        Ok(self.store.find_all_sorted(field, direction)?)
    }

    /// `addProduct(...)`: creates and returns a product with a fresh
    /// store-assigned id. No value validation beyond types.
    pub fn add_product(&self, draft: ProductDraft) -> ResolverResult<Product> {
        Ok(self.store.insert(draft)?)
    }

    /// `updateProduct(id, ...)`: applies only the supplied fields.
    ///
    /// # Errors
    ///
    /// `SHELF_NOT_FOUND` ("Product not found") when the id does not
    /// resolve to a product.
    pub fn update_product(&self, id: &str, patch: &ProductPatch) -> ResolverResult<Product> {
        self.store
            .update_by_id(id, patch)?
            .ok_or_else(ResolverError::not_found)
    }

    /// `deleteProduct(id)`: removes the product and returns true.
    ///
    /// # Errors
    ///
    /// `SHELF_NOT_FOUND` ("Product not found") when the id does not
    /// resolve to a product.
    pub fn delete_product(&self, id: &str) -> ResolverResult<bool> {
        if self.store.delete_by_id(id)? {
            Ok(true)
        } else {
            Err(ResolverError::not_found())
        }
    }
}
