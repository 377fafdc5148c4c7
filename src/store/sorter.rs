//! Product sorting
//!
//! Sorts products by one of the four mutable fields, deterministically.
//! Text fields compare lexicographically, price numerically, and
//! availability with `false < true`.

use std::cmp::Ordering;

use super::document::Product;

/// The fields a product list may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Category,
    Price,
    InStock,
}

impl SortField {
    /// Parses a wire-level field name. Returns `None` for anything
    /// outside the allowed set.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(SortField::Title),
            "category" => Some(SortField::Category),
            "price" => Some(SortField::Price),
            "inStock" => Some(SortField::InStock),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sorts product slices by field and direction.
pub struct ProductSorter;

impl ProductSorter {
    /// Sorts products in place.
    ///
    /// The sort is stable: products with equal keys keep their
    /// store-native relative order.
    pub fn sort(products: &mut [Product], field: SortField, direction: SortDirection) {
        products.sort_by(|a, b| {
            let ordering = Self::compare(a, b, field);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    /// Compares two products on the chosen field.
    ///
    /// Prices that do not admit an ordering (NaN) compare as equal, so
    /// the stable sort leaves them where they were.
    fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
        match field {
            SortField::Title => a.title.cmp(&b.title),
            SortField::Category => a.category.cmp(&b.category),
            SortField::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            SortField::InStock => a.in_stock.cmp(&b.in_stock),
        }
    }
}
