//! Product document types
//!
//! The store holds exactly one document shape. Wire names are camelCase
//! (`inStock`) to match the operation contract.

use serde::{Deserialize, Serialize};

/// A catalog product document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier, immutable after creation
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: f64,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

/// The fields required to create a product. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub category: String,
    pub price: f64,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

/// A partial update where `None` means "leave unchanged".
///
/// There is no way to clear a field: absent and explicitly-set are the
/// only two states per mutable attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(
        rename = "inStock",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub in_stock: Option<bool>,
}

impl ProductPatch {
    /// Returns true when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.in_stock.is_none()
    }

    /// Applies the supplied fields to a product, leaving the rest unchanged.
    pub fn apply(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Product {
        Product {
            id: "p1".to_string(),
            title: "Pen".to_string(),
            category: "Office".to_string(),
            price: 1.5,
            in_stock: true,
        }
    }

    #[test]
    fn test_product_wire_names_are_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "p1",
                "title": "Pen",
                "category": "Office",
                "price": 1.5,
                "inStock": true
            })
        );
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut product = sample();
        let before = product.clone();

        let patch = ProductPatch::default();
        assert!(patch.is_empty());

        patch.apply(&mut product);
        assert_eq!(product, before);
    }

    #[test]
    fn test_patch_applies_only_supplied_fields() {
        let mut product = sample();

        let patch = ProductPatch {
            price: Some(2.0),
            ..Default::default()
        };
        patch.apply(&mut product);

        assert_eq!(product.price, 2.0);
        assert_eq!(product.title, "Pen");
        assert_eq!(product.category, "Office");
        assert!(product.in_stock);
    }

    #[test]
    fn test_patch_skips_absent_fields_on_the_wire() {
        let patch = ProductPatch {
            title: Some("Marker".to_string()),
            in_stock: Some(false),
            ..Default::default()
        };
        let value = serde_json::to_value(patch).unwrap();
        assert_eq!(value, json!({"title": "Marker", "inStock": false}));
    }
}
