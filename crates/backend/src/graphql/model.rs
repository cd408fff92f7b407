//! Types exposed by the local product schema.
//!
//! This is a deliberately small mirror of the upstream product surface: the
//! nested variant connection is flattened to a `sku` field and the featured
//! media to an `image` field. Everything else is carried verbatim,
//! including the opaque pagination cursors.

use async_graphql::{Enum, ID, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A product in the admin catalog.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Product {
    /// Platform-assigned globally unique id, immutable once created.
    pub id: ID,
    pub status: ProductStatus,
    pub title: String,
    /// Platform-assigned URL handle, immutable once created.
    pub handle: String,
    /// Opaque cursor that selects the single next record sorted by id.
    pub default_cursor: String,
    pub description_html: Option<String>,
    /// SKU of the product's single variant, absent when none is set.
    pub sku: Option<String>,
    /// Preview image of the featured media, absent without media or while
    /// the media is still processing.
    pub image: Option<Image>,
}

/// An image resource.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct Image {
    pub id: Option<ID>,
    pub alt: Option<String>,
    pub url: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

/// The possible product statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Ready to sell and publishable to sales channels.
    Active,
    /// Not ready to sell; hidden from customers.
    Draft,
    /// No longer sold and unavailable to customers.
    Archived,
}

/// Sort keys forwarded verbatim to the upstream product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSortKeys {
    CreatedAt,
    Id,
    InventoryTotal,
    ProductType,
    PublishedAt,
    Relevance,
    Title,
    UpdatedAt,
    Vendor,
}

/// A page of products.
#[derive(Debug, Clone, SimpleObject)]
pub struct ProductConnection {
    pub edges: Vec<ProductEdge>,
    pub nodes: Vec<Product>,
    pub page_info: PageInfo,
}

/// One product with its pagination cursor.
#[derive(Debug, Clone, SimpleObject)]
pub struct ProductEdge {
    /// Opaque cursor, forwarded verbatim into `after`/`before` arguments.
    pub cursor: String,
    pub node: Product,
}

/// Page boundary information for a connection.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

/// Count of products, possibly capped by a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SimpleObject)]
pub struct ProductCount {
    pub count: i64,
    pub precision: CountPrecision,
}

/// The exactness of a count value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum CountPrecision {
    /// The count is exactly the value.
    Exact,
    /// A limit was imposed and reached; the count is at least the value.
    AtLeast,
}

/// Fields accepted by both `productCreate` and `productUpdate`.
#[derive(Debug, Clone, InputObject)]
pub struct ProductInput {
    pub title: String,
    pub description_html: Option<String>,
    /// SKU for the product's single variant.
    pub sku: Option<String>,
    pub status: ProductStatus,
}

impl ProductInput {
    /// A product title must contain at least one non-whitespace character.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty or whitespace-only
    /// title.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation(
                "product title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str) -> ProductInput {
        ProductInput {
            title: title.to_string(),
            description_html: None,
            sku: None,
            status: ProductStatus::Draft,
        }
    }

    #[test]
    fn test_validate_accepts_non_empty_title() {
        assert!(input("Shirt").validate().is_ok());
        assert!(input("  Shirt  ").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_and_whitespace_titles() {
        assert!(input("").validate().is_err());
        assert!(input("   ").validate().is_err());
        assert!(input("\t\n").validate().is_err());
    }

    #[test]
    fn test_product_status_serializes_to_upstream_values() {
        assert_eq!(
            serde_json::to_value(ProductStatus::Active).expect("serializes"),
            serde_json::json!("ACTIVE")
        );
        assert_eq!(
            serde_json::to_value(ProductStatus::Archived).expect("serializes"),
            serde_json::json!("ARCHIVED")
        );
    }

    #[test]
    fn test_sort_keys_serialize_to_upstream_values() {
        assert_eq!(
            serde_json::to_value(ProductSortKeys::CreatedAt).expect("serializes"),
            serde_json::json!("CREATED_AT")
        );
        assert_eq!(
            serde_json::to_value(ProductSortKeys::Id).expect("serializes"),
            serde_json::json!("ID")
        );
    }
}
