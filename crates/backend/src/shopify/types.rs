//! Upstream wire shapes for the Admin API responses.
//!
//! These mirror what the documents in [`super::queries`] select, nothing
//! more. Cursors are opaque strings minted by Shopify and are carried
//! through untouched.

use serde::Deserialize;

// =============================================================================
// Product
// =============================================================================

/// A product as returned by the shared product fragment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub status: ProductStatus,
    pub title: String,
    pub handle: String,
    pub default_cursor: String,
    pub description_html: Option<String>,
    pub featured_media: Option<Media>,
    pub variants: Option<VariantConnection>,
}

/// The upstream product status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
}

/// The variant connection as selected with `variants(first: 1)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariantConnection {
    pub edges: Vec<VariantEdge>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariantEdge {
    pub node: Variant,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Variant {
    pub id: String,
    pub sku: Option<String>,
}

// =============================================================================
// Media
// =============================================================================

/// Featured media attached to a product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Media {
    pub id: String,
    pub alt: Option<String>,
    /// Absent until the media finishes processing.
    pub preview: Option<MediaPreview>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaPreview {
    pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Image {
    pub id: Option<String>,
    pub url: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

// =============================================================================
// Pagination
// =============================================================================

/// Cursor-pagination envelope. The same page is exposed twice: as wrapped
/// edges and as bare nodes, in the same order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub nodes: Vec<T>,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Edge<T> {
    pub cursor: String,
    pub node: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

// =============================================================================
// Counts
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Count {
    pub count: i64,
    pub precision: CountPrecision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CountPrecision {
    Exact,
    AtLeast,
}

// =============================================================================
// Mutation payloads
// =============================================================================

/// Input validation failure reported inside a mutation payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserError {
    pub field: Option<Vec<String>>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub product: Option<Product>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantPayload {
    pub product_variant: Option<Variant>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

// =============================================================================
// Operation response data
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ProductData {
    pub product: Option<Product>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductByHandleData {
    pub product_by_handle: Option<Product>,
}

#[derive(Debug, Deserialize)]
pub struct ProductsData {
    pub products: Connection<Product>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsCountData {
    pub products_count: Option<Count>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateData {
    pub product_create: Option<ProductPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantUpdateData {
    pub product_variant_update: Option<VariantPayload>,
}

/// Response to the combined update document: both root fields at once.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateData {
    pub product_variant_update: Option<VariantPayload>,
    pub product_update: Option<ProductPayload>,
}
