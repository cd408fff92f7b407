//! GraphQL documents sent to the Admin API.
//!
//! All product selections go through one shared fragment so that queries and
//! mutation payloads return the same shape. The fragment requests a single
//! variant edge: products managed by this backend always have exactly one
//! variant, and the variant's SKU is flattened onto the local product.

use std::sync::LazyLock;

const PRODUCT_FRAGMENT: &str = "\
fragment ProductFragment on Product {
  id
  status
  title
  handle
  defaultCursor
  descriptionHtml
  featuredMedia {
    id
    alt
    preview {
      image {
        id
        url
        width
        height
      }
    }
  }
  variants(first: 1) {
    edges {
      node {
        id
        sku
      }
    }
  }
}";

/// Look up a product by id.
pub static GET_PRODUCT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "query product($id: ID!) {{
  product(id: $id) {{ ...ProductFragment }}
}}
{PRODUCT_FRAGMENT}"
    )
});

/// Look up a product by handle.
pub static GET_PRODUCT_BY_HANDLE: LazyLock<String> = LazyLock::new(|| {
    format!(
        "query productByHandle($handle: String!) {{
  productByHandle(handle: $handle) {{ ...ProductFragment }}
}}
{PRODUCT_FRAGMENT}"
    )
});

/// Paginated product listing. Pagination arguments are forwarded verbatim;
/// Shopify validates the first/after vs last/before combination itself.
pub static GET_PRODUCTS: LazyLock<String> = LazyLock::new(|| {
    format!(
        "query products($first: Int, $after: String, $last: Int, $before: String, $sortKey: ProductSortKeys) {{
  products(first: $first, after: $after, last: $last, before: $before, sortKey: $sortKey) {{
    edges {{
      cursor
      node {{ ...ProductFragment }}
    }}
    nodes {{ ...ProductFragment }}
    pageInfo {{
      hasNextPage
      hasPreviousPage
      startCursor
      endCursor
    }}
  }}
}}
{PRODUCT_FRAGMENT}"
    )
});

/// Count of products, bounded by an optional limit.
pub static PRODUCTS_COUNT: LazyLock<String> = LazyLock::new(|| {
    "query productsCount($limit: Int) {
  productsCount(limit: $limit) {
    count
    precision
  }
}"
    .to_string()
});

/// Create a product. The 2024-10 Admin API creates a default single variant;
/// the SKU cannot be set in the same call.
pub static PRODUCT_CREATE: LazyLock<String> = LazyLock::new(|| {
    format!(
        "mutation productCreate($product: ProductInput!) {{
  productCreate(input: $product) {{
    product {{ ...ProductFragment }}
    userErrors {{
      field
      message
    }}
  }}
}}
{PRODUCT_FRAGMENT}"
    )
});

/// Set the SKU on an existing variant (second step of a create with SKU).
pub static PRODUCT_VARIANT_UPDATE: LazyLock<String> = LazyLock::new(|| {
    "mutation productVariantUpdate($variant: ProductVariantInput!) {
  productVariantUpdate(input: $variant) {
    productVariant {
      id
      sku
    }
    userErrors {
      field
      message
    }
  }
}"
    .to_string()
});

/// Update a product and its single variant in one upstream document.
/// The two root fields execute in order, so the product payload returned by
/// `productUpdate` already reflects the variant's new SKU.
pub static PRODUCT_UPDATE: LazyLock<String> = LazyLock::new(|| {
    format!(
        "mutation productUpdate($product: ProductInput!, $variant: ProductVariantInput!) {{
  productVariantUpdate(input: $variant) {{
    productVariant {{ id }}
    userErrors {{
      field
      message
    }}
  }}
  productUpdate(input: $product) {{
    product {{ ...ProductFragment }}
    userErrors {{
      field
      message
    }}
  }}
}}
{PRODUCT_FRAGMENT}"
    )
});
