//! Application error taxonomy, surfaced through GraphQL error extensions.
//!
//! Every upstream failure propagates unchanged to the transport layer; no
//! retries, no fallbacks. Each variant maps to a stable `extensions.code`
//! value so API callers can branch on the failure kind instead of parsing
//! message text.

use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::shopify::ShopifyError;

/// Resolver-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] ShopifyError),

    /// Upstream returned a null entity for a lookup the local schema
    /// declares non-nullable in context.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Local input validation failed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The product was created upstream, but the follow-up SKU assignment
    /// failed. The product named here exists without the requested SKU.
    #[error("product {product_id} was created, but assigning its SKU failed: {reason}")]
    PartialCreate { product_id: String, reason: String },

    /// The upstream response was missing data it is contractually required
    /// to contain.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable error kind exposed as `extensions.code`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Shopify(ShopifyError::GraphQL(_)) => "UPSTREAM_GRAPHQL",
            Self::Shopify(ShopifyError::Http(_) | ShopifyError::Status(_)) => "UPSTREAM_HTTP",
            Self::Shopify(ShopifyError::Parse(_)) | Self::Internal(_) => "INTERNAL",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION",
            Self::PartialCreate { .. } => "PARTIAL_CREATE",
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, extensions| extensions.set("code", self.code()))
    }
}
