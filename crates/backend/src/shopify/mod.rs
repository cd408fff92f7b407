//! Shopify Admin API client (HIGH PRIVILEGE).
//!
//! The backend proxies its whole schema to the Admin GraphQL API: resolvers
//! send raw GraphQL documents through [`AdminClient`] and reshape the
//! responses with the conversion functions in [`convert`].
//!
//! No retry and no timeout are configured at this layer; a hung upstream
//! call hangs the resolver invocation that issued it.

mod client;
pub mod convert;
pub mod queries;
pub mod types;

pub use client::AdminClient;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when interacting with the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// The HTTP exchange itself failed (connect, DNS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Shopify answered with a non-success HTTP status.
    #[error("upstream returned HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// The response body carried GraphQL-level errors (`errors` takes
    /// precedence even when partial `data` is present).
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON decoding failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    #[serde(default)]
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL document where an error occurred.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ShopifyError::Status(reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "upstream returned HTTP status 502 Bad Gateway");
    }

    #[test]
    fn test_graphql_error_formatting() {
        let errors = vec![
            GraphQLError {
                message: "Field not found".to_string(),
                locations: vec![],
                path: vec![],
            },
            GraphQLError {
                message: "Invalid ID".to_string(),
                locations: vec![],
                path: vec![],
            },
        ];
        let err = ShopifyError::GraphQL(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Field not found; Invalid ID"
        );
    }

    #[test]
    fn test_graphql_error_deserializes_without_locations() {
        let err: GraphQLError =
            serde_json::from_value(serde_json::json!({ "message": "boom" }))
                .expect("should deserialize");
        assert_eq!(err.message, "boom");
        assert!(err.locations.is_empty());
        assert!(err.path.is_empty());
    }
}
