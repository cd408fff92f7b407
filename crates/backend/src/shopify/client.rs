//! Admin API GraphQL client with a static access token.
//!
//! Unlike a codegen-backed client, this one sends raw GraphQL documents
//! (see [`super::queries`]) and decodes the `data` payload into the caller's
//! type. That matches the proxy's contract: the documents are written
//! against the pinned upstream schema version and the variables mirror each
//! document's declared parameters.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::instrument;

use crate::config::ShopifyConfig;

use super::{GraphQLError, ShopifyError};

/// Shopify Admin API GraphQL client.
///
/// Cheap to clone; every clone shares one `reqwest::Client` and the
/// precomputed versioned endpoint.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: SecretString,
}

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

impl AdminClient {
    /// Create a new Admin API client from explicit configuration.
    #[must_use]
    pub fn new(config: &ShopifyConfig) -> Self {
        let endpoint = format!(
            "{}/admin/api/{}/graphql.json",
            config.api_url, config.api_version
        );

        Self {
            inner: Arc::new(AdminClientInner {
                client: reqwest::Client::new(),
                endpoint,
                access_token: config.access_token.clone(),
            }),
        }
    }

    /// The versioned GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Execute a GraphQL document against the Admin API.
    ///
    /// Returns only the decoded `data` payload.
    ///
    /// # Errors
    ///
    /// - [`ShopifyError::Http`] when the HTTP exchange fails outright.
    /// - [`ShopifyError::Status`] when Shopify answers with a non-success
    ///   status code.
    /// - [`ShopifyError::GraphQL`] when the body carries a non-empty
    ///   `errors` array, even if `data` is also present, or when `data` is
    ///   missing from a success response.
    /// - [`ShopifyError::Parse`] when the body is not valid JSON for the
    ///   expected shape.
    #[instrument(skip(self, document, variables))]
    pub async fn query<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<T, ShopifyError> {
        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header(
                "X-Shopify-Access-Token",
                self.inner.access_token.expose_secret(),
            )
            .header("Accept", "application/json")
            .json(&GraphQLRequest {
                query: document,
                variables,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Shopify API returned non-success status");
            return Err(ShopifyError::Status(status));
        }

        let body = response.bytes().await?;
        let graphql_response: GraphQLResponse<T> = serde_json::from_slice(&body)?;

        if let Some(errors) = graphql_response.errors
            && !errors.is_empty()
        {
            return Err(ShopifyError::GraphQL(errors));
        }

        graphql_response.data.ok_or_else(|| {
            ShopifyError::GraphQL(vec![GraphQLError {
                message: "No data in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })
    }
}
