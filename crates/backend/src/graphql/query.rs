//! Query resolvers: single-shot pass-throughs to the Admin API.

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};
use serde_json::json;

use crate::error::AppError;
use crate::shopify::{AdminClient, convert, queries, types};

use super::model::{Product, ProductConnection, ProductCount, ProductSortKeys};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Returns a product by id or handle. Exactly one selector is required.
    async fn product(
        &self,
        ctx: &Context<'_>,
        id: Option<ID>,
        handle: Option<String>,
    ) -> Result<Product> {
        let client = ctx.data_unchecked::<AdminClient>();
        fetch_product(client, id, handle)
            .await
            .map_err(|e| e.extend())
    }

    /// Returns a page of products. Pagination arguments and the sort key are
    /// forwarded verbatim; the upstream platform validates the
    /// `first`/`after` vs `last`/`before` combination.
    async fn products(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
        sort_key: Option<ProductSortKeys>,
    ) -> Result<ProductConnection> {
        let client = ctx.data_unchecked::<AdminClient>();
        fetch_products(client, first, after, last, before, sort_key)
            .await
            .map_err(|e| e.extend())
    }

    /// Count of products, limited to an optional upper bound.
    async fn products_count(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
    ) -> Result<ProductCount> {
        let client = ctx.data_unchecked::<AdminClient>();
        fetch_products_count(client, limit)
            .await
            .map_err(|e| e.extend())
    }
}

async fn fetch_product(
    client: &AdminClient,
    id: Option<ID>,
    handle: Option<String>,
) -> Result<Product, AppError> {
    match (id, handle) {
        (Some(id), None) => {
            let id = id.0;
            let data: types::ProductData = client
                .query(&queries::GET_PRODUCT, json!({ "id": &id }))
                .await?;
            // A null product is a successful upstream response, not an error
            let product = data
                .product
                .ok_or_else(|| AppError::NotFound(format!("Product not found: {id}")))?;
            Ok(convert::mk_product(product))
        }
        (None, Some(handle)) => {
            let data: types::ProductByHandleData = client
                .query(&queries::GET_PRODUCT_BY_HANDLE, json!({ "handle": &handle }))
                .await?;
            let product = data
                .product_by_handle
                .ok_or_else(|| AppError::NotFound(format!("Product not found: {handle}")))?;
            Ok(convert::mk_product(product))
        }
        _ => Err(AppError::Validation(
            "provide exactly one of `id` or `handle`".to_string(),
        )),
    }
}

async fn fetch_products(
    client: &AdminClient,
    first: Option<i32>,
    after: Option<String>,
    last: Option<i32>,
    before: Option<String>,
    sort_key: Option<ProductSortKeys>,
) -> Result<ProductConnection, AppError> {
    let data: types::ProductsData = client
        .query(
            &queries::GET_PRODUCTS,
            json!({
                "first": first,
                "after": after,
                "last": last,
                "before": before,
                "sortKey": sort_key,
            }),
        )
        .await?;
    Ok(convert::product_connection(data.products))
}

async fn fetch_products_count(
    client: &AdminClient,
    limit: Option<i32>,
) -> Result<ProductCount, AppError> {
    let data: types::ProductsCountData = client
        .query(&queries::PRODUCTS_COUNT, json!({ "limit": limit }))
        .await?;
    let count = data
        .products_count
        .ok_or_else(|| AppError::Internal("productsCount returned no payload".to_string()))?;
    Ok(ProductCount {
        count: count.count,
        precision: count.precision.into(),
    })
}
