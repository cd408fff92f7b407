//! Mutation resolvers.
//!
//! Both mutations operate under the single-variant invariant: every product
//! managed through this backend has exactly one variant, and the variant's
//! SKU is what the local schema exposes as `Product.sku`.

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};
use serde_json::json;

use crate::error::AppError;
use crate::shopify::{AdminClient, convert, queries, types};

use super::model::{Product, ProductInput};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a product with a single variant.
    ///
    /// The pinned upstream schema version cannot set a SKU atomically with
    /// creation, so a provided SKU is assigned with a second upstream call
    /// and echoed back without a re-fetch. If that second call fails, the
    /// error names the product that was already created.
    async fn product_create(
        &self,
        ctx: &Context<'_>,
        product: ProductInput,
    ) -> Result<Product> {
        let client = ctx.data_unchecked::<AdminClient>();
        create_product(client, product).await.map_err(|e| e.extend())
    }

    /// Updates a product and its single variant's SKU.
    async fn product_update(
        &self,
        ctx: &Context<'_>,
        id: ID,
        product: ProductInput,
    ) -> Result<Product> {
        let client = ctx.data_unchecked::<AdminClient>();
        update_product(client, id, product)
            .await
            .map_err(|e| e.extend())
    }
}

async fn create_product(
    client: &AdminClient,
    input: ProductInput,
) -> Result<Product, AppError> {
    input.validate()?;

    let data: types::ProductCreateData = client
        .query(
            &queries::PRODUCT_CREATE,
            json!({ "product": product_fields(&input) }),
        )
        .await?;
    let payload = data
        .product_create
        .ok_or_else(|| AppError::Internal("productCreate returned no payload".to_string()))?;
    check_user_errors(&payload.user_errors)?;
    let product = payload
        .product
        .ok_or_else(|| AppError::Internal("productCreate returned no product".to_string()))?;

    let variant = single_variant(&product).ok_or_else(|| {
        AppError::Internal(format!("product {} was created without a variant", product.id))
    })?;

    let mut created = convert::mk_product(product);

    if let Some(sku) = input.sku {
        if let Err(err) = assign_sku(client, &variant.id, &sku).await {
            return Err(AppError::PartialCreate {
                product_id: created.id.0.clone(),
                reason: err.to_string(),
            });
        }
        // Echo the requested SKU instead of re-fetching it; one round trip
        // saved at the cost of trusting the write we just confirmed.
        created.sku = Some(sku);
    }

    Ok(created)
}

async fn update_product(
    client: &AdminClient,
    id: ID,
    input: ProductInput,
) -> Result<Product, AppError> {
    input.validate()?;

    // Resolve the existing variant id before writing
    let id = id.0;
    let data: types::ProductData = client
        .query(&queries::GET_PRODUCT, json!({ "id": &id }))
        .await?;
    let product = data
        .product
        .ok_or_else(|| AppError::NotFound(format!("Product not found: {id}")))?;
    let variant = single_variant(&product)
        .ok_or_else(|| AppError::NotFound(format!("Product has no variant: {id}")))?;

    // Omitting `sku` leaves the variant's SKU untouched
    let inventory_item = match &input.sku {
        Some(sku) => json!({ "sku": sku }),
        None => json!({}),
    };

    let mut product_input = product_fields(&input);
    product_input["id"] = json!(product.id);

    // One upstream document carries both root mutation fields; they execute
    // in order, so the returned product already reflects the new SKU.
    let data: types::ProductUpdateData = client
        .query(
            &queries::PRODUCT_UPDATE,
            json!({
                "product": product_input,
                "variant": { "id": variant.id, "inventoryItem": inventory_item },
            }),
        )
        .await?;

    if let Some(variant_payload) = &data.product_variant_update {
        check_user_errors(&variant_payload.user_errors)?;
    }
    let payload = data
        .product_update
        .ok_or_else(|| AppError::Internal("productUpdate returned no payload".to_string()))?;
    check_user_errors(&payload.user_errors)?;
    let updated = payload
        .product
        .ok_or_else(|| AppError::Internal("productUpdate returned no product".to_string()))?;

    Ok(convert::mk_product(updated))
}

/// Upstream `ProductInput` fields shared by create and update.
fn product_fields(input: &ProductInput) -> serde_json::Value {
    let mut fields = json!({
        "title": input.title,
        "status": input.status,
    });
    // Only send descriptionHtml when provided; an explicit null would clear it
    if let Some(html) = &input.description_html {
        fields["descriptionHtml"] = json!(html);
    }
    fields
}

fn single_variant(product: &types::Product) -> Option<types::Variant> {
    product
        .variants
        .as_ref()
        .and_then(|variants| variants.edges.first())
        .map(|edge| edge.node.clone())
}

async fn assign_sku(client: &AdminClient, variant_id: &str, sku: &str) -> Result<(), AppError> {
    let data: types::VariantUpdateData = client
        .query(
            &queries::PRODUCT_VARIANT_UPDATE,
            json!({
                "variant": {
                    "id": variant_id,
                    "inventoryItem": { "sku": sku },
                }
            }),
        )
        .await?;
    if let Some(payload) = data.product_variant_update {
        check_user_errors(&payload.user_errors)?;
    }
    Ok(())
}

fn check_user_errors(errors: &[types::UserError]) -> Result<(), AppError> {
    if errors.is_empty() {
        return Ok(());
    }
    let messages: Vec<String> = errors
        .iter()
        .map(|e| match &e.field {
            Some(field) => format!("{}: {}", field.join("."), e.message),
            None => e.message.clone(),
        })
        .collect();
    Err(AppError::Validation(messages.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_user_errors_joins_field_paths() {
        let errors = vec![
            types::UserError {
                field: Some(vec!["product".to_string(), "title".to_string()]),
                message: "can't be blank".to_string(),
            },
            types::UserError {
                field: None,
                message: "something else".to_string(),
            },
        ];
        let err = check_user_errors(&errors).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: product.title: can't be blank; something else"
        );
    }

    #[test]
    fn test_product_fields_omits_absent_description() {
        let input = ProductInput {
            title: "Shirt".to_string(),
            description_html: None,
            sku: None,
            status: crate::graphql::model::ProductStatus::Draft,
        };
        let fields = product_fields(&input);
        assert_eq!(fields["title"], json!("Shirt"));
        assert_eq!(fields["status"], json!("DRAFT"));
        assert!(fields.get("descriptionHtml").is_none());
    }
}
