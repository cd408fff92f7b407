//! Conversions from upstream wire shapes to the local schema types.
//!
//! All functions here are pure. Missing upstream fields become `None` on the
//! local side; nothing fails.

use async_graphql::ID;

use crate::graphql::model;

use super::types;

/// Flatten an upstream product into the local shape.
///
/// The SKU comes from the first (and by invariant only) variant edge and is
/// absent when the product has no variant edge. The image comes from the
/// featured media's preview, absent when there is no media or the preview
/// has not been generated yet.
pub fn mk_product(product: types::Product) -> model::Product {
    let status = match product.status {
        types::ProductStatus::Active => model::ProductStatus::Active,
        types::ProductStatus::Draft => model::ProductStatus::Draft,
        types::ProductStatus::Archived => model::ProductStatus::Archived,
    };

    let sku = product
        .variants
        .and_then(|variants| variants.edges.into_iter().next())
        .and_then(|edge| edge.node.sku);

    model::Product {
        id: ID(product.id),
        status,
        title: product.title,
        handle: product.handle,
        default_cursor: product.default_cursor,
        description_html: product.description_html,
        sku,
        image: product.featured_media.and_then(mk_image),
    }
}

/// Derive the local image from a media object's preview.
///
/// Returns `None` while the media is still processing and has no preview
/// image.
pub fn mk_image(media: types::Media) -> Option<model::Image> {
    let image = media.preview.and_then(|preview| preview.image)?;
    Some(model::Image {
        id: image.id.map(ID),
        alt: media.alt,
        url: image.url,
        width: image.width,
        height: image.height,
    })
}

/// Apply `f` to every node of a connection, in both the edge and node views,
/// leaving cursors and page info untouched.
pub fn map_connection<T, U>(
    connection: types::Connection<T>,
    f: impl Fn(T) -> U,
) -> types::Connection<U> {
    let types::Connection {
        edges,
        nodes,
        page_info,
    } = connection;

    types::Connection {
        edges: edges
            .into_iter()
            .map(|edge| types::Edge {
                cursor: edge.cursor,
                node: f(edge.node),
            })
            .collect(),
        nodes: nodes.into_iter().map(&f).collect(),
        page_info,
    }
}

/// Map an upstream product page into the local connection type.
pub fn product_connection(connection: types::Connection<types::Product>) -> model::ProductConnection {
    let mapped = map_connection(connection, mk_product);
    model::ProductConnection {
        edges: mapped
            .edges
            .into_iter()
            .map(|edge| model::ProductEdge {
                cursor: edge.cursor,
                node: edge.node,
            })
            .collect(),
        nodes: mapped.nodes,
        page_info: mapped.page_info.into(),
    }
}

impl From<types::PageInfo> for model::PageInfo {
    fn from(page_info: types::PageInfo) -> Self {
        Self {
            has_next_page: page_info.has_next_page,
            has_previous_page: page_info.has_previous_page,
            start_cursor: page_info.start_cursor,
            end_cursor: page_info.end_cursor,
        }
    }
}

impl From<types::CountPrecision> for model::CountPrecision {
    fn from(precision: types::CountPrecision) -> Self {
        match precision {
            types::CountPrecision::Exact => Self::Exact,
            types::CountPrecision::AtLeast => Self::AtLeast,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn upstream_product(value: serde_json::Value) -> types::Product {
        serde_json::from_value(value).expect("valid upstream product")
    }

    fn base_product() -> serde_json::Value {
        json!({
            "id": "gid://shopify/Product/1",
            "status": "ACTIVE",
            "title": "Shirt",
            "handle": "shirt",
            "defaultCursor": "cursor-1",
            "descriptionHtml": "<p>A shirt</p>",
            "featuredMedia": null,
            "variants": { "edges": [] }
        })
    }

    #[test]
    fn test_mk_product_flattens_variant_sku() {
        let mut value = base_product();
        value["variants"] = json!({
            "edges": [{ "node": { "id": "gid://shopify/ProductVariant/11", "sku": "ABC" } }]
        });
        let product = mk_product(upstream_product(value));
        assert_eq!(product.sku.as_deref(), Some("ABC"));
        assert_eq!(product.title, "Shirt");
        assert_eq!(product.handle, "shirt");
        assert_eq!(product.default_cursor, "cursor-1");
        assert_eq!(product.status, model::ProductStatus::Active);
    }

    #[test]
    fn test_mk_product_without_variant_edge_has_no_sku() {
        let product = mk_product(upstream_product(base_product()));
        assert_eq!(product.sku, None);
        assert_eq!(product.image, None);
    }

    #[test]
    fn test_mk_product_maps_featured_media() {
        let mut value = base_product();
        value["featuredMedia"] = json!({
            "id": "gid://shopify/MediaImage/5",
            "alt": "front view",
            "preview": {
                "image": {
                    "id": "gid://shopify/ImageSource/9",
                    "url": "https://cdn.example.com/shirt.png",
                    "width": 800,
                    "height": 600
                }
            }
        });
        let product = mk_product(upstream_product(value));
        let image = product.image.expect("image should be mapped");
        assert_eq!(image.alt.as_deref(), Some("front view"));
        assert_eq!(image.url, "https://cdn.example.com/shirt.png");
        assert_eq!(image.width, Some(800));
        assert_eq!(image.height, Some(600));
    }

    #[test]
    fn test_mk_image_absent_while_media_is_processing() {
        let media: types::Media = serde_json::from_value(json!({
            "id": "gid://shopify/MediaImage/5",
            "alt": "front view",
            "preview": { "image": null }
        }))
        .expect("valid media");
        assert_eq!(mk_image(media), None);
    }

    fn sample_connection() -> types::Connection<i64> {
        serde_json::from_value(json!({
            "edges": [
                { "cursor": "a", "node": 1 },
                { "cursor": "b", "node": 2 },
                { "cursor": "c", "node": 3 }
            ],
            "nodes": [1, 2, 3],
            "pageInfo": {
                "hasNextPage": true,
                "hasPreviousPage": false,
                "startCursor": "a",
                "endCursor": "c"
            }
        }))
        .expect("valid connection")
    }

    #[test]
    fn test_map_connection_identity() {
        let connection = sample_connection();
        assert_eq!(map_connection(connection.clone(), |n| n), connection);
    }

    #[test]
    fn test_map_connection_composition() {
        let connection = sample_connection();
        let f = |n: i64| n * 2;
        let g = |n: i64| n + 1;
        assert_eq!(
            map_connection(map_connection(connection.clone(), f), g),
            map_connection(connection, |n| g(f(n)))
        );
    }

    #[test]
    fn test_map_connection_preserves_structure() {
        let connection = sample_connection();
        let mapped = map_connection(connection.clone(), |n| n.to_string());

        assert_eq!(mapped.edges.len(), connection.edges.len());
        assert_eq!(mapped.nodes.len(), connection.nodes.len());
        assert_eq!(mapped.page_info, connection.page_info);
        for (mapped_edge, edge) in mapped.edges.iter().zip(&connection.edges) {
            assert_eq!(mapped_edge.cursor, edge.cursor);
        }
        // Edge and node views stay the same page in the same order
        for (edge, node) in mapped.edges.iter().zip(&mapped.nodes) {
            assert_eq!(&edge.node, node);
        }
    }
}
