//! Product admin backend.
//!
//! A GraphQL API server that proxies a small product-management schema to
//! the Shopify Admin GraphQL API. Resolvers are direct pass-throughs: one
//! or more upstream calls composed through [`shopify::AdminClient`], with
//! responses reshaped by the pure mappers in [`shopify::convert`]. The
//! upstream platform owns persistence, pagination cursors, and concurrent
//! write semantics; this service holds no state of its own.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod graphql;
pub mod routes;
pub mod shopify;
