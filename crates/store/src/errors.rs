//! Catalog store errors.

use thiserror::Error;

/// Errors that can occur when talking to the catalog store.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store returned a non-2xx response.
    #[error("unexpected response from catalog store: {0}")]
    UnexpectedResponse(String),
}

/// A row that cannot be turned into a catalog entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Product price is negative.
    #[error("product {product} has a negative price")]
    NegativePrice {
        /// Product id
        product: i64,
    },

    /// Variant price is negative.
    #[error("variant {variant} of product {product} has a negative price")]
    NegativeVariantPrice {
        /// Product id
        product: i64,

        /// Variant id
        variant: i64,
    },

    /// Identifier is negative.
    #[error("row has a negative id: {0}")]
    NegativeId(i64),
}
