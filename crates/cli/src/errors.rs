//! CLI errors.

use std::io;

use meltmunch::{
    checkout::CheckoutError,
    fixtures::FixtureError,
    products::{ProductId, VariantId},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("no catalog source: pass --fixture or --store-url and --store-key")]
    NoCatalogSource,

    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),

    #[error("product {product} has no variant {variant}")]
    UnknownVariant {
        product: ProductId,
        variant: VariantId,
    },

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
