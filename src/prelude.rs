//! Melt & Munch prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    carousel::{AUTO_ADVANCE_INTERVAL, Carousel},
    cart::{Cart, CartKey, CartLine, LineChange, LineScope},
    catalog::{Banner, Catalog},
    checkout::{CheckoutError, HandOff, HandOffTarget, OrderLine, OrderRequest, OrderSummary},
    fixtures::{Fixture, FixtureError, load_catalog, parse_catalog},
    prices::{Price, PriceError, format_money, store_currency, sum_money},
    products::{Product, ProductId, Variant, VariantId, Variants},
    storefront::{
        AddOutcome, PLACEHOLDER_IMAGE, Storefront, StorefrontConfig, VariantPicker,
        VariantSupport,
    },
};
