use std::{io, str::FromStr};

use clap::Args;
use meltmunch::{
    catalog::Catalog,
    checkout::HandOff,
    products::{ProductId, VariantId},
    storefront::{AddOutcome, Storefront, StorefrontConfig, VariantSupport},
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{cli::source::SourceArgs, errors::CliError};

/// An `--item` value: a product id, optionally followed by `:variant id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ItemSpec {
    product: ProductId,
    variant: Option<VariantId>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid item '{0}', expected <product id> or <product id>:<variant id>")]
pub(crate) struct ItemSpecError(String);

impl FromStr for ItemSpec {
    type Err = ItemSpecError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ItemSpecError(value.to_string());

        let (product, variant) = match value.split_once(':') {
            Some((product, variant)) => (product, Some(variant)),
            None => (value, None),
        };

        let product = product.trim().parse::<u64>().map_err(|_err| invalid())?;
        let variant = variant
            .map(|variant| variant.trim().parse::<u64>().map_err(|_err| invalid()))
            .transpose()?;

        Ok(Self {
            product: ProductId::new(product),
            variant: variant.map(VariantId::new),
        })
    }
}

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Customer name
    #[arg(long)]
    name: String,

    /// Delivery address, required with --variants
    #[arg(long)]
    address: Option<String>,

    /// Enable variant choice and per-line selection
    #[arg(long)]
    variants: bool,

    /// Item to add, as <product id> or <product id>:<variant id>; repeatable
    #[arg(long = "item", required = true)]
    items: Vec<ItemSpec>,

    #[command(flatten)]
    source: SourceArgs,
}

pub(crate) async fn run(args: OrderArgs, mut out: impl io::Write) -> Result<(), CliError> {
    let OrderArgs {
        name,
        address,
        variants,
        items,
        source,
    } = args;

    let catalog = source.load().await?;

    let variant_support = if variants {
        VariantSupport::Enabled
    } else {
        VariantSupport::Disabled
    };

    let hand_off = place_order(
        catalog,
        variant_support,
        &items,
        &name,
        address.as_deref().unwrap_or_default(),
    )?;

    info!(items = items.len(), "order composed");

    writeln!(out, "{}", hand_off.message())?;
    writeln!(out)?;
    writeln!(out, "{}", hand_off.url())?;

    Ok(())
}

fn place_order(
    catalog: Catalog,
    variant_support: VariantSupport,
    items: &[ItemSpec],
    name: &str,
    address: &str,
) -> Result<HandOff, CliError> {
    let mut storefront =
        Storefront::new(StorefrontConfig::default().with_variant_support(variant_support));

    storefront.load_catalog(catalog);

    for item in items {
        add_item(&mut storefront, *item)?;
    }

    storefront.set_customer_name(name);
    storefront.set_delivery_address(address);

    Ok(storefront.checkout()?)
}

fn add_item(storefront: &mut Storefront, item: ItemSpec) -> Result<(), CliError> {
    let unknown_variant = item.variant.filter(|&variant| {
        storefront
            .catalog()
            .product(item.product)
            .is_some_and(|product| product.variants.get(variant).is_none())
    });

    if let Some(variant) = unknown_variant {
        return Err(CliError::UnknownVariant {
            product: item.product,
            variant,
        });
    }

    match storefront.add_to_cart(item.product) {
        AddOutcome::Added(key) => {
            if let Some(variant) = item.variant {
                warn!(%key, %variant, "variants are disabled, added at the base price");
            }

            debug!(%key, "added to cart");
        }
        AddOutcome::PickerOpened => {
            if let Some(variant) = item.variant {
                storefront.highlight_variant(variant);
            }

            if let Some(key) = storefront.confirm_variant() {
                debug!(%key, "added to cart");
            }
        }
        AddOutcome::UnknownProduct => return Err(CliError::UnknownProduct(item.product)),
    }

    Ok(())
}
