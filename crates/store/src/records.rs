//! Store Records
//!
//! Rows as returned by the store, before validation.

use meltmunch::{
    catalog::Banner,
    prices::Price,
    products::{Product, ProductId, Variant, VariantId, Variants},
};
use serde::Deserialize;

use crate::errors::RecordError;

/// Product row with its embedded variant rows.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default)]
    pub variants: Vec<VariantRecord>,
}

/// Variant row
#[derive(Debug, Clone, Deserialize)]
pub struct VariantRecord {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

/// Banner row
#[derive(Debug, Clone, Deserialize)]
pub struct BannerRecord {
    #[serde(default)]
    pub image_url: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = RecordError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let id = u64::try_from(record.id).map_err(|_err| RecordError::NegativeId(record.id))?;
        let price = u64::try_from(record.price)
            .map_err(|_err| RecordError::NegativePrice { product: record.id })?;

        let variants = record
            .variants
            .into_iter()
            .map(|variant| {
                let variant_id = u64::try_from(variant.id)
                    .map_err(|_err| RecordError::NegativeId(variant.id))?;
                let variant_price =
                    u64::try_from(variant.price).map_err(|_err| RecordError::NegativeVariantPrice {
                        product: record.id,
                        variant: variant.id,
                    })?;

                Ok(Variant::new(
                    VariantId::new(variant_id),
                    variant.name,
                    Price::new(variant_price),
                ))
            })
            .collect::<Result<Vec<_>, RecordError>>()?;

        let product = Product::new(
            ProductId::new(id),
            record.name,
            Price::new(price),
            record.category,
        )
        .with_description(record.description.unwrap_or_default())
        .with_variants(Variants::from_list(variants));

        Ok(match record.image_url {
            Some(image_url) if !image_url.is_empty() => product.with_image_url(image_url),
            _ => product,
        })
    }
}

impl BannerRecord {
    /// Banner for this row, if it has an image.
    pub fn into_banner(self) -> Option<Banner> {
        self.image_url
            .filter(|image_url| !image_url.is_empty())
            .map(Banner::new)
    }
}
