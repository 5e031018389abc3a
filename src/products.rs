//! Products

use std::fmt;

use serde::Deserialize;
use smallvec::SmallVec;

use crate::prices::Price;

/// Product identifier, as assigned by the catalog store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Variant identifier, unique within its product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct VariantId(u64);

impl VariantId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A priced sub-option of a product, e.g. a size or a flavour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Variant identifier
    pub id: VariantId,

    /// Variant name
    pub name: String,

    /// Price charged instead of the product's base price
    pub price: Price,
}

impl Variant {
    /// Create a new variant.
    pub fn new(id: VariantId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// The variants a product can be bought in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Variants {
    /// Sold as-is at the base price.
    #[default]
    NoVariant,

    /// Sold as one of these variants, in display order.
    WithVariants(SmallVec<[Variant; 4]>),
}

impl Variants {
    /// Build from an ordered list; an empty list means the product has no variants.
    pub fn from_list(variants: impl IntoIterator<Item = Variant>) -> Self {
        let variants: SmallVec<[Variant; 4]> = variants.into_iter().collect();

        if variants.is_empty() {
            Variants::NoVariant
        } else {
            Variants::WithVariants(variants)
        }
    }

    /// The variant highlighted when the picker opens.
    pub fn first(&self) -> Option<&Variant> {
        match self {
            Variants::NoVariant => None,
            Variants::WithVariants(variants) => variants.first(),
        }
    }

    /// Look up a variant by id.
    pub fn get(&self, id: VariantId) -> Option<&Variant> {
        self.iter().find(|variant| variant.id == id)
    }

    /// Iterate the variants in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        let variants: &[Variant] = match self {
            Variants::NoVariant => &[],
            Variants::WithVariants(variants) => variants,
        };

        variants.iter()
    }

    /// Whether picking a variant is required before adding to the cart.
    pub fn has_variants(&self) -> bool {
        matches!(self, Variants::WithVariants(_))
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if there are no variants.
    pub fn is_empty(&self) -> bool {
        !self.has_variants()
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Base price
    pub price: Price,

    /// Image reference, if one was uploaded
    pub image_url: Option<String>,

    /// Free-text description
    pub description: String,

    /// Category label, compared case-insensitively and trimmed
    pub category: String,

    /// Variants the product is sold in
    pub variants: Variants,
}

impl Product {
    /// Create a product without image, description or variants.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_url: None,
            description: String::new(),
            category: category.into(),
            variants: Variants::NoVariant,
        }
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the variants.
    #[must_use]
    pub fn with_variants(mut self, variants: Variants) -> Self {
        self.variants = variants;
        self
    }

    /// Whether this product belongs to `category`, ignoring case and surrounding whitespace.
    pub fn in_category(&self, category: &str) -> bool {
        same_category(&self.category, category)
    }

    /// Unit price for the given variant, or the base price when none is chosen.
    pub fn price_for(&self, variant: Option<&Variant>) -> Price {
        variant.map_or(self.price, |variant| variant.price)
    }
}

/// Compare two category labels case-insensitively, ignoring surrounding whitespace.
pub fn same_category(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bakpao() -> Product {
        Product::new(ProductId::new(7), "Bakpao", Price::new(12_000), "Makanan Manis")
            .with_variants(Variants::from_list([
                Variant::new(VariantId::new(1), "Coklat", Price::new(12_000)),
                Variant::new(VariantId::new(2), "Keju", Price::new(14_000)),
            ]))
    }

    #[test]
    fn empty_variant_list_is_no_variant() {
        let variants = Variants::from_list([]);

        assert_eq!(variants, Variants::NoVariant);
        assert!(!variants.has_variants());
        assert!(variants.first().is_none());
        assert_eq!(variants.len(), 0);
    }

    #[test]
    fn first_variant_keeps_list_order() {
        let product = bakpao();

        assert_eq!(
            product.variants.first().map(|variant| variant.name.as_str()),
            Some("Coklat")
        );
        assert_eq!(product.variants.len(), 2);
    }

    #[test]
    fn variant_lookup_by_id() {
        let product = bakpao();

        assert_eq!(
            product
                .variants
                .get(VariantId::new(2))
                .map(|variant| variant.price),
            Some(Price::new(14_000))
        );
        assert!(product.variants.get(VariantId::new(9)).is_none());
    }

    #[test]
    fn variant_price_overrides_base_price() {
        let product = bakpao();
        let keju = product.variants.get(VariantId::new(2));

        assert_eq!(product.price_for(keju), Price::new(14_000));
        assert_eq!(product.price_for(None), Price::new(12_000));
    }

    #[test]
    fn category_match_ignores_case_and_whitespace() {
        let product = Product::new(ProductId::new(1), "Keripik", Price::new(5_000), " Snack ");

        assert!(product.in_category("snack"));
        assert!(product.in_category("SNACK  "));
        assert!(!product.in_category("snacks"));
    }

    #[test]
    fn ids_display_as_raw_numbers() {
        assert_eq!(ProductId::new(12).to_string(), "12");
        assert_eq!(VariantId::new(3).to_string(), "3");
    }
}
