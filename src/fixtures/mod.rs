//! Fixtures
//!
//! YAML catalog files, used by tests and to run the storefront offline.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Banner, Catalog},
    prices::Price,
    products::{Product, ProductId, Variant, VariantId, Variants},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Catalog fixture file
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in store order
    #[serde(default)]
    pub products: Vec<ProductFixture>,

    /// Active banners in store order
    #[serde(default)]
    pub banners: Vec<BannerFixture>,
}

/// Product entry
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Base price in whole rupiah
    pub price: Price,

    /// Category label
    pub category: String,

    /// Image reference
    #[serde(default)]
    pub image_url: Option<String>,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Variants in display order
    #[serde(default)]
    pub variants: Vec<VariantFixture>,
}

/// Variant entry
#[derive(Debug, Deserialize)]
pub struct VariantFixture {
    /// Variant identifier
    pub id: VariantId,

    /// Variant name
    pub name: String,

    /// Price in whole rupiah
    pub price: Price,
}

/// Banner entry
#[derive(Debug, Deserialize)]
pub struct BannerFixture {
    /// Banner image reference
    pub image_url: String,
}

impl From<ProductFixture> for Product {
    fn from(fixture: ProductFixture) -> Self {
        let variants = Variants::from_list(
            fixture
                .variants
                .into_iter()
                .map(|variant| Variant::new(variant.id, variant.name, variant.price)),
        );

        let product = Product::new(fixture.id, fixture.name, fixture.price, fixture.category)
            .with_description(fixture.description.unwrap_or_default())
            .with_variants(variants);

        match fixture.image_url {
            Some(image_url) => product.with_image_url(image_url),
            None => product,
        }
    }
}

impl From<CatalogFixture> for Catalog {
    fn from(fixture: CatalogFixture) -> Self {
        Catalog::new(
            fixture.products.into_iter().map(Product::from).collect(),
            fixture
                .banners
                .into_iter()
                .map(|banner| Banner::new(banner.image_url))
                .collect(),
        )
    }
}

/// Parse a catalog from YAML.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or a price is negative.
pub fn parse_catalog(contents: &str) -> Result<Catalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(contents)?;

    Ok(fixture.into())
}

/// Read and parse a catalog fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, FixtureError> {
    let contents = fs::read_to_string(path)?;

    parse_catalog(&contents)
}

/// Named catalog fixtures under a base directory.
#[derive(Debug, Clone)]
pub struct Fixture {
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Use the default `./fixtures` directory.
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Use a custom base directory.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load `catalog/{name}.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn catalog(&self, name: &str) -> Result<Catalog, FixtureError> {
        load_catalog(self.base_path.join("catalog").join(format!("{name}.yml")))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const CATALOG: &str = r"
products:
  - id: 1
    name: Siomay
    price: 15000
    category: Makanan Asin
    image_url: /img/siomay.jpg
  - id: 2
    name: Bakpao
    price: 12000
    category: Makanan Manis
    description: Lembut
    variants:
      - id: 10
        name: Coklat
        price: 12000
      - id: 11
        name: Keju
        price: 14000
banners:
  - image_url: /img/promo.jpg
";

    #[test]
    fn parses_products_variants_and_banners() -> TestResult {
        let catalog = parse_catalog(CATALOG)?;

        let siomay = catalog.product(ProductId::new(1)).ok_or("missing siomay")?;
        let bakpao = catalog.product(ProductId::new(2)).ok_or("missing bakpao")?;

        assert_eq!(siomay.image_url.as_deref(), Some("/img/siomay.jpg"));
        assert!(!siomay.variants.has_variants());
        assert_eq!(bakpao.description, "Lembut");
        assert_eq!(bakpao.variants.len(), 2);
        assert_eq!(
            bakpao.variants.first().map(|variant| variant.name.as_str()),
            Some("Coklat")
        );
        assert_eq!(catalog.banners().len(), 1);

        Ok(())
    }

    #[test]
    fn missing_sections_default_to_empty() -> TestResult {
        let catalog = parse_catalog("products: []")?;

        assert!(catalog.is_empty());
        assert!(catalog.banners().is_empty());

        Ok(())
    }

    #[test]
    fn negative_price_is_rejected() {
        let result = parse_catalog(
            "products:\n  - { id: 1, name: X, price: -5, category: Snack }\n",
        );

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Fixture::with_base_path("/nonexistent").catalog("demo");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
