//! Catalog

use rustc_hash::FxHashMap;

use crate::products::{Product, ProductId};

/// A promotional banner shown in the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Banner image reference
    pub image_url: String,
}

impl Banner {
    /// Create a new banner.
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
        }
    }
}

/// Products and promo banners as returned by the catalog store.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    banners: Vec<Banner>,
    index: FxHashMap<ProductId, usize>,
}

impl Catalog {
    /// Create a catalog, keeping the store's ordering.
    ///
    /// When two products share an id the first one wins lookups.
    pub fn new(products: Vec<Product>, banners: Vec<Banner>) -> Self {
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            index.entry(product.id).or_insert(position);
        }

        Self {
            products,
            banners,
            index,
        }
    }

    /// All products in store order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All active banners in store order.
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|position| self.products.get(*position))
    }

    /// Products whose category matches `category`, in store order.
    pub fn filter_by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products
            .iter()
            .filter(move |product| product.in_category(category))
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
