//! Store connection settings

use clap::Args;

/// Default products table.
pub const DEFAULT_PRODUCTS_TABLE: &str = "dimsum_menu";

/// Default variants table, embedded under each product.
pub const DEFAULT_VARIANTS_TABLE: &str = "menu_variants";

/// Default promo banners table.
pub const DEFAULT_BANNERS_TABLE: &str = "promo_banners";

/// Catalog store settings.
#[derive(Debug, Clone, Args)]
pub struct StoreConfig {
    /// Store base URL, e.g. `https://xyz.supabase.co`
    #[arg(long, env = "MELTMUNCH_STORE_URL")]
    pub store_url: String,

    /// Store access key
    #[arg(long, env = "MELTMUNCH_STORE_KEY", hide_env_values = true)]
    pub store_key: String,

    /// Products table name [default: dimsum_menu]
    #[arg(long, env = "MELTMUNCH_PRODUCTS_TABLE")]
    pub products_table: Option<String>,

    /// Variants table name [default: menu_variants]
    #[arg(long, env = "MELTMUNCH_VARIANTS_TABLE")]
    pub variants_table: Option<String>,

    /// Promo banners table name [default: promo_banners]
    #[arg(long, env = "MELTMUNCH_BANNERS_TABLE")]
    pub banners_table: Option<String>,
}

impl StoreConfig {
    /// Settings for the given endpoint with the default table names.
    pub fn new(store_url: impl Into<String>, store_key: impl Into<String>) -> Self {
        Self {
            store_url: store_url.into(),
            store_key: store_key.into(),
            products_table: None,
            variants_table: None,
            banners_table: None,
        }
    }

    /// Products table, falling back to [`DEFAULT_PRODUCTS_TABLE`].
    pub fn products_table(&self) -> &str {
        self.products_table.as_deref().unwrap_or(DEFAULT_PRODUCTS_TABLE)
    }

    /// Variants table, falling back to [`DEFAULT_VARIANTS_TABLE`].
    pub fn variants_table(&self) -> &str {
        self.variants_table.as_deref().unwrap_or(DEFAULT_VARIANTS_TABLE)
    }

    /// Banners table, falling back to [`DEFAULT_BANNERS_TABLE`].
    pub fn banners_table(&self) -> &str {
        self.banners_table.as_deref().unwrap_or(DEFAULT_BANNERS_TABLE)
    }

    /// Query URL for the product list with nested variants.
    pub fn products_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*,variants:{}(*)&order=id",
            self.base_url(),
            self.products_table(),
            self.variants_table()
        )
    }

    /// Query URL for the active banner list.
    pub fn banners_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=image_url&active=eq.true",
            self.base_url(),
            self.banners_table()
        )
    }

    fn base_url(&self) -> &str {
        self.store_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_url_embeds_variants() {
        let config = StoreConfig::new("https://shop.example.com/", "key");

        assert_eq!(
            config.products_url(),
            "https://shop.example.com/rest/v1/dimsum_menu?select=*,variants:menu_variants(*)&order=id"
        );
    }

    #[test]
    fn banners_url_filters_active() {
        let mut config = StoreConfig::new("https://shop.example.com", "key");
        config.banners_table = Some("banners".to_string());

        assert_eq!(
            config.banners_url(),
            "https://shop.example.com/rest/v1/banners?select=image_url&active=eq.true"
        );
    }
}
