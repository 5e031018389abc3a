//! Melt & Munch storefront page

use leptos::{logging::warn, prelude::*, task};
use meltmunch::{
    catalog::Catalog,
    storefront::{Storefront, StorefrontConfig, VariantSupport},
};
use meltmunch_store::{PostgrestCatalogStore, StoreConfig, load_catalog};

mod browser;
mod carousel;
mod cart;
mod header;
mod menu;
mod picker;

/// Store credentials baked in at build time.
fn store_config() -> Option<StoreConfig> {
    let url = option_env!("MELTMUNCH_STORE_URL")?;
    let key = option_env!("MELTMUNCH_STORE_KEY")?;

    Some(StoreConfig::new(url, key))
}

fn storefront_config() -> StorefrontConfig {
    let variant_support = match option_env!("MELTMUNCH_VARIANTS") {
        Some("1" | "true") => VariantSupport::Enabled,
        _ => VariantSupport::Disabled,
    };

    StorefrontConfig::default().with_variant_support(variant_support)
}

async fn fetch_catalog() -> Catalog {
    let Some(config) = store_config() else {
        warn!("MELTMUNCH_STORE_URL or MELTMUNCH_STORE_KEY not set at build time; catalog is empty");

        return Catalog::default();
    };

    load_catalog(&PostgrestCatalogStore::new(config)).await
}

/// Storefront page shell.
#[component]
fn App() -> impl IntoView {
    let state = RwSignal::new(Storefront::new(storefront_config()));

    task::spawn_local(async move {
        let catalog = fetch_catalog().await;

        state.update(|storefront| storefront.load_catalog(catalog));
    });

    view! {
        <main class="min-h-screen bg-orange-50 pb-16 text-stone-900">
            <header::Header state=state />
            <div class="mx-auto max-w-5xl px-4">
                <carousel::PromoCarousel state=state />
                <menu::CategoryNav state=state />
                <menu::ProductGrid state=state />
            </div>
            <picker::VariantPickerModal state=state />
            <cart::CartPanel state=state />
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
