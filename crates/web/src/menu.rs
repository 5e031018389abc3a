use leptos::prelude::*;
use meltmunch::{
    cart::CartKey,
    products::{Product, same_category},
    storefront::{PLACEHOLDER_IMAGE, Storefront, VariantSupport},
};

/// Image reference for a product card.
pub(crate) fn image_src(product: &Product) -> &str {
    product
        .image_url
        .as_deref()
        .filter(|image_url| !image_url.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// Label on a product card's buy button.
pub(crate) fn buy_label(product: &Product, variant_support: VariantSupport) -> &'static str {
    match variant_support {
        VariantSupport::Enabled if product.variants.has_variants() => "Pilih Varian",
        VariantSupport::Enabled | VariantSupport::Disabled => "Beli",
    }
}

#[component]
pub(crate) fn CategoryNav(state: RwSignal<Storefront>) -> impl IntoView {
    let categories = state.with_untracked(|storefront| storefront.config().categories.clone());

    view! {
        <nav class="my-4 flex gap-2 overflow-x-auto">
            {categories
                .into_iter()
                .map(|category| {
                    let label = category.clone();
                    let is_selected = {
                        let category = category.clone();

                        move || {
                            state.with(|storefront| {
                                same_category(storefront.selected_category(), &category)
                            })
                        }
                    };

                    view! {
                        <button
                            type="button"
                            class="whitespace-nowrap rounded-full px-4 py-1.5 text-sm font-medium"
                            class:bg-orange-500=is_selected.clone()
                            class:text-white=is_selected
                            on:click=move |_| {
                                state.update(|storefront| storefront.select_category(category.clone()));
                            }
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn QuantityStepper(state: RwSignal<Storefront>, key: CartKey, quantity: u32) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between rounded-full border border-orange-300">
            <button
                type="button"
                class="px-3 py-1"
                aria-label="Kurangi"
                on:click=move |_| {
                    state.update(|storefront| {
                        storefront.change_quantity(key, -1);
                    });
                }
            >
                "−"
            </button>
            <span class="text-sm font-semibold">{quantity}</span>
            <button
                type="button"
                class="px-3 py-1"
                aria-label="Tambah"
                on:click=move |_| {
                    state.update(|storefront| {
                        storefront.change_quantity(key, 1);
                    });
                }
            >
                "+"
            </button>
        </div>
    }
}

#[component]
fn ProductCard(state: RwSignal<Storefront>, product: Product) -> impl IntoView {
    let id = product.id;
    let variant_support = state.with_untracked(|storefront| storefront.config().variant_support);
    let label = buy_label(&product, variant_support);
    let image = image_src(&product).to_string();

    let controls = move || {
        let quantity = state.with(|storefront| storefront.quantity_in_cart(id));

        if variant_support == VariantSupport::Disabled && quantity > 0 {
            return view! {
                <QuantityStepper state=state key=CartKey::product(id) quantity=quantity />
            }
                .into_any();
        }

        view! {
            <button
                type="button"
                class="w-full rounded-full bg-orange-500 py-1.5 text-sm font-semibold text-white hover:bg-orange-600"
                on:click=move |_| {
                    state.update(|storefront| {
                        storefront.add_to_cart(id);
                    });
                }
            >
                {label}
            </button>
        }
            .into_any()
    };

    view! {
        <article class="flex flex-col overflow-hidden rounded-2xl bg-white shadow-sm">
            <img src=image alt=product.name.clone() class="aspect-square w-full object-cover" />
            <div class="flex flex-1 flex-col gap-1 p-3">
                <h3 class="font-semibold leading-tight">{product.name.clone()}</h3>
                <p class="line-clamp-2 text-xs text-stone-500">{product.description.clone()}</p>
                <p class="mt-auto font-bold text-orange-600">{product.price.to_string()}</p>
                {controls}
            </div>
        </article>
    }
}

#[component]
pub(crate) fn ProductGrid(state: RwSignal<Storefront>) -> impl IntoView {
    view! {
        <section class="grid grid-cols-2 gap-3 sm:grid-cols-3 md:grid-cols-4">
            {move || {
                state
                    .with(|storefront| storefront.visible_products().cloned().collect::<Vec<_>>())
                    .into_iter()
                    .map(|product| view! { <ProductCard state=state product=product /> })
                    .collect_view()
            }}
        </section>
    }
}
