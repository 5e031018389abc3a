use leptos::prelude::*;
use meltmunch::storefront::Storefront;

use crate::menu::image_src;

#[component]
pub(crate) fn VariantPickerModal(state: RwSignal<Storefront>) -> impl IntoView {
    move || {
        let Some((product, highlighted)) = state.with(|storefront| {
            let picker = storefront.picker()?;
            let product = storefront.catalog().product(picker.product)?.clone();

            Some((product, picker.highlighted))
        }) else {
            return ().into_any();
        };

        let image = image_src(&product).to_string();

        let options = product
            .variants
            .iter()
            .map(|variant| {
                let variant_id = variant.id;
                let class = if Some(variant_id) == highlighted {
                    "flex w-full justify-between rounded-xl border-2 border-orange-500 bg-orange-50 px-3 py-2"
                } else {
                    "flex w-full justify-between rounded-xl border border-stone-200 px-3 py-2"
                };

                view! {
                    <button
                        type="button"
                        class=class
                        on:click=move |_| state.update(|storefront| storefront.highlight_variant(variant_id))
                    >
                        <span>{variant.name.clone()}</span>
                        <span class="font-semibold">{variant.price.to_string()}</span>
                    </button>
                }
            })
            .collect_view();

        view! {
            <div class="fixed inset-0 z-40 flex items-end justify-center bg-black/40 sm:items-center">
                <div class="w-full max-w-md rounded-t-2xl bg-white p-4 sm:rounded-2xl">
                    <div class="mb-3 flex items-start gap-3">
                        <img src=image alt=product.name.clone() class="h-16 w-16 rounded-lg object-cover" />
                        <div class="flex-1">
                            <h2 class="font-semibold">{product.name.clone()}</h2>
                            <p class="text-xs text-stone-500">"Pilih varian"</p>
                        </div>
                        <button
                            type="button"
                            class="text-xl leading-none"
                            aria-label="Tutup"
                            on:click=move |_| state.update(Storefront::close_picker)
                        >
                            "×"
                        </button>
                    </div>
                    <div class="flex flex-col gap-2">{options}</div>
                    <button
                        type="button"
                        class="mt-4 w-full rounded-full bg-orange-500 py-2 font-semibold text-white"
                        on:click=move |_| {
                            state.update(|storefront| {
                                storefront.confirm_variant();
                            });
                        }
                    >
                        "Tambah ke Keranjang"
                    </button>
                </div>
            </div>
        }
            .into_any()
    }
}
