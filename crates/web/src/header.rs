use leptos::prelude::*;
use meltmunch::storefront::Storefront;

/// Text on the cart badge; hidden while the cart is empty.
pub(crate) fn badge_text(item_count: u64) -> Option<String> {
    (item_count > 0).then(|| item_count.to_string())
}

#[component]
pub(crate) fn Header(state: RwSignal<Storefront>) -> impl IntoView {
    let shop_name = state.with_untracked(|storefront| storefront.config().shop_name.clone());

    view! {
        <header class="sticky top-0 z-30 bg-white/90 shadow-sm backdrop-blur">
            <div class="mx-auto flex max-w-5xl items-center justify-between px-4 py-3">
                <h1 class="text-xl font-bold tracking-tight text-orange-600">{shop_name}</h1>
                <button
                    type="button"
                    class="relative rounded-full p-2 hover:bg-orange-100"
                    aria-label="Buka keranjang"
                    on:click=move |_| state.update(Storefront::open_cart)
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="lucide lucide-shopping-cart"
                        aria-hidden="true"
                    >
                        <circle cx="8" cy="21" r="1"></circle>
                        <circle cx="19" cy="21" r="1"></circle>
                        <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"></path>
                    </svg>
                    {move || {
                        badge_text(state.with(Storefront::item_count))
                            .map_or_else(
                                || ().into_any(),
                                |count| {
                                    view! {
                                        <span class="absolute -right-1 -top-1 rounded-full bg-red-500 px-1.5 text-xs font-semibold text-white">
                                            {count}
                                        </span>
                                    }
                                        .into_any()
                                },
                            )
                    }}
                </button>
            </div>
        </header>
    }
}
