use leptos::prelude::*;
use meltmunch::{
    cart::{CartKey, CartLine},
    prices::format_money,
    storefront::Storefront,
};

use crate::browser;

/// "`qty` x `unit price`" caption under a cart line.
pub(crate) fn quantity_caption(line: &CartLine) -> String {
    format!("{} x {}", line.quantity(), line.unit_price())
}

/// Formatted line total, or an empty string if it overflows.
pub(crate) fn line_total_text(line: &CartLine) -> String {
    line.line_total()
        .map(|total| total.to_string())
        .unwrap_or_default()
}

fn checkout(state: RwSignal<Storefront>) {
    match state.with_untracked(Storefront::checkout) {
        Ok(hand_off) => browser::open_in_new_tab(hand_off.url()),
        Err(error) => browser::alert(&error.to_string()),
    }
}

#[component]
fn CartLineRow(state: RwSignal<Storefront>, line: CartLine, selectable: bool) -> impl IntoView {
    let key: CartKey = line.key();

    let checkbox = selectable.then(|| {
        view! {
            <input
                type="checkbox"
                class="h-4 w-4 accent-orange-500"
                prop:checked=line.is_selected()
                on:change=move |_| {
                    state.update(|storefront| {
                        storefront.toggle_selection(key);
                    });
                }
            />
        }
    });

    view! {
        <li class="flex items-center gap-3 py-3">
            {checkbox}
            <div class="flex-1">
                <p class="font-medium">{line.label()}</p>
                <p class="text-xs text-stone-500">{quantity_caption(&line)}</p>
            </div>
            <div class="flex items-center gap-2">
                <button
                    type="button"
                    class="h-7 w-7 rounded-full border"
                    aria-label="Kurangi"
                    on:click=move |_| {
                        state.update(|storefront| {
                            storefront.change_quantity(key, -1);
                        });
                    }
                >
                    "−"
                </button>
                <span class="w-6 text-center text-sm">{line.quantity()}</span>
                <button
                    type="button"
                    class="h-7 w-7 rounded-full border"
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
            <p class="w-24 text-right text-sm font-semibold">{line_total_text(&line)}</p>
        </li>
    }
}

fn address_field(state: RwSignal<Storefront>) -> impl IntoView {
    view! {
        <textarea
            class="w-full rounded-xl border px-3 py-2 text-sm"
            rows="2"
            placeholder="Alamat pengiriman"
            prop:value=move || state.with(|storefront| storefront.delivery_address().to_string())
            on:input=move |event| {
                state.update(|storefront| storefront.set_delivery_address(event_target_value(&event)));
            }
        ></textarea>
    }
}

#[component]
pub(crate) fn CartPanel(state: RwSignal<Storefront>) -> impl IntoView {
    let selectable = state.with_untracked(Storefront::collects_address);

    let lines = move || {
        let lines = state.with(|storefront| storefront.cart().lines().to_vec());

        if lines.is_empty() {
            return view! {
                <p class="py-10 text-center text-sm text-stone-500">"Keranjang kosong"</p>
            }
                .into_any();
        }

        view! {
            <ul class="divide-y">
                {lines
                    .into_iter()
                    .map(|line| view! { <CartLineRow state=state line=line selectable=selectable /> })
                    .collect_view()}
            </ul>
        }
            .into_any()
    };

    let total = move || {
        state
            .with(Storefront::total)
            .map(|total| format_money(&total))
            .unwrap_or_default()
    };

    move || {
        if !state.with(Storefront::is_cart_open) {
            return ().into_any();
        }

        view! {
            <div class="fixed inset-0 z-50 flex justify-end">
                <div
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| state.update(Storefront::close_cart)
                ></div>
                <aside class="relative flex h-full w-full max-w-md flex-col bg-white">
                    <div class="flex items-center justify-between border-b px-4 py-3">
                        <h2 class="text-lg font-semibold">"Keranjang"</h2>
                        <button
                            type="button"
                            class="text-xl leading-none"
                            aria-label="Tutup keranjang"
                            on:click=move |_| state.update(Storefront::close_cart)
                        >
                            "×"
                        </button>
                    </div>
                    <div class="flex-1 overflow-y-auto px-4">{lines}</div>
                    <div class="flex flex-col gap-2 border-t p-4">
                        <div class="flex justify-between font-semibold">
                            <span>"Total"</span>
                            <span>{total}</span>
                        </div>
                        <input
                            type="text"
                            class="w-full rounded-xl border px-3 py-2 text-sm"
                            placeholder="Nama pemesan"
                            prop:value=move || state.with(|storefront| storefront.customer_name().to_string())
                            on:input=move |event| {
                                state.update(|storefront| storefront.set_customer_name(event_target_value(&event)));
                            }
                        />
                        {selectable.then(|| address_field(state))}
                        <button
                            type="button"
                            class="w-full rounded-full bg-green-600 py-2.5 font-semibold text-white hover:bg-green-700"
                            on:click=move |_| checkout(state)
                        >
                            "Konfirmasi WhatsApp"
                        </button>
                    </div>
                </aside>
            </div>
        }
            .into_any()
    }
}
