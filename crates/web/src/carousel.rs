use leptos::prelude::*;
use meltmunch::{carousel::AUTO_ADVANCE_INTERVAL, storefront::Storefront};

use crate::browser;

/// CSS transform that brings banner `index` into view.
pub(crate) fn strip_transform(index: usize) -> String {
    format!("transform: translateX(-{}%)", index.saturating_mul(100))
}

fn stop_timer(timer: StoredValue<Option<IntervalHandle>>) {
    timer.update_value(|slot| {
        if let Some(handle) = slot.take() {
            handle.clear();
        }
    });
}

#[component]
pub(crate) fn PromoCarousel(state: RwSignal<Storefront>) -> impl IntoView {
    let banner_count = Memo::new(move |_| state.with(|storefront| storefront.carousel().len()));
    let timer = StoredValue::new(None::<IntervalHandle>);

    Effect::new(move |_| {
        let count = banner_count.get();

        stop_timer(timer);

        if count > 0 {
            let handle = browser::start_interval(
                move || {
                    state.update(|storefront| {
                        storefront.advance_carousel();
                    });
                },
                AUTO_ADVANCE_INTERVAL,
            );

            timer.set_value(handle);
        }
    });

    on_cleanup(move || stop_timer(timer));

    view! {
        <section class="relative my-4 overflow-hidden rounded-2xl bg-orange-100">
            {move || {
                let (banners, index) = state
                    .with(|storefront| {
                        (storefront.catalog().banners().to_vec(), storefront.carousel().index())
                    });

                if banners.is_empty() {
                    return view! {
                        <div class="flex h-40 items-center justify-center text-sm text-orange-700">
                            "Memuat Promo Spesial..."
                        </div>
                    }
                        .into_any();
                }

                let dots = (0..banners.len())
                    .map(|dot| {
                        let class = if dot == index {
                            "h-2 w-6 rounded-full bg-white"
                        } else {
                            "h-2 w-2 rounded-full bg-white/50"
                        };

                        view! { <span class=class></span> }
                    })
                    .collect_view();

                let slides = banners
                    .into_iter()
                    .map(|banner| {
                        view! {
                            <img
                                src=banner.image_url
                                alt="Promo"
                                class="h-40 w-full flex-none object-cover sm:h-56"
                            />
                        }
                    })
                    .collect_view();

                view! {
                    <div
                        class="flex transition-transform duration-500"
                        style=strip_transform(index)
                    >
                        {slides}
                    </div>
                    <button
                        type="button"
                        class="absolute left-2 top-1/2 -translate-y-1/2 rounded-full bg-white/70 px-2"
                        aria-label="Promo sebelumnya"
                        on:click=move |_| {
                            state.update(|storefront| {
                                storefront.previous_banner();
                            });
                        }
                    >
                        "‹"
                    </button>
                    <button
                        type="button"
                        class="absolute right-2 top-1/2 -translate-y-1/2 rounded-full bg-white/70 px-2"
                        aria-label="Promo berikutnya"
                        on:click=move |_| {
                            state.update(|storefront| {
                                storefront.next_banner();
                            });
                        }
                    >
                        "›"
                    </button>
                    <div class="absolute bottom-2 flex w-full justify-center gap-1">{dots}</div>
                }
                    .into_any()
            }}
        </section>
    }
}
