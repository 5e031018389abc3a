//! Integration test walking the shipped demo catalog from browsing to hand-off.
//!
//! Simple mode order: 2x Dimsum Ayam (Rp 15.000) + 1x Pudding Mangga (Rp 10.000) = Rp 40.000.
//!
//! Variant mode order: Dumpling Udang (Pedas, Rp 19.000) + 2x Bakpao (Keju, Rp 14.000),
//! with the Dimsum Beku line unticked, = Rp 47.000.

use std::path::PathBuf;

use testresult::TestResult;

use meltmunch::prelude::*;

fn demo_catalog() -> Result<Catalog, FixtureError> {
    Fixture::with_base_path(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures"))
        .catalog("demo")
}

#[test]
fn simple_mode_order() -> TestResult {
    let mut storefront = Storefront::new(StorefrontConfig::default());
    storefront.load_catalog(demo_catalog()?);

    let savoury: Vec<ProductId> = storefront.visible_products().map(|product| product.id).collect();
    assert_eq!(
        savoury,
        [ProductId::new(1), ProductId::new(2), ProductId::new(3)]
    );

    storefront.add_to_cart(ProductId::new(1));
    storefront.add_to_cart(ProductId::new(1));

    storefront.select_category("makanan manis");
    storefront.add_to_cart(ProductId::new(5));

    assert_eq!(storefront.item_count(), 3);
    assert_eq!(format_money(&storefront.total()?), "Rp 40.000");

    assert_eq!(storefront.checkout(), Err(CheckoutError::MissingName));

    storefront.set_customer_name("Ana");
    let hand_off = storefront.checkout()?;

    assert_eq!(
        hand_off.message(),
        "Halo, saya Ana ingin memesan di Melt & Munch:\n• Dimsum Ayam x2\n• Pudding Mangga x1\n\nTotal: Rp 40.000"
    );
    assert!(hand_off.url().starts_with("https://wa.me/6285157745547?text=Halo%2C%20saya%20Ana"));

    Ok(())
}

#[test]
fn variant_mode_order() -> TestResult {
    let mut storefront =
        Storefront::new(StorefrontConfig::default().with_variant_support(VariantSupport::Enabled));
    storefront.load_catalog(demo_catalog()?);

    assert_eq!(storefront.add_to_cart(ProductId::new(2)), AddOutcome::PickerOpened);
    storefront.highlight_variant(VariantId::new(2));
    storefront.confirm_variant();

    storefront.close_cart();
    for _ in 0..2 {
        storefront.add_to_cart(ProductId::new(4));
        storefront.highlight_variant(VariantId::new(4));
        storefront.confirm_variant();
    }

    let frozen = storefront.add_to_cart(ProductId::new(6));
    assert_eq!(frozen, AddOutcome::Added(CartKey::product(ProductId::new(6))));
    storefront.toggle_selection(CartKey::product(ProductId::new(6)));

    assert!(storefront.is_cart_open());
    assert_eq!(storefront.cart().len(), 3);
    assert_eq!(format_money(&storefront.total()?), "Rp 47.000");

    storefront.set_customer_name("Budi");
    assert_eq!(storefront.checkout(), Err(CheckoutError::MissingAddress));

    storefront.set_delivery_address("Jl. Kenanga 5, Bandung");
    let hand_off = storefront.checkout()?;

    assert_eq!(
        hand_off.message(),
        "Halo, saya Budi ingin memesan di Melt & Munch:\nAlamat: Jl. Kenanga 5, Bandung\n• Dumpling Udang (Pedas) x1\n• Bakpao (Keju) x2\n\nTotal: Rp 47.000"
    );

    Ok(())
}

#[test]
fn demo_banners_rotate() -> TestResult {
    let mut storefront = Storefront::default();
    storefront.load_catalog(demo_catalog()?);

    for _ in 0..4 {
        storefront.advance_carousel();
    }

    assert_eq!(storefront.carousel().index(), 1);
    assert_eq!(
        storefront.current_banner().map(|banner| banner.image_url.as_str()),
        Some("/promo/promo-2.jpg")
    );

    Ok(())
}
