//! Storefront
//!
//! The page controller: holds the catalog, the cart, the shopper's input and the
//! view state, and implements every user action as a synchronous mutation.

use rusty_money::{Money, iso::Currency};

use crate::{
    carousel::Carousel,
    cart::{Cart, CartKey, LineChange, LineScope},
    catalog::{Banner, Catalog},
    checkout::{CheckoutError, HandOff, HandOffTarget, OrderRequest},
    prices::PriceError,
    products::{Product, ProductId, VariantId},
};

/// Shop name used in order messages.
pub const DEFAULT_SHOP_NAME: &str = "Melt & Munch";

/// WhatsApp number orders are handed off to.
pub const DEFAULT_HANDOFF_PHONE: &str = "6285157745547";

/// Categories shown in the navigation bar, in display order.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Makanan Asin", "Makanan Manis", "Frozen Food"];

/// Image shown for products without one.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Whether shoppers choose variants and tick the lines they want to order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VariantSupport {
    /// Products are added at their base price and every cart line is ordered.
    #[default]
    Disabled,

    /// Products with variants open the picker, lines can be unticked and a
    /// delivery address is required.
    Enabled,
}

/// Storefront settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Shop name used in order messages
    pub shop_name: String,

    /// WhatsApp number, international format without `+`
    pub handoff_phone: String,

    /// Categories in navigation order; the first is selected initially
    pub categories: Vec<String>,

    /// Variant handling mode
    pub variant_support: VariantSupport,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            handoff_phone: DEFAULT_HANDOFF_PHONE.to_string(),
            categories: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
            variant_support: VariantSupport::Disabled,
        }
    }
}

impl StorefrontConfig {
    /// Set the variant handling mode.
    #[must_use]
    pub fn with_variant_support(mut self, variant_support: VariantSupport) -> Self {
        self.variant_support = variant_support;
        self
    }

    /// Set the shop name.
    #[must_use]
    pub fn with_shop_name(mut self, shop_name: impl Into<String>) -> Self {
        self.shop_name = shop_name.into();
        self
    }

    /// Set the hand-off phone number.
    #[must_use]
    pub fn with_handoff_phone(mut self, handoff_phone: impl Into<String>) -> Self {
        self.handoff_phone = handoff_phone.into();
        self
    }
}

/// Open variant picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantPicker {
    /// Product being configured
    pub product: ProductId,

    /// Variant that will be added on confirm
    pub highlighted: Option<VariantId>,
}

/// What happened when a product's buy button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A line was added or incremented.
    Added(CartKey),

    /// The variant picker opened instead.
    PickerOpened,

    /// The product is not in the catalog.
    UnknownProduct,
}

/// Page state and user actions.
#[derive(Debug, Clone)]
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: Cart,
    selected_category: String,
    cart_open: bool,
    customer_name: String,
    delivery_address: String,
    carousel: Carousel,
    picker: Option<VariantPicker>,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}

impl Storefront {
    /// Create an empty storefront with the first configured category selected.
    pub fn new(config: StorefrontConfig) -> Self {
        let selected_category = config.categories.first().cloned().unwrap_or_default();

        Self {
            config,
            catalog: Catalog::default(),
            cart: Cart::new(),
            selected_category,
            cart_open: false,
            customer_name: String::new(),
            delivery_address: String::new(),
            carousel: Carousel::default(),
            picker: None,
        }
    }

    /// Storefront settings.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Replace the catalog wholesale.
    pub fn load_catalog(&mut self, catalog: Catalog) {
        self.carousel.resize(catalog.banners().len());
        self.picker = None;
        self.catalog = catalog;
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Switch the category shown in the grid.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    /// The category shown in the grid.
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Products in the selected category, in store order.
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.filter_by_category(&self.selected_category)
    }

    /// Handle a product's buy button.
    pub fn add_to_cart(&mut self, id: ProductId) -> AddOutcome {
        let Some(product) = self.catalog.product(id) else {
            return AddOutcome::UnknownProduct;
        };

        match self.config.variant_support {
            VariantSupport::Disabled => AddOutcome::Added(self.cart.add(product, None)),
            VariantSupport::Enabled if product.variants.has_variants() => {
                self.picker = Some(VariantPicker {
                    product: id,
                    highlighted: product.variants.first().map(|variant| variant.id),
                });

                AddOutcome::PickerOpened
            }
            VariantSupport::Enabled => {
                let key = self.cart.add(product, None);
                self.cart_open = true;

                AddOutcome::Added(key)
            }
        }
    }

    /// The open variant picker, if any.
    pub fn picker(&self) -> Option<VariantPicker> {
        self.picker
    }

    /// Highlight another variant in the open picker. Unknown variants are ignored.
    pub fn highlight_variant(&mut self, variant: VariantId) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };

        let known = self
            .catalog
            .product(picker.product)
            .is_some_and(|product| product.variants.get(variant).is_some());

        if known {
            picker.highlighted = Some(variant);
        }
    }

    /// Add the highlighted variant, close the picker and open the cart.
    pub fn confirm_variant(&mut self) -> Option<CartKey> {
        let picker = self.picker.take()?;
        let product = self.catalog.product(picker.product)?;
        let variant = picker
            .highlighted
            .and_then(|variant| product.variants.get(variant));

        let key = self.cart.add(product, variant);
        self.cart_open = true;

        Some(key)
    }

    /// Close the variant picker without adding anything.
    pub fn close_picker(&mut self) {
        self.picker = None;
    }

    /// Change a line's quantity by `delta`, removing it at zero.
    pub fn change_quantity(&mut self, key: CartKey, delta: i32) -> LineChange {
        self.cart.change_quantity(key, delta)
    }

    /// Tick or untick a line. Only available with variant support.
    pub fn toggle_selection(&mut self, key: CartKey) -> Option<bool> {
        match self.config.variant_support {
            VariantSupport::Disabled => None,
            VariantSupport::Enabled => self.cart.toggle_selected(key),
        }
    }

    /// Lines that count towards the total and the order.
    pub fn line_scope(&self) -> LineScope {
        match self.config.variant_support {
            VariantSupport::Disabled => LineScope::All,
            VariantSupport::Enabled => LineScope::Selected,
        }
    }

    /// Total over the lines in scope.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] when the total overflows.
    pub fn total(&self) -> Result<Money<'static, Currency>, PriceError> {
        self.cart.total(self.line_scope())
    }

    /// Quantity of a product, without variant, already in the cart.
    pub fn quantity_in_cart(&self, id: ProductId) -> u32 {
        self.cart.quantity_of(CartKey::product(id))
    }

    /// Sum of quantities over all lines, shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Update the customer name field.
    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    /// The customer name as typed.
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Update the delivery address field.
    pub fn set_delivery_address(&mut self, address: impl Into<String>) {
        self.delivery_address = address.into();
    }

    /// The delivery address as typed.
    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    /// Whether a delivery address is asked for.
    pub fn collects_address(&self) -> bool {
        self.config.variant_support == VariantSupport::Enabled
    }

    /// Open the cart panel.
    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    /// Close the cart panel.
    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Whether the cart panel is open.
    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Carousel position.
    pub fn carousel(&self) -> Carousel {
        self.carousel
    }

    /// The banner currently shown.
    pub fn current_banner(&self) -> Option<&Banner> {
        self.catalog.banners().get(self.carousel.index())
    }

    /// Timer tick.
    pub fn advance_carousel(&mut self) -> usize {
        self.carousel.advance()
    }

    /// Manual "next" button.
    pub fn next_banner(&mut self) -> usize {
        self.carousel.advance()
    }

    /// Manual "previous" button.
    pub fn previous_banner(&mut self) -> usize {
        self.carousel.previous()
    }

    /// Validate the order and build the WhatsApp hand-off.
    ///
    /// The cart is left as-is; the hand-off is terminal.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] whose message is shown to the shopper.
    pub fn checkout(&self) -> Result<HandOff, CheckoutError> {
        let request = OrderRequest {
            shop_name: &self.config.shop_name,
            customer_name: &self.customer_name,
            address: self
                .collects_address()
                .then_some(self.delivery_address.as_str()),
            scope: self.line_scope(),
        };

        let summary = request.summarize(&self.cart)?;

        Ok(HandOffTarget::new(self.config.handoff_phone.as_str()).hand_off(&summary))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        prices::{Price, format_money},
        products::{Variant, Variants},
    };

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Product::new(ProductId::new(1), "Dumpling", Price::new(15_000), "Makanan Asin"),
                Product::new(ProductId::new(2), "Bakpao", Price::new(12_000), "Makanan Manis")
                    .with_variants(Variants::from_list([
                        Variant::new(VariantId::new(10), "Coklat", Price::new(12_000)),
                        Variant::new(VariantId::new(11), "Keju", Price::new(14_000)),
                    ])),
                Product::new(ProductId::new(3), "Siomay", Price::new(18_000), " makanan asin "),
            ],
            vec![Banner::new("/promo-1.jpg"), Banner::new("/promo-2.jpg")],
        )
    }

    fn storefront(variant_support: VariantSupport) -> Storefront {
        let mut storefront =
            Storefront::new(StorefrontConfig::default().with_variant_support(variant_support));
        storefront.load_catalog(catalog());
        storefront
    }

    #[test]
    fn first_category_is_selected_initially() {
        let storefront = storefront(VariantSupport::Disabled);

        let names: Vec<&str> = storefront
            .visible_products()
            .map(|product| product.name.as_str())
            .collect();

        assert_eq!(storefront.selected_category(), "Makanan Asin");
        assert_eq!(names, ["Dumpling", "Siomay"]);
    }

    #[test]
    fn simple_mode_adds_at_base_price_and_ignores_variants() -> TestResult {
        let mut storefront = storefront(VariantSupport::Disabled);

        let outcome = storefront.add_to_cart(ProductId::new(2));

        assert_eq!(outcome, AddOutcome::Added(CartKey::product(ProductId::new(2))));
        assert!(storefront.picker().is_none());
        assert!(!storefront.is_cart_open());
        assert_eq!(format_money(&storefront.total()?), "Rp 12.000");

        Ok(())
    }

    #[test]
    fn simple_mode_quantity_stepper() {
        let mut storefront = storefront(VariantSupport::Disabled);

        storefront.add_to_cart(ProductId::new(1));
        storefront.add_to_cart(ProductId::new(1));

        assert_eq!(storefront.quantity_in_cart(ProductId::new(1)), 2);
        assert_eq!(storefront.quantity_in_cart(ProductId::new(3)), 0);

        storefront.change_quantity(CartKey::product(ProductId::new(1)), -2);

        assert_eq!(storefront.quantity_in_cart(ProductId::new(1)), 0);
        assert!(storefront.cart().is_empty());
    }

    #[test]
    fn unknown_product_is_not_added() {
        let mut storefront = storefront(VariantSupport::Enabled);

        assert_eq!(
            storefront.add_to_cart(ProductId::new(42)),
            AddOutcome::UnknownProduct
        );
        assert!(storefront.cart().is_empty());
    }

    #[test]
    fn picker_highlights_first_variant() {
        let mut storefront = storefront(VariantSupport::Enabled);

        let outcome = storefront.add_to_cart(ProductId::new(2));

        assert_eq!(outcome, AddOutcome::PickerOpened);
        assert_eq!(
            storefront.picker(),
            Some(VariantPicker {
                product: ProductId::new(2),
                highlighted: Some(VariantId::new(10)),
            })
        );
        assert!(storefront.cart().is_empty());
    }

    #[test]
    fn confirm_adds_highlighted_variant_and_opens_cart() -> TestResult {
        let mut storefront = storefront(VariantSupport::Enabled);

        storefront.add_to_cart(ProductId::new(2));
        storefront.highlight_variant(VariantId::new(11));
        let key = storefront.confirm_variant();

        assert_eq!(
            key,
            Some(CartKey::variant(ProductId::new(2), VariantId::new(11)))
        );
        assert!(storefront.picker().is_none());
        assert!(storefront.is_cart_open());
        assert_eq!(format_money(&storefront.total()?), "Rp 14.000");

        Ok(())
    }

    #[test]
    fn highlighting_unknown_variant_is_ignored() {
        let mut storefront = storefront(VariantSupport::Enabled);

        storefront.add_to_cart(ProductId::new(2));
        storefront.highlight_variant(VariantId::new(99));

        assert_eq!(
            storefront.picker().and_then(|picker| picker.highlighted),
            Some(VariantId::new(10))
        );
    }

    #[test]
    fn closing_picker_adds_nothing() {
        let mut storefront = storefront(VariantSupport::Enabled);

        storefront.add_to_cart(ProductId::new(2));
        storefront.close_picker();

        assert!(storefront.confirm_variant().is_none());
        assert!(storefront.cart().is_empty());
    }

    #[test]
    fn product_without_variants_skips_picker() {
        let mut storefront = storefront(VariantSupport::Enabled);

        let outcome = storefront.add_to_cart(ProductId::new(1));

        assert_eq!(outcome, AddOutcome::Added(CartKey::product(ProductId::new(1))));
        assert!(storefront.picker().is_none());
        assert!(storefront.is_cart_open());
    }

    #[test]
    fn toggle_only_with_variant_support() {
        let key = CartKey::product(ProductId::new(1));

        let mut simple = storefront(VariantSupport::Disabled);
        simple.add_to_cart(ProductId::new(1));

        let mut variants = storefront(VariantSupport::Enabled);
        variants.add_to_cart(ProductId::new(1));

        assert_eq!(simple.toggle_selection(key), None);
        assert_eq!(variants.toggle_selection(key), Some(false));
    }

    #[test]
    fn unticked_lines_are_left_out_of_total() -> TestResult {
        let mut storefront = storefront(VariantSupport::Enabled);

        storefront.add_to_cart(ProductId::new(1));
        storefront.add_to_cart(ProductId::new(3));
        storefront.toggle_selection(CartKey::product(ProductId::new(1)));

        assert_eq!(format_money(&storefront.total()?), "Rp 18.000");
        assert_eq!(storefront.item_count(), 2);

        Ok(())
    }

    #[test]
    fn checkout_builds_hand_off() -> TestResult {
        let mut storefront = storefront(VariantSupport::Disabled);

        storefront.add_to_cart(ProductId::new(1));
        storefront.add_to_cart(ProductId::new(1));
        storefront.set_customer_name("Ana");

        let hand_off = storefront.checkout()?;

        assert!(hand_off.url().starts_with("https://wa.me/6285157745547?text="));
        assert!(hand_off.message().contains("Ana"));
        assert!(hand_off.message().contains("Dumpling x2"));
        assert!(hand_off.message().ends_with("Total: Rp 30.000"));
        assert!(!hand_off.message().contains("Alamat"));

        Ok(())
    }

    #[test]
    fn checkout_requires_address_with_variant_support() {
        let mut storefront = storefront(VariantSupport::Enabled);

        storefront.add_to_cart(ProductId::new(1));
        storefront.set_customer_name("Ana");

        assert_eq!(storefront.checkout(), Err(CheckoutError::MissingAddress));

        storefront.set_delivery_address("Jl. Melati 2");

        assert!(storefront.checkout().is_ok());
    }

    #[test]
    fn checkout_checks_name_first() {
        let storefront = storefront(VariantSupport::Enabled);

        assert_eq!(storefront.checkout(), Err(CheckoutError::MissingName));
    }

    #[test]
    fn checkout_without_ticked_lines_fails() {
        let mut storefront = storefront(VariantSupport::Enabled);

        storefront.add_to_cart(ProductId::new(1));
        storefront.toggle_selection(CartKey::product(ProductId::new(1)));
        storefront.set_customer_name("Ana");
        storefront.set_delivery_address("Jl. Melati 2");

        assert_eq!(storefront.checkout(), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn carousel_follows_banner_count() {
        let mut storefront = storefront(VariantSupport::Disabled);

        assert_eq!(storefront.carousel().len(), 2);
        assert_eq!(storefront.previous_banner(), 1);
        assert_eq!(
            storefront.current_banner().map(|banner| banner.image_url.as_str()),
            Some("/promo-2.jpg")
        );
        assert_eq!(storefront.advance_carousel(), 0);
        assert_eq!(storefront.next_banner(), 1);

        storefront.load_catalog(Catalog::default());

        assert!(storefront.carousel().is_empty());
        assert!(storefront.current_banner().is_none());
    }

    #[test]
    fn cart_panel_opens_and_closes() {
        let mut storefront = Storefront::default();

        storefront.open_cart();
        assert!(storefront.is_cart_open());

        storefront.close_cart();
        assert!(!storefront.is_cart_open());
    }
}
