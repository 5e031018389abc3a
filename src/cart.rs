//! Cart

use std::fmt;

use rusty_money::{Money, iso::Currency};

use crate::{
    prices::{Price, PriceError, sum_money},
    products::{Product, ProductId, Variant, VariantId},
};

/// Identifies a cart line: the product, plus the variant when one was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CartKey {
    product: ProductId,
    variant: Option<VariantId>,
}

impl CartKey {
    /// Key for a product bought without a variant.
    pub const fn product(product: ProductId) -> Self {
        Self {
            product,
            variant: None,
        }
    }

    /// Key for a product bought as a specific variant.
    pub const fn variant(product: ProductId, variant: VariantId) -> Self {
        Self {
            product,
            variant: Some(variant),
        }
    }

    /// The product part of the key.
    pub const fn product_id(&self) -> ProductId {
        self.product
    }

    /// The variant part of the key.
    pub const fn variant_id(&self) -> Option<VariantId> {
        self.variant
    }
}

impl fmt::Display for CartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            Some(variant) => write!(f, "{}-{variant}", self.product),
            None => write!(f, "{}", self.product),
        }
    }
}

/// Which lines count towards the total and the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineScope {
    /// Every line in the cart.
    All,

    /// Only lines ticked for checkout.
    Selected,
}

/// One row in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    key: CartKey,
    name: String,
    variant_name: Option<String>,
    unit_price: Price,
    quantity: u32,
    selected: bool,
}

impl CartLine {
    /// The line's key.
    pub fn key(&self) -> CartKey {
        self.key
    }

    /// Product name at the time the line was added.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variant name, when a variant was chosen.
    pub fn variant_name(&self) -> Option<&str> {
        self.variant_name.as_deref()
    }

    /// Unit price, frozen when the line was created.
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Quantity; always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether the line is ticked for checkout.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Display label, e.g. `Bakpao (Keju)`.
    pub fn label(&self) -> String {
        match &self.variant_name {
            Some(variant) => format!("{} ({variant})", self.name),
            None => self.name.clone(),
        }
    }

    /// Unit price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the line total does not fit.
    pub fn line_total(&self) -> Result<Price, PriceError> {
        self.unit_price
            .checked_mul(self.quantity)
            .ok_or(PriceError::Overflow)
    }

    fn in_scope(&self, scope: LineScope) -> bool {
        match scope {
            LineScope::All => true,
            LineScope::Selected => self.selected,
        }
    }
}

/// Result of a quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    /// The line now has this quantity.
    Updated(u32),

    /// The quantity reached zero and the line was dropped.
    Removed,

    /// No line has that key.
    NotFound,
}

/// In-memory shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`, optionally as `variant`.
    ///
    /// Adding an existing key bumps its quantity; otherwise a new selected line
    /// is created with the unit price resolved now.
    pub fn add(&mut self, product: &Product, variant: Option<&Variant>) -> CartKey {
        let key = match variant {
            Some(variant) => CartKey::variant(product.id, variant.id),
            None => CartKey::product(product.id),
        };

        if let Some(line) = self.line_mut(key) {
            line.quantity = line.quantity.saturating_add(1);
            return key;
        }

        self.lines.push(CartLine {
            key,
            name: product.name.clone(),
            variant_name: variant.map(|variant| variant.name.clone()),
            unit_price: product.price_for(variant),
            quantity: 1,
            selected: true,
        });

        key
    }

    /// Apply a signed delta to a line's quantity, dropping it at zero or below.
    pub fn change_quantity(&mut self, key: CartKey, delta: i32) -> LineChange {
        let Some(position) = self.position(key) else {
            return LineChange::NotFound;
        };

        let Some(line) = self.lines.get_mut(position) else {
            return LineChange::NotFound;
        };

        let quantity = i64::from(line.quantity) + i64::from(delta);

        if quantity <= 0 {
            self.lines.remove(position);
            return LineChange::Removed;
        }

        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        LineChange::Updated(line.quantity)
    }

    /// Flip a line's checkout flag, returning the new value.
    pub fn toggle_selected(&mut self, key: CartKey) -> Option<bool> {
        let line = self.line_mut(key)?;
        line.selected = !line.selected;

        Some(line.selected)
    }

    /// Get a line by key.
    pub fn line(&self, key: CartKey) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.key == key)
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Lines counting towards the total under `scope`.
    pub fn lines_in(&self, scope: LineScope) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(move |line| line.in_scope(scope))
    }

    /// Quantity held under `key`, zero when absent.
    pub fn quantity_of(&self, key: CartKey) -> u32 {
        self.line(key).map_or(0, CartLine::quantity)
    }

    /// Sum of quantities over every line.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of unit price × quantity over the lines in `scope`.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if a line total overflows.
    pub fn total(&self, scope: LineScope) -> Result<Money<'static, Currency>, PriceError> {
        let line_totals = self
            .lines_in(scope)
            .map(|line| line.line_total().and_then(Price::to_money))
            .collect::<Result<Vec<_>, _>>()?;

        sum_money(line_totals)
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, key: CartKey) -> Option<usize> {
        self.lines.iter().position(|line| line.key == key)
    }

    fn line_mut(&mut self, key: CartKey) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.key == key)
    }
}
