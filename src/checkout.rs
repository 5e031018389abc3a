//! Checkout
//!
//! Turns the cart into a plain-text order and a WhatsApp deep link that opens a
//! chat with the shop, pre-filled with that order.

use std::fmt::Write as _;

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::{Cart, CartLine, LineScope},
    prices::{PriceError, format_money},
};

/// Base URL of the WhatsApp click-to-chat service.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Checkout precondition failures. The message is shown to the shopper as-is.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// Customer name is blank.
    #[error("Isi nama pemesan terlebih dahulu!")]
    MissingName,

    /// Delivery address is collected but blank.
    #[error("Isi alamat pengiriman terlebih dahulu!")]
    MissingAddress,

    /// No cart line counts towards the order.
    #[error("Pilih menu terlebih dahulu!")]
    EmptyCart,

    /// The order total could not be computed.
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// What the shopper entered, plus which lines are being ordered.
#[derive(Debug, Clone, Copy)]
pub struct OrderRequest<'a> {
    /// Shop name used in the greeting.
    pub shop_name: &'a str,

    /// Customer name as typed.
    pub customer_name: &'a str,

    /// Delivery address as typed; `None` when the storefront does not ask for one.
    pub address: Option<&'a str>,

    /// Lines included in the order.
    pub scope: LineScope,
}

impl OrderRequest<'_> {
    /// Check the preconditions and build the order summary.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] when the name or a collected address is blank,
    /// when no line is in scope, or when the total overflows.
    pub fn summarize(&self, cart: &Cart) -> Result<OrderSummary, CheckoutError> {
        let customer_name = self.customer_name.trim();

        if customer_name.is_empty() {
            return Err(CheckoutError::MissingName);
        }

        let address = match self.address.map(str::trim) {
            Some("") => return Err(CheckoutError::MissingAddress),
            other => other,
        };

        let lines: Vec<OrderLine> = cart.lines_in(self.scope).map(OrderLine::from).collect();

        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        Ok(OrderSummary {
            shop_name: self.shop_name.to_string(),
            customer_name: customer_name.to_string(),
            address: address.map(str::to_string),
            lines,
            total: cart.total(self.scope)?,
        })
    }
}

/// One ordered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Product name
    pub name: String,

    /// Variant name, when one was chosen
    pub variant_name: Option<String>,

    /// Quantity ordered
    pub quantity: u32,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            name: line.name().to_string(),
            variant_name: line.variant_name().map(str::to_string),
            quantity: line.quantity(),
        }
    }
}

/// A validated order, ready to be handed off.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    /// Shop name used in the greeting
    pub shop_name: String,

    /// Trimmed customer name
    pub customer_name: String,

    /// Trimmed delivery address, if collected
    pub address: Option<String>,

    /// Ordered items
    pub lines: Vec<OrderLine>,

    /// Total over the ordered items
    pub total: Money<'static, Currency>,
}

impl OrderSummary {
    /// Render the message sent to the shop.
    pub fn message(&self) -> String {
        let mut message = format!(
            "Halo, saya {} ingin memesan di {}:",
            self.customer_name, self.shop_name
        );

        if let Some(address) = &self.address {
            _ = write!(message, "\nAlamat: {address}");
        }

        for line in &self.lines {
            match &line.variant_name {
                Some(variant) => {
                    _ = write!(message, "\n• {} ({variant}) x{}", line.name, line.quantity);
                }
                None => {
                    _ = write!(message, "\n• {} x{}", line.name, line.quantity);
                }
            }
        }

        _ = write!(message, "\n\nTotal: {}", format_money(&self.total));

        message
    }
}

/// The chat an order is handed off to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOffTarget {
    phone: String,
}

impl HandOffTarget {
    /// Target a WhatsApp number given in international format without `+`.
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
        }
    }

    /// The target phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Build the hand-off for an order.
    pub fn hand_off(&self, summary: &OrderSummary) -> HandOff {
        let message = summary.message();
        let url = format!(
            "{WHATSAPP_BASE_URL}/{}?text={}",
            self.phone,
            urlencoding::encode(&message)
        );

        HandOff { message, url }
    }
}

/// A composed order message and the link that opens it in WhatsApp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOff {
    message: String,
    url: String,
}

impl HandOff {
    /// The plain-text order message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The deep link to open in a new browsing context.
    pub fn url(&self) -> &str {
        &self.url
    }
}
