//! Melt & Munch
//!
//! Storefront core for the Melt & Munch dimsum shop: catalog, cart, promo carousel and
//! checkout through a pre-filled WhatsApp message.

pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod storefront;
