pub mod models;
pub mod pricing;

pub use models::{Cart, CartLineItem};
pub use pricing::{CartTotals, PromoStatus, PromoTable, price_cart};
