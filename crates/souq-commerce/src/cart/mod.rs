//! Shopping cart module.
//!
//! Contains the cart line type and the cart store, the storefront's one
//! stateful component: a hydrated-once, persisted-on-every-mutation
//! collection of product/quantity lines.

mod line;
mod store;

pub use line::CartLine;
pub use store::{CartStore, DEFAULT_CART_KEY};
