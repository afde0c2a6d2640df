//! Product catalog module.
//!
//! Contains product and category types, the lookup seam the cart depends on,
//! and the in-memory catalog with its query and admin operations.

mod category;
mod memory;
mod product;

pub use category::Category;
pub use memory::{Catalog, InMemoryCatalog};
pub use product::{Country, Product};
