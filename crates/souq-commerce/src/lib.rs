//! Storefront domain types and state for Souq.
//!
//! This crate provides the domain layer of the Souq storefront:
//!
//! - **Catalog**: products, categories, country-of-origin queries, search
//! - **Cart**: the cart store, hydrated from durable storage and persisted
//!   on every mutation, with live-priced subtotals
//! - **Session**: the stored current-user record and the user directory
//! - **Orders**: placed orders and the admin-facing order book
//!
//! # Example
//!
//! ```rust
//! use souq_commerce::prelude::*;
//! use souq_store::{MemoryStore, Store};
//!
//! let category = Category::new("Spices", Country::Lebanon);
//! let zaatar = Product::new(
//!     "Lebanese Zaatar",
//!     Money::new(1299, Currency::USD),
//!     Country::Lebanon,
//!     category.id.clone(),
//! );
//! let zaatar_id = zaatar.id.clone();
//! let catalog = InMemoryCatalog::with_data(vec![zaatar], vec![category]);
//!
//! let mut cart = CartStore::hydrate(Store::new(MemoryStore::new()), catalog);
//! cart.add_item(&zaatar_id, 2).unwrap();
//! assert_eq!(cart.subtotal().display(), "$25.98");
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod notify;

pub mod cart;
pub mod catalog;
pub mod order;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Country, InMemoryCatalog, Product};

    // Cart
    pub use crate::cart::{CartLine, CartStore};

    // Session
    pub use crate::session::{Address, Role, SessionStore, StoredUser, UserDirectory};

    // Orders
    pub use crate::order::{Order, OrderBook, OrderItem, OrderStatus};

    // Notifications
    pub use crate::notify::{LogNotifier, Notice, Notify, NullNotifier, RecordingNotifier};
}
