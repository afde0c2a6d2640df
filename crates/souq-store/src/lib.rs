//! Typed key-value storage layer for Souq.
//!
//! Provides a simple, ergonomic API for the storefront's durable per-browser
//! storage with automatic JSON serialization. The cart and session layers
//! persist whole snapshots here on every mutation.
//!
//! # Example
//!
//! ```rust
//! use souq_store::{MemoryStore, Store};
//!
//! let store = Store::new(MemoryStore::new());
//!
//! // Store a value
//! store.set("cart:guest", &vec![("1", 2)]).unwrap();
//!
//! // Retrieve a value
//! let cart: Option<Vec<(String, i64)>> = store.get("cart:guest").unwrap();
//! assert!(cart.is_some());
//!
//! // Delete a value
//! store.delete("cart:guest").unwrap();
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{MemoryStore, StoreBackend};
pub use error::StoreError;
pub use kv::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{MemoryStore, Store, StoreBackend, StoreError};
}

/// Helper to build storage keys with namespacing.
///
/// # Example
///
/// ```rust
/// use souq_store::store_key;
///
/// let key = store_key!("cart", "user123");
/// assert_eq!(key, "cart:user123");
/// ```
#[macro_export]
macro_rules! store_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
