//! Session module.
//!
//! Holds the current-user record the storefront keeps in durable storage,
//! the session store that hydrates and clears it, and the user directory
//! backing the admin console.

mod directory;
mod store;
mod user;

pub use directory::UserDirectory;
pub use store::{SessionStore, DEFAULT_USER_KEY};
pub use user::{Address, Role, StoredUser};
