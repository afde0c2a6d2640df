//! The session store.

use crate::notify::{LogNotifier, Notice, Notify};
use crate::session::StoredUser;
use souq_store::{Store, StoreBackend, StoreError};

/// Storage key holding the serialized current-user record.
///
/// Deliberately separate from the cart's key: the two records have
/// independent lifecycles.
pub const DEFAULT_USER_KEY: &str = "user";

/// Holds the current user's session record, synchronized to durable storage.
///
/// Like the cart store, this is an explicitly constructed context object:
/// hydrated once at construction, persisted on every change. Signing out
/// removes the user record but leaves the cart untouched.
#[derive(Debug)]
pub struct SessionStore<B, N = LogNotifier> {
    store: Store<B>,
    notifier: N,
    key: String,
    current: Option<StoredUser>,
}

impl<B: StoreBackend> SessionStore<B, LogNotifier> {
    /// Hydrate the session from durable storage under the default key.
    ///
    /// A malformed stored record is logged, discarded from storage, and the
    /// session starts signed out.
    pub fn hydrate(store: Store<B>) -> Self {
        Self::hydrate_at(store, DEFAULT_USER_KEY)
    }

    /// Hydrate the session from durable storage under a caller-chosen key.
    pub fn hydrate_at(store: Store<B>, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match store.get::<StoredUser>(&key) {
            Ok(user) => user,
            Err(e) if e.is_corrupt_value() => {
                tracing::warn!(key = %key, error = %e, "discarding malformed stored user");
                if let Err(e) = store.delete(&key) {
                    tracing::warn!(key = %key, error = %e, "failed to discard stored user");
                }
                None
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read stored user");
                None
            }
        };

        Self {
            store,
            notifier: LogNotifier,
            key,
            current,
        }
    }
}

impl<B, N> SessionStore<B, N>
where
    B: StoreBackend,
    N: Notify,
{
    /// Replace the notifier notices are delivered through.
    pub fn with_notifier<M: Notify>(self, notifier: M) -> SessionStore<B, M> {
        SessionStore {
            store: self.store,
            notifier,
            key: self.key,
            current: self.current,
        }
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&StoredUser> {
        self.current.as_ref()
    }

    /// Check if a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Check if the signed-in user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(|u| u.is_admin())
    }

    /// Make `user` the current user and persist the record.
    ///
    /// Persistence is best-effort; a write failure is logged, not surfaced.
    pub fn sign_in(&mut self, user: StoredUser) {
        let name = user.name.clone();
        self.current = Some(user);
        self.persist();
        self.notifier.notify(Notice::new(
            "Signed in",
            format!("Welcome back, {}!", name),
        ));
    }

    /// Sign the current user out and remove the stored record.
    ///
    /// The cart record lives under its own key and is not touched here; a
    /// shopper's cart survives signing out.
    pub fn sign_out(&mut self) {
        if self.current.take().is_none() {
            return;
        }
        if let Err(e) = self.store.delete(&self.key) {
            tracing::warn!(key = %self.key, error = %e, "failed to remove stored user");
        }
        self.notifier.notify(Notice::new(
            "Logged out",
            "You have been logged out successfully.",
        ));
    }

    /// Write the current record to durable storage.
    ///
    /// A signed-out session removes the record instead.
    pub fn flush(&self) -> Result<(), StoreError> {
        match &self.current {
            Some(user) => self.store.set(&self.key, user),
            None => self.store.delete(&self.key),
        }
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            tracing::warn!(key = %self.key, error = %e, "failed to persist session");
        }
    }
}
