//! The cart store.

use crate::cart::CartLine;
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use crate::notify::{LogNotifier, Notice, Notify};
use souq_store::{Store, StoreBackend, StoreError};

/// Storage key holding the serialized array of cart lines.
pub const DEFAULT_CART_KEY: &str = "cart";

/// The shopper's cart: a process-wide store of lines, synchronized to
/// durable storage on every mutation.
///
/// The store is an explicitly constructed context object: it is hydrated once
/// from storage via [`CartStore::hydrate`] and passed to consumers, never held
/// in ambient global state. Catalog lookups go through the supplied
/// collaborator, so the subtotal always reflects current catalog prices.
///
/// Mutations persist best-effort: a storage write failure is logged and never
/// surfaced to the caller. [`CartStore::flush`] is the explicit, fallible
/// persistence path.
#[derive(Debug)]
pub struct CartStore<C, B, N = LogNotifier> {
    catalog: C,
    store: Store<B>,
    notifier: N,
    key: String,
    currency: Currency,
    items: Vec<CartLine>,
}

impl<C, B> CartStore<C, B, LogNotifier>
where
    C: Catalog,
    B: StoreBackend,
{
    /// Hydrate a cart from durable storage under the default key.
    ///
    /// Malformed stored content is logged, discarded from storage, and the
    /// in-memory state resets to empty. A backend read failure degrades the
    /// same way, without touching the stored entry.
    pub fn hydrate(store: Store<B>, catalog: C) -> Self {
        Self::hydrate_at(store, catalog, DEFAULT_CART_KEY)
    }

    /// Hydrate a cart from durable storage under a caller-chosen key.
    pub fn hydrate_at(store: Store<B>, catalog: C, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = match store.get::<Vec<CartLine>>(&key) {
            Ok(Some(lines)) => sanitize(lines),
            Ok(None) => Vec::new(),
            Err(e) if e.is_corrupt_value() => {
                tracing::warn!(key = %key, error = %e, "discarding malformed stored cart");
                if let Err(e) = store.delete(&key) {
                    tracing::warn!(key = %key, error = %e, "failed to discard stored cart");
                }
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read stored cart");
                Vec::new()
            }
        };

        Self {
            catalog,
            store,
            notifier: LogNotifier,
            key,
            currency: Currency::default(),
            items,
        }
    }
}

impl<C, B, N> CartStore<C, B, N>
where
    C: Catalog,
    B: StoreBackend,
    N: Notify,
{
    /// Replace the notifier notices are delivered through.
    pub fn with_notifier<M: Notify>(self, notifier: M) -> CartStore<C, B, M> {
        CartStore {
            catalog: self.catalog,
            store: self.store,
            notifier,
            key: self.key,
            currency: self.currency,
            items: self.items,
        }
    }

    /// Set the cart currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// Increments the existing line or inserts a new one, persists the whole
    /// snapshot, and emits a notice naming the product. Returns the line's
    /// new quantity.
    ///
    /// Unlike the no-op contract this storefront grew up with, an unknown
    /// product or non-positive quantity is reported to the caller.
    pub fn add_item(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<i64, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let product_name = match self.catalog.product(product_id) {
            Some(product) => product.name.clone(),
            None => {
                return Err(CommerceError::ProductNotFound(
                    product_id.as_str().to_string(),
                ))
            }
        };

        let new_quantity = match self
            .items
            .iter_mut()
            .find(|line| &line.product_id == product_id)
        {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
                line.quantity
            }
            None => {
                self.items.push(CartLine::new(product_id.clone(), quantity));
                quantity
            }
        };

        self.persist();
        self.notifier.notify(Notice::new(
            "Item added to cart",
            format!("{} has been added to your cart.", product_name),
        ));
        Ok(new_quantity)
    }

    /// Remove a product's line from the cart.
    ///
    /// Returns whether a line was removed. The notice is emitted whenever the
    /// product still resolves in the catalog, matching the storefront's
    /// observed behavior.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|line| &line.product_id != product_id);
        let removed = self.items.len() < len_before;

        if removed {
            self.persist();
        }

        if let Some(product) = self.catalog.product(product_id) {
            self.notifier.notify(Notice::new(
                "Item removed",
                format!("{} has been removed from your cart.", product.name),
            ));
        }
        removed
    }

    /// Set a line's quantity to an absolute value.
    ///
    /// A quantity of zero or below behaves as [`CartStore::remove_item`].
    /// The line is never created here; updating a product that is not in the
    /// cart changes nothing. Returns whether the cart changed.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        match self
            .items
            .iter_mut()
            .find(|line| &line.product_id == product_id)
        {
            Some(line) => {
                line.quantity = quantity;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
        self.notifier.notify(Notice::new(
            "Cart cleared",
            "All items have been removed from your cart.",
        ));
    }

    /// Lines currently in the cart.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Get the line for a product, if present.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.items
            .iter()
            .find(|line| &line.product_id == product_id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count: the sum of all line quantities.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Subtotal: the sum of quantity times **live** catalog price per line.
    ///
    /// Prices are looked up at read time, so a catalog price change moves the
    /// subtotal even for items added earlier. Lines whose product no longer
    /// resolves contribute zero.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency), |total, line| {
                match self.catalog.product(&line.product_id) {
                    Some(product) => {
                        total.saturating_add(&product.price.saturating_multiply(line.quantity))
                    }
                    None => total,
                }
            })
    }

    /// Lines paired with their resolved products.
    ///
    /// Lines referencing products no longer in the catalog are skipped.
    pub fn resolved_lines(&self) -> Vec<(&CartLine, &Product)> {
        self.items
            .iter()
            .filter_map(|line| {
                self.catalog
                    .product(&line.product_id)
                    .map(|product| (line, product))
            })
            .collect()
    }

    /// Write the current snapshot to durable storage.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.store.set(&self.key, &self.items)
    }

    /// Access the catalog collaborator.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Best-effort persistence after a mutation; failures are only logged.
    fn persist(&self) {
        if let Err(e) = self.flush() {
            tracing::warn!(key = %self.key, error = %e, "failed to persist cart");
        }
    }
}

/// Drop hydrated lines that violate the quantity invariant.
fn sanitize(lines: Vec<CartLine>) -> Vec<CartLine> {
    lines
        .into_iter()
        .filter(|line| {
            if line.quantity >= 1 {
                true
            } else {
                tracing::debug!(product_id = %line.product_id, "dropping stored line with non-positive quantity");
                false
            }
        })
        .collect()
}
