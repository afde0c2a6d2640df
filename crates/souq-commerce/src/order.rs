//! Order types and the order book.

use crate::error::CommerceError;
use crate::ids::{AddressId, OrderId, ProductId, UserId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed but not yet picked up by the store.
    #[default]
    Pending,
    /// Being prepared.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Arrived at the shopper.
    Delivered,
    /// Canceled before delivery.
    Canceled,
}

impl OrderStatus {
    /// Get the status as its identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Canceled => "canceled",
        }
    }

    /// Parse a status identifier.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "canceled" => Some(OrderStatus::Canceled),
            _ => None,
        }
    }

    /// Check if the order has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Canceled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A line on a placed order.
///
/// Unlike cart lines, the price is captured at order time and never
/// recomputed from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// The product ordered.
    pub product_id: ProductId,
    /// How many units.
    pub quantity: i64,
    /// Unit price at the moment the order was placed.
    pub price: Money,
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// The shopper who placed the order.
    pub user_id: UserId,
    /// Ordered lines.
    pub items: Vec<OrderItem>,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// Shipping address on the shopper's account.
    pub address_id: AddressId,
    /// Unix timestamp when the order was placed.
    pub placed_at: i64,
}

impl Order {
    /// Create a new pending order.
    pub fn new(user_id: UserId, address_id: AddressId, items: Vec<OrderItem>) -> Self {
        Self {
            id: OrderId::generate(),
            user_id,
            items,
            status: OrderStatus::Pending,
            address_id,
            placed_at: current_timestamp(),
        }
    }

    /// Total amount: the sum of quantity times captured price per line.
    pub fn total(&self, currency: Currency) -> Money {
        self.items
            .iter()
            .fold(Money::zero(currency), |total, item| {
                total.saturating_add(&item.price.saturating_multiply(item.quantity))
            })
    }

    /// Total item count across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// An in-memory collection of placed orders.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Create an empty order book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order book from existing orders.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// All orders.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by ID.
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Orders placed by a user, newest first.
    pub fn orders_for_user(&self, user_id: &UserId) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| &o.user_id == user_id)
            .collect();
        orders.sort_by_key(|o| std::cmp::Reverse(o.placed_at));
        orders
    }

    /// Record a placed order.
    pub fn insert(&mut self, order: Order) -> &Order {
        self.orders.push(order);
        &self.orders[self.orders.len() - 1]
    }

    /// Move an order to a new status, returning the updated order.
    pub fn update_status(
        &mut self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<&Order, CommerceError> {
        match self.orders.iter_mut().find(|o| &o.id == id) {
            Some(order) => {
                order.status = status;
                Ok(order)
            }
            None => Err(CommerceError::OrderNotFound(id.as_str().to_string())),
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order(user: &str, placed_at: i64) -> Order {
        let mut order = Order::new(
            UserId::new(user),
            AddressId::new("1"),
            vec![
                OrderItem {
                    product_id: ProductId::new("1"),
                    quantity: 1,
                    price: Money::new(2499, Currency::USD),
                },
                OrderItem {
                    product_id: ProductId::new("3"),
                    quantity: 2,
                    price: Money::new(999, Currency::USD),
                },
            ],
        );
        order.placed_at = placed_at;
        order
    }

    #[test]
    fn test_order_total() {
        let order = sample_order("2", 100);
        assert_eq!(order.total(Currency::USD).amount_cents, 4497);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_orders_for_user_newest_first() {
        let mut book = OrderBook::new();
        book.insert(sample_order("2", 100));
        book.insert(sample_order("2", 300));
        book.insert(sample_order("9", 200));

        let orders = book.orders_for_user(&UserId::new("2"));
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].placed_at, 300);
    }

    #[test]
    fn test_update_status() {
        let mut book = OrderBook::new();
        let id = book.insert(sample_order("2", 100)).id.clone();

        let updated = book.update_status(&id, OrderStatus::Shipped).unwrap();
        assert_eq!(updated.status, OrderStatus::Shipped);

        let err = book
            .update_status(&OrderId::new("missing"), OrderStatus::Shipped)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Canceled,
        ] {
            assert_eq!(OrderStatus::from_str(status.as_str()), Some(status));
        }
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
    }
}
