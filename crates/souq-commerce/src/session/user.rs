//! User types.

use crate::ids::{AddressId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular shopper.
    #[default]
    Customer,
    /// Store administrator with access to the admin console.
    Admin,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }

    /// Parse a role string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "customer" => Some(Role::Customer),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A shipping address on a user's account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    /// Unique address identifier.
    pub id: AddressId,
    /// Label (e.g., "Home").
    pub name: String,
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal code.
    pub postal_code: String,
    /// Country.
    pub country: String,
    /// Whether this is the default shipping address.
    pub is_default: bool,
}

/// The user record kept in durable storage by the session layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredUser {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// User role.
    pub role: Role,
    /// Saved addresses.
    pub addresses: Vec<Address>,
}

impl StoredUser {
    /// Create a new customer record with a generated ID and no addresses.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            role: Role::Customer,
            addresses: Vec::new(),
        }
    }

    /// Set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Check if the user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Get the default address, falling back to the first one.
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| self.addresses.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_customer() {
        let user = StoredUser::new("Regular User", "user@example.com");
        assert_eq!(user.role, Role::Customer);
        assert!(!user.is_admin());
        assert!(user.addresses.is_empty());
    }

    #[test]
    fn test_admin_role() {
        let user = StoredUser::new("Admin User", "admin@example.com").with_role(Role::Admin);
        assert!(user.is_admin());
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::from_str("admin"), Some(Role::Admin));
        assert_eq!(Role::from_str("CUSTOMER"), Some(Role::Customer));
        assert_eq!(Role::from_str("staff"), None);
    }

    #[test]
    fn test_default_address() {
        let mut user = StoredUser::new("Regular User", "user@example.com");
        assert!(user.default_address().is_none());

        user.addresses.push(Address {
            id: AddressId::new("1"),
            name: "Home".to_string(),
            street: "123 Main St".to_string(),
            city: "Anytown".to_string(),
            state: "CA".to_string(),
            postal_code: "12345".to_string(),
            country: "USA".to_string(),
            is_default: false,
        });
        user.addresses.push(Address {
            id: AddressId::new("2"),
            name: "Work".to_string(),
            street: "9 Office Way".to_string(),
            city: "Anytown".to_string(),
            state: "CA".to_string(),
            postal_code: "12345".to_string(),
            country: "USA".to_string(),
            is_default: true,
        });

        assert_eq!(user.default_address().unwrap().id.as_str(), "2");
    }
}
