//! User directory backing the admin console.

use crate::error::CommerceError;
use crate::ids::UserId;
use crate::session::StoredUser;

/// An in-memory collection of user accounts.
///
/// Linear scans throughout, like the rest of the storefront's mock data
/// layer. The admin console's user tab reads and mutates this directly.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<StoredUser>,
}

impl UserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory from existing accounts.
    pub fn with_users(users: Vec<StoredUser>) -> Self {
        Self { users }
    }

    /// All accounts.
    pub fn users(&self) -> &[StoredUser] {
        &self.users
    }

    /// Look up an account by ID.
    pub fn user(&self, id: &UserId) -> Option<&StoredUser> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Look up an account by email.
    pub fn user_by_email(&self, email: &str) -> Option<&StoredUser> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Add an account.
    ///
    /// Rejects a duplicate email, which the storefront treats as "already
    /// registered".
    pub fn insert(&mut self, user: StoredUser) -> Result<&StoredUser, CommerceError> {
        if self.user_by_email(&user.email).is_some() {
            return Err(CommerceError::Validation(format!(
                "email already in use: {}",
                user.email
            )));
        }
        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }

    /// Replace an existing account wholesale, matched by ID.
    pub fn update(&mut self, user: StoredUser) -> Result<(), CommerceError> {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user;
                Ok(())
            }
            None => Err(CommerceError::UserNotFound(user.id.into_inner())),
        }
    }

    /// Remove an account, returning it.
    pub fn remove(&mut self, id: &UserId) -> Result<StoredUser, CommerceError> {
        match self.users.iter().position(|u| &u.id == id) {
            Some(index) => Ok(self.users.remove(index)),
            None => Err(CommerceError::UserNotFound(id.as_str().to_string())),
        }
    }
}
