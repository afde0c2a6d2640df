//! Category types for product organization.

use crate::catalog::Country;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Country this category showcases.
    pub country: Country,
    /// Category description.
    pub description: String,
    /// Category image URL.
    pub image_url: String,
}

impl Category {
    /// Create a new category with a generated ID.
    pub fn new(name: impl Into<String>, country: Country) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            country,
            description: String::new(),
            image_url: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let cat = Category::new("Spices", Country::Lebanon)
            .with_description("Authentic Lebanese spice blends");
        assert_eq!(cat.name, "Spices");
        assert_eq!(cat.country, Country::Lebanon);
        assert!(!cat.description.is_empty());
    }
}
