//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Country of origin for catalog goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Egypt,
    Lebanon,
    Palestine,
    Cyprus,
    Syria,
    Iraq,
    Jordan,
}

impl Country {
    /// All countries the storefront sources from.
    pub const ALL: [Country; 7] = [
        Country::Egypt,
        Country::Lebanon,
        Country::Palestine,
        Country::Cyprus,
        Country::Syria,
        Country::Iraq,
        Country::Jordan,
    ];

    /// Get the country as its identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Egypt => "egypt",
            Country::Lebanon => "lebanon",
            Country::Palestine => "palestine",
            Country::Cyprus => "cyprus",
            Country::Syria => "syria",
            Country::Iraq => "iraq",
            Country::Jordan => "jordan",
        }
    }

    /// Get the human-readable country name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Country::Egypt => "Egypt",
            Country::Lebanon => "Lebanon",
            Country::Palestine => "Palestine",
            Country::Cyprus => "Cyprus",
            Country::Syria => "Syria",
            Country::Iraq => "Iraq",
            Country::Jordan => "Jordan",
        }
    }

    /// Parse a country identifier.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "egypt" => Some(Country::Egypt),
            "lebanon" => Some(Country::Lebanon),
            "palestine" => Some(Country::Palestine),
            "cyprus" => Some(Country::Cyprus),
            "syria" => Some(Country::Syria),
            "iraq" => Some(Country::Iraq),
            "jordan" => Some(Country::Jordan),
            _ => None,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description for listings and detail views.
    pub description: String,
    /// Current price. The cart reads this live; it never captures it.
    pub price: Money,
    /// Image URL.
    pub image_url: String,
    /// Country of origin.
    pub country: Country,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// Whether the product is featured on the landing page.
    pub featured: bool,
    /// Whether the product is currently purchasable.
    pub in_stock: bool,
}

impl Product {
    /// Create a new product with a generated ID.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        country: Country,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: String::new(),
            country,
            category_id,
            featured: false,
            in_stock: true,
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

    /// Mark the product as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.in_stock
    }

    /// Check if the product matches a case-insensitive text query against
    /// its name, description, or country.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.country.as_str().contains(&query)
    }
}
