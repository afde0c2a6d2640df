//! Catalog lookup seam and the in-memory catalog.

use crate::catalog::{Category, Country, Product};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};

/// Read-only product lookup.
///
/// The cart store depends on this seam rather than a concrete catalog, so
/// callers decide where products come from.
pub trait Catalog {
    /// Look up a product by ID.
    fn product(&self, id: &ProductId) -> Option<&Product>;
}

/// A catalog backed by in-memory collections.
///
/// Every query is a linear scan over the product list. The admin operations
/// mutate the same collections the queries read.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from existing collections.
    pub fn with_data(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// All products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by ID.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Products belonging to a category.
    pub fn products_by_category(&self, category_id: &CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.category_id == category_id)
            .collect()
    }

    /// Products sourced from a country.
    pub fn products_by_country(&self, country: Country) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.country == country)
            .collect()
    }

    /// Products featured on the landing page.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Case-insensitive substring search over name, description, and country.
    ///
    /// A blank query returns no results.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|p| p.matches_query(query))
            .collect()
    }

    /// Add a product to the catalog.
    pub fn insert_product(&mut self, product: Product) -> &Product {
        self.products.push(product);
        // Just pushed, so the list is non-empty.
        &self.products[self.products.len() - 1]
    }

    /// Replace an existing product wholesale, matched by ID.
    pub fn update_product(&mut self, product: Product) -> Result<(), CommerceError> {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product;
                Ok(())
            }
            None => Err(CommerceError::ProductNotFound(product.id.into_inner())),
        }
    }

    /// Remove a product, returning it.
    pub fn remove_product(&mut self, id: &ProductId) -> Result<Product, CommerceError> {
        match self.products.iter().position(|p| &p.id == id) {
            Some(index) => Ok(self.products.remove(index)),
            None => Err(CommerceError::ProductNotFound(id.as_str().to_string())),
        }
    }

    /// Add a category to the catalog.
    pub fn insert_category(&mut self, category: Category) -> &Category {
        self.categories.push(category);
        &self.categories[self.categories.len() - 1]
    }

    /// Replace an existing category wholesale, matched by ID.
    pub fn update_category(&mut self, category: Category) -> Result<(), CommerceError> {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => {
                *existing = category;
                Ok(())
            }
            None => Err(CommerceError::CategoryNotFound(category.id.into_inner())),
        }
    }

    /// Remove a category, returning it.
    ///
    /// Products referencing the category are left in place; the cart and
    /// listings tolerate dangling references.
    pub fn remove_category(&mut self, id: &CategoryId) -> Result<Category, CommerceError> {
        match self.categories.iter().position(|c| &c.id == id) {
            Some(index) => Ok(self.categories.remove(index)),
            None => Err(CommerceError::CategoryNotFound(id.as_str().to_string())),
        }
    }
}

impl Catalog for InMemoryCatalog {
    fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn product(&self, id: &ProductId) -> Option<&Product> {
        (**self).product(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn sample_catalog() -> InMemoryCatalog {
        let clothing = Category::new("Clothing", Country::Palestine);
        let food = Category::new("Food", Country::Egypt);

        let mut kuffiyeh = Product::new(
            "Palestinian Kuffiyeh",
            Money::new(2499, Currency::USD),
            Country::Palestine,
            clothing.id.clone(),
        )
        .with_description("Traditional Palestinian scarf")
        .featured();
        kuffiyeh.id = ProductId::new("1");

        let mut koshari = Product::new(
            "Egyptian Koshari Mix",
            Money::new(999, Currency::USD),
            Country::Egypt,
            food.id.clone(),
        )
        .with_description("A mix of rice, lentils, and pasta with spices");
        koshari.id = ProductId::new("3");

        InMemoryCatalog::with_data(vec![kuffiyeh, koshari], vec![clothing, food])
    }

    #[test]
    fn test_product_lookup() {
        let catalog = sample_catalog();
        assert!(catalog.product(&ProductId::new("1")).is_some());
        assert!(catalog.product(&ProductId::new("999")).is_none());
    }

    #[test]
    fn test_products_by_country() {
        let catalog = sample_catalog();
        let from_egypt = catalog.products_by_country(Country::Egypt);
        assert_eq!(from_egypt.len(), 1);
        assert_eq!(from_egypt[0].name, "Egyptian Koshari Mix");
    }

    #[test]
    fn test_featured_products() {
        let catalog = sample_catalog();
        let featured = catalog.featured_products();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id.as_str(), "1");
    }

    #[test]
    fn test_search() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("lentils").len(), 1);
        assert_eq!(catalog.search("palestine").len(), 1);
        assert_eq!(catalog.search("").len(), 0);
        assert_eq!(catalog.search("   ").len(), 0);
    }

    #[test]
    fn test_update_product_changes_price() {
        let mut catalog = sample_catalog();
        let mut product = catalog.product(&ProductId::new("1")).cloned().unwrap();
        product.price = Money::new(2999, Currency::USD);
        catalog.update_product(product).unwrap();

        let updated = catalog.product(&ProductId::new("1")).unwrap();
        assert_eq!(updated.price.amount_cents, 2999);
    }

    #[test]
    fn test_update_missing_product() {
        let mut catalog = sample_catalog();
        let ghost = Product::new(
            "Ghost",
            Money::new(1, Currency::USD),
            Country::Cyprus,
            CategoryId::new("none"),
        );
        let err = catalog.update_product(ghost).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_product() {
        let mut catalog = sample_catalog();
        let removed = catalog.remove_product(&ProductId::new("3")).unwrap();
        assert_eq!(removed.name, "Egyptian Koshari Mix");
        assert!(catalog.product(&ProductId::new("3")).is_none());
        assert!(catalog.remove_product(&ProductId::new("3")).is_err());
    }

    #[test]
    fn test_category_crud() {
        let mut catalog = InMemoryCatalog::new();
        let category = Category::new("Pottery", Country::Syria);
        let id = category.id.clone();
        catalog.insert_category(category);

        let mut updated = catalog.category(&id).cloned().unwrap();
        updated.description = "Handcrafted Syrian pottery".to_string();
        catalog.update_category(updated).unwrap();
        assert!(!catalog.category(&id).unwrap().description.is_empty());

        catalog.remove_category(&id).unwrap();
        assert!(catalog.category(&id).is_none());
    }
}
