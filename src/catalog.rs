//! Product Catalog
//!
//! Embedded JSON catalog plus category filtering.

use crate::error::ShopResult;
use crate::models::Product;

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn from_json(json: &str) -> ShopResult<Self> {
        Ok(Self {
            products: serde_json::from_str(json)?,
        })
    }

    /// Bundled catalog; an unreadable bundle yields an empty shop
    pub fn load() -> Self {
        Self::from_json(CATALOG_JSON).unwrap_or_else(|e| {
            log::error!("bundled catalog unreadable: {}", e);
            Self::default()
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }
}

/// Filter value carried by `.filter-btn[data-filter]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn from_value(value: &str) -> Self {
        match value {
            "all" => CategoryFilter::All,
            other => CategoryFilter::Category(other.to_string()),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Category(c) => c,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => c == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses_with_unique_ids() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        assert!(!catalog.products().is_empty());
        let mut ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.products().len());
        assert!(catalog.products().iter().all(|p| p.price >= 0.0));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::from_json(
            r#"[
                {"id":"a","name":"A","category":"soaps","price":1,"image":""},
                {"id":"b","name":"B","category":"candles","price":2,"image":""},
                {"id":"c","name":"C","category":"soaps","price":3,"image":""}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.categories(), vec!["soaps", "candles"]);
        assert_eq!(catalog.find("b").map(|p| p.price), Some(2.0));
        assert!(catalog.find("zzz").is_none());
    }

    #[test]
    fn test_filter_matching() {
        assert!(CategoryFilter::All.matches("soaps"));
        let soaps = CategoryFilter::from_value("soaps");
        assert!(soaps.matches("soaps"));
        assert!(!soaps.matches("candles"));
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(soaps.value(), "soaps");
    }
}
