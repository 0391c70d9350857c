//! Category catalog: ordered category list plus a name-keyed lookup
//!
//! Both views are built together in [`CategoryCatalog::new`] and the type
//! exposes no mutation, so they cannot drift apart.

use std::collections::HashMap;

use crate::types::Category;

#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
    by_name: HashMap<String, usize>,
}

impl CategoryCatalog {
    /// Build the catalog from the categories in catalog order
    ///
    /// When a name appears twice the later record wins the lookup, matching
    /// how an object built from `[name, record]` entries behaves.
    pub fn new(categories: Vec<Category>) -> Self {
        let by_name = categories
            .iter()
            .enumerate()
            .map(|(idx, cat)| (cat.name.clone(), idx))
            .collect();
        Self {
            categories,
            by_name,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.by_name.get(name).map(|&idx| &self.categories[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Categories in the order the catalog returned them
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CategoryCatalog {
        CategoryCatalog::new(vec![
            Category::new("Beef", "beef.png", "Cattle"),
            Category::new("Seafood", "fish.png", "D"),
            Category::new("Dessert", "cake.png", "Sweet"),
        ])
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = sample();
        let seafood = catalog.get("Seafood").unwrap();
        assert_eq!(seafood.description, "D");
        assert!(catalog.get("Pasta").is_none());
    }

    #[test]
    fn test_order_is_preserved() {
        let catalog = sample();
        let names: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Beef", "Seafood", "Dessert"]);
    }

    #[test]
    fn test_list_and_lookup_agree() {
        let catalog = sample();
        assert_eq!(catalog.len(), 3);
        for cat in catalog.categories() {
            assert_eq!(catalog.get(&cat.name), Some(cat));
        }
    }

    #[test]
    fn test_duplicate_name_last_wins() {
        let catalog = CategoryCatalog::new(vec![
            Category::new("Beef", "a.png", "first"),
            Category::new("Beef", "b.png", "second"),
        ]);
        assert_eq!(catalog.get("Beef").unwrap().description, "second");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CategoryCatalog::default();
        assert!(catalog.is_empty());
        assert!(!catalog.contains("Beef"));
    }
}
