//! Product Catalog
//!
//! The stocked product list and the recommendation lookup used alongside
//! calculation results. Each product belongs to exactly one material
//! category; recommending for an estimate means listing the first few
//! products in the requested category.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::RoofMaterial;

/// Default number of products returned by a recommendation lookup
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// A stocked roofing product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog id
    pub id: u32,

    /// Product name
    pub name: String,

    /// Short marketing description
    pub description: String,

    /// Price per purchasable unit
    pub price: f64,

    /// Material category this product belongs to
    pub category: RoofMaterial,
}

impl Product {
    fn new(
        id: u32,
        name: &str,
        description: &str,
        price: f64,
        category: RoofMaterial,
    ) -> Self {
        Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
        }
    }
}

/// Seed catalog shipped with the engine.
static SAMPLE_PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(
            1,
            "Corrugated Metal Sheets",
            "Durable galvanized steel roofing sheets perfect for residential and commercial use",
            25.99,
            RoofMaterial::MetalSheets,
        ),
        Product::new(
            2,
            "Asphalt Shingles",
            "High-quality asphalt shingles with 25-year warranty",
            45.50,
            RoofMaterial::Shingles,
        ),
        Product::new(
            3,
            "Clay Roof Tiles",
            "Traditional clay tiles for Mediterranean-style roofing",
            65.00,
            RoofMaterial::Tiles,
        ),
        Product::new(
            4,
            "Rubber Roofing Membrane",
            "EPDM rubber membrane for flat roofs",
            35.75,
            RoofMaterial::Membrane,
        ),
        Product::new(
            5,
            "Polycarbonate Sheets",
            "Transparent polycarbonate sheets for skylights",
            42.25,
            RoofMaterial::Polycarbonate,
        ),
        Product::new(
            6,
            "Aluminum Roofing Coil",
            "Lightweight aluminum coils for custom roofing",
            38.99,
            RoofMaterial::MetalSheets,
        ),
        Product::new(
            7,
            "Fiberglass Shingles",
            "Fire-resistant fiberglass shingles with enhanced durability",
            52.30,
            RoofMaterial::Shingles,
        ),
        Product::new(
            8,
            "Concrete Roof Tiles",
            "Heavy-duty concrete tiles for long-lasting roofing",
            58.75,
            RoofMaterial::Tiles,
        ),
    ]
});

/// Queryable product catalog.
///
/// ## Example
///
/// ```rust
/// use roof_core::materials::ProductCatalog;
///
/// let catalog = ProductCatalog::with_sample_products();
/// let picks = catalog.recommend_for("Metal Sheets", 3);
/// assert_eq!(picks.len(), 2);
/// assert_eq!(picks[0].name, "Corrugated Metal Sheets");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        ProductCatalog {
            products: Vec::new(),
        }
    }

    /// Create a catalog seeded with the sample product list
    pub fn with_sample_products() -> Self {
        ProductCatalog {
            products: SAMPLE_PRODUCTS.clone(),
        }
    }

    /// Add a product to the catalog
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// All products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by catalog id
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in a material category, in catalog order
    pub fn in_category(&self, category: RoofMaterial) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Recommend products for a free-form material tag.
    ///
    /// Unrecognized tags yield an empty list rather than falling back to a
    /// default category: a recommendation for an unknown material would be
    /// misleading where a default coverage constant is merely approximate.
    pub fn recommend_for(&self, material_tag: &str, limit: usize) -> Vec<&Product> {
        match RoofMaterial::from_tag(material_tag) {
            Some(category) => self.in_category(category).into_iter().take(limit).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_size() {
        let catalog = ProductCatalog::with_sample_products();
        assert_eq!(catalog.products().len(), 8);
    }

    #[test]
    fn test_recommend_filters_by_category() {
        let catalog = ProductCatalog::with_sample_products();
        let picks = catalog.recommend_for("Shingles", DEFAULT_RECOMMENDATION_LIMIT);
        assert_eq!(picks.len(), 2);
        assert!(picks.iter().all(|p| p.category == RoofMaterial::Shingles));
    }

    #[test]
    fn test_recommend_respects_limit() {
        let mut catalog = ProductCatalog::with_sample_products();
        catalog.add(Product::new(
            9,
            "Standing Seam Panels",
            "Concealed-fastener steel panels",
            61.00,
            RoofMaterial::MetalSheets,
        ));
        catalog.add(Product::new(
            10,
            "Copper Sheets",
            "Premium copper roofing sheets",
            120.00,
            RoofMaterial::MetalSheets,
        ));
        let picks = catalog.recommend_for("Metal Sheets", 3);
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn test_recommend_unknown_material_is_empty() {
        let catalog = ProductCatalog::with_sample_products();
        assert!(catalog.recommend_for("Foo", 3).is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = ProductCatalog::with_sample_products();
        assert_eq!(catalog.get(4).unwrap().name, "Rubber Roofing Membrane");
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_product_serialization() {
        let catalog = ProductCatalog::with_sample_products();
        let json = serde_json::to_string(catalog.get(1).unwrap()).unwrap();
        assert!(json.contains("\"Metal Sheets\""));
        let roundtrip: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(&roundtrip, catalog.get(1).unwrap());
    }
}
