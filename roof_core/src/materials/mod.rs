//! # Roof Types and Material Coverage
//!
//! Category tables for the estimation formula: roof geometry complexity
//! factors and per-unit material coverage, plus the product catalog used
//! for recommendations.
//!
//! ## Fallback Policy
//!
//! Roof-type and material tags arrive as free-form strings from forms and
//! API callers. The lookup functions are total: an unrecognized roof-type
//! tag silently uses the gable factor (1.1) and an unrecognized material
//! tag uses the Metal Sheets coverage. This is a deliberate
//! never-fail-the-calculation policy, not missing validation — callers
//! that want strict parsing use [`RoofType::from_tag`] /
//! [`RoofMaterial::from_tag`] and handle `None` themselves.
//!
//! Tags are normalized before the lookup: trimmed, matched
//! case-insensitively, and (for materials) `_`/`-` separators read as
//! spaces, so `"FLAT"` and `"metal_sheets"` parse as their lowercase
//! forms. Only tags outside the normalized vocabulary fall back.
//!
//! ## Example
//!
//! ```rust
//! use roof_core::materials::{complexity_factor, unit_coverage, RoofType};
//!
//! assert_eq!(complexity_factor("hip"), 1.2);
//! assert_eq!(complexity_factor("dome"), 1.1); // silent default
//! assert_eq!(unit_coverage("Membrane"), 100.0);
//! assert_eq!(RoofType::from_tag("mansard"), Some(RoofType::Mansard));
//! ```

pub mod catalog;

pub use catalog::{Product, ProductCatalog};

use serde::{Deserialize, Serialize};

/// Complexity factor applied when the roof-type tag is unrecognized.
///
/// Matches the gable factor: the most common roof shape is the assumed
/// default for free-form input.
pub const DEFAULT_COMPLEXITY_FACTOR: f64 = 1.1;

/// Roof geometries with known complexity factors.
///
/// The complexity factor is a multiplier on base area accounting for the
/// extra material that hips, dormers and steep facets require beyond flat
/// coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofType {
    Flat,
    Gable,
    Hip,
    Mansard,
    Gambrel,
}

impl RoofType {
    /// All roof type variants for UI selection
    pub const ALL: [RoofType; 5] = [
        RoofType::Flat,
        RoofType::Gable,
        RoofType::Hip,
        RoofType::Mansard,
        RoofType::Gambrel,
    ];

    /// Area multiplier for this geometry
    pub fn complexity_factor(&self) -> f64 {
        match self {
            RoofType::Flat => 1.0,
            RoofType::Gable => 1.1,
            RoofType::Hip => 1.2,
            RoofType::Mansard => 1.3,
            RoofType::Gambrel => 1.25,
        }
    }

    /// Parse a form tag. Returns `None` for unrecognized tags; use
    /// [`complexity_factor`] for the never-fail lookup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "flat" => Some(RoofType::Flat),
            "gable" => Some(RoofType::Gable),
            "hip" => Some(RoofType::Hip),
            "mansard" => Some(RoofType::Mansard),
            "gambrel" => Some(RoofType::Gambrel),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RoofType::Flat => "Flat",
            RoofType::Gable => "Gable",
            RoofType::Hip => "Hip",
            RoofType::Mansard => "Mansard",
            RoofType::Gambrel => "Gambrel",
        }
    }
}

impl std::fmt::Display for RoofType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Look up the complexity factor for a free-form roof-type tag.
///
/// Total function: unrecognized tags return
/// [`DEFAULT_COMPLEXITY_FACTOR`] instead of erroring.
pub fn complexity_factor(tag: &str) -> f64 {
    RoofType::from_tag(tag)
        .map(|t| t.complexity_factor())
        .unwrap_or(DEFAULT_COMPLEXITY_FACTOR)
}

/// Roofing material categories stocked in the catalog.
///
/// Coverage values are square feet per purchasable unit. The metric
/// figures seen elsewhere in the product line (2.32 m² per metal sheet,
/// etc.) are conversions of these square-foot constants, which are
/// authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoofMaterial {
    #[serde(rename = "Metal Sheets")]
    MetalSheets,
    Shingles,
    Tiles,
    Membrane,
    Polycarbonate,
}

impl RoofMaterial {
    /// All material variants for UI selection
    pub const ALL: [RoofMaterial; 5] = [
        RoofMaterial::MetalSheets,
        RoofMaterial::Shingles,
        RoofMaterial::Tiles,
        RoofMaterial::Membrane,
        RoofMaterial::Polycarbonate,
    ];

    /// Square feet covered by one purchasable unit
    pub fn coverage_sqft(&self) -> f64 {
        match self {
            RoofMaterial::MetalSheets => 25.0,
            RoofMaterial::Shingles => 33.0,
            RoofMaterial::Tiles => 1.0,
            RoofMaterial::Membrane => 100.0,
            RoofMaterial::Polycarbonate => 20.0,
        }
    }

    /// Name of the purchasable unit ("sheet", "bundle", ...)
    pub fn unit_name(&self) -> &'static str {
        match self {
            RoofMaterial::MetalSheets => "sheet",
            RoofMaterial::Shingles => "bundle",
            RoofMaterial::Tiles => "tile",
            RoofMaterial::Membrane => "roll",
            RoofMaterial::Polycarbonate => "sheet",
        }
    }

    /// Parse a form tag. Returns `None` for unrecognized tags; use
    /// [`unit_coverage`] for the never-fail lookup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "metal sheets" | "metal sheet" | "metal" => Some(RoofMaterial::MetalSheets),
            "shingles" | "shingle" => Some(RoofMaterial::Shingles),
            "tiles" | "tile" => Some(RoofMaterial::Tiles),
            "membrane" => Some(RoofMaterial::Membrane),
            "polycarbonate" => Some(RoofMaterial::Polycarbonate),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RoofMaterial::MetalSheets => "Metal Sheets",
            RoofMaterial::Shingles => "Shingles",
            RoofMaterial::Tiles => "Tiles",
            RoofMaterial::Membrane => "Membrane",
            RoofMaterial::Polycarbonate => "Polycarbonate",
        }
    }
}

impl std::fmt::Display for RoofMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Look up per-unit coverage (ft²) for a free-form material tag.
///
/// Total function: unrecognized tags return the Metal Sheets coverage
/// instead of erroring.
pub fn unit_coverage(tag: &str) -> f64 {
    RoofMaterial::from_tag(tag)
        .unwrap_or(RoofMaterial::MetalSheets)
        .coverage_sqft()
}
