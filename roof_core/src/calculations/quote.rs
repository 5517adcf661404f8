//! # Detailed Roof Quote
//!
//! A richer estimator than the basic formula in [`super::estimate`]: it
//! accounts for roof slope and overall job complexity, produces a
//! material takeoff with per-material waste allowances, splits cost into
//! material and labor, and attaches practical recommendations with a
//! confidence score.
//!
//! The two estimators deliberately use different factor tables. The basic
//! formula is the storefront calculator; this one mirrors the quoting
//! engine, whose coverage figures are per-material trade values (e.g. a
//! metal sheet covering 110 ft²) rather than the catalog's small-unit
//! constants.
//!
//! ## Example
//!
//! ```rust
//! use roof_core::calculations::quote::{quote, QuoteInput};
//!
//! let input = QuoteInput {
//!     label: "Main House".to_string(),
//!     length_ft: 40.0,
//!     width_ft: 30.0,
//!     material_type: "Shingles".to_string(),
//!     slope_pitch: 6.0,
//!     complexity: "moderate".to_string(),
//!     location: String::new(),
//! };
//!
//! let result = quote(&input).unwrap();
//! assert!(result.takeoff.units >= 1);
//! assert_eq!(result.costs.total_cost, result.costs.material_cost + result.costs.labor_cost);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Complexity factor applied when the complexity tag is unrecognized
pub const DEFAULT_JOB_COMPLEXITY_FACTOR: f64 = 1.15;

/// Slope multiplier applied for unlisted or missing pitches (4/12 assumed)
pub const DEFAULT_SLOPE_MULTIPLIER: f64 = 1.05;

/// Fraction of material cost charged as labor
pub const LABOR_COST_RATIO: f64 = 0.75;

/// Overall job complexity classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobComplexity {
    /// Plain gable, no penetrations
    Simple,
    /// A few valleys or dormers
    Moderate,
    /// Multiple angles, dormers, chimneys
    Complex,
}

impl JobComplexity {
    /// Area multiplier for this complexity class
    pub fn factor(&self) -> f64 {
        match self {
            JobComplexity::Simple => 1.10,
            JobComplexity::Moderate => 1.20,
            JobComplexity::Complex => 1.30,
        }
    }

    /// Parse a form tag; unrecognized tags return `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "simple" => Some(JobComplexity::Simple),
            "moderate" => Some(JobComplexity::Moderate),
            "complex" => Some(JobComplexity::Complex),
            _ => None,
        }
    }
}

/// Look up the complexity factor for a free-form tag.
///
/// Total: unrecognized tags use [`DEFAULT_JOB_COMPLEXITY_FACTOR`].
pub fn job_complexity_factor(tag: &str) -> f64 {
    JobComplexity::from_tag(tag)
        .map(|c| c.factor())
        .unwrap_or(DEFAULT_JOB_COMPLEXITY_FACTOR)
}

/// Slope multiplier for a pitch given as rise-in-12 (e.g. 6.0 for 6/12).
///
/// The table covers the common framing pitches; a missing or
/// non-positive pitch assumes 4/12. Fractional pitches truncate to the
/// whole rise before the lookup (6.5 reads as 6/12), and truncated
/// values not in the table use the default multiplier.
pub fn slope_multiplier(pitch: f64) -> f64 {
    if pitch <= 0.0 {
        return DEFAULT_SLOPE_MULTIPLIER;
    }
    match pitch as u32 {
        3 => 1.03,
        4 => 1.05,
        6 => 1.12,
        8 => 1.20,
        12 => 1.41,
        _ => DEFAULT_SLOPE_MULTIPLIER,
    }
}

/// Materials the quoting engine carries trade factors for.
///
/// Unknown material tags quote as shingles, the most common job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMaterial {
    MetalSheets,
    Shingles,
    Tiles,
}

/// Per-material trade factors used by the quoting engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialFactors {
    /// Coverage of one purchasable unit (ft²)
    pub coverage_sqft: f64,
    /// Waste allowance applied to the unit count
    pub waste_factor: f64,
    /// Installed material cost per ft²
    pub cost_per_sqft: f64,
}

impl QuoteMaterial {
    /// Trade factors for this material
    pub fn factors(&self) -> MaterialFactors {
        match self {
            // Full-length trade sheets, not the catalog's small panels
            QuoteMaterial::MetalSheets => MaterialFactors {
                coverage_sqft: 110.0,
                waste_factor: 0.12,
                cost_per_sqft: 5.5,
            },
            QuoteMaterial::Shingles => MaterialFactors {
                coverage_sqft: 33.3,
                waste_factor: 0.10,
                cost_per_sqft: 1.5,
            },
            // 90 ft² per hundred tiles
            QuoteMaterial::Tiles => MaterialFactors {
                coverage_sqft: 0.9,
                waste_factor: 0.15,
                cost_per_sqft: 4.0,
            },
        }
    }

    /// Name of the purchasable unit
    pub fn unit_name(&self) -> &'static str {
        match self {
            QuoteMaterial::MetalSheets => "sheet",
            QuoteMaterial::Shingles => "bundle",
            QuoteMaterial::Tiles => "tile",
        }
    }

    /// Parse a form tag; unrecognized tags return `None`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "metal_sheets" | "metal_sheet" | "metal" => Some(QuoteMaterial::MetalSheets),
            "shingles" | "shingle" => Some(QuoteMaterial::Shingles),
            "tiles" | "tile" => Some(QuoteMaterial::Tiles),
            _ => None,
        }
    }
}

/// Input parameters for a detailed roof quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteInput {
    /// User label for this quote
    pub label: String,

    /// Roof length in feet
    pub length_ft: f64,

    /// Roof width in feet
    pub width_ft: f64,

    /// Material tag (quoted as shingles when unrecognized)
    pub material_type: String,

    /// Roof pitch as rise-in-12 (0 = unknown, 4/12 assumed)
    pub slope_pitch: f64,

    /// Job complexity tag (simple|moderate|complex)
    pub complexity: String,

    /// Free-form job location (informational)
    pub location: String,
}

impl QuoteInput {
    /// Validate the numeric inputs.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.length_ft.is_finite() || self.length_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_ft",
                self.length_ft.to_string(),
                "Length must be a positive number",
            ));
        }
        if !self.width_ft.is_finite() || self.width_ft <= 0.0 {
            return Err(CalcError::invalid_input(
                "width_ft",
                self.width_ft.to_string(),
                "Width must be a positive number",
            ));
        }
        if !self.slope_pitch.is_finite() || self.slope_pitch < 0.0 {
            return Err(CalcError::invalid_input(
                "slope_pitch",
                self.slope_pitch.to_string(),
                "Slope pitch cannot be negative",
            ));
        }
        Ok(())
    }

    /// Base rectangular area A = lw (ft²)
    pub fn area_sqft(&self) -> f64 {
        self.length_ft * self.width_ft
    }
}

/// Material takeoff: how much to order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialTakeoff {
    /// Material the takeoff was quoted in
    pub material: QuoteMaterial,

    /// Purchasable units to order (waste allowance included, minimum 1)
    pub units: u32,

    /// Name of the purchasable unit
    pub unit_name: String,

    /// Slope- and complexity-adjusted area the order covers (ft²)
    pub area_covered_sqft: f64,
}

/// Cost estimate split into material and labor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteCosts {
    /// Material cost: adjusted area × per-ft² rate
    pub material_cost: f64,

    /// Labor cost: 75% of material cost
    pub labor_cost: f64,

    /// Material plus labor
    pub total_cost: f64,

    /// Total cost divided by the base (unadjusted) area
    pub cost_per_sqft: f64,
}

/// Results of a detailed roof quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofQuote {
    /// Base rectangular area (ft²)
    pub area_sqft: f64,

    /// What to order
    pub takeoff: MaterialTakeoff,

    /// What it costs
    pub costs: QuoteCosts,

    /// Practical tips derived from the inputs
    pub recommendations: Vec<String>,

    /// Confidence in the quote (0..1)
    pub confidence: f64,

    /// Estimation method tag reported to API consumers
    pub method: String,
}

/// Confidence assigned to deterministic offline quotes
const OFFLINE_CONFIDENCE: f64 = 0.85;

/// Method tag the quoting engine reports
const QUOTE_METHOD: &str = "ml";

/// Compute a detailed roof quote.
///
/// # Returns
///
/// * `Ok(RoofQuote)` - Takeoff, costs, and recommendations
/// * `Err(CalcError::InvalidInput)` - Non-positive dimension or negative pitch
pub fn quote(input: &QuoteInput) -> CalcResult<RoofQuote> {
    input.validate()?;

    let material = QuoteMaterial::from_tag(&input.material_type).unwrap_or(QuoteMaterial::Shingles);
    let factors = material.factors();

    let area = input.area_sqft();
    let adjusted_area =
        area * slope_multiplier(input.slope_pitch) * job_complexity_factor(&input.complexity);

    // Waste scales the unit count, truncated, never below one unit.
    let raw_units = adjusted_area / factors.coverage_sqft * (1.0 + factors.waste_factor);
    let units = (raw_units as u32).max(1);

    let material_cost = adjusted_area * factors.cost_per_sqft;
    let labor_cost = material_cost * LABOR_COST_RATIO;
    let total_cost = material_cost + labor_cost;

    let recommendations = vec![
        format!("Based on {:.0} sq ft roof area", area),
        format!(
            "Adjusted for {} roof complexity",
            input.complexity.trim().to_lowercase()
        ),
        format!("Material waste factor: {:.0}%", factors.waste_factor * 100.0),
    ];

    Ok(RoofQuote {
        area_sqft: area,
        takeoff: MaterialTakeoff {
            material,
            units,
            unit_name: material.unit_name().to_string(),
            area_covered_sqft: adjusted_area,
        },
        costs: QuoteCosts {
            material_cost,
            labor_cost,
            total_cost,
            cost_per_sqft: total_cost / area,
        },
        recommendations,
        confidence: OFFLINE_CONFIDENCE,
        method: QUOTE_METHOD.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn house_input() -> QuoteInput {
        QuoteInput {
            label: "Main House".to_string(),
            length_ft: 40.0,
            width_ft: 30.0,
            material_type: "Shingles".to_string(),
            slope_pitch: 6.0,
            complexity: "simple".to_string(),
            location: "Kigali".to_string(),
        }
    }

    #[test]
    fn test_slope_multipliers() {
        assert_eq!(slope_multiplier(3.0), 1.03);
        assert_eq!(slope_multiplier(4.0), 1.05);
        assert_eq!(slope_multiplier(6.0), 1.12);
        assert_eq!(slope_multiplier(8.0), 1.20);
        assert_eq!(slope_multiplier(12.0), 1.41);
    }

    #[test]
    fn test_slope_fallbacks() {
        // Missing pitch assumes 4/12; unlisted pitches use the default.
        assert_eq!(slope_multiplier(0.0), DEFAULT_SLOPE_MULTIPLIER);
        assert_eq!(slope_multiplier(5.0), DEFAULT_SLOPE_MULTIPLIER);
        assert_eq!(slope_multiplier(20.0), DEFAULT_SLOPE_MULTIPLIER);
    }

    #[test]
    fn test_fractional_pitch_truncates() {
        assert_eq!(slope_multiplier(6.5), 1.12);
        assert_eq!(slope_multiplier(3.9), 1.03);
        assert_eq!(slope_multiplier(12.9), 1.41);
        assert_eq!(slope_multiplier(0.7), DEFAULT_SLOPE_MULTIPLIER);
    }

    #[test]
    fn test_complexity_factors() {
        assert_eq!(job_complexity_factor("simple"), 1.10);
        assert_eq!(job_complexity_factor("moderate"), 1.20);
        assert_eq!(job_complexity_factor("complex"), 1.30);
        assert_eq!(job_complexity_factor("weird"), DEFAULT_JOB_COMPLEXITY_FACTOR);
    }

    #[test]
    fn test_shingle_quote() {
        let input = house_input();
        let result = quote(&input).unwrap();

        // 1200 * 1.12 * 1.10 = 1478.4 sq ft adjusted
        assert!((result.takeoff.area_covered_sqft - 1478.4).abs() < 0.1);

        // 1478.4 / 33.3 * 1.10 = 48.83 -> 48 bundles
        assert_eq!(result.takeoff.units, 48);
        assert_eq!(result.takeoff.unit_name, "bundle");

        // material 1478.4 * 1.5 = 2217.6; labor = 1663.2
        assert!((result.costs.material_cost - 2217.6).abs() < 0.1);
        assert_eq!(
            result.costs.labor_cost,
            result.costs.material_cost * LABOR_COST_RATIO
        );
        assert_eq!(
            result.costs.total_cost,
            result.costs.material_cost + result.costs.labor_cost
        );
        assert_eq!(result.costs.cost_per_sqft, result.costs.total_cost / 1200.0);
    }

    #[test]
    fn test_unknown_material_quotes_as_shingles() {
        let mut input = house_input();
        input.material_type = "Foo".to_string();
        let result = quote(&input).unwrap();
        assert_eq!(result.takeoff.material, QuoteMaterial::Shingles);
    }

    #[test]
    fn test_metal_tag_variants() {
        assert_eq!(
            QuoteMaterial::from_tag("Metal Sheets"),
            Some(QuoteMaterial::MetalSheets)
        );
        assert_eq!(
            QuoteMaterial::from_tag("metal_sheets"),
            Some(QuoteMaterial::MetalSheets)
        );
    }

    #[test]
    fn test_tiny_roof_orders_at_least_one_unit() {
        let input = QuoteInput {
            label: "Kiosk".to_string(),
            length_ft: 2.0,
            width_ft: 2.0,
            material_type: "Metal Sheets".to_string(),
            slope_pitch: 0.0,
            complexity: "simple".to_string(),
            location: String::new(),
        };
        let result = quote(&input).unwrap();
        assert_eq!(result.takeoff.units, 1);
    }

    #[test]
    fn test_recommendations_and_confidence() {
        let result = quote(&house_input()).unwrap();
        assert_eq!(result.recommendations.len(), 3);
        assert!(result.recommendations[0].contains("1200 sq ft"));
        assert!(result.recommendations[2].contains("10%"));
        assert_eq!(result.confidence, 0.85);
        assert_eq!(result.method, "ml");
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut input = house_input();
        input.width_ft = -3.0;
        assert!(quote(&input).is_err());

        let mut input = house_input();
        input.slope_pitch = -1.0;
        assert!(quote(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result = quote(&house_input()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: RoofQuote = serde_json::from_str(&json).unwrap();

        // JSON float parsing may differ in the last ulp, so the discrete
        // fields compare exactly and the floats within a tolerance.
        assert_eq!(roundtrip.takeoff.material, result.takeoff.material);
        assert_eq!(roundtrip.takeoff.units, result.takeoff.units);
        assert_eq!(roundtrip.recommendations, result.recommendations);
        assert_eq!(roundtrip.method, result.method);
        assert!((roundtrip.area_sqft - result.area_sqft).abs() < 1e-9);
        assert!((roundtrip.costs.material_cost - result.costs.material_cost).abs() < 1e-9);
        assert!((roundtrip.costs.labor_cost - result.costs.labor_cost).abs() < 1e-9);
        assert!((roundtrip.costs.total_cost - result.costs.total_cost).abs() < 1e-9);
        assert!((roundtrip.confidence - result.confidence).abs() < 1e-9);
    }
}
