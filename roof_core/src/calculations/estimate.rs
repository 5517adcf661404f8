//! # Roof Material Estimate
//!
//! The quantity/cost estimation formula: a four-step arithmetic pipeline
//! from rectangular dimensions to a purchasable unit count and a cost
//! breakdown.
//!
//! 1. base area = length × width
//! 2. adjusted area = base area × complexity factor (roof geometry)
//! 3. final area = adjusted area × 1.10 (fixed 10% waste)
//! 4. units needed = ⌈final area / coverage per unit⌉
//!
//! Cost is `subtotal = units × price per unit`, `tax = subtotal × 8%`,
//! `total = subtotal + tax`.
//!
//! [`estimate`] is total over its numeric domain and never fails:
//! unrecognized roof-type and material tags degrade to documented
//! defaults (see [`crate::materials`]). Dimension validation is the
//! caller's job; [`calculate`] is the validating wrapper.
//!
//! ## Example
//!
//! ```rust
//! use roof_core::calculations::estimate::estimate;
//!
//! let result = estimate(10.0, 20.0, "gable", "Metal Sheets", 25.0);
//! assert_eq!(result.units_needed, 10);
//! assert_eq!(result.cost.total, 270.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{complexity_factor, unit_coverage};
use crate::units::{Feet, Meters};

/// Fixed waste overage for cutting loss and installation waste
pub const WASTE_FACTOR: f64 = 0.10;

/// Fixed sales tax rate applied to the material subtotal
pub const TAX_RATE: f64 = 0.08;

/// Input parameters for a roof material estimate.
///
/// Roof-type and material tags are free-form strings: any value is
/// accepted and unrecognized tags fall back to defaults inside the
/// formula. Only the numeric fields are validated.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Garage",
///   "length_ft": 10.0,
///   "width_ft": 20.0,
///   "roof_type": "gable",
///   "material_type": "Metal Sheets",
///   "price_per_unit": 25.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateInput {
    /// User label for this estimate (e.g., "Garage", "Main House")
    pub label: String,

    /// Roof length in feet
    pub length_ft: f64,

    /// Roof width in feet
    pub width_ft: f64,

    /// Roof geometry tag (recommended: flat|gable|hip|mansard|gambrel)
    pub roof_type: String,

    /// Material tag (recommended: Metal Sheets|Shingles|Tiles|Membrane|Polycarbonate)
    pub material_type: String,

    /// Price per purchasable unit
    pub price_per_unit: f64,
}

impl EstimateInput {
    /// Build an input from metric dimensions.
    ///
    /// Converts meters to feet at the boundary (see [`crate::units`]) so
    /// the formula itself always runs in US customary units.
    pub fn from_metric(
        label: impl Into<String>,
        length_m: f64,
        width_m: f64,
        roof_type: impl Into<String>,
        material_type: impl Into<String>,
        price_per_unit: f64,
    ) -> Self {
        EstimateInput {
            label: label.into(),
            length_ft: Feet::from(Meters(length_m)).value(),
            width_ft: Feet::from(Meters(width_m)).value(),
            roof_type: roof_type.into(),
            material_type: material_type.into(),
            price_per_unit,
        }
    }

    /// Validate the numeric inputs.
    ///
    /// Category tags are deliberately not validated here — the formula
    /// accepts any string and applies its fallback defaults.
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
        if !self.price_per_unit.is_finite() || self.price_per_unit < 0.0 {
            return Err(CalcError::invalid_input(
                "price_per_unit",
                self.price_per_unit.to_string(),
                "Price cannot be negative",
            ));
        }
        Ok(())
    }

    /// Base rectangular area A = lw (ft²)
    pub fn area_sqft(&self) -> f64 {
        self.length_ft * self.width_ft
    }
}

/// Cost breakdown for an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Material subtotal: units × price per unit
    pub subtotal: f64,

    /// Sales tax: subtotal × 8%
    pub tax: f64,

    /// Subtotal plus tax
    pub total: f64,
}

impl CostBreakdown {
    /// Compute the breakdown for a unit count at a given price.
    pub fn for_units(units_needed: u32, price_per_unit: f64) -> Self {
        let subtotal = f64::from(units_needed) * price_per_unit;
        let tax = subtotal * TAX_RATE;
        CostBreakdown {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// Results of a roof material estimate.
///
/// A transient value object: a pure function of the five inputs, with no
/// identity and no mutation after creation. Serializes to the wire shape
/// the calculator endpoints exchange.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area": 200.0,
///   "adjusted_area": 220.0,
///   "final_area": 242.0,
///   "material_type": "Metal Sheets",
///   "coverage_per_unit": 25.0,
///   "units_needed": 10,
///   "cost": { "subtotal": 250.0, "tax": 20.0, "total": 270.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofEstimate {
    /// Base rectangular area (ft²)
    #[serde(rename = "area")]
    pub area_sqft: f64,

    /// Area after the roof-geometry complexity factor (ft²)
    #[serde(rename = "adjusted_area")]
    pub adjusted_area_sqft: f64,

    /// Area after the 10% waste overage (ft²)
    #[serde(rename = "final_area")]
    pub final_area_sqft: f64,

    /// Material tag the estimate was computed for (echoed as given)
    pub material_type: String,

    /// Coverage of one purchasable unit (ft²)
    #[serde(rename = "coverage_per_unit")]
    pub coverage_per_unit_sqft: f64,

    /// Purchasable units required (materials cannot be bought fractionally)
    pub units_needed: u32,

    /// Cost breakdown at the given price per unit
    pub cost: CostBreakdown,
}

/// Compute a roof material estimate.
///
/// Total over its numeric domain: never fails, has no side effects, and
/// applies the documented fallback defaults for unrecognized tags.
/// Callers must reject non-positive dimensions first (see
/// [`EstimateInput::validate`] / [`calculate`]).
pub fn estimate(
    length_ft: f64,
    width_ft: f64,
    roof_type: &str,
    material_type: &str,
    price_per_unit: f64,
) -> RoofEstimate {
    let area = length_ft * width_ft;
    let adjusted_area = area * complexity_factor(roof_type);
    let final_area = adjusted_area * (1.0 + WASTE_FACTOR);

    let coverage = unit_coverage(material_type);
    let units_needed = (final_area / coverage).ceil() as u32;

    RoofEstimate {
        area_sqft: area,
        adjusted_area_sqft: adjusted_area,
        final_area_sqft: final_area,
        material_type: material_type.to_string(),
        coverage_per_unit_sqft: coverage,
        units_needed,
        cost: CostBreakdown::for_units(units_needed, price_per_unit),
    }
}

/// Validate input and compute an estimate.
///
/// # Returns
///
/// * `Ok(RoofEstimate)` - Calculation results
/// * `Err(CalcError::InvalidInput)` - Non-positive dimension or negative price
pub fn calculate(input: &EstimateInput) -> CalcResult<RoofEstimate> {
    input.validate()?;

    Ok(estimate(
        input.length_ft,
        input.width_ft,
        &input.roof_type,
        &input.material_type,
        input.price_per_unit,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garage_input() -> EstimateInput {
        EstimateInput {
            label: "Garage".to_string(),
            length_ft: 10.0,
            width_ft: 20.0,
            roof_type: "gable".to_string(),
            material_type: "Metal Sheets".to_string(),
            price_per_unit: 25.0,
        }
    }

    #[test]
    fn test_pinned_scenario() {
        // 10 x 20 gable roof in metal sheets at $25/sheet.
        let result = estimate(10.0, 20.0, "gable", "Metal Sheets", 25.0);

        assert_eq!(result.area_sqft, 200.0);
        assert!((result.adjusted_area_sqft - 220.0).abs() < 1e-9);
        assert!((result.final_area_sqft - 242.0).abs() < 1e-9);
        assert_eq!(result.coverage_per_unit_sqft, 25.0);
        assert_eq!(result.units_needed, 10);
        assert_eq!(result.cost.subtotal, 250.0);
        assert_eq!(result.cost.tax, 20.0);
        assert_eq!(result.cost.total, 270.0);
    }

    #[test]
    fn test_area_is_exact_product() {
        let result = estimate(12.5, 31.0, "flat", "Tiles", 0.0);
        assert_eq!(result.area_sqft, 12.5 * 31.0);
    }

    #[test]
    fn test_waste_factor_relationship() {
        for (l, w, rt) in [(10.0, 20.0, "gable"), (7.3, 41.0, "hip"), (5.0, 5.0, "flat")] {
            let result = estimate(l, w, rt, "Shingles", 10.0);
            assert_eq!(
                result.final_area_sqft,
                result.adjusted_area_sqft * (1.0 + WASTE_FACTOR)
            );
        }
    }

    #[test]
    fn test_units_are_ceiling_of_coverage_division() {
        let result = estimate(10.0, 20.0, "gable", "Metal Sheets", 25.0);
        assert_eq!(
            f64::from(result.units_needed),
            (result.final_area_sqft / result.coverage_per_unit_sqft).ceil()
        );
        assert!(result.units_needed > 0);
    }

    #[test]
    fn test_tax_and_total_identities() {
        for price in [0.0, 25.0, 45.5, 1234.56] {
            let result = estimate(10.0, 20.0, "hip", "Shingles", price);
            assert_eq!(result.cost.tax, result.cost.subtotal * TAX_RATE);
            assert_eq!(result.cost.total, result.cost.subtotal + result.cost.tax);
        }
    }

    #[test]
    fn test_unknown_roof_type_matches_gable() {
        let dome = estimate(10.0, 20.0, "dome", "Metal Sheets", 25.0);
        let gable = estimate(10.0, 20.0, "gable", "Metal Sheets", 25.0);
        assert_eq!(dome.adjusted_area_sqft, gable.adjusted_area_sqft);
        assert_eq!(dome.units_needed, gable.units_needed);
    }

    #[test]
    fn test_unknown_material_uses_metal_sheet_coverage() {
        let result = estimate(10.0, 20.0, "gable", "Foo", 25.0);
        assert_eq!(result.coverage_per_unit_sqft, 25.0);
        // The tag is echoed back as given, not normalized.
        assert_eq!(result.material_type, "Foo");
    }

    #[test]
    fn test_calculate_validates_dimensions() {
        let mut input = garage_input();
        input.length_ft = -10.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let mut input = garage_input();
        input.width_ft = 0.0;
        assert!(calculate(&input).is_err());

        let mut input = garage_input();
        input.length_ft = f64::NAN;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_calculate_rejects_negative_price() {
        let mut input = garage_input();
        input.price_per_unit = -1.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let mut input = garage_input();
        input.price_per_unit = 0.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.cost.subtotal, 0.0);
        assert_eq!(result.cost.total, 0.0);
    }

    #[test]
    fn test_wire_shape_field_names() {
        let result = estimate(10.0, 20.0, "gable", "Metal Sheets", 25.0);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("area").is_some());
        assert!(json.get("adjusted_area").is_some());
        assert!(json.get("final_area").is_some());
        assert!(json.get("coverage_per_unit").is_some());
        assert!(json.get("units_needed").is_some());
        assert_eq!(json["cost"]["total"], 270.0);
    }

    #[test]
    fn test_from_metric_converts_dimensions() {
        // 3.048 m is exactly 10 ft; 6.096 m is exactly 20 ft.
        let input = EstimateInput::from_metric(
            "Garage",
            3.048,
            6.096,
            "gable",
            "Metal Sheets",
            25.0,
        );
        assert!((input.length_ft - 10.0).abs() < 1e-9);
        assert!((input.width_ft - 20.0).abs() < 1e-9);

        let result = calculate(&input).unwrap();
        assert_eq!(result.units_needed, 10);
        assert_eq!(result.cost.total, 270.0);
    }

    #[test]
    fn test_input_serialization_roundtrip() {
        let input = garage_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: EstimateInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.length_ft, roundtrip.length_ft);
        assert_eq!(input.material_type, roundtrip.material_type);
    }
}
