//! # Roof Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` type - Calculation results (JSON-serializable)
//! - a pure function `-> Result<_, CalcError>` that validates then computes
//!
//! ## Available Calculations
//!
//! - [`estimate`] - The storefront quantity/cost formula (area, waste, units, tax)
//! - [`quote`] - The detailed quoting engine (slope, complexity, labor split)

pub mod estimate;
pub mod quote;

// Re-export commonly used types
pub use estimate::{CostBreakdown, EstimateInput, RoofEstimate};
pub use quote::{QuoteInput, RoofQuote};
