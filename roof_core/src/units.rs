//! # Unit Types
//!
//! Type-safe wrappers for the measurement units used in roofing takeoffs.
//! Lightweight f64 newtypes rather than a full units library: the domain
//! uses a small, fixed set of units and JSON output should stay plain
//! numbers.
//!
//! The engine works in US customary units internally (feet and square
//! feet); the metric wrappers exist so callers in metric markets can
//! convert explicitly at the boundary instead of mixing unit systems
//! inside a calculation.
//!
//! ## Example
//!
//! ```rust
//! use roof_core::units::{Meters, Feet, SqM, SqFt};
//!
//! let length = Meters(6.0);
//! let length_ft: Feet = length.into();
//! assert!((length_ft.0 - 19.685).abs() < 0.001);
//!
//! let coverage = SqM(2.32);
//! let coverage_ft: SqFt = coverage.into();
//! assert!((coverage_ft.0 - 24.97).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Feet per meter (exact by definition)
const FEET_PER_METER: f64 = 1.0 / 0.3048;

/// Square meters per square foot (exact by definition)
const SQM_PER_SQFT: f64 = 0.09290304;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Meters> for Feet {
    fn from(m: Meters) -> Self {
        Feet(m.0 * FEET_PER_METER)
    }
}

impl From<Feet> for Meters {
    fn from(ft: Feet) -> Self {
        Meters(ft.0 * 0.3048)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl From<SqM> for SqFt {
    fn from(sqm: SqM) -> Self {
        SqFt(sqm.0 / SQM_PER_SQFT)
    }
}

impl From<SqFt> for SqM {
    fn from(sqft: SqFt) -> Self {
        SqM(sqft.0 * SQM_PER_SQFT)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Meters);
impl_arithmetic!(SqFt);
impl_arithmetic!(SqM);
