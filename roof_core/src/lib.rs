//! # roof_core - Roofing Estimation Engine
//!
//! `roof_core` is the computational heart of SmartRoof, providing roofing
//! material and cost estimation with a clean, JSON-first API. All inputs and
//! outputs are serializable, so the same engine backs CLIs, desktop front
//! ends, and HTTP services without change.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Forgiving Inputs**: Unknown roof/material tags fall back to documented
//!   defaults rather than failing a quote
//!
//! ## Quick Start
//!
//! ```rust
//! use roof_core::calculations::estimate::{calculate, EstimateInput};
//!
//! let input = EstimateInput {
//!     label: "Garage".to_string(),
//!     length_ft: 10.0,
//!     width_ft: 20.0,
//!     roof_type: "gable".to_string(),
//!     material_type: "Metal Sheets".to_string(),
//!     price_per_unit: 25.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.units_needed, 10);
//! assert_eq!(result.cost.total, 270.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The estimate and quote engines
//! - [`materials`] - Roof type and material catalogs, product recommendations
//! - [`chat`] - FAQ chatbot with per-session statistics
//! - [`knowledge`] - Built-in roofing reference notes with keyword search
//! - [`workbook`] - Saved-estimate container with feedback
//! - [`units`] - Type-safe length/area wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Workbook file operations with atomic saves and locking

pub mod calculations;
pub mod chat;
pub mod errors;
pub mod file_io;
pub mod knowledge;
pub mod materials;
pub mod units;
pub mod workbook;

// Re-export commonly used types at crate root for convenience
pub use calculations::estimate::{calculate, estimate, EstimateInput, RoofEstimate};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_workbook, save_workbook, WorkbookLock};
pub use workbook::{Workbook, WorkbookMetadata, WorkbookSettings};
