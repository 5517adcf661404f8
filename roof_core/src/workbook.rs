//! # Estimate Workbook
//!
//! The `Workbook` struct is the root container for saved estimates.
//! Workbooks serialize to `.roofwb` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Workbook
//! ├── meta: WorkbookMetadata (version, estimator, job info, timestamps)
//! ├── settings: WorkbookSettings (currency, default material)
//! └── records: HashMap<Uuid, EstimateRecord> (saved estimates + feedback)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use roof_core::workbook::Workbook;
//! use roof_core::calculations::estimate::{calculate, EstimateInput};
//!
//! let mut workbook = Workbook::new("Jane Estimator", "25-042", "Acme Builders");
//!
//! let input = EstimateInput {
//!     label: "Garage".to_string(),
//!     length_ft: 10.0,
//!     width_ft: 20.0,
//!     roof_type: "gable".to_string(),
//!     material_type: "Metal Sheets".to_string(),
//!     price_per_unit: 25.0,
//! };
//! let result = calculate(&input).unwrap();
//! let id = workbook.add_estimate(input, result);
//! assert!(workbook.get_record(&id).is_some());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::estimate::{EstimateInput, RoofEstimate};
use crate::errors::{CalcError, CalcResult};

/// Current schema version for .roofwb files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root workbook container.
///
/// This is the top-level struct that gets serialized to `.roofwb` files.
/// Records are stored in a flat UUID-keyed map so feedback can be
/// attached by id without positional bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workbook {
    /// Workbook metadata (version, estimator, job info)
    pub meta: WorkbookMetadata,

    /// Workbook-level settings
    pub settings: WorkbookSettings,

    /// All saved estimates, keyed by UUID
    pub records: HashMap<Uuid, EstimateRecord>,
}

impl Workbook {
    /// Create a new empty workbook.
    ///
    /// # Arguments
    ///
    /// * `estimator` - Name of the person preparing estimates
    /// * `job_id` - Job/quote number (e.g., "25-001")
    /// * `client` - Client name
    pub fn new(
        estimator: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Workbook {
            meta: WorkbookMetadata {
                version: SCHEMA_VERSION.to_string(),
                estimator: estimator.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: WorkbookSettings::default(),
            records: HashMap::new(),
        }
    }

    /// Save an estimate into the workbook.
    ///
    /// Returns the UUID assigned to the record.
    pub fn add_estimate(&mut self, input: EstimateInput, result: RoofEstimate) -> Uuid {
        let id = Uuid::new_v4();
        self.records.insert(
            id,
            EstimateRecord {
                input,
                result,
                created: Utc::now(),
                feedback: None,
            },
        );
        self.touch();
        id
    }

    /// Get a saved record by UUID.
    pub fn get_record(&self, id: &Uuid) -> Option<&EstimateRecord> {
        self.records.get(id)
    }

    /// Remove a record by UUID. Returns the removed record if it existed.
    pub fn remove_record(&mut self, id: &Uuid) -> Option<EstimateRecord> {
        let record = self.records.remove(id);
        if record.is_some() {
            self.touch();
        }
        record
    }

    /// Attach user feedback to a saved estimate.
    ///
    /// # Returns
    ///
    /// * `Err(CalcError::InvalidInput)` - Rating outside 1..=5
    /// * `Err(CalcError::RecordNotFound)` - Unknown record id
    pub fn attach_feedback(&mut self, id: &Uuid, feedback: Feedback) -> CalcResult<()> {
        feedback.validate()?;
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| CalcError::record_not_found(id.to_string()))?;
        record.feedback = Some(feedback);
        self.touch();
        Ok(())
    }

    /// The most recent records, newest first.
    pub fn recent(&self, limit: usize) -> Vec<(&Uuid, &EstimateRecord)> {
        let mut records: Vec<_> = self.records.iter().collect();
        records.sort_by(|a, b| b.1.created.cmp(&a.1.created));
        records.truncate(limit);
        records
    }

    /// How many records each material tag appears in, for monitoring
    /// which materials customers actually price.
    pub fn material_usage(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for record in self.records.values() {
            *counts
                .entry(record.input.material_type.clone())
                .or_insert(0) += 1;
        }
        counts
    }

    /// Number of saved records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Workbook::new("", "", "")
    }
}

/// Workbook metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the person preparing estimates
    pub estimator: String,

    /// Job/quote number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the workbook was created
    pub created: DateTime<Utc>,

    /// When the workbook was last modified
    pub modified: DateTime<Utc>,
}

/// Workbook-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbookSettings {
    /// Currency label for displayed prices (display only; the engine is
    /// currency-agnostic)
    pub currency: String,

    /// Default material tag for new estimates
    pub default_material: String,
}

impl Default for WorkbookSettings {
    fn default() -> Self {
        WorkbookSettings {
            currency: "USD".to_string(),
            default_material: "Metal Sheets".to_string(),
        }
    }
}

/// One saved estimate with optional user feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRecord {
    /// The inputs as submitted
    pub input: EstimateInput,

    /// The computed estimate
    pub result: RoofEstimate,

    /// When the estimate was saved
    pub created: DateTime<Utc>,

    /// User feedback, if any was submitted
    pub feedback: Option<Feedback>,
}

/// User feedback on a saved estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Rating from 1 (poor) to 5 (excellent)
    pub rating: u8,

    /// Free-form comments
    pub comments: String,

    /// Actual project cost, if the user reports one after the fact
    pub actual_cost: Option<f64>,
}

impl Feedback {
    /// Validate the rating range.
    pub fn validate(&self) -> CalcResult<()> {
        if !(1..=5).contains(&self.rating) {
            return Err(CalcError::invalid_input(
                "rating",
                self.rating.to_string(),
                "Rating must be between 1 and 5",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::estimate::calculate;

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

    fn workbook_with_one_record() -> (Workbook, Uuid) {
        let mut workbook = Workbook::new("Jane", "25-001", "Acme Builders");
        let input = garage_input();
        let result = calculate(&input).unwrap();
        let id = workbook.add_estimate(input, result);
        (workbook, id)
    }

    #[test]
    fn test_workbook_creation() {
        let workbook = Workbook::new("Jane", "25-001", "Acme Builders");
        assert_eq!(workbook.meta.estimator, "Jane");
        assert_eq!(workbook.meta.version, SCHEMA_VERSION);
        assert_eq!(workbook.record_count(), 0);
    }

    #[test]
    fn test_add_and_remove_record() {
        let (mut workbook, id) = workbook_with_one_record();
        assert_eq!(workbook.record_count(), 1);
        assert_eq!(workbook.get_record(&id).unwrap().input.label, "Garage");

        let removed = workbook.remove_record(&id);
        assert!(removed.is_some());
        assert_eq!(workbook.record_count(), 0);
    }

    #[test]
    fn test_attach_feedback() {
        let (mut workbook, id) = workbook_with_one_record();
        let feedback = Feedback {
            rating: 4,
            comments: "Close to the contractor's number".to_string(),
            actual_cost: Some(285.0),
        };
        workbook.attach_feedback(&id, feedback).unwrap();
        assert_eq!(workbook.get_record(&id).unwrap().feedback.as_ref().unwrap().rating, 4);
    }

    #[test]
    fn test_feedback_rating_bounds() {
        let (mut workbook, id) = workbook_with_one_record();
        for rating in [0u8, 6] {
            let err = workbook
                .attach_feedback(
                    &id,
                    Feedback {
                        rating,
                        comments: String::new(),
                        actual_cost: None,
                    },
                )
                .unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT");
        }
    }

    #[test]
    fn test_feedback_unknown_record() {
        let (mut workbook, _) = workbook_with_one_record();
        let err = workbook
            .attach_feedback(
                &Uuid::new_v4(),
                Feedback {
                    rating: 5,
                    comments: String::new(),
                    actual_cost: None,
                },
            )
            .unwrap_err();
        assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let mut workbook = Workbook::new("Jane", "25-001", "Acme");
        let mut ids = Vec::new();
        for label in ["first", "second", "third"] {
            let mut input = garage_input();
            input.label = label.to_string();
            let result = calculate(&input).unwrap();
            ids.push(workbook.add_estimate(input, result));
        }

        // Force distinct, ordered timestamps.
        let base = Utc::now();
        for (i, id) in ids.iter().enumerate() {
            workbook.records.get_mut(id).unwrap().created =
                base + chrono::Duration::seconds(i as i64);
        }

        let recent = workbook.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].1.input.label, "third");
        assert_eq!(recent[1].1.input.label, "second");
    }

    #[test]
    fn test_material_usage_stats() {
        let mut workbook = Workbook::new("Jane", "25-001", "Acme");
        for material in ["Metal Sheets", "Metal Sheets", "Tiles"] {
            let mut input = garage_input();
            input.material_type = material.to_string();
            let result = calculate(&input).unwrap();
            workbook.add_estimate(input, result);
        }
        let usage = workbook.material_usage();
        assert_eq!(usage["Metal Sheets"], 2);
        assert_eq!(usage["Tiles"], 1);
    }

    #[test]
    fn test_workbook_serialization() {
        let (workbook, id) = workbook_with_one_record();
        let json = serde_json::to_string_pretty(&workbook).unwrap();
        let roundtrip: Workbook = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.estimator, "Jane");
        assert_eq!(roundtrip.get_record(&id).unwrap().result.units_needed, 10);
    }
}
