//! # Roofing Knowledge Base
//!
//! Built-in reference notes on materials, calculations, accessories,
//! labor and pricing, with a small keyword search. Entries back the
//! recommendations shown next to quotes and the `/ai-knowledge`-style
//! lookups in front ends.
//!
//! Search is plain word containment: an entry scores one point per query
//! word found in its content, results are ordered by score with ties
//! broken by entry order.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Knowledge entry categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeCategory {
    Materials,
    Calculations,
    Accessories,
    Labor,
    Pricing,
}

/// One reference note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Stable identifier
    pub id: String,

    /// The note text
    pub content: String,

    /// Entry category
    pub category: KnowledgeCategory,

    /// Material the note applies to ("general" when not material-specific)
    pub material: String,
}

impl KnowledgeEntry {
    fn new(id: &str, content: &str, category: KnowledgeCategory, material: &str) -> Self {
        KnowledgeEntry {
            id: id.to_string(),
            content: content.to_string(),
            category,
            material: material.to_string(),
        }
    }
}

static BUILTIN_ENTRIES: Lazy<Vec<KnowledgeEntry>> = Lazy::new(|| {
    vec![
        KnowledgeEntry::new(
            "metal_sheets_basic",
            "Metal roofing sheets typically cover 100-120 sq ft per sheet. Standard sheet \
             dimensions are 26 inches wide by 12-16 feet long. Overlap allowance: 10-15% \
             additional material needed.",
            KnowledgeCategory::Materials,
            "metal_sheets",
        ),
        KnowledgeEntry::new(
            "shingles_coverage",
            "Asphalt shingles cover approximately 33.3 sq ft per bundle. A square (100 sq ft) \
             requires 3 bundles. Add 10% for waste and 15% for complex roofs.",
            KnowledgeCategory::Materials,
            "shingles",
        ),
        KnowledgeEntry::new(
            "clay_tiles_specs",
            "Clay tiles cover 80-100 sq ft per 100 tiles. Heavier than other materials, \
             requires stronger roof structure. Add 15% for breakage and cutting waste.",
            KnowledgeCategory::Materials,
            "tiles",
        ),
        KnowledgeEntry::new(
            "roof_slope_factor",
            "Roof slope affects material calculation: 3/12 slope = 1.03x multiplier, 6/12 \
             slope = 1.12x multiplier, 12/12 slope = 1.41x multiplier.",
            KnowledgeCategory::Calculations,
            "general",
        ),
        KnowledgeEntry::new(
            "complex_roof_factors",
            "Complex roofs with multiple angles, dormers, chimneys require 15-25% additional \
             materials. Simple gable roofs need only 10% waste factor.",
            KnowledgeCategory::Calculations,
            "general",
        ),
        KnowledgeEntry::new(
            "underlayment_requirements",
            "Roof underlayment needed: 1 roll covers 400 sq ft. Ice and water shield required \
             for first 3 feet from roof edge in cold climates.",
            KnowledgeCategory::Accessories,
            "general",
        ),
        KnowledgeEntry::new(
            "fasteners_calculation",
            "Roofing nails/screws: 4-6 fasteners per sq ft for shingles, 8-12 per sq ft for \
             metal roofing. Add 20 lbs per 1000 sq ft safety margin.",
            KnowledgeCategory::Accessories,
            "general",
        ),
        KnowledgeEntry::new(
            "gutters_and_downspouts",
            "Gutters: 1 linear foot per foot of roof edge. Downspouts: 1 per 35-40 feet of \
             gutter, minimum 2 per roof section.",
            KnowledgeCategory::Accessories,
            "general",
        ),
        KnowledgeEntry::new(
            "labor_time_estimates",
            "Installation time: Shingles 1-2 days per 1000 sq ft, Metal roofing 1.5-3 days \
             per 1000 sq ft, Tiles 2-4 days per 1000 sq ft.",
            KnowledgeCategory::Labor,
            "general",
        ),
        KnowledgeEntry::new(
            "cost_factors_2025",
            "2025 material costs (USD): Asphalt shingles $100-200/sq, Metal roofing \
             $300-700/sq, Clay tiles $300-500/sq. Labor adds 50-100% to material costs.",
            KnowledgeCategory::Pricing,
            "general",
        ),
    ]
});

/// Searchable collection of reference notes.
///
/// ## Example
///
/// ```rust
/// use roof_core::knowledge::KnowledgeBase;
///
/// let kb = KnowledgeBase::builtin();
/// let hits = kb.search("shingle bundle coverage", 3);
/// assert_eq!(hits[0].id, "shingles_coverage");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// The built-in reference notes
    pub fn builtin() -> Self {
        KnowledgeBase {
            entries: BUILTIN_ENTRIES.clone(),
        }
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Add an entry
    pub fn add(&mut self, entry: KnowledgeEntry) {
        self.entries.push(entry);
    }

    /// Entries in a category, optionally restricted to a material tag
    /// (entries marked "general" always qualify).
    pub fn by_category(
        &self,
        category: KnowledgeCategory,
        material: Option<&str>,
    ) -> Vec<&KnowledgeEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .filter(|e| match material {
                Some(m) => e.material == m || e.material == "general",
                None => true,
            })
            .collect()
    }

    /// Keyword search over entry content.
    ///
    /// Scores one point per query word contained in the entry text
    /// (case-insensitive). Non-matching entries are dropped; ties keep
    /// entry order. An empty query returns nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&KnowledgeEntry> {
        let words: Vec<String> = query
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();
        if words.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, &KnowledgeEntry)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let content = entry.content.to_lowercase();
                let score = words.iter().filter(|w| content.contains(w.as_str())).count();
                (score > 0).then_some((score, entry))
            })
            .collect();

        // Stable sort keeps entry order within a score band.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().take(limit).map(|(_, e)| e).collect()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        KnowledgeBase::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_size() {
        assert_eq!(KnowledgeBase::builtin().entries().len(), 10);
    }

    #[test]
    fn test_search_ranks_by_word_hits() {
        let kb = KnowledgeBase::builtin();
        let hits = kb.search("shingles bundle waste", 5);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].id, "shingles_coverage");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let kb = KnowledgeBase::builtin();
        let hits = kb.search("GUTTERS", 5);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "gutters_and_downspouts");
    }

    #[test]
    fn test_search_respects_limit() {
        let kb = KnowledgeBase::builtin();
        // "roof" appears in most entries.
        let hits = kb.search("roof", 3);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.search("", 5).is_empty());
        assert!(kb.search("   ", 5).is_empty());
    }

    #[test]
    fn test_no_match_returns_nothing() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.search("submarine", 5).is_empty());
    }

    #[test]
    fn test_by_category_material_filter() {
        let kb = KnowledgeBase::builtin();
        let entries = kb.by_category(KnowledgeCategory::Materials, Some("tiles"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "clay_tiles_specs");

        // "general" entries qualify for any material.
        let calc = kb.by_category(KnowledgeCategory::Calculations, Some("shingles"));
        assert_eq!(calc.len(), 2);
    }

    #[test]
    fn test_entry_serialization() {
        let kb = KnowledgeBase::builtin();
        let json = serde_json::to_string(&kb.entries()[0]).unwrap();
        assert!(json.contains("\"materials\""));
        let roundtrip: KnowledgeEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, kb.entries()[0]);
    }
}
