//! Function point banding table
//!
//! Maps (function type, sub-function count, elementary data item count) to an
//! integer function point weight with a qualitative complexity label. Ranges
//! are inclusive and must be disjoint per function type; overlap is rejected
//! when the table is built.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::reference::ReferenceError;

/// The five function categories of function point analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionType {
    /// Internal logical data maintained by the application
    InternalData,
    /// Data referenced from another application
    ExternalData,
    /// Elementary input transaction
    Input,
    /// Elementary output transaction
    Output,
    /// Elementary inquiry (input/output pair without derived data)
    Inquiry,
}

impl Default for FunctionType {
    fn default() -> Self {
        FunctionType::InternalData
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionType::InternalData => write!(f, "internal_data"),
            FunctionType::ExternalData => write!(f, "external_data"),
            FunctionType::Input => write!(f, "input"),
            FunctionType::Output => write!(f, "output"),
            FunctionType::Inquiry => write!(f, "inquiry"),
        }
    }
}

/// Qualitative complexity label attached to a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Average,
    High,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Low => write!(f, "low"),
            Complexity::Average => write!(f, "average"),
            Complexity::High => write!(f, "high"),
        }
    }
}

/// Inclusive integer range used for band bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether the range contains the count (inclusive on both ends)
    pub fn contains(&self, count: u32) -> bool {
        count >= self.min && count <= self.max
    }

    /// Whether two inclusive ranges share at least one value
    pub fn overlaps(&self, other: &CountRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// One reference row of the banding table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionPointBand {
    /// Function category this band applies to
    pub function_type: FunctionType,

    /// Qualitative complexity label
    pub complexity: Complexity,

    /// Sub-function count range
    pub sub_functions: CountRange,

    /// Elementary data item count range
    pub data_items: CountRange,

    /// Function point weight
    pub points: u32,
}

impl FunctionPointBand {
    /// Whether the band's ranges contain both counts
    pub fn matches(&self, function_type: FunctionType, sub_functions: u32, data_items: u32) -> bool {
        self.function_type == function_type
            && self.sub_functions.contains(sub_functions)
            && self.data_items.contains(data_items)
    }

    /// Whether two bands of the same function type could both match a count pair
    fn conflicts_with(&self, other: &FunctionPointBand) -> bool {
        self.function_type == other.function_type
            && self.sub_functions.overlaps(&other.sub_functions)
            && self.data_items.overlaps(&other.data_items)
    }
}

/// Validated banding table
#[derive(Debug, Clone)]
pub struct BandTable {
    bands: Vec<FunctionPointBand>,
}

impl BandTable {
    /// Build a table, rejecting bands whose ranges overlap for one function type
    pub fn new(bands: Vec<FunctionPointBand>) -> Result<Self, ReferenceError> {
        for (i, a) in bands.iter().enumerate() {
            for b in &bands[i + 1..] {
                if a.conflicts_with(b) {
                    return Err(ReferenceError::OverlappingBands {
                        function_type: a.function_type,
                        first: format!(
                            "sub {}-{}, data {}-{}",
                            a.sub_functions.min, a.sub_functions.max,
                            a.data_items.min, a.data_items.max
                        ),
                        second: format!(
                            "sub {}-{}, data {}-{}",
                            b.sub_functions.min, b.sub_functions.max,
                            b.data_items.min, b.data_items.max
                        ),
                    });
                }
            }
        }

        Ok(Self { bands })
    }

    /// Find the band whose ranges contain both counts
    pub fn lookup(
        &self,
        function_type: FunctionType,
        sub_functions: u32,
        data_items: u32,
    ) -> Result<&FunctionPointBand, ReferenceError> {
        self.bands
            .iter()
            .find(|band| band.matches(function_type, sub_functions, data_items))
            .ok_or(ReferenceError::NoMatchingBand {
                function_type,
                sub_functions,
                data_items,
            })
    }

    /// Number of bands in the table
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Whether the table has no bands
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(
        function_type: FunctionType,
        subs: (u32, u32),
        data: (u32, u32),
        points: u32,
    ) -> FunctionPointBand {
        FunctionPointBand {
            function_type,
            complexity: Complexity::Low,
            sub_functions: CountRange::new(subs.0, subs.1),
            data_items: CountRange::new(data.0, data.1),
            points,
        }
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = CountRange::new(2, 5);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(5));
        assert!(!range.contains(6));
    }

    #[test]
    fn test_lookup_matches_single_band() {
        let table = BandTable::new(vec![
            band(FunctionType::Input, (0, 1), (0, 4), 3),
            band(FunctionType::Input, (0, 1), (5, 15), 3),
        ])
        .unwrap();

        let found = table.lookup(FunctionType::Input, 1, 3).unwrap();
        assert_eq!(found.points, 3);
        assert_eq!(found.data_items.max, 4);
    }

    #[test]
    fn test_lookup_upper_bound_stays_in_band() {
        let table = BandTable::new(vec![
            band(FunctionType::Input, (0, 1), (0, 4), 3),
            band(FunctionType::Input, (0, 1), (5, 15), 4),
        ])
        .unwrap();

        // Exactly at the upper bound resolves to that band, one above to the next.
        assert_eq!(table.lookup(FunctionType::Input, 0, 4).unwrap().points, 3);
        assert_eq!(table.lookup(FunctionType::Input, 0, 5).unwrap().points, 4);
    }

    #[test]
    fn test_lookup_no_band_is_not_found() {
        let table = BandTable::new(vec![band(FunctionType::Input, (0, 1), (0, 4), 3)]).unwrap();

        let err = table.lookup(FunctionType::Input, 0, 50).unwrap_err();
        assert!(matches!(err, ReferenceError::NoMatchingBand { .. }));

        let err = table.lookup(FunctionType::Output, 0, 2).unwrap_err();
        assert!(matches!(err, ReferenceError::NoMatchingBand { .. }));
    }

    #[test]
    fn test_overlapping_bands_rejected() {
        let err = BandTable::new(vec![
            band(FunctionType::Input, (0, 2), (0, 10), 3),
            band(FunctionType::Input, (2, 4), (8, 20), 4),
        ])
        .unwrap_err();
        assert!(matches!(err, ReferenceError::OverlappingBands { .. }));
    }

    #[test]
    fn test_same_ranges_different_type_do_not_conflict() {
        let table = BandTable::new(vec![
            band(FunctionType::Input, (0, 2), (0, 10), 3),
            band(FunctionType::Output, (0, 2), (0, 10), 4),
        ]);
        assert!(table.is_ok());
    }
}
