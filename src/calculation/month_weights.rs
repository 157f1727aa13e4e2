//! Month weight table.
//!
//! This module provides the [`MonthWeightTable`], which supplies the per-day point
//! value for each calendar month. The default table encodes a high season
//! (January, February, July, December at 11 points), a low season (August at 3 points)
//! and mid-range values elsewhere.

use std::collections::BTreeMap;

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default points per vacation day, indexed by month (January first).
pub const DEFAULT_MONTH_WEIGHTS: [u32; 12] = [11, 11, 7, 5, 5, 6, 11, 3, 5, 6, 6, 11];

/// One row of the month weight reference table.
///
/// # Example
///
/// ```
/// use vacation_points::calculation::MonthWeightTable;
///
/// let entries = MonthWeightTable::default().entries();
/// assert_eq!(entries[7].month, 8);
/// assert_eq!(entries[7].name, "August");
/// assert_eq!(entries[7].points, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWeightEntry {
    /// The month number (1-12).
    pub month: u32,
    /// The month's English name.
    pub name: String,
    /// Points awarded per vacation day in this month.
    pub points: u32,
}

/// Maps each calendar month to a positive point value per vacation day.
///
/// The table is immutable once built and is passed by reference into the
/// scoring functions, so concurrent computations can share one instance.
///
/// # Example
///
/// ```
/// use vacation_points::calculation::MonthWeightTable;
///
/// let weights = MonthWeightTable::default();
/// assert_eq!(weights.weight(1).unwrap(), 11);
/// assert_eq!(weights.weight(8).unwrap(), 3);
/// assert!(weights.weight(13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWeightTable {
    weights: [u32; 12],
}

impl Default for MonthWeightTable {
    fn default() -> Self {
        Self {
            weights: DEFAULT_MONTH_WEIGHTS,
        }
    }
}

impl MonthWeightTable {
    /// Creates a table from twelve weights, January first.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonthWeights`] if any weight is zero.
    pub fn new(weights: [u32; 12]) -> EngineResult<Self> {
        if let Some(index) = weights.iter().position(|w| *w == 0) {
            return Err(EngineError::InvalidMonthWeights {
                message: format!("weight for month {} must be positive", index + 1),
            });
        }
        Ok(Self { weights })
    }

    /// Creates a table from a month number to weight mapping.
    ///
    /// Every month 1-12 must be present exactly once and no other keys are allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use vacation_points::calculation::MonthWeightTable;
    ///
    /// let map: BTreeMap<u32, u32> = (1..=12).map(|m| (m, 1)).collect();
    /// let flat = MonthWeightTable::from_map(&map).unwrap();
    /// assert_eq!(flat.weight(6).unwrap(), 1);
    /// ```
    pub fn from_map(map: &BTreeMap<u32, u32>) -> EngineResult<Self> {
        if let Some(month) = map.keys().find(|m| !(1..=12).contains(*m)) {
            return Err(EngineError::InvalidMonthWeights {
                message: format!("month {} is outside 1-12", month),
            });
        }

        let mut weights = [0u32; 12];
        for (slot, month) in weights.iter_mut().zip(1u32..=12) {
            *slot = *map.get(&month).ok_or_else(|| EngineError::InvalidMonthWeights {
                message: format!("missing weight for month {}", month),
            })?;
        }

        Self::new(weights)
    }

    /// Returns the points per vacation day for a month (1-12).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownMonth`] for any value outside 1-12. Months
    /// derived from real calendar dates never hit this path.
    pub fn weight(&self, month: u32) -> EngineResult<u32> {
        month
            .checked_sub(1)
            .and_then(|index| self.weights.get(index as usize))
            .copied()
            .ok_or(EngineError::UnknownMonth { month })
    }

    /// Returns the table as a month number to weight mapping.
    pub fn to_map(&self) -> BTreeMap<u32, u32> {
        (1u32..=12).zip(self.weights).collect()
    }

    /// Returns all twelve rows of the reference table in calendar order.
    pub fn entries(&self) -> Vec<MonthWeightEntry> {
        std::iter::successors(Some(Month::January), |month| Some(month.succ()))
            .zip(self.weights)
            .map(|(month, points)| MonthWeightEntry {
                month: month.number_from_month(),
                name: month.name().to_string(),
                points,
            })
            .collect()
    }
}

/// Returns the English name of a month number (1-12).
///
/// # Example
///
/// ```
/// use vacation_points::calculation::month_name;
///
/// assert_eq!(month_name(12).unwrap(), "December");
/// assert!(month_name(0).is_err());
/// ```
pub fn month_name(month: u32) -> EngineResult<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .ok_or(EngineError::UnknownMonth { month })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_match_seasons() {
        let weights = MonthWeightTable::default();
        let expected = [
            (1, 11),
            (2, 11),
            (3, 7),
            (4, 5),
            (5, 5),
            (6, 6),
            (7, 11),
            (8, 3),
            (9, 5),
            (10, 6),
            (11, 6),
            (12, 11),
        ];
        for (month, points) in expected {
            assert_eq!(weights.weight(month).unwrap(), points, "month {}", month);
        }
    }

    #[test]
    fn test_weight_rejects_zero() {
        match MonthWeightTable::default().weight(0) {
            Err(EngineError::UnknownMonth { month }) => assert_eq!(month, 0),
            other => panic!("Expected UnknownMonth, got {:?}", other),
        }
    }

    #[test]
    fn test_weight_rejects_thirteen() {
        assert!(matches!(
            MonthWeightTable::default().weight(13),
            Err(EngineError::UnknownMonth { month: 13 })
        ));
    }

    #[test]
    fn test_new_rejects_zero_weight() {
        let mut weights = DEFAULT_MONTH_WEIGHTS;
        weights[4] = 0;
        match MonthWeightTable::new(weights) {
            Err(EngineError::InvalidMonthWeights { message }) => {
                assert!(message.contains("month 5"));
            }
            other => panic!("Expected InvalidMonthWeights, got {:?}", other),
        }
    }

    #[test]
    fn test_from_map_round_trips_default() {
        let table = MonthWeightTable::default();
        assert_eq!(MonthWeightTable::from_map(&table.to_map()).unwrap(), table);
    }

    #[test]
    fn test_from_map_rejects_missing_month() {
        let mut map = MonthWeightTable::default().to_map();
        map.remove(&9);
        match MonthWeightTable::from_map(&map) {
            Err(EngineError::InvalidMonthWeights { message }) => {
                assert!(message.contains("month 9"));
            }
            other => panic!("Expected InvalidMonthWeights, got {:?}", other),
        }
    }

    #[test]
    fn test_from_map_rejects_extra_month() {
        let mut map = MonthWeightTable::default().to_map();
        map.insert(13, 4);
        assert!(MonthWeightTable::from_map(&map).is_err());
    }

    #[test]
    fn test_entries_are_in_calendar_order() {
        let entries = MonthWeightTable::default().entries();
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].name, "January");
        assert_eq!(entries[0].points, 11);
        assert_eq!(entries[11].name, "December");
        let months: Vec<u32> = entries.iter().map(|e| e.month).collect();
        assert_eq!(months, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1).unwrap(), "January");
        assert_eq!(month_name(8).unwrap(), "August");
        assert!(month_name(13).is_err());
        assert!(month_name(300).is_err());
    }
}
