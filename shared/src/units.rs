//! Unit conversion and normalization module
//!
//! This module handles the form's metric/imperial toggle. All arithmetic
//! runs on SI units (kg, cm); values are converted once on the way in and
//! once on the way out, never inside the formula.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.20462;

/// Centimeters per foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

// ============================================================================
// Unit System
// ============================================================================

/// Measurement system selected by the form's unit toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Convert an entered weight to kilograms
    pub fn weight_to_kg(&self, value: f64) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => value * KG_PER_LB,
        }
    }

    /// Convert a weight in kilograms back to this system's unit
    pub fn weight_from_kg(&self, kg: f64) -> f64 {
        match self {
            UnitSystem::Metric => kg,
            UnitSystem::Imperial => kg * LBS_PER_KG,
        }
    }

    /// Convert an entered height to centimeters.
    ///
    /// Metric height is already centimeters. Imperial height is feet, with
    /// an optional separate inches component that defaults to 0.
    pub fn height_to_cm(&self, value: f64, inches: Option<f64>) -> f64 {
        match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => {
                value * CM_PER_FOOT + inches.unwrap_or(0.0) * CM_PER_INCH
            }
        }
    }

    /// Unit suffix for a displayed weight
    pub fn weight_abbreviation(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

// ============================================================================
// Height Display Helper
// ============================================================================

/// Represents height in feet and inches for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeetInches {
    pub feet: i32,
    pub inches: f64,
}

impl FeetInches {
    /// Create from centimeters
    pub fn from_cm(cm: f64) -> Self {
        let total_inches = cm / CM_PER_INCH;
        let feet = (total_inches / INCHES_PER_FOOT).floor() as i32;
        let inches = total_inches % INCHES_PER_FOOT;
        Self { feet, inches }
    }

    /// Convert to centimeters
    pub fn to_cm(&self) -> f64 {
        (self.feet as f64 * INCHES_PER_FOOT + self.inches) * CM_PER_INCH
    }
}

impl fmt::Display for FeetInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{:.0}\"", self.feet, self.inches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Weight Conversion Tests
    // =========================================================================

    #[test]
    fn test_known_weight_conversions() {
        // 1 kg = 2.20462 lbs
        let lbs = UnitSystem::Imperial.weight_from_kg(1.0);
        assert!((lbs - 2.20462).abs() < 0.001);

        // 100 lbs = 45.3592 kg
        let kg = UnitSystem::Imperial.weight_to_kg(100.0);
        assert!((kg - 45.3592).abs() < 0.001);

        // Metric passes through untouched
        assert_eq!(UnitSystem::Metric.weight_to_kg(72.5), 72.5);
        assert_eq!(UnitSystem::Metric.weight_from_kg(72.5), 72.5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Weight conversion round-trip preserves value
        #[test]
        fn prop_weight_roundtrip_lbs(lbs in 44.0f64..1100.0) {
            let kg = UnitSystem::Imperial.weight_to_kg(lbs);
            let back_to_lbs = UnitSystem::Imperial.weight_from_kg(kg);
            prop_assert!((lbs - back_to_lbs).abs() < 0.01,
                "Round-trip failed: {} -> {} -> {}", lbs, kg, back_to_lbs);
        }

        /// Property: Metric identity conversion
        #[test]
        fn prop_metric_identity(kg in 20.0f64..500.0) {
            prop_assert_eq!(UnitSystem::Metric.weight_to_kg(kg), kg);
            prop_assert_eq!(UnitSystem::Metric.weight_from_kg(kg), kg);
        }
    }

    // =========================================================================
    // Height Conversion Tests
    // =========================================================================

    #[test]
    fn test_known_height_conversions() {
        // 5'11" = 180.34 cm
        let cm = UnitSystem::Imperial.height_to_cm(5.0, Some(11.0));
        assert!((cm - 180.34).abs() < 0.001);

        // Inches default to 0 when omitted: 6 ft = 182.88 cm
        let cm = UnitSystem::Imperial.height_to_cm(6.0, None);
        assert!((cm - 182.88).abs() < 0.001);

        // Metric passes through untouched, inches ignored
        assert_eq!(UnitSystem::Metric.height_to_cm(180.0, Some(11.0)), 180.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Separate inches and fractional feet agree
        #[test]
        fn prop_feet_inches_equivalence(feet in 3.0f64..7.0, inches in 0.0f64..12.0) {
            let split = UnitSystem::Imperial.height_to_cm(feet, Some(inches));
            let fractional =
                UnitSystem::Imperial.height_to_cm(feet + inches / INCHES_PER_FOOT, None);
            prop_assert!((split - fractional).abs() < 0.0001);
        }
    }

    // =========================================================================
    // FeetInches Tests
    // =========================================================================

    #[test]
    fn test_feet_inches_conversion() {
        let height = FeetInches { feet: 5, inches: 11.0 };
        let cm = height.to_cm();
        assert!((cm - 180.34).abs() < 0.01);

        let back = FeetInches::from_cm(cm);
        assert_eq!(back.feet, 5);
        assert!((back.inches - 11.0).abs() < 0.1);
    }

    #[test]
    fn test_feet_inches_display() {
        let height = FeetInches { feet: 6, inches: 2.0 };
        assert_eq!(format!("{}", height), "6'2\"");
    }

    // =========================================================================
    // String Parsing Tests
    // =========================================================================

    #[test]
    fn test_unit_system_parsing() {
        assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!("Imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert!("stone".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn test_unit_system_labels() {
        assert_eq!(UnitSystem::Metric.weight_abbreviation(), "kg");
        assert_eq!(UnitSystem::Imperial.weight_abbreviation(), "lbs");
        assert_eq!(UnitSystem::Metric.to_string(), "metric");
    }
}
