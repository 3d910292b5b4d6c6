//! Basal metabolism and energy expenditure
//!
//! BMR via the revised Harris-Benedict equation, scaled by activity level
//! to a Total Daily Energy Expenditure (TDEE). All functions are pure and
//! operate on SI units.

use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Enumerations
// ============================================================================

/// Biological sex, which selects the BMR equation branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex: {}", s)),
        }
    }
}

/// Weekly activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 hours/week
    Light,
    /// Moderate exercise 3-7 hours/week
    Moderate,
    /// Hard exercise 7+ hours/week
    VeryActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::VeryActive => 1.725,
        }
    }

    /// Option label shown by the form
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light activity (1-3hrs/week)",
            ActivityLevel::Moderate => "Moderate activity (3-7hrs/week)",
            ActivityLevel::VeryActive => "Very active (7+hrs/week)",
        }
    }

    /// All levels, ordered from least to most active
    pub fn all() -> [ActivityLevel; 4] {
        [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::VeryActive,
        ]
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" | "lightly_active" => Ok(ActivityLevel::Light),
            "moderate" | "moderately_active" => Ok(ActivityLevel::Moderate),
            "very" | "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate BMR using the Harris-Benedict equation (revised)
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
///
/// Clamped at zero: the linear fit dips below zero for very small body
/// sizes combined with extreme ages.
pub fn calculate_bmr_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: Sex,
) -> f64 {
    let bmr = match sex {
        Sex::Male => {
            88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years as f64
        }
        Sex::Female => {
            447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years as f64
        }
    };
    bmr.max(0.0)
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}
