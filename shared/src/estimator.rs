//! Monthly weight-loss estimation
//!
//! The operation this crate exists for: take the six fields the form
//! collects, normalize to SI units, run BMR -> TDEE -> fasting deficit,
//! and report the estimated loss per month in the user's unit system.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::metabolism::{calculate_bmr_harris_benedict, calculate_tdee, ActivityLevel, Sex};
use crate::units::UnitSystem;
use crate::validation::{
    validate_age_years, validate_height, validate_height_inches, validate_weight,
};

/// Energy content of one kilogram of body fat, in kcal
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

/// Days assumed per month for the monthly projection
pub const DAYS_PER_MONTH: f64 = 30.0;

// ============================================================================
// Fasting Methods
// ============================================================================

/// Intermittent-fasting protocol selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FastingMethod {
    /// Fast on 2 days of the week, eat normally on the other 5
    FiveTwo,
    /// Daily 8-hour eating window, 16-hour fast
    SixteenEight,
    /// Eat one day, fast the next
    AlternateDay,
}

impl FastingMethod {
    /// Fraction of TDEE still consumed while following the protocol
    pub fn retention_factor(&self) -> f64 {
        match self {
            FastingMethod::FiveTwo => 0.70,
            FastingMethod::SixteenEight => 0.85,
            FastingMethod::AlternateDay => 0.60,
        }
    }

    /// Option label shown by the form
    pub fn description(&self) -> &'static str {
        match self {
            FastingMethod::FiveTwo => "5:2 Diet (fast 2 days a week)",
            FastingMethod::SixteenEight => "16/8 (eat within 8 hours / fast 16 hours)",
            FastingMethod::AlternateDay => {
                "Alternate-day Fasting (eat one day / fast the next day)"
            }
        }
    }
}

impl std::str::FromStr for FastingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "5:2" | "five_two" => Ok(FastingMethod::FiveTwo),
            "16/8" | "16:8" | "sixteen_eight" => Ok(FastingMethod::SixteenEight),
            "alternate" | "alternate_day" => Ok(FastingMethod::AlternateDay),
            _ => Err(format!("Unknown fasting method: {}", s)),
        }
    }
}

// ============================================================================
// Retention Policy
// ============================================================================

/// Retention factors per protocol.
///
/// These are heuristic approximations with no physiological derivation, so
/// they live in a policy value a host can override (or load from JSON)
/// instead of being baked into the formula. The defaults preserve the
/// original constants exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastingPolicy {
    pub five_two: f64,
    pub sixteen_eight: f64,
    pub alternate_day: f64,
}

impl Default for FastingPolicy {
    fn default() -> Self {
        Self {
            five_two: FastingMethod::FiveTwo.retention_factor(),
            sixteen_eight: FastingMethod::SixteenEight.retention_factor(),
            alternate_day: FastingMethod::AlternateDay.retention_factor(),
        }
    }
}

impl FastingPolicy {
    /// Retention factor for a protocol under this policy
    pub fn retention_factor(&self, method: FastingMethod) -> f64 {
        match method {
            FastingMethod::FiveTwo => self.five_two,
            FastingMethod::SixteenEight => self.sixteen_eight,
            FastingMethod::AlternateDay => self.alternate_day,
        }
    }

    /// Load a policy from a host-provided JSON configuration blob
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let policy: Self = serde_json::from_str(json)
            .map_err(|e| ValidationError::new("fasting_policy", e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// A retention factor outside (0, 1] would turn the deficit negative
    /// or meaningless, so the policy is checked before use.
    fn validate(&self) -> Result<(), ValidationError> {
        let factors = [
            ("five_two", self.five_two),
            ("sixteen_eight", self.sixteen_eight),
            ("alternate_day", self.alternate_day),
        ];
        for (field, value) in factors {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(ValidationError::new(
                    field,
                    "Retention factor must be greater than 0 and at most 1",
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Request and Result Types
// ============================================================================

/// The six fields collected by the calculator form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Age in years
    pub age: i32,
    pub sex: Sex,
    /// Weight in kg (metric) or lbs (imperial)
    pub weight: f64,
    /// Height in cm (metric) or feet (imperial)
    pub height: f64,
    /// Extra inches on top of `height` in imperial mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_inches: Option<f64>,
    pub activity_level: ActivityLevel,
    pub fasting_method: FastingMethod,
    pub unit_system: UnitSystem,
}

impl EstimateRequest {
    /// Check the numeric fields before any arithmetic runs
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_age_years(self.age).map_err(|msg| ValidationError::new("age", msg))?;
        validate_weight(self.weight).map_err(|msg| ValidationError::new("weight", msg))?;
        validate_height(self.height).map_err(|msg| ValidationError::new("height", msg))?;
        if let Some(inches) = self.height_inches {
            validate_height_inches(inches)
                .map_err(|msg| ValidationError::new("height_inches", msg))?;
        }
        Ok(())
    }

    /// Weight normalized to kilograms
    pub fn weight_kg(&self) -> f64 {
        self.unit_system.weight_to_kg(self.weight)
    }

    /// Height normalized to centimeters
    pub fn height_cm(&self) -> f64 {
        self.unit_system.height_to_cm(self.height, self.height_inches)
    }
}

/// Estimate result with the intermediate values the formula passed through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightLossEstimate {
    /// Basal Metabolic Rate, kcal/day
    pub bmr: f64,
    /// Total Daily Energy Expenditure, kcal/day
    pub tdee: f64,
    /// Retention factor applied for the fasting method
    pub retention_factor: f64,
    /// Estimated daily caloric deficit, kcal
    pub daily_deficit_kcal: f64,
    /// Estimated loss per month, rounded to two decimal places
    pub monthly_loss: f64,
    /// Unit of `monthly_loss` ("kg" or "lbs")
    pub unit: String,
}

// ============================================================================
// Estimation
// ============================================================================

/// Round to two decimal places for display
fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimate monthly weight loss under the default retention policy
pub fn estimate(request: &EstimateRequest) -> Result<WeightLossEstimate, ValidationError> {
    estimate_with_policy(request, &FastingPolicy::default())
}

/// Estimate monthly weight loss with caller-supplied retention factors
pub fn estimate_with_policy(
    request: &EstimateRequest,
    policy: &FastingPolicy,
) -> Result<WeightLossEstimate, ValidationError> {
    request.validate()?;
    policy.validate()?;

    let weight_kg = request.weight_kg();
    let height_cm = request.height_cm();

    let bmr = calculate_bmr_harris_benedict(weight_kg, height_cm, request.age, request.sex);
    let tdee = calculate_tdee(bmr, request.activity_level);

    let retention_factor = policy.retention_factor(request.fasting_method);
    let daily_deficit_kcal = tdee * (1.0 - retention_factor);
    let monthly_loss_kg = daily_deficit_kcal * DAYS_PER_MONTH / KCAL_PER_KG_FAT;
    let monthly_loss = round_two_decimals(request.unit_system.weight_from_kg(monthly_loss_kg));

    tracing::debug!(
        weight_kg,
        height_cm,
        bmr,
        tdee,
        daily_deficit_kcal,
        monthly_loss,
        unit = request.unit_system.weight_abbreviation(),
        "calculated monthly weight loss"
    );

    Ok(WeightLossEstimate {
        bmr,
        tdee,
        retention_factor,
        daily_deficit_kcal,
        monthly_loss,
        unit: request.unit_system.weight_abbreviation().to_string(),
    })
}

/// Estimate monthly weight loss, returning only the rounded number
pub fn monthly_weight_loss(request: &EstimateRequest) -> Result<f64, ValidationError> {
    Ok(estimate(request)?.monthly_loss)
}
