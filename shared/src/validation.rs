//! Input validation functions
//!
//! Field-level checks for the values the calculator form collects.
//! Messages are phrased for end users; the caller attaches the field name.

/// Validate age in years
pub fn validate_age_years(age: i32) -> Result<(), String> {
    if age < 1 {
        return Err("Age must be at least 1 year".to_string());
    }
    Ok(())
}

/// Validate a weight value in the unit the user entered
pub fn validate_weight(weight: f64) -> Result<(), String> {
    if weight.is_nan() || weight.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight <= 0.0 {
        return Err("Weight must be greater than zero".to_string());
    }
    Ok(())
}

/// Validate a height value in the unit the user entered (cm or feet)
pub fn validate_height(height: f64) -> Result<(), String> {
    if height.is_nan() || height.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height <= 0.0 {
        return Err("Height must be greater than zero".to_string());
    }
    Ok(())
}

/// Validate the optional inches component of an imperial height
pub fn validate_height_inches(inches: f64) -> Result<(), String> {
    if inches.is_nan() || inches.is_infinite() {
        return Err("Inches must be a valid number".to_string());
    }
    if inches < 0.0 {
        return Err("Inches cannot be negative".to_string());
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "sex" => "Sex",
        "weight" => "Weight",
        "height" => "Height",
        "height_inches" => "Height (inches)",
        "activity_level" => "Activity Level",
        "fasting_method" => "Fasting Method",
        "unit_system" => "Unit System",
        "five_two" => "5:2 retention factor",
        "sixteen_eight" => "16/8 retention factor",
        "alternate_day" => "Alternate-day retention factor",
        _ => field_name,
    }
}
