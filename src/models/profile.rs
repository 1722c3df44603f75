use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::meal::CostTier;

pub const MAX_WEIGHT_KG: f64 = 350.0;
pub const MAX_HEIGHT_CM: f64 = 260.0;
pub const MAX_AGE: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::Male => "male",
            Sex::Female => "female",
        })
    }
}

impl FromStr for Sex {
    type Err = PlannerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(PlannerError::invalid_profile(
                "sex",
                format!("'{}' is not one of male, female", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = PlannerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            other => Err(PlannerError::invalid_profile(
                "activity",
                format!(
                    "'{}' is not one of sedentary, light, moderate, active, very_active",
                    other
                ),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cut,
    Maintain,
    Bulk,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Cut => "cut",
            Goal::Maintain => "maintain",
            Goal::Bulk => "bulk",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = PlannerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cut" => Ok(Goal::Cut),
            "maintain" => Ok(Goal::Maintain),
            "bulk" => Ok(Goal::Bulk),
            other => Err(PlannerError::invalid_profile(
                "goal",
                format!("'{}' is not one of cut, maintain, bulk", other),
            )),
        }
    }
}

/// Body metrics and preferences of the person the plan is built for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    #[serde(default)]
    pub sex: Sex,
    pub activity: ActivityLevel,
    pub goal: Goal,
    pub tier: CostTier,
}

impl NutritionProfile {
    /// Reject metrics outside their valid domain before any computation.
    pub fn validate(&self) -> Result<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(PlannerError::invalid_profile(
                "weight_kg",
                "must be a positive number",
            ));
        }
        if self.weight_kg > MAX_WEIGHT_KG {
            return Err(PlannerError::invalid_profile(
                "weight_kg",
                format!("must not exceed {} kg", MAX_WEIGHT_KG),
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(PlannerError::invalid_profile(
                "height_cm",
                "must be a positive number",
            ));
        }
        if self.height_cm > MAX_HEIGHT_CM {
            return Err(PlannerError::invalid_profile(
                "height_cm",
                format!("must not exceed {} cm", MAX_HEIGHT_CM),
            ));
        }
        if self.age == 0 {
            return Err(PlannerError::invalid_profile("age", "must be positive"));
        }
        if self.age > MAX_AGE {
            return Err(PlannerError::invalid_profile(
                "age",
                format!("must not exceed {}", MAX_AGE),
            ));
        }
        Ok(())
    }
}
