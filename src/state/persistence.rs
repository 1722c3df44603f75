use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalog::MealCatalog;
use crate::error::Result;
use crate::models::{Meal, MealPlan, NutritionProfile};
use crate::packs::{PackRegistry, PackSize};
use crate::planner::PlannerConfig;

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "loaded json");
    Ok(value)
}

fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved json");
    Ok(())
}

/// Load a catalog from a JSON array of meals.
///
/// Invalid meals and duplicate names within a category are rejected.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let meals: Vec<Meal> = read_json(path)?;
    MealCatalog::new(meals)
}

pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &MealCatalog) -> Result<()> {
    write_json(path, &catalog.to_meals())
}

/// Load a pack registry from a JSON object keyed by ingredient name.
pub fn load_pack_registry<P: AsRef<Path>>(path: P) -> Result<PackRegistry> {
    let entries: BTreeMap<String, PackSize> = read_json(path)?;
    PackRegistry::new(entries)
}

pub fn save_pack_registry<P: AsRef<Path>>(path: P, registry: &PackRegistry) -> Result<()> {
    write_json(path, registry.entries())
}

pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<NutritionProfile> {
    let profile: NutritionProfile = read_json(path)?;
    profile.validate()?;
    Ok(profile)
}

/// Load planner settings. Missing fields take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlannerConfig> {
    let config: PlannerConfig = read_json(path)?;
    config.validate()?;
    Ok(config)
}

pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    read_json(path)
}

pub fn save_plan<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    write_json(path, plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::models::{CostTier, SlotCategory, Unit};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_catalog_from_json() {
        let json = r#"[
            {"name": "Овесена каша", "category": "breakfast", "protein_g": 20, "fat_g": 8,
             "carbs_g": 60, "cost_tier": "budget",
             "ingredients": [{"name": "овесени ядки", "quantity": 80, "unit": "g"}]},
            {"name": "Ябълка", "category": "snack", "protein_g": 0.5, "fat_g": 0.3,
             "carbs_g": 25, "cost_tier": "budget",
             "ingredients": [{"name": "ябълка", "quantity": 1, "unit": "pcs"}]}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        let snack = catalog.find(SlotCategory::Snack, "ябълка").unwrap();
        assert_eq!(snack.ingredients[0].unit, Unit::Piece);
        assert_eq!(snack.cost_tier, CostTier::Budget);
    }

    #[test]
    fn test_duplicate_meals_rejected() {
        let json = r#"[
            {"name": "Каша", "category": "breakfast", "protein_g": 1, "fat_g": 1, "carbs_g": 1,
             "cost_tier": "budget", "ingredients": [{"name": "ориз", "quantity": 1, "unit": "g"}]},
            {"name": "каша", "category": "breakfast", "protein_g": 2, "fat_g": 2, "carbs_g": 2,
             "cost_tier": "budget", "ingredients": [{"name": "ориз", "quantity": 1, "unit": "g"}]}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        assert!(matches!(
            load_catalog(file.path()),
            Err(PlannerError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_catalog_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        save_catalog(file.path(), MealCatalog::builtin()).unwrap();
        let reloaded = load_catalog(file.path()).unwrap();
        assert_eq!(reloaded.len(), MealCatalog::builtin().len());
    }

    #[test]
    fn test_registry_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        save_pack_registry(file.path(), PackRegistry::builtin()).unwrap();
        let reloaded = load_pack_registry(file.path()).unwrap();
        assert_eq!(reloaded.entries(), PackRegistry::builtin().entries());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"variety_cap": 1, "relaxed_variety_cap": 2}"#)
            .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.variety_cap, 1);
        assert_eq!(config.window_days, PlannerConfig::default().window_days);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"window_days": 0}"#).unwrap();
        assert!(matches!(
            load_config(file.path()),
            Err(PlannerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_profile_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"weight_kg": -5, "height_cm": 170, "age": 30,
                 "activity": "light", "goal": "cut", "tier": "budget"}"#,
        )
        .unwrap();
        assert!(matches!(
            load_profile(file.path()),
            Err(PlannerError::InvalidProfile {
                field: "weight_kg",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_plan(dir.path().join("missing.json"));
        assert!(matches!(result, Err(PlannerError::Io(_))));
    }
}
