use serde::{Serialize, Serializer};

use super::profile::{CalorieBand, DietaryPreference, ExperienceLevel, PrimaryGoal, WorkoutLocation};

/// Repetition prescription: a plain count or a descriptive token such as "20 min"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Described(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub sets: u32,
    pub reps: Reps,
    /// Rest between sets, "-" when not applicable
    pub rest: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    pub day: u32,
    pub name: &'static str,
    pub exercises: &'static [Exercise],
}

/// Ordered day sequence for one (goal, location, level) key
pub type WorkoutTemplate = &'static [DayPlan];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealEntry {
    pub name: &'static str,
    pub calories: u32,
    pub macros: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealTemplate {
    pub breakfast: MealEntry,
    pub lunch: MealEntry,
    pub dinner: MealEntry,
    pub snacks: MealEntry,
}

impl MealTemplate {
    pub fn total_calories(&self) -> u32 {
        self.breakfast.calories + self.lunch.calories + self.dinner.calories + self.snacks.calories
    }
}

/// Daily energy figures derived from a profile; recomputed on every request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieInfo {
    #[serde(serialize_with = "serialize_kcal")]
    pub bmr: f64,
    #[serde(serialize_with = "serialize_kcal")]
    pub tdee: f64,
    #[serde(serialize_with = "serialize_kcal")]
    pub target_calories: f64,
    pub recommendation: String,
}

/// Whole kcal values go out as JSON integers; non-finite values become null.
pub(crate) fn serialize_kcal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_none()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub meals: MealTemplate,
    pub calorie_info: CalorieInfo,
    pub dietary_preference: DietaryPreference,
    #[serde(serialize_with = "serialize_kcal")]
    pub target_calories: f64,
    #[serde(skip)]
    pub band: CalorieBand,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayMeals {
    pub meals: MealTemplate,
    pub calorie_info: CalorieInfo,
    pub dietary_preference: DietaryPreference,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub plan: Vec<DayPlan>,
    pub level: ExperienceLevel,
    pub location: WorkoutLocation,
    pub goal: PrimaryGoal,
    pub days_per_week: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayWorkout {
    pub workout: DayPlan,
    /// 1-based position in the weekly rotation
    pub day: u32,
    pub level: ExperienceLevel,
    pub location: WorkoutLocation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reps_serialize_untagged() {
        assert_eq!(serde_json::to_value(Reps::Count(12)).unwrap(), json!(12));
        assert_eq!(serde_json::to_value(Reps::Described("20 min")).unwrap(), json!("20 min"));
    }

    #[test]
    fn test_calorie_info_wire_format() {
        let info = CalorieInfo {
            bmr: 1738.0,
            tdee: 2086.0,
            target_calories: 2086.0,
            recommendation: "2086 kcal/day".to_string(),
        };

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(
            value,
            json!({
                "bmr": 1738,
                "tdee": 2086,
                "targetCalories": 2086,
                "recommendation": "2086 kcal/day"
            })
        );
    }

    #[test]
    fn test_nan_kcal_serializes_as_null() {
        let info = CalorieInfo {
            bmr: f64::NAN,
            tdee: f64::NAN,
            target_calories: f64::NAN,
            recommendation: "NaN kcal/day".to_string(),
        };

        let value = serde_json::to_value(&info).unwrap();
        assert!(value["bmr"].is_null());
        assert!(value["targetCalories"].is_null());
    }
}
