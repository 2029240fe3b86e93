//! Static plan catalog.
//!
//! All templates are `'static` data compiled into the binary, so lookups need
//! no initialization and no locking. A miss returns `None`; callers fall back
//! to [`default_workout`] / [`default_meals`].

mod meals;
mod workouts;

use crate::models::{
    CalorieBand, DietaryPreference, ExperienceLevel, MealTemplate, PrimaryGoal, WorkoutLocation,
    WorkoutTemplate,
};

/// Key used when a (goal, location, level) combination has no template
pub const DEFAULT_WORKOUT_KEY: (PrimaryGoal, WorkoutLocation, ExperienceLevel) = (
    PrimaryGoal::MaintainFitness,
    WorkoutLocation::Gym,
    ExperienceLevel::Beginner,
);

/// Key used when a (preference, band) combination has no template
pub const DEFAULT_MEAL_KEY: (DietaryPreference, CalorieBand) =
    (DietaryPreference::NonVegetarian, CalorieBand::From1800To2100);

pub fn lookup_workout(
    goal: PrimaryGoal,
    location: WorkoutLocation,
    level: ExperienceLevel,
) -> Option<WorkoutTemplate> {
    use ExperienceLevel::*;
    use PrimaryGoal::*;
    use WorkoutLocation::*;

    let template = match (goal, location, level) {
        (LoseWeight, Gym, Beginner) => workouts::LOSE_WEIGHT_GYM_BEGINNER,
        (LoseWeight, Gym, Intermediate) => workouts::LOSE_WEIGHT_GYM_INTERMEDIATE,
        (LoseWeight, Home, Beginner) => workouts::LOSE_WEIGHT_HOME_BEGINNER,
        (GainMuscle, Gym, Beginner) => workouts::GAIN_MUSCLE_GYM_BEGINNER,
        (GainMuscle, Gym, Intermediate) => workouts::GAIN_MUSCLE_GYM_INTERMEDIATE,
        (GainMuscle, Home, Beginner) => workouts::GAIN_MUSCLE_HOME_BEGINNER,
        (ImproveEndurance, Gym, Beginner) => workouts::IMPROVE_ENDURANCE_GYM_BEGINNER,
        (ImproveEndurance, Home, Beginner) => workouts::IMPROVE_ENDURANCE_HOME_BEGINNER,
        (MaintainFitness, Gym, Beginner) => workouts::MAINTAIN_FITNESS_GYM_BEGINNER,
        (MaintainFitness, Home, Beginner) => workouts::MAINTAIN_FITNESS_HOME_BEGINNER,
        _ => return None,
    };

    Some(template)
}

pub fn lookup_meal(preference: DietaryPreference, band: CalorieBand) -> Option<&'static MealTemplate> {
    use CalorieBand::*;
    use DietaryPreference::*;

    let template = match (preference, band) {
        (Vegetarian, From1500To1800) => &meals::VEGETARIAN_1500_1800,
        (Vegetarian, From1800To2100) => &meals::VEGETARIAN_1800_2100,
        (Vegetarian, From2100To2400) => &meals::VEGETARIAN_2100_2400,
        (Vegetarian, From2400To2700) => &meals::VEGETARIAN_2400_2700,
        (NonVegetarian, From1500To1800) => &meals::NON_VEGETARIAN_1500_1800,
        (NonVegetarian, From1800To2100) => &meals::NON_VEGETARIAN_1800_2100,
        (NonVegetarian, From2100To2400) => &meals::NON_VEGETARIAN_2100_2400,
        (NonVegetarian, From2400To2700) => &meals::NON_VEGETARIAN_2400_2700,
        (Vegan, From1500To1800) => &meals::VEGAN_1500_1800,
        (Vegan, From1800To2100) => &meals::VEGAN_1800_2100,
        (Vegan, From2100To2400) => &meals::VEGAN_2100_2400,
        (Vegan, From2400To2700) => &meals::VEGAN_2400_2700,
    };

    Some(template)
}

pub fn default_workout() -> WorkoutTemplate {
    workouts::MAINTAIN_FITNESS_GYM_BEGINNER
}

pub fn default_meals() -> &'static MealTemplate {
    &meals::NON_VEGETARIAN_1800_2100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_beginner_combination_is_present() {
        for goal in PrimaryGoal::ALL {
            for location in WorkoutLocation::ALL {
                let template = lookup_workout(goal, location, ExperienceLevel::Beginner)
                    .unwrap_or_else(|| panic!("missing {:?}/{:?}", goal, location));
                assert_eq!(template.len(), 4);
            }
        }
    }

    #[test]
    fn test_intermediate_only_for_gym_weight_loss_and_muscle_gain() {
        let present: Vec<_> = PrimaryGoal::ALL
            .iter()
            .flat_map(|goal| WorkoutLocation::ALL.iter().map(move |location| (*goal, *location)))
            .filter(|(goal, location)| {
                lookup_workout(*goal, *location, ExperienceLevel::Intermediate).is_some()
            })
            .collect();

        assert_eq!(
            present,
            vec![
                (PrimaryGoal::LoseWeight, WorkoutLocation::Gym),
                (PrimaryGoal::GainMuscle, WorkoutLocation::Gym),
            ]
        );
    }

    #[test]
    fn test_days_are_numbered_in_order() {
        for goal in PrimaryGoal::ALL {
            for location in WorkoutLocation::ALL {
                for level in [ExperienceLevel::Beginner, ExperienceLevel::Intermediate] {
                    if let Some(template) = lookup_workout(goal, location, level) {
                        let days: Vec<u32> = template.iter().map(|d| d.day).collect();
                        assert_eq!(days, vec![1, 2, 3, 4]);
                    }
                }
            }
        }
    }

    #[test]
    fn test_default_workout_matches_default_key() {
        let (goal, location, level) = DEFAULT_WORKOUT_KEY;
        assert_eq!(lookup_workout(goal, location, level), Some(default_workout()));
        assert_eq!(default_workout()[0].name, "Full Body");
    }

    #[test]
    fn test_meal_table_is_complete() {
        for preference in DietaryPreference::ALL {
            for band in CalorieBand::ALL {
                assert!(lookup_meal(preference, band).is_some());
            }
        }

        let (preference, band) = DEFAULT_MEAL_KEY;
        assert_eq!(lookup_meal(preference, band), Some(default_meals()));
        assert_eq!(default_meals().lunch.name, "Grilled Chicken with Sweet Potato & Broccoli");
    }

    #[test]
    fn test_meal_totals_increase_with_band() {
        for preference in DietaryPreference::ALL {
            let totals: Vec<u32> = CalorieBand::ALL
                .iter()
                .filter_map(|band| lookup_meal(preference, *band))
                .map(|meals| meals.total_calories())
                .collect();
            assert_eq!(totals, vec![1500, 1800, 2000, 2300]);
        }
    }

    #[test]
    fn test_rest_day_has_no_exercises() {
        let template =
            lookup_workout(PrimaryGoal::GainMuscle, WorkoutLocation::Home, ExperienceLevel::Beginner)
                .unwrap();
        assert_eq!(template[3].name, "Rest Day");
        assert!(template[3].exercises.is_empty());
    }
}
