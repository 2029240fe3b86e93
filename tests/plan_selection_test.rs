use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use charged_up::models::{
    ActivityLevel, CalorieBand, DietaryPreference, ExperienceLevel, PrimaryGoal, Sex, UserProfile,
    WorkoutLocation,
};
use charged_up::services::catalog;
use charged_up::services::plan_selection_service::{
    classify, diet_plan, rotation_index, todays_meals, todays_workout, workout_plan,
};

fn profile(goal: PrimaryGoal, location: WorkoutLocation, days: u32) -> UserProfile {
    UserProfile {
        weight: 70.0,
        height: 175.0,
        age: 25,
        sex: Sex::Male,
        activity_level: ActivityLevel::Sedentary,
        primary_goal: goal,
        workout_location: location,
        workout_days_per_week: days,
        dietary_preference: DietaryPreference::NonVegetarian,
    }
}

fn goal_strategy() -> impl Strategy<Value = PrimaryGoal> {
    prop::sample::select(PrimaryGoal::ALL.to_vec())
}

fn location_strategy() -> impl Strategy<Value = WorkoutLocation> {
    prop::sample::select(WorkoutLocation::ALL.to_vec())
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..3650).prop_map(|offset| NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset))
}

#[test]
fn test_reference_profile_end_to_end() {
    let user = profile(PrimaryGoal::MaintainFitness, WorkoutLocation::Gym, 4);

    let plan = workout_plan(&user);
    assert_eq!(plan.level, ExperienceLevel::Beginner);
    assert_eq!(plan.plan.len(), 4);

    let diet = diet_plan(&user);
    assert_eq!(diet.calorie_info.bmr, 1674.0);
    assert_eq!(diet.calorie_info.tdee, 2009.0);
    assert_eq!(diet.target_calories, 2009.0);
    assert_eq!(diet.band, CalorieBand::From1800To2100);
    assert_eq!(diet.band.label(), "1800-2100");
}

#[test]
fn test_diet_plan_wire_format() {
    let value = serde_json::to_value(diet_plan(&profile(
        PrimaryGoal::MaintainFitness,
        WorkoutLocation::Gym,
        4,
    )))
    .unwrap();

    assert_eq!(value["targetCalories"], 2009);
    assert_eq!(value["dietaryPreference"], "non_vegetarian");
    assert_eq!(value["calorieInfo"]["recommendation"], "2009 kcal/day");
    assert!(value["meals"]["snacks"].is_object());
    assert!(value.get("band").is_none());
}

#[test]
fn test_today_workout_wire_format() {
    // 2024-01-04 was a Thursday
    let thursday = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
    let today = todays_workout(&profile(PrimaryGoal::LoseWeight, WorkoutLocation::Home, 3), thursday);
    let value = serde_json::to_value(&today).unwrap();

    assert_eq!(value["day"], 1);
    assert_eq!(value["level"], "beginner");
    assert_eq!(value["location"], "home");
    assert_eq!(value["workout"]["day"], 1);
    assert!(value["workout"]["exercises"].as_array().unwrap().len() > 0);
}

#[test]
fn test_missing_combination_uses_default_program() {
    let plan = workout_plan(&profile(PrimaryGoal::ImproveEndurance, WorkoutLocation::Home, 6));

    assert_eq!(plan.level, ExperienceLevel::Intermediate);
    assert_eq!(plan.plan, catalog::default_workout().to_vec());
}

proptest! {
    #[test]
    fn prop_level_follows_frequency(days in 0u32..20) {
        let expected = if days >= 5 { ExperienceLevel::Intermediate } else { ExperienceLevel::Beginner };
        prop_assert_eq!(classify(days), expected);
    }

    #[test]
    fn prop_plan_is_template_prefix(
        goal in goal_strategy(),
        location in location_strategy(),
        days in 3u32..=6,
    ) {
        let plan = workout_plan(&profile(goal, location, days));
        let template = catalog::lookup_workout(goal, location, classify(days))
            .unwrap_or_else(catalog::default_workout);

        prop_assert!(plan.plan.len() <= days as usize);
        prop_assert_eq!(plan.plan.len(), template.len().min(days as usize));
        prop_assert_eq!(&plan.plan[..], &template[..plan.plan.len()]);
    }

    #[test]
    fn prop_today_is_in_template(
        goal in goal_strategy(),
        location in location_strategy(),
        days in 3u32..=6,
        date in date_strategy(),
    ) {
        let user = profile(goal, location, days);
        let today = todays_workout(&user, date);
        let template = catalog::lookup_workout(goal, location, classify(days))
            .unwrap_or_else(catalog::default_workout);

        let index = rotation_index(date, days);
        prop_assert!(index < days);
        prop_assert_eq!(today.day, index + 1);
        prop_assert!(template.contains(&today.workout));
        prop_assert_eq!(today.workout, template[index as usize % template.len()]);
    }

    #[test]
    fn prop_same_weekday_same_workout(
        goal in goal_strategy(),
        days in 3u32..=6,
        date in date_strategy(),
    ) {
        let user = profile(goal, WorkoutLocation::Gym, days);
        let next_week = date + Duration::days(7);

        prop_assert_eq!(todays_workout(&user, date).workout, todays_workout(&user, next_week).workout);
    }

    #[test]
    fn prop_meals_match_band(
        weight in 30.0f64..300.0,
        height in 100.0f64..250.0,
        age in 13i32..=100,
        preference in prop::sample::select(DietaryPreference::ALL.to_vec()),
    ) {
        let mut user = profile(PrimaryGoal::MaintainFitness, WorkoutLocation::Gym, 4);
        user.weight = weight;
        user.height = height;
        user.age = age;
        user.dietary_preference = preference;

        let plan = diet_plan(&user);
        let expected = catalog::lookup_meal(preference, plan.band).unwrap();
        prop_assert_eq!(&plan.meals, expected);
        prop_assert_eq!(todays_meals(&user).meals, plan.meals);
    }
}
