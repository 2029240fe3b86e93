use proptest::prelude::*;

use charged_up::models::{ActivityLevel, CalorieBand, PrimaryGoal, Sex};
use charged_up::services::calorie_service::{
    activity_multiplier, bracket, calculate_bmr, compute_calories, goal_adjustment,
};

fn sex_strategy() -> impl Strategy<Value = Sex> {
    prop::sample::select(vec![Sex::Male, Sex::Female, Sex::Other])
}

fn activity_strategy() -> impl Strategy<Value = ActivityLevel> {
    prop::sample::select(vec![
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ])
}

fn goal_strategy() -> impl Strategy<Value = PrimaryGoal> {
    prop::sample::select(PrimaryGoal::ALL.to_vec())
}

fn band_rank(band: CalorieBand) -> usize {
    CalorieBand::ALL.iter().position(|b| *b == band).unwrap()
}

proptest! {
    #[test]
    fn prop_bmr_matches_formula(
        weight in 30.0f64..300.0,
        height in 100.0f64..250.0,
        age in 13i32..=100,
        sex in sex_strategy(),
    ) {
        let offset = if sex == Sex::Male { 5.0 } else { -161.0 };
        let expected = 10.0 * weight + 6.25 * height - 5.0 * f64::from(age) + offset;
        prop_assert!((calculate_bmr(weight, height, age, sex) - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_outputs_are_whole_and_consistent(
        weight in 30.0f64..300.0,
        height in 100.0f64..250.0,
        age in 13i32..=100,
        sex in sex_strategy(),
        activity in activity_strategy(),
        goal in goal_strategy(),
    ) {
        let info = compute_calories(weight, height, age, sex, activity, goal);

        prop_assert_eq!(info.bmr.fract(), 0.0);
        prop_assert_eq!(info.tdee.fract(), 0.0);
        prop_assert_eq!(info.target_calories.fract(), 0.0);

        let bmr = calculate_bmr(weight, height, age, sex);
        let tdee = bmr * activity_multiplier(activity);
        prop_assert!((info.target_calories - (tdee + goal_adjustment(goal))).abs() <= 0.5);
        prop_assert_eq!(info.recommendation, format!("{} kcal/day", info.target_calories));
    }

    #[test]
    fn prop_more_activity_never_lowers_tdee(
        weight in 30.0f64..300.0,
        height in 100.0f64..250.0,
        age in 13i32..=100,
        sex in sex_strategy(),
    ) {
        let tdee: Vec<f64> = [
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ]
        .iter()
        .map(|level| compute_calories(weight, height, age, sex, *level, PrimaryGoal::MaintainFitness).tdee)
        .collect();

        prop_assert!(tdee.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn prop_bracket_is_monotonic(a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(band_rank(bracket(low)) <= band_rank(bracket(high)));
    }

    #[test]
    fn prop_bracket_bounds(target in 0.0f64..5000.0) {
        let band = bracket(target);
        match band {
            CalorieBand::From1500To1800 => prop_assert!(target < 1800.0),
            CalorieBand::From1800To2100 => prop_assert!((1800.0..2100.0).contains(&target)),
            CalorieBand::From2100To2400 => prop_assert!((2100.0..2400.0).contains(&target)),
            CalorieBand::From2400To2700 => prop_assert!(target >= 2400.0),
        }
    }
}
