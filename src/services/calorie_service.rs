//! Mifflin-St Jeor energy estimates and calorie banding.
//!
//! Everything here is a pure function of its inputs. NaN or out-of-range
//! numbers are not rejected; they flow through to the output.

use crate::models::{ActivityLevel, CalorieBand, CalorieInfo, PrimaryGoal, Sex, UserProfile};

/// Half-up rounding, so 0.5 always goes towards positive infinity
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Basal metabolic rate in kcal/day. Every non-male category uses the female constant.
pub fn calculate_bmr(weight: f64, height: f64, age: i32, sex: Sex) -> f64 {
    let base = 10.0 * weight + 6.25 * height - 5.0 * f64::from(age);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female | Sex::Other => base - 161.0,
    }
}

pub fn activity_multiplier(activity_level: ActivityLevel) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::Active => 1.55,
        ActivityLevel::VeryActive => 1.725,
    }
}

/// Daily surplus or deficit applied on top of TDEE
pub fn goal_adjustment(goal: PrimaryGoal) -> f64 {
    match goal {
        PrimaryGoal::LoseWeight => -500.0,
        PrimaryGoal::GainMuscle => 300.0,
        PrimaryGoal::ImproveEndurance | PrimaryGoal::MaintainFitness => 0.0,
    }
}

pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity_level)
}

/// Rounded target intake. Takes the unrounded TDEE.
pub fn calculate_target_calories(tdee: f64, goal: PrimaryGoal) -> f64 {
    round_half_up(tdee + goal_adjustment(goal))
}

pub fn compute_calories(
    weight: f64,
    height: f64,
    age: i32,
    sex: Sex,
    activity_level: ActivityLevel,
    goal: PrimaryGoal,
) -> CalorieInfo {
    let bmr = calculate_bmr(weight, height, age, sex);
    let tdee = calculate_tdee(bmr, activity_level);
    let target_calories = calculate_target_calories(tdee, goal);

    CalorieInfo {
        bmr: round_half_up(bmr),
        tdee: round_half_up(tdee),
        target_calories,
        recommendation: format!("{} kcal/day", target_calories),
    }
}

pub fn calorie_recommendation(profile: &UserProfile) -> CalorieInfo {
    compute_calories(
        profile.weight,
        profile.height,
        profile.age,
        profile.sex,
        profile.activity_level,
        profile.primary_goal,
    )
}

/// Map a target intake onto the meal-template band it falls in
pub fn bracket(target_calories: f64) -> CalorieBand {
    if target_calories < 1800.0 {
        CalorieBand::From1500To1800
    } else if target_calories < 2100.0 {
        CalorieBand::From1800To2100
    } else if target_calories < 2400.0 {
        CalorieBand::From2100To2400
    } else {
        CalorieBand::From2400To2700
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_sedentary_maintenance() {
        // 700 + 1093.75 - 125 + 5 = 1673.75, x1.2 = 2008.5
        let info = compute_calories(
            70.0,
            175.0,
            25,
            Sex::Male,
            ActivityLevel::Sedentary,
            PrimaryGoal::MaintainFitness,
        );

        assert_eq!(info.bmr, 1674.0);
        assert_eq!(info.tdee, 2009.0);
        assert_eq!(info.target_calories, 2009.0);
        assert_eq!(info.recommendation, "2009 kcal/day");
        assert_eq!(bracket(info.target_calories), CalorieBand::From1800To2100);
    }

    #[test]
    fn test_female_lightly_active_weight_loss() {
        // 600 + 1031.25 - 150 - 161 = 1320.25, x1.375 = 1815.34375
        let info = compute_calories(
            60.0,
            165.0,
            30,
            Sex::Female,
            ActivityLevel::LightlyActive,
            PrimaryGoal::LoseWeight,
        );

        assert_eq!(info.bmr, 1320.0);
        assert_eq!(info.tdee, 1815.0);
        assert_eq!(info.target_calories, 1315.0);
        assert_eq!(bracket(info.target_calories), CalorieBand::From1500To1800);
    }

    #[test]
    fn test_other_uses_female_formula() {
        assert_eq!(
            calculate_bmr(80.0, 180.0, 40, Sex::Other),
            calculate_bmr(80.0, 180.0, 40, Sex::Female)
        );
        assert_eq!(
            calculate_bmr(80.0, 180.0, 40, Sex::Male) - calculate_bmr(80.0, 180.0, 40, Sex::Other),
            166.0
        );
    }

    #[test]
    fn test_target_calories_rounding() {
        assert_eq!(calculate_target_calories(2000.4, PrimaryGoal::GainMuscle), 2300.0);
        assert_eq!(calculate_target_calories(1999.5, PrimaryGoal::MaintainFitness), 2000.0);
        assert_eq!(calculate_target_calories(2499.5, PrimaryGoal::LoseWeight), 2000.0);
    }

    #[test]
    fn test_multipliers_and_adjustments() {
        assert_eq!(activity_multiplier(ActivityLevel::Sedentary), 1.2);
        assert_eq!(activity_multiplier(ActivityLevel::LightlyActive), 1.375);
        assert_eq!(activity_multiplier(ActivityLevel::Active), 1.55);
        assert_eq!(activity_multiplier(ActivityLevel::VeryActive), 1.725);

        assert_eq!(goal_adjustment(PrimaryGoal::LoseWeight), -500.0);
        assert_eq!(goal_adjustment(PrimaryGoal::GainMuscle), 300.0);
        assert_eq!(goal_adjustment(PrimaryGoal::ImproveEndurance), 0.0);
        assert_eq!(goal_adjustment(PrimaryGoal::MaintainFitness), 0.0);
    }

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(bracket(1200.0), CalorieBand::From1500To1800);
        assert_eq!(bracket(1499.0), CalorieBand::From1500To1800);
        assert_eq!(bracket(1799.0), CalorieBand::From1500To1800);
        assert_eq!(bracket(1800.0), CalorieBand::From1800To2100);
        assert_eq!(bracket(2099.0), CalorieBand::From1800To2100);
        assert_eq!(bracket(2100.0), CalorieBand::From2100To2400);
        assert_eq!(bracket(2399.0), CalorieBand::From2100To2400);
        assert_eq!(bracket(2400.0), CalorieBand::From2400To2700);
        assert_eq!(bracket(3500.0), CalorieBand::From2400To2700);
    }

    #[test]
    fn test_nan_propagates() {
        let info = compute_calories(
            f64::NAN,
            175.0,
            25,
            Sex::Male,
            ActivityLevel::Active,
            PrimaryGoal::GainMuscle,
        );

        assert!(info.bmr.is_nan());
        assert!(info.tdee.is_nan());
        assert!(info.target_calories.is_nan());
        assert_eq!(info.recommendation, "NaN kcal/day");
        assert_eq!(bracket(info.target_calories), CalorieBand::From2400To2700);
    }

    #[test]
    fn test_profile_entry_point_matches_components() {
        let profile = UserProfile {
            weight: 90.0,
            height: 185.0,
            age: 35,
            sex: Sex::Male,
            activity_level: ActivityLevel::VeryActive,
            primary_goal: PrimaryGoal::GainMuscle,
            workout_location: Default::default(),
            workout_days_per_week: 5,
            dietary_preference: Default::default(),
        };

        let info = calorie_recommendation(&profile);
        assert_eq!(info.bmr, 1886.0);
        assert_eq!(info.tdee, 3254.0);
        assert_eq!(info.target_calories, 3554.0);
        assert_eq!(bracket(info.target_calories), CalorieBand::From2400To2700);
    }
}
