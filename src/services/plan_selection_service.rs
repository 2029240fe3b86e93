use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::{
    CalorieBand, DayPlan, DietPlan, ExperienceLevel, MealTemplate, TodayMeals, TodayWorkout,
    UserProfile, WorkoutPlan, WorkoutTemplate,
};
use crate::services::calorie_service::{bracket, calorie_recommendation};
use crate::services::catalog;

/// Days per week assumed when a profile carries no usable value
pub const DEFAULT_DAYS_PER_WEEK: u32 = 4;

/// Five or more sessions a week counts as intermediate
pub fn classify(workout_days_per_week: u32) -> ExperienceLevel {
    if workout_days_per_week >= 5 {
        ExperienceLevel::Intermediate
    } else {
        ExperienceLevel::Beginner
    }
}

fn effective_days_per_week(profile: &UserProfile) -> u32 {
    match profile.workout_days_per_week {
        0 => DEFAULT_DAYS_PER_WEEK,
        days => days,
    }
}

/// Template for the profile, or the maintain/gym/beginner program on a catalog miss
fn resolve_workout_template(profile: &UserProfile, level: ExperienceLevel) -> WorkoutTemplate {
    catalog::lookup_workout(profile.primary_goal, profile.workout_location, level).unwrap_or_else(|| {
        debug!(
            goal = profile.primary_goal.as_str(),
            location = profile.workout_location.as_str(),
            level = level.as_str(),
            "no workout template for key, using default"
        );
        catalog::default_workout()
    })
}

fn resolve_meal_template(profile: &UserProfile, band: CalorieBand) -> &'static MealTemplate {
    catalog::lookup_meal(profile.dietary_preference, band).unwrap_or_else(|| {
        debug!(
            preference = profile.dietary_preference.as_str(),
            band = band.label(),
            "no meal template for key, using default"
        );
        catalog::default_meals()
    })
}

/// Weekly program: the first `days_per_week` days of the template, never padded.
pub fn workout_plan(profile: &UserProfile) -> WorkoutPlan {
    let days_per_week = effective_days_per_week(profile);
    let level = classify(days_per_week);
    let template = resolve_workout_template(profile, level);

    let plan = template.iter().take(days_per_week as usize).copied().collect();

    WorkoutPlan {
        plan,
        level,
        location: profile.workout_location,
        goal: profile.primary_goal,
        days_per_week,
    }
}

/// Zero-based rotation slot for `date`, with weeks starting on Monday
pub fn rotation_index(date: NaiveDate, days_per_week: u32) -> u32 {
    // Monday = 1 .. Sunday = 7
    let day_of_week = date.weekday().number_from_monday();
    (day_of_week - 1) % days_per_week.max(1)
}

/// Slots past the end of a short template wrap around; catalog templates are never empty
fn day_at(template: WorkoutTemplate, index: u32) -> DayPlan {
    template[index as usize % template.len()]
}

/// Session scheduled for `today`. The date is injected so callers decide the time zone.
pub fn todays_workout(profile: &UserProfile, today: NaiveDate) -> TodayWorkout {
    let days_per_week = effective_days_per_week(profile);
    let level = classify(days_per_week);
    let template = resolve_workout_template(profile, level);
    let index = rotation_index(today, days_per_week);

    TodayWorkout {
        workout: day_at(template, index),
        day: index + 1,
        level,
        location: profile.workout_location,
    }
}

pub fn diet_plan(profile: &UserProfile) -> DietPlan {
    let calorie_info = calorie_recommendation(profile);
    let target_calories = calorie_info.target_calories;
    let band = bracket(target_calories);
    let meals = *resolve_meal_template(profile, band);

    DietPlan {
        meals,
        calorie_info,
        dietary_preference: profile.dietary_preference,
        target_calories,
        band,
    }
}

pub fn todays_meals(profile: &UserProfile) -> TodayMeals {
    let plan = diet_plan(profile);

    TodayMeals {
        meals: plan.meals,
        calorie_info: plan.calorie_info,
        dietary_preference: plan.dietary_preference,
    }
}
