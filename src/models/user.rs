use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::profile::{
    ActivityLevel, DietaryPreference, PrimaryGoal, Sex, UserProfile, WorkoutLocation,
};
use super::validation::{
    lenient_f64, lenient_i32, validate_activity_level, validate_dietary_preference,
    validate_focus_areas, validate_gender, validate_primary_goal, validate_workout_location,
};

/// Row in the `users` table
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub activity_level: String,
    pub primary_goal: String,
    pub constraints: String,
    pub workout_location: String,
    pub workout_days_per_week: i32,
    pub dietary_preference: String,
    pub dietary_restrictions: String,
    pub has_equipment: bool,
    pub focus_areas: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Typed view used by the plan engine.
    ///
    /// Unrecognized stored values map onto the same fallbacks the engine
    /// documents: non-male formula, sedentary multiplier, no goal adjustment,
    /// gym, non-vegetarian.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            weight: self.weight,
            height: self.height,
            age: self.age,
            sex: Sex::parse(&self.gender).unwrap_or(Sex::Other),
            activity_level: ActivityLevel::parse(&self.activity_level).unwrap_or_default(),
            primary_goal: PrimaryGoal::parse(&self.primary_goal).unwrap_or_default(),
            workout_location: WorkoutLocation::parse(&self.workout_location).unwrap_or_default(),
            workout_days_per_week: u32::try_from(self.workout_days_per_week).unwrap_or(0),
            dietary_preference: DietaryPreference::parse(&self.dietary_preference)
                .unwrap_or_default(),
        }
    }
}

/// Profile as returned to the client; never carries the password hash
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub weight: f64,
    pub activity_level: String,
    pub primary_goal: String,
    pub constraints: String,
    pub workout_location: String,
    pub workout_days_per_week: i32,
    pub dietary_preference: String,
    pub dietary_restrictions: String,
    pub has_equipment: bool,
    pub focus_areas: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            age: user.age,
            gender: user.gender,
            height: user.height,
            weight: user.weight,
            activity_level: user.activity_level,
            primary_goal: user.primary_goal,
            constraints: user.constraints,
            workout_location: user.workout_location,
            workout_days_per_week: user.workout_days_per_week,
            dietary_preference: user.dietary_preference,
            dietary_restrictions: user.dietary_restrictions,
            has_equipment: user.has_equipment,
            focus_areas: user.focus_areas,
            created_at: user.created_at,
        }
    }
}

/// Short user summary returned alongside an auth token
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub primary_goal: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            primary_goal: user.primary_goal.clone(),
        }
    }
}

/// Fields accepted at registration. Numbers may arrive as JSON numbers or numeric strings.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default, deserialize_with = "lenient_i32")]
    #[validate(
        required(message = "Age must be between 13 and 100"),
        range(min = 13, max = 100, message = "Age must be between 13 and 100")
    )]
    pub age: Option<i32>,
    #[serde(default)]
    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[validate(
        required(message = "Height must be between 100 and 250 cm"),
        range(min = 100.0, max = 250.0, message = "Height must be between 100 and 250 cm")
    )]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[validate(
        required(message = "Weight must be between 30 and 300 kg"),
        range(min = 30.0, max = 300.0, message = "Weight must be between 30 and 300 kg")
    )]
    pub weight: Option<f64>,
    #[serde(default)]
    #[validate(custom(function = "validate_activity_level"))]
    pub activity_level: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_primary_goal"))]
    pub primary_goal: String,
    #[serde(default)]
    pub constraints: Option<String>,
}

impl CreateUser {
    /// Trim the name and canonicalize the email before validation
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        self
    }
}

/// Partial profile update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    #[validate(range(min = 13, max = 100, message = "Age must be between 13 and 100"))]
    pub age: Option<i32>,
    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[validate(range(min = 100.0, max = 250.0, message = "Height must be between 100 and 250 cm"))]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    #[validate(range(min = 30.0, max = 300.0, message = "Weight must be between 30 and 300 kg"))]
    pub weight: Option<f64>,
    #[validate(custom(function = "validate_activity_level"))]
    pub activity_level: Option<String>,
    #[validate(custom(function = "validate_primary_goal"))]
    pub primary_goal: Option<String>,
    pub constraints: Option<String>,
    #[validate(custom(function = "validate_workout_location"))]
    pub workout_location: Option<String>,
    #[serde(default, deserialize_with = "lenient_i32")]
    #[validate(range(min = 3, max = 6, message = "Workout days per week must be between 3 and 6"))]
    pub workout_days_per_week: Option<i32>,
    #[validate(custom(function = "validate_dietary_preference"))]
    pub dietary_preference: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub has_equipment: Option<bool>,
    #[validate(custom(function = "validate_focus_areas"))]
    pub focus_areas: Option<Vec<String>>,
}

impl UpdateUser {
    pub fn normalized(mut self) -> Self {
        self.name = self.name.map(|name| name.trim().to_string());
        self
    }
}
