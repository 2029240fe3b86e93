use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::models::{ActivityLevel, CreateUser, Sex, UpdateUser, User};

const USER_COLUMNS: &str = "id, name, email, password_hash, age, gender, height, weight, \
     activity_level, primary_goal, constraints, workout_location, workout_days_per_week, \
     dietary_preference, dietary_restrictions, has_equipment, focus_areas, created_at, updated_at";

/// Postgres SQLSTATE for a unique constraint violation
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Clone)]
pub struct UserService {
    db: PgPool,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Insert a validated registration. Optional fields take the signup defaults.
    pub async fn create_user(&self, user_data: CreateUser) -> Result<User> {
        let password_hash = hash_password(&user_data.password)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

        let now = Utc::now();
        let gender = user_data
            .gender
            .unwrap_or_else(|| Sex::default().as_str().to_string());
        let activity_level = user_data
            .activity_level
            .unwrap_or_else(|| ActivityLevel::default().as_str().to_string());

        let query = format!(
            "INSERT INTO users (id, name, email, password_hash, age, gender, height, weight, \
             activity_level, primary_goal, constraints, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12) \
             RETURNING {}",
            USER_COLUMNS
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(Uuid::new_v4())
            .bind(&user_data.name)
            .bind(&user_data.email)
            .bind(&password_hash)
            .bind(user_data.age.context("age is required")?)
            .bind(&gender)
            .bind(user_data.height.context("height is required")?)
            .bind(user_data.weight.context("weight is required")?)
            .bind(&activity_level)
            .bind(&user_data.primary_goal)
            .bind(user_data.constraints.unwrap_or_default())
            .bind(now)
            .fetch_one(&self.db)
            .await?;

        Ok(user)
    }

    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);

        let user = sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(&self.db)
            .await?;

        Ok(user)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);

        let user = sqlx::query_as::<_, User>(&query)
            .bind(email.trim().to_lowercase())
            .fetch_optional(&self.db)
            .await?;

        Ok(user)
    }

    /// Apply a partial update; `None` fields keep their stored value
    pub async fn update_user(&self, user_id: Uuid, user_data: UpdateUser) -> Result<Option<User>> {
        let query = format!(
            "UPDATE users \
             SET name = COALESCE($2, name), \
                 age = COALESCE($3, age), \
                 gender = COALESCE($4, gender), \
                 height = COALESCE($5, height), \
                 weight = COALESCE($6, weight), \
                 activity_level = COALESCE($7, activity_level), \
                 primary_goal = COALESCE($8, primary_goal), \
                 constraints = COALESCE($9, constraints), \
                 workout_location = COALESCE($10, workout_location), \
                 workout_days_per_week = COALESCE($11, workout_days_per_week), \
                 dietary_preference = COALESCE($12, dietary_preference), \
                 dietary_restrictions = COALESCE($13, dietary_restrictions), \
                 has_equipment = COALESCE($14, has_equipment), \
                 focus_areas = COALESCE($15, focus_areas), \
                 updated_at = $16 \
             WHERE id = $1 \
             RETURNING {}",
            USER_COLUMNS
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(user_data.name)
            .bind(user_data.age)
            .bind(user_data.gender)
            .bind(user_data.height)
            .bind(user_data.weight)
            .bind(user_data.activity_level)
            .bind(user_data.primary_goal)
            .bind(user_data.constraints)
            .bind(user_data.workout_location)
            .bind(user_data.workout_days_per_week)
            .bind(user_data.dietary_preference)
            .bind(user_data.dietary_restrictions)
            .bind(user_data.has_equipment)
            .bind(user_data.focus_areas)
            .bind(Utc::now())
            .fetch_optional(&self.db)
            .await?;

        Ok(user)
    }
}

/// True when `error` wraps a unique constraint violation from Postgres
pub fn is_unique_violation(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<sqlx::Error>()
        .and_then(|err| err.as_database_error())
        .and_then(|err| err.code())
        .map_or(false, |code| code == UNIQUE_VIOLATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&anyhow::anyhow!("boom")));
        assert!(!is_unique_violation(&anyhow::Error::from(sqlx::Error::RowNotFound)));
    }
}
