use anyhow::Result;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{
    week_ago, CreateProgressLog, ProgressLog, ProgressStats, LIST_LIMIT, STATS_WINDOW,
};

const PROGRESS_COLUMNS: &str = "id, user_id, date, weight, notes, workout_completed, created_at";

/// Result of a delete request against a single log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    NotOwner,
}

#[derive(Debug, Clone)]
pub struct ProgressService {
    db: PgPool,
}

impl ProgressService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create_log(&self, user_id: Uuid, log_data: CreateProgressLog) -> Result<ProgressLog> {
        let now = Utc::now();

        let query = format!(
            "INSERT INTO progress_logs (id, user_id, date, weight, notes, workout_completed, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {}",
            PROGRESS_COLUMNS
        );

        let log = sqlx::query_as::<_, ProgressLog>(&query)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(log_data.date.unwrap_or(now))
            .bind(log_data.weight)
            .bind(log_data.notes.unwrap_or_default())
            .bind(log_data.workout_completed.unwrap_or(false))
            .bind(now)
            .fetch_one(&self.db)
            .await?;

        Ok(log)
    }

    /// Newest first, at most [`LIST_LIMIT`] entries
    pub async fn list_logs(&self, user_id: Uuid) -> Result<Vec<ProgressLog>> {
        self.newest_logs(user_id, LIST_LIMIT).await
    }

    pub async fn get_stats(&self, user_id: Uuid) -> Result<ProgressStats> {
        let logs = self.newest_logs(user_id, STATS_WINDOW).await?;

        let workouts_last_7_days: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM progress_logs \
             WHERE user_id = $1 AND workout_completed AND date >= $2",
        )
        .bind(user_id)
        .bind(week_ago(Utc::now()))
        .fetch_one(&self.db)
        .await?;

        Ok(ProgressStats::from_logs(logs, workouts_last_7_days))
    }

    /// Delete a log if it exists and belongs to `user_id`
    pub async fn delete_log(&self, user_id: Uuid, log_id: Uuid) -> Result<DeleteOutcome> {
        let owner: Option<Uuid> = sqlx::query_scalar("SELECT user_id FROM progress_logs WHERE id = $1")
            .bind(log_id)
            .fetch_optional(&self.db)
            .await?;

        match owner {
            None => Ok(DeleteOutcome::NotFound),
            Some(owner) if owner != user_id => Ok(DeleteOutcome::NotOwner),
            Some(_) => {
                sqlx::query("DELETE FROM progress_logs WHERE id = $1 AND user_id = $2")
                    .bind(log_id)
                    .bind(user_id)
                    .execute(&self.db)
                    .await?;

                Ok(DeleteOutcome::Deleted)
            }
        }
    }

    async fn newest_logs(&self, user_id: Uuid, limit: i64) -> Result<Vec<ProgressLog>> {
        let query = format!(
            "SELECT {} FROM progress_logs WHERE user_id = $1 \
             ORDER BY date DESC, created_at DESC LIMIT $2",
            PROGRESS_COLUMNS
        );

        let logs = sqlx::query_as::<_, ProgressLog>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(&self.db)
            .await?;

        Ok(logs)
    }
}
