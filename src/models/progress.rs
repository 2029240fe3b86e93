use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::validation::{lenient_datetime, lenient_f64};

/// Number of newest logs the stats endpoint looks at
pub const STATS_WINDOW: i64 = 30;
/// Number of logs echoed back as `recentLogs`
pub const RECENT_LOGS: usize = 7;
/// Most logs returned by the list endpoint
pub const LIST_LIMIT: i64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProgressLog {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub weight: Option<f64>,
    pub notes: String,
    pub workout_completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgressLog {
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub workout_completed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_entries: usize,
    pub latest_weight: Option<f64>,
    pub oldest_weight: Option<f64>,
    pub weight_change: f64,
    pub workouts_last_7_days: i64,
    pub recent_logs: Vec<ProgressLog>,
}

impl ProgressStats {
    /// Build stats from the newest logs (newest first) and a count of
    /// completed workouts in the last week.
    pub fn from_logs(logs: Vec<ProgressLog>, workouts_last_7_days: i64) -> Self {
        let latest_weight = logs.first().and_then(|log| log.weight);
        let oldest_weight = logs.last().and_then(|log| log.weight);

        let weight_change = match (latest_weight, oldest_weight) {
            (Some(latest), Some(oldest)) if logs.len() >= 2 => {
                ((latest - oldest) * 10.0).round() / 10.0
            }
            _ => 0.0,
        };

        let total_entries = logs.len();
        let recent_logs = logs.into_iter().take(RECENT_LOGS).collect();

        Self {
            total_entries,
            latest_weight,
            oldest_weight,
            weight_change,
            workouts_last_7_days,
            recent_logs,
        }
    }
}

/// Start of the rolling one-week window used for workout counts
pub fn week_ago(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(7)
}
