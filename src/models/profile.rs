use serde::{Deserialize, Serialize};

/// Biological sex category used by the BMR formula
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            "other" => Some(Sex::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    LightlyActive,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "lightly_active" => Some(ActivityLevel::LightlyActive),
            "active" => Some(ActivityLevel::Active),
            "very_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    LoseWeight,
    GainMuscle,
    ImproveEndurance,
    #[default]
    MaintainFitness,
}

impl PrimaryGoal {
    pub const ALL: [PrimaryGoal; 4] = [
        PrimaryGoal::LoseWeight,
        PrimaryGoal::GainMuscle,
        PrimaryGoal::ImproveEndurance,
        PrimaryGoal::MaintainFitness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryGoal::LoseWeight => "lose_weight",
            PrimaryGoal::GainMuscle => "gain_muscle",
            PrimaryGoal::ImproveEndurance => "improve_endurance",
            PrimaryGoal::MaintainFitness => "maintain_fitness",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lose_weight" => Some(PrimaryGoal::LoseWeight),
            "gain_muscle" => Some(PrimaryGoal::GainMuscle),
            "improve_endurance" => Some(PrimaryGoal::ImproveEndurance),
            "maintain_fitness" => Some(PrimaryGoal::MaintainFitness),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutLocation {
    Home,
    #[default]
    Gym,
}

impl WorkoutLocation {
    pub const ALL: [WorkoutLocation; 2] = [WorkoutLocation::Home, WorkoutLocation::Gym];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutLocation::Home => "home",
            WorkoutLocation::Gym => "gym",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(WorkoutLocation::Home),
            "gym" => Some(WorkoutLocation::Gym),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    Vegetarian,
    #[default]
    NonVegetarian,
    Vegan,
}

impl DietaryPreference {
    pub const ALL: [DietaryPreference; 3] = [
        DietaryPreference::Vegetarian,
        DietaryPreference::NonVegetarian,
        DietaryPreference::Vegan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryPreference::Vegetarian => "vegetarian",
            DietaryPreference::NonVegetarian => "non_vegetarian",
            DietaryPreference::Vegan => "vegan",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "vegetarian" => Some(DietaryPreference::Vegetarian),
            "non_vegetarian" => Some(DietaryPreference::NonVegetarian),
            "vegan" => Some(DietaryPreference::Vegan),
            _ => None,
        }
    }
}

/// Training focus tags a user can attach to their profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    Strength,
    FatLoss,
    Mobility,
    Endurance,
}

impl FocusArea {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "strength" => Some(FocusArea::Strength),
            "fat_loss" => Some(FocusArea::FatLoss),
            "mobility" => Some(FocusArea::Mobility),
            "endurance" => Some(FocusArea::Endurance),
            _ => None,
        }
    }
}

/// Experience tier, derived from weekly workout frequency and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
        }
    }
}

/// Target-calorie band used to index meal templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalorieBand {
    #[serde(rename = "1500-1800")]
    From1500To1800,
    #[serde(rename = "1800-2100")]
    From1800To2100,
    #[serde(rename = "2100-2400")]
    From2100To2400,
    #[serde(rename = "2400-2700")]
    From2400To2700,
}

impl CalorieBand {
    pub const ALL: [CalorieBand; 4] = [
        CalorieBand::From1500To1800,
        CalorieBand::From1800To2100,
        CalorieBand::From2100To2400,
        CalorieBand::From2400To2700,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CalorieBand::From1500To1800 => "1500-1800",
            CalorieBand::From1800To2100 => "1800-2100",
            CalorieBand::From2100To2400 => "2100-2400",
            CalorieBand::From2400To2700 => "2400-2700",
        }
    }
}

/// Biometric and preference data the plan engine works from.
///
/// Numeric fields are validated when the user record is written; nothing here
/// re-checks them.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub weight: f64,
    pub height: f64,
    pub age: i32,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub primary_goal: PrimaryGoal,
    pub workout_location: WorkoutLocation,
    pub workout_days_per_week: u32,
    pub dietary_preference: DietaryPreference,
}
