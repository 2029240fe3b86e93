// Business logic services

pub mod calorie_service;
pub mod catalog;
pub mod plan_selection_service;
pub mod progress_service;
pub mod user_service;

pub use progress_service::{DeleteOutcome, ProgressService};
pub use user_service::UserService;
