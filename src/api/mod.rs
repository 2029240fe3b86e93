// REST routes and handlers

pub mod auth;
pub mod diet;
pub mod error;
pub mod health;
pub mod progress;
pub mod routes;
pub mod users;
pub mod workout;

pub use error::ApiError;
pub use routes::create_routes;
