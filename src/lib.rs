//! Charged Up: calorie targets, workout programs and meal plans derived from a
//! user's fitness profile, served over a small authenticated REST API.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod services;
