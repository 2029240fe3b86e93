// Domain types, request/response shapes and database rows

pub mod plan;
pub mod profile;
pub mod progress;
pub mod user;
pub mod validation;

pub use plan::*;
pub use profile::*;
pub use progress::*;
pub use user::*;
pub use validation::*;
