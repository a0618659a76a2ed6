//! Anonymous meal diary with diet-adherence metrics.
//!
//! Clients are identified by a session cookie issued on their first meal.
//! Every meal lives under exactly one session, and `/meals/metrics` reports
//! counts plus the longest chronological run of on-diet meals.

pub mod app;
pub mod config;
pub mod error;
pub mod meals;
pub mod session;
pub mod state;

pub use app::{build_app, serve};
pub use error::AppError;
pub use state::AppState;
