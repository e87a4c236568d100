//! Bearer-authenticated identity resolution and closed time ranges behind a small axum API.
//!
//! - [`domain::TimeRange`]: `[start, end]` value type with temporal predicates
//! - [`services::IdentityResolver`]: `Authorization` header → user via [`repos::UserStore`]
//! - [`app::run`]: config → state → router → serve

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod repos;
pub mod services;
pub mod state;
