//! Budget Engine library crate.
//!
//! This crate exposes the core travel budget optimisation engine and
//! API components as reusable modules.  External applications may
//! depend on the `budget_engine` crate and call into
//! `engine::calculate_optimized_budget` and
//! `engine::get_budget_recommendations` directly or embed the API via
//! `api::build_router`.

pub mod models;
pub mod tables;
pub mod engine;
pub mod error;
pub mod api;
