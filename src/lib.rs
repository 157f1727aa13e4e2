//! Vacation Points Engine
//!
//! This crate allocates employee vacation days across calendar months, scores them
//! with a seasonal month weight table, and ranks employees by their accumulated points.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
pub mod telemetry;
