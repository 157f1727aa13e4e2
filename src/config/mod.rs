//! Configuration loading and management for the Vacation Points Engine.
//!
//! This module loads the points policy and the month weight table from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use vacation_points::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, MonthWeightsConfig, PolicyConfig};
