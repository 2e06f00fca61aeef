//! Configuration module for semplan.
//!
//! Handles the settings file and environment variable expansion.

mod settings;

pub use settings::{
    expand_env_vars, MetadataSettings, OutputSettings, PlannerSettings, Settings, SettingsError,
};
