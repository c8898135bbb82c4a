use thiserror::Error;

/// Configuration rejected at construction or load time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be finite and non-negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("`{field}` must be finite and greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("`sprint_speed` ({sprint}) is slower than `walk_speed` ({walk})")]
    SprintSlowerThanWalk { walk: f32, sprint: f32 },

    #[error("parse locomotion config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
