use std::env::{self, VarError};

use thiserror::Error;

pub const STARTING_POINTS_VAR: &str = "COUNTER_STARTING_POINTS";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOptions {
    /// Points each player has after "Start Game".
    pub starting_points: i32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_points: 20,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("COUNTER_STARTING_POINTS must be an integer, got {0:?}")]
    InvalidValue(String),
    #[error("COUNTER_STARTING_POINTS must be positive, got {0}")]
    NonPositive(i32),
}

impl GameOptions {
    /// Read overrides from the environment. Unset or empty variables keep the default.
    pub fn from_env() -> Result<Self, OptionsError> {
        Self::from_var(env::var(STARTING_POINTS_VAR))
    }

    fn from_var(var: Result<String, VarError>) -> Result<Self, OptionsError> {
        match var {
            Ok(value) => Self::from_value(Some(&value)),
            Err(VarError::NotPresent) => Self::from_value(None),
            Err(VarError::NotUnicode(value)) => Err(OptionsError::InvalidValue(
                value.to_string_lossy().into_owned(),
            )),
        }
    }

    fn from_value(starting_points: Option<&str>) -> Result<Self, OptionsError> {
        let mut options = Self::default();
        if let Some(value) = starting_points.map(str::trim).filter(|v| !v.is_empty()) {
            let points: i32 = value
                .parse()
                .map_err(|_| OptionsError::InvalidValue(value.to_owned()))?;
            if points <= 0 {
                return Err(OptionsError::NonPositive(points));
            }
            options.starting_points = points;
        }
        Ok(options)
    }
}
