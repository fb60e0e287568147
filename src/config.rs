//! Planner configuration parsed from environment variables.

use layout::room::{Room, RoomBounds};

pub const DEFAULT_CATALOG_BASE_URL: &str = "http://127.0.0.1:5000/api";
pub const DEFAULT_CATALOG_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CATALOG_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value is unusable.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for CatalogTimeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_CATALOG_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CATALOG_CONNECT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub catalog_base_url: String,
    pub timeouts: CatalogTimeouts,
    pub room_bounds: RoomBounds,
    pub default_room_width: f64,
    pub default_room_height: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let room = Room::default();
        Self {
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_owned(),
            timeouts: CatalogTimeouts::default(),
            room_bounds: room.bounds(),
            default_room_width: room.width(),
            default_room_height: room.height(),
        }
    }
}

impl PlannerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `CATALOG_BASE_URL`: default `http://127.0.0.1:5000/api`
    /// - `CATALOG_REQUEST_TIMEOUT_SECS`: default 10
    /// - `CATALOG_CONNECT_TIMEOUT_SECS`: default 5
    /// - `ROOM_MIN_DIM` / `ROOM_MAX_DIM`: default 100 / 1000
    /// - `ROOM_DEFAULT_WIDTH` / `ROOM_DEFAULT_HEIGHT`: default 400 / 300
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric variable does not parse,
    /// is not positive, or the room bounds are inverted.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`PlannerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let catalog_base_url = lookup("CATALOG_BASE_URL")
            .unwrap_or(defaults.catalog_base_url)
            .trim_end_matches('/')
            .to_string();
        let timeouts = CatalogTimeouts {
            request_secs: parse_var(&lookup, "CATALOG_REQUEST_TIMEOUT_SECS", defaults.timeouts.request_secs)?,
            connect_secs: parse_var(&lookup, "CATALOG_CONNECT_TIMEOUT_SECS", defaults.timeouts.connect_secs)?,
        };
        if timeouts.request_secs == 0 {
            return Err(invalid(&lookup, "CATALOG_REQUEST_TIMEOUT_SECS"));
        }

        let min = positive_dim(&lookup, "ROOM_MIN_DIM", defaults.room_bounds.min())?;
        let max = positive_dim(&lookup, "ROOM_MAX_DIM", defaults.room_bounds.max())?;
        let room_bounds = RoomBounds::new(min, max).map_err(|_| ConfigError::Invalid {
            var: "ROOM_MIN_DIM",
            value: format!("{min} > ROOM_MAX_DIM {max}"),
        })?;

        let width = positive_dim(&lookup, "ROOM_DEFAULT_WIDTH", defaults.default_room_width)?;
        let height = positive_dim(&lookup, "ROOM_DEFAULT_HEIGHT", defaults.default_room_height)?;
        let room = Room::new(width, height, room_bounds);

        Ok(Self {
            catalog_base_url,
            timeouts,
            room_bounds,
            default_room_width: room.width(),
            default_room_height: room.height(),
        })
    }

    /// A fresh room at the configured default size.
    #[must_use]
    pub fn room(&self) -> Room {
        Room::new(self.default_room_width, self.default_room_height, self.room_bounds)
    }
}

fn invalid(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> ConfigError {
    ConfigError::Invalid { var, value: lookup(var).unwrap_or_default() }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) => Err(ConfigError::Invalid { var, value: raw }),
        },
    }
}

fn positive_dim(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: f64) -> Result<f64, ConfigError> {
    let value = parse_var(lookup, var, default)?;
    if value.is_finite() && value > 0.0 { Ok(value) } else { Err(invalid(lookup, var)) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
