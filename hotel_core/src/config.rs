//! Configuration file support for the hotel manager.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/hotel/config.toml`.

use crate::store::{StoreLimits, MAX_CUSTOMERS, MAX_NAME_LENGTH, MAX_ROOMS};
use crate::types::RoomNumber;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub hotel: HotelConfig,

    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Hotel information shown to guests
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HotelConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default = "default_services")]
    pub services: Vec<String>,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
            services: default_services(),
        }
    }
}

/// Reservation store bounds
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_rooms")]
    pub max_rooms: RoomNumber,

    #[serde(default = "default_max_customers")]
    pub max_customers: usize,

    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_rooms: default_max_rooms(),
            max_customers: default_max_customers(),
            max_name_length: default_max_name_length(),
        }
    }
}

impl From<&LimitsConfig> for StoreLimits {
    fn from(limits: &LimitsConfig) -> Self {
        Self {
            max_customers: limits.max_customers,
            max_rooms: limits.max_rooms,
            max_name_length: limits.max_name_length,
        }
    }
}

// Default value functions
fn default_name() -> String {
    "Vintage Villa".into()
}

fn default_description() -> String {
    "Vintage Villa offers luxurious accommodations with 3-star, 5-star, and 7-star options.\n\
     All rooms come with complimentary Wi-Fi, and we provide 24/7 room service for your convenience.\n\
     Experience a blend of classic charm and modern amenities during your stay with us."
        .into()
}

fn default_services() -> Vec<String> {
    vec![
        "Room Service".into(),
        "Laundry Service".into(),
        "Free Wi-Fi".into(),
        "24/7 Customer Service".into(),
    ]
}

fn default_max_rooms() -> RoomNumber {
    MAX_ROOMS
}

fn default_max_customers() -> usize {
    MAX_CUSTOMERS
}

fn default_max_name_length() -> usize {
    MAX_NAME_LENGTH
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            config_path => {
                tracing::info!(
                    "No config file found at {:?}, using defaults",
                    config_path
                );
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path, if a config directory can be found
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("hotel").join("config.toml"))
    }

    /// Reject limits the store cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_rooms == 0 {
            return Err(Error::Config("limits.max_rooms must be at least 1".into()));
        }
        if self.limits.max_customers == 0 {
            return Err(Error::Config("limits.max_customers must be at least 1".into()));
        }
        if self.limits.max_name_length == 0 {
            return Err(Error::Config("limits.max_name_length must be at least 1".into()));
        }
        Ok(())
    }

    pub fn store_limits(&self) -> StoreLimits {
        StoreLimits::from(&self.limits)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
